// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete display names and profile pictures.

use std::collections::{HashMap, HashSet};

use crate::error::TransformError;
use crate::models::{AthleteId, AthleteRecord};

/// How an athlete is shown in every table.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteIdentity {
    /// First name plus last initial, e.g. "Jan P"
    pub display_name: String,
    pub profile_pic: Option<String>,
}

/// Lookup from athlete ID to identity, for the athletes a view includes.
pub type AthleteDirectory = HashMap<AthleteId, AthleteIdentity>;

/// Display name for one athlete: first name plus the first letter of the
/// last name.
///
/// A missing first name leaves just the initial. The last name is required.
pub fn display_name(athlete: &AthleteRecord) -> Result<String, TransformError> {
    let initial = athlete
        .profile
        .lastname
        .as_deref()
        .and_then(|last| last.chars().next())
        .ok_or_else(|| TransformError::MalformedProfile {
            athlete_id: athlete.athlete_id,
            reason: "missing or empty lastname".to_string(),
        })?;

    match athlete.profile.firstname.as_deref() {
        Some(firstname) if !firstname.is_empty() => Ok(format!("{} {}", firstname, initial)),
        _ => Ok(initial.to_string()),
    }
}

/// Map every athlete ID to its display name.
///
/// Fails on the first malformed profile.
pub fn resolve_names(
    athletes: &[AthleteRecord],
) -> Result<HashMap<AthleteId, String>, TransformError> {
    athletes
        .iter()
        .map(|athlete| Ok((athlete.athlete_id, display_name(athlete)?)))
        .collect()
}

/// Build the identity lookup, leaving out `excluded` athletes.
///
/// Names are resolved for every athlete first, so a malformed profile fails
/// the view even when that athlete is excluded.
pub fn resolve_directory(
    athletes: &[AthleteRecord],
    excluded: &HashSet<AthleteId>,
) -> Result<AthleteDirectory, TransformError> {
    let mut names = resolve_names(athletes)?;

    Ok(athletes
        .iter()
        .filter(|athlete| !excluded.contains(&athlete.athlete_id))
        .filter_map(|athlete| {
            let display_name = names.remove(&athlete.athlete_id)?;
            Some((
                athlete.athlete_id,
                AthleteIdentity {
                    display_name,
                    profile_pic: athlete.profile.profile.clone(),
                },
            ))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AthleteProfile;

    fn athlete(id: AthleteId, first: Option<&str>, last: Option<&str>) -> AthleteRecord {
        AthleteRecord::new(
            id,
            AthleteProfile {
                firstname: first.map(String::from),
                lastname: last.map(String::from),
                profile: Some(format!("https://pics/{}.jpg", id)),
            },
        )
    }

    #[test]
    fn test_display_name_uses_last_initial() {
        let a = athlete(1, Some("Jan"), Some("Peeters"));
        assert_eq!(display_name(&a).unwrap(), "Jan P");
    }

    #[test]
    fn test_display_name_unicode_initial() {
        let a = athlete(1, Some("Zoë"), Some("Ørsted"));
        assert_eq!(display_name(&a).unwrap(), "Zoë Ø");
    }

    #[test]
    fn test_empty_lastname_is_malformed() {
        let err = display_name(&athlete(3, Some("Jan"), Some(""))).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MalformedProfile { athlete_id: 3, .. }
        ));

        assert!(display_name(&athlete(4, Some("Jan"), None)).is_err());
    }

    #[test]
    fn test_missing_firstname_keeps_initial() {
        assert_eq!(display_name(&athlete(5, None, Some("Peeters"))).unwrap(), "P");
        assert_eq!(display_name(&athlete(6, Some(""), Some("Claes"))).unwrap(), "C");
    }

    #[test]
    fn test_missing_firstname_does_not_fail_directory() {
        let athletes = vec![
            athlete(1, Some("Ann"), Some("Peeters")),
            athlete(2, None, Some("Claes")),
        ];

        let directory = resolve_directory(&athletes, &HashSet::new()).unwrap();

        assert_eq!(directory[&1].display_name, "Ann P");
        assert_eq!(directory[&2].display_name, "C");
    }

    #[test]
    fn test_resolve_names_fails_fast() {
        let athletes = vec![
            athlete(1, Some("Jan"), Some("Peeters")),
            athlete(2, Some("Els"), Some("")),
        ];
        assert!(resolve_names(&athletes).is_err());
    }

    #[test]
    fn test_directory_skips_excluded() {
        let athletes = vec![
            athlete(1, Some("Jan"), Some("Peeters")),
            athlete(2, Some("Els"), Some("Janssens")),
        ];

        let directory = resolve_directory(&athletes, &HashSet::from([2])).unwrap();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory[&1].display_name, "Jan P");
        assert_eq!(
            directory[&1].profile_pic.as_deref(),
            Some("https://pics/1.jpg")
        );
        assert!(!directory.contains_key(&2));
    }

    #[test]
    fn test_directory_still_validates_excluded_profiles() {
        let athletes = vec![
            athlete(1, Some("Jan"), Some("Peeters")),
            athlete(2, Some("Els"), None),
        ];
        assert!(resolve_directory(&athletes, &HashSet::from([2])).is_err());
    }
}
