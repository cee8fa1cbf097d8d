//! Student search over the family directory.
//!
//! Two operations: a substring filter producing dropdown suggestions while the
//! user types, and an exact lookup run when a search is submitted.

use tracing::debug;

use crate::error::{BillingError, Result};
use crate::models::Family;

/// Suggestions for a partially typed student name.
///
/// Yields "Name (StudentId)" for every child whose name contains `query`,
/// ignoring case. An empty query matches every child.
pub fn suggestions<'a>(query: &str, families: &'a [Family]) -> impl Iterator<Item = String> + 'a {
    let needle = query.to_lowercase();
    families
        .iter()
        .flat_map(|family| family.children.iter())
        .filter(move |child| child.name.to_lowercase().contains(&needle))
        .map(|child| child.suggestion_label())
}

/// First family with a child whose full name (any case) or student id
/// (exact) equals `query`
pub fn find_family<'a>(query: &str, families: &'a [Family]) -> Result<&'a Family> {
    let found = families
        .iter()
        .find(|family| family.children.iter().any(|child| child.matches_exactly(query)));

    match found {
        Some(family) => {
            debug!("Lookup '{}' matched family {}", query, family.family_code);
            Ok(family)
        }
        None => {
            debug!("Lookup '{}' matched no family", query);
            Err(BillingError::NoFamilyFound)
        }
    }
}

/// Student name part of a suggestion label ("John Doe (LW24010)" -> "John Doe")
pub fn name_from_suggestion(suggestion: &str) -> &str {
    suggestion
        .split_once(" (")
        .map_or(suggestion, |(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mock_families;

    #[test]
    fn test_suggestions_substring_case_insensitive() {
        let families = mock_families().unwrap();

        let matches: Vec<String> = suggestions("doe", &families).collect();
        assert_eq!(matches, vec!["John Doe (LW24010)", "Jane Doe (LW24011)"]);

        let matches: Vec<String> = suggestions("EMMA", &families).collect();
        assert_eq!(matches, vec!["Emma Smith (LW24013)"]);

        // "m" appears in Tom, Emma and Smith across both families, order preserved
        let matches: Vec<String> = suggestions("m", &families).collect();
        assert_eq!(
            matches,
            vec!["Tom Smith (LW24012)", "Emma Smith (LW24013)"]
        );
    }

    #[test]
    fn test_empty_query_matches_everyone() {
        let families = mock_families().unwrap();
        assert_eq!(suggestions("", &families).count(), 4);
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let families = mock_families().unwrap();
        assert_eq!(suggestions("zzz", &families).count(), 0);
        // Student ids are not searched by the suggestion filter
        assert_eq!(suggestions("LW24010", &families).count(), 0);
    }

    #[test]
    fn test_find_family_by_name_any_case() {
        let families = mock_families().unwrap();
        for family in &families {
            for child in &family.children {
                for query in [
                    child.name.clone(),
                    child.name.to_lowercase(),
                    child.name.to_uppercase(),
                ] {
                    let found = find_family(&query, &families).unwrap();
                    assert_eq!(found.family_code, family.family_code);
                }
            }
        }
    }

    #[test]
    fn test_find_family_by_student_id() {
        let families = mock_families().unwrap();
        assert_eq!(find_family("LW24013", &families).unwrap().family_code, "SMITH001");
        assert_eq!(find_family("LW24010", &families).unwrap().family_code, "DOE001");
        assert!(matches!(
            find_family("lw24013", &families),
            Err(BillingError::NoFamilyFound)
        ));
    }

    #[test]
    fn test_find_family_not_found() {
        let families = mock_families().unwrap();
        let err = find_family("John", &families).unwrap_err();
        assert_eq!(err.to_string(), "No family found matching the search criteria.");
        assert!(find_family("", &families).is_err());
    }

    #[test]
    fn test_name_from_suggestion() {
        assert_eq!(name_from_suggestion("John Doe (LW24010)"), "John Doe");
        assert_eq!(name_from_suggestion("John Doe"), "John Doe");
        assert_eq!(name_from_suggestion("A (B) (C)"), "A");
    }
}
