//! Static mock records standing in for a family directory.
//!
//! The data lives in `shared/data/*.json` and is embedded at compile time, so
//! the same records are available natively and in the browser build.

use tracing::debug;

use crate::error::Result;
use crate::models::{Family, PaymentStatus};

const FAMILIES_JSON: &str = include_str!("../data/families.json");
const PAYMENT_STATUS_JSON: &str = include_str!("../data/payment_status.json");

/// All mock families, in directory order
pub fn mock_families() -> Result<Vec<Family>> {
    let families: Vec<Family> = serde_json::from_str(FAMILIES_JSON)?;
    debug!("Loaded {} mock families", families.len());
    Ok(families)
}

/// The mock payment status shown for every family
pub fn mock_payment_status() -> Result<PaymentStatus> {
    Ok(serde_json::from_str(PAYMENT_STATUS_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_mock_families_load() {
        let families = mock_families().unwrap();
        let codes: Vec<&str> = families.iter().map(|f| f.family_code.as_str()).collect();
        assert_eq!(codes, vec!["DOE001", "SMITH001"]);

        // Every family has at least one child, and costs are non-negative
        for family in &families {
            assert!(!family.children.is_empty());
            assert!(family
                .line_items()
                .all(|item| item.class.cost_per_session >= 0.0));
        }
    }

    #[test]
    fn test_doe_family_contents() {
        let families = mock_families().unwrap();
        let doe = &families[0];
        assert_eq!(doe.semester, "Fall 2023");
        assert_eq!(doe.parent_names(), "Jane Doe, Jack Doe");
        assert_eq!(doe.existing_credit, 100.0);
        assert_eq!(doe.discount, 50.0);
        assert_eq!(doe.children[0].classes[0].name, "周一 4:15 ｜ Y9 Science");
        assert_eq!(doe.line_items().count(), 4);
    }

    #[test]
    fn test_mock_payment_status() {
        let status = mock_payment_status().unwrap();
        assert!(status.sent);
        assert!(!status.paid);
        assert_eq!(status.payment_date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert_eq!(status.payment_method, "Credit Card");
    }
}
