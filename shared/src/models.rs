use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A billing unit: one or more enrolled children and their parents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    /// Identifier printed on the bill, e.g. "DOE001"
    pub family_code: String,
    /// Semester label, e.g. "Fall 2023"
    pub semester: String,
    pub parents: Vec<String>,
    pub children: Vec<Child>,
    /// Prior balance subtracted from the amount due
    pub existing_credit: f64,
    /// Flat discount, same currency unit as class costs
    pub discount: f64,
}

/// An enrolled student within a family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub name: String,
    pub student_id: String,
    pub classes: Vec<ClassEnrollment>,
}

/// A class a child is enrolled in for the semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEnrollment {
    pub code: String,
    /// Display name, may include a timetable prefix
    pub name: String,
    pub weeks: u32,
    pub cost_per_session: f64,
}

/// Mock payment status shown next to a family's bill.
///
/// Not derived from the family record; every family shows the same status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub sent: bool,
    pub paid: bool,
    pub payment_date: NaiveDate,
    pub payment_method: String,
}

/// One row of the "Payment Details" list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem<'a> {
    pub child: &'a Child,
    pub class: &'a ClassEnrollment,
}

impl ClassEnrollment {
    /// Cost of the class for the whole semester
    pub fn line_total(&self) -> f64 {
        f64::from(self.weeks) * self.cost_per_session
    }
}

impl Child {
    /// Label used in the suggestion dropdown: "Name (StudentId)"
    pub fn suggestion_label(&self) -> String {
        format!("{} ({})", self.name, self.student_id)
    }

    /// Case-insensitive full-name match, or exact student id match
    pub fn matches_exactly(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase() || self.student_id == query
    }
}

impl Family {
    /// Every (child, class) pair in child order, then class order
    pub fn line_items(&self) -> impl Iterator<Item = LineItem<'_>> + '_ {
        self.children.iter().flat_map(|child| {
            child
                .classes
                .iter()
                .map(move |class| LineItem { child, class })
        })
    }

    /// Parent names as printed on the result panel
    pub fn parent_names(&self) -> String {
        self.parents.join(", ")
    }
}

impl LineItem<'_> {
    /// Stable key for list rendering: "{student_id}-{class code}"
    pub fn key(&self) -> String {
        format!("{}-{}", self.child.student_id, self.class.code)
    }

    /// Heading shown on the left of a line item: "Name | StudentId"
    pub fn student_heading(&self) -> String {
        format!("{} | {}", self.child.name, self.child.student_id)
    }
}

impl PaymentStatus {
    /// "Yes"/"No" badge text
    pub fn yes_no(flag: bool) -> &'static str {
        if flag {
            "Yes"
        } else {
            "No"
        }
    }

    /// ISO 8601 date as shown on the badge
    pub fn formatted_date(&self) -> String {
        self.payment_date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_child() -> Child {
        Child {
            name: "John Doe".to_string(),
            student_id: "LW24010".to_string(),
            classes: vec![
                ClassEnrollment {
                    code: "SCI 9A".to_string(),
                    name: "Y9 Science".to_string(),
                    weeks: 10,
                    cost_per_session: 50.0,
                },
                ClassEnrollment {
                    code: "MAT 9A".to_string(),
                    name: "Y9 Math".to_string(),
                    weeks: 12,
                    cost_per_session: 55.0,
                },
            ],
        }
    }

    #[test]
    fn test_line_total() {
        let child = sample_child();
        assert_eq!(child.classes[0].line_total(), 500.0);
        assert_eq!(child.classes[1].line_total(), 660.0);
    }

    #[test]
    fn test_suggestion_label() {
        assert_eq!(sample_child().suggestion_label(), "John Doe (LW24010)");
    }

    #[test]
    fn test_matches_exactly() {
        let child = sample_child();
        assert!(child.matches_exactly("john doe"));
        assert!(child.matches_exactly("JOHN DOE"));
        assert!(child.matches_exactly("LW24010"));

        // Student ids are case-sensitive
        assert!(!child.matches_exactly("lw24010"));
        // Substrings are not exact matches
        assert!(!child.matches_exactly("John"));
    }

    #[test]
    fn test_line_items_order_and_keys() {
        let family = Family {
            family_code: "TEST001".to_string(),
            semester: "Fall 2023".to_string(),
            parents: vec!["Jane Doe".to_string(), "Jack Doe".to_string()],
            children: vec![sample_child()],
            existing_credit: 0.0,
            discount: 0.0,
        };

        let keys: Vec<String> = family.line_items().map(|item| item.key()).collect();
        assert_eq!(keys, vec!["LW24010-SCI 9A", "LW24010-MAT 9A"]);

        let first = family.line_items().next().unwrap();
        assert_eq!(first.student_heading(), "John Doe | LW24010");
        assert_eq!(family.parent_names(), "Jane Doe, Jack Doe");
    }

    #[test]
    fn test_payment_status_display() {
        let status = PaymentStatus {
            sent: true,
            paid: false,
            payment_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            payment_method: "Credit Card".to_string(),
        };
        assert_eq!(PaymentStatus::yes_no(status.sent), "Yes");
        assert_eq!(PaymentStatus::yes_no(status.paid), "No");
        assert_eq!(status.formatted_date(), "2023-06-15");
    }
}
