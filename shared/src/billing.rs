//! Bill calculation for a selected family.
//!
//! The bill is:
//! 1. subtotal: every class of every child, weeks x cost per session
//! 2. GST: `gst_rate` applied to (subtotal - discount)
//! 3. total due: subtotal - existing credit - discount + GST
//!
//! With no family selected every amount is zero.

use crate::config::BillingConfig;
use crate::format::{money_deduction, money_fixed, money_plain};
use crate::models::Family;

/// Computed amounts for one family's bill
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillSummary {
    pub subtotal: f64,
    pub discount: f64,
    pub existing_credit: f64,
    pub gst: f64,
    pub total_due: f64,
}

/// Display strings for the totals block, in the order they are printed
#[derive(Debug, Clone, PartialEq)]
pub struct BillLines {
    pub subtotal: String,
    pub discount: String,
    pub existing_credit: String,
    pub gst_label: String,
    pub gst: String,
    pub total_due: String,
}

/// Sum of weeks x cost per session across all children and classes
pub fn subtotal(family: &Family) -> f64 {
    family
        .children
        .iter()
        .map(|child| child.classes.iter().map(|class| class.line_total()).sum::<f64>())
        .sum()
}

impl BillSummary {
    /// Bill for the selected family, or all zeros when nothing is selected
    pub fn for_family(family: Option<&Family>, config: &BillingConfig) -> Self {
        let Some(family) = family else {
            return Self::default();
        };

        let subtotal = subtotal(family);
        let discount = family.discount;
        let existing_credit = family.existing_credit;
        let gst = (subtotal - discount) * config.gst_rate;
        let total_due = subtotal - existing_credit - discount + gst;

        Self {
            subtotal,
            discount,
            existing_credit,
            gst,
            total_due,
        }
    }

    /// Subtotal, discount and credit unrounded; GST and total to two decimals
    pub fn lines(&self, config: &BillingConfig) -> BillLines {
        let symbol = config.currency_symbol.as_str();
        BillLines {
            subtotal: money_plain(symbol, self.subtotal),
            discount: money_deduction(symbol, self.discount),
            existing_credit: money_deduction(symbol, self.existing_credit),
            gst_label: config.gst_label(),
            gst: money_fixed(symbol, self.gst),
            total_due: money_fixed(symbol, self.total_due),
        }
    }
}
