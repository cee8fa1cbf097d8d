use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};

/// Configuration for billing calculations and the printable bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BillingConfig {
    /// GST applied to (subtotal - discount)
    pub gst_rate: f64,
    pub currency_symbol: String,
    /// Simulated directory latency before a submitted search resolves
    pub search_delay_ms: u32,
    pub account_name: String,
    pub bsb: String,
    pub account_number: String,
    /// Reminder printed at the bottom of the bill
    pub remittance_note: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            gst_rate: 0.10,
            currency_symbol: "$".to_string(),
            search_delay_ms: 1500,
            account_name: "Australian Biomed".to_string(),
            bsb: "063 245".to_string(),
            account_number: "1116 0066".to_string(),
            remittance_note: "请一定要填写学生英文全名和学生号，并截图发回，谢谢".to_string(),
        }
    }
}

impl BillingConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gst_rate.is_finite() || self.gst_rate < 0.0 {
            return Err(BillingError::InvalidConfig(format!(
                "gst_rate must be a non-negative number, got {}",
                self.gst_rate
            )));
        }
        Ok(())
    }

    /// GST label as printed, e.g. "GST (10%)"
    pub fn gst_label(&self) -> String {
        // Six decimals drops the float noise of e.g. 0.07 * 100
        let percent = (self.gst_rate * 100.0 * 1e6).round() / 1e6;
        format!("GST ({}%)", crate::format::format_plain(percent))
    }
}
