use thiserror::Error;

/// Errors surfaced by the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// The only failure a user ever sees
    #[error("No family found matching the search criteria.")]
    NoFamilyFound,

    #[error("Failed to parse billing data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid billing configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BillingError>;
