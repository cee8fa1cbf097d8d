//! Domain types and logic for family tuition billing, shared by the browser
//! frontend and native tests.

pub mod billing;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod models;
pub mod search;
pub mod view_state;

pub use billing::{BillLines, BillSummary};
pub use config::BillingConfig;
pub use error::{BillingError, Result};
pub use models::{Child, ClassEnrollment, Family, LineItem, PaymentStatus};
pub use view_state::{BillingAction, BillingViewState, ResultPanel, SearchTicket, TicketIssuer};
