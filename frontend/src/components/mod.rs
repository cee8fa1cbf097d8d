pub mod bill_totals;
pub mod bill_view;
pub mod billing_page;
pub mod family_summary;
pub mod line_items;
pub mod loading_skeleton;
pub mod payment_status;
pub mod search_box;

pub use billing_page::BillingPage;
