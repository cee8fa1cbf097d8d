pub mod use_billing_state;
pub mod use_click_outside;
pub mod use_search_task;
