use shared::PaymentStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaymentStatusProps {
    pub status: PaymentStatus,
}

fn flag_badge(label: &str, flag: bool) -> Html {
    html! {
        <div class="status-item">
            <span class="status-label">{format!("{}:", label)}</span>
            <span class={classes!("status-badge", if flag { "positive" } else { "negative" })}>
                {if flag { "✓ " } else { "✗ " }}
                {PaymentStatus::yes_no(flag)}
            </span>
        </div>
    }
}

#[function_component(PaymentStatusGrid)]
pub fn payment_status_grid(props: &PaymentStatusProps) -> Html {
    let status = &props.status;

    html! {
        <section class="bill-section">
            <h3>{"Payment Status"}</h3>
            <div class="status-grid">
                {flag_badge("Sent", status.sent)}
                {flag_badge("Paid", status.paid)}
                <div class="status-item">
                    <span class="status-label">{"Payment Date:"}</span>
                    <span class="status-badge date">{status.formatted_date()}</span>
                </div>
                <div class="status-item">
                    <span class="status-label">{"Payment Method:"}</span>
                    <span class="status-badge method">{&status.payment_method}</span>
                </div>
            </div>
        </section>
    }
}
