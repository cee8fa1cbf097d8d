use shared::{BillLines, BillingConfig, Family};
use yew::prelude::*;

use super::bill_totals::BillTotals;
use super::line_items::LineItems;

#[derive(Properties, PartialEq)]
pub struct BillViewProps {
    pub family: Family,
    pub lines: BillLines,
    pub config: BillingConfig,
}

/// Printable bill layout
#[function_component(BillView)]
pub fn bill_view(props: &BillViewProps) -> Html {
    let config = &props.config;

    html! {
        <div class="bill-view">
            <div class="bill-logo">{"Logo Placeholder (5000x824 scaled to fit)"}</div>

            <LineItems family={props.family.clone()} currency_symbol={config.currency_symbol.clone()} />
            <BillTotals lines={props.lines.clone()} with_divider=true />

            <section class="bill-section">
                <h3>{"Payment Details"}</h3>
                <p><strong>{"ACC Name:"}</strong>{" "}{&config.account_name}</p>
                <p><strong>{"BSB:"}</strong>{" "}{&config.bsb}</p>
                <p><strong>{"ACC Number:"}</strong>{" "}{&config.account_number}</p>
            </section>

            <p class="remittance-note">{&config.remittance_note}</p>
        </div>
    }
}
