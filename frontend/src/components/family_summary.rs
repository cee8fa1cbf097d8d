use shared::{BillLines, Family, PaymentStatus};
use yew::prelude::*;

use super::bill_totals::BillTotals;
use super::line_items::LineItems;
use super::payment_status::PaymentStatusGrid;

#[derive(Properties, PartialEq)]
pub struct FamilySummaryProps {
    pub family: Family,
    pub lines: BillLines,
    pub payment_status: PaymentStatus,
    pub currency_symbol: String,
    pub on_generate_bill: Callback<()>,
}

/// Billing summary for the family found by a search
#[function_component(FamilySummary)]
pub fn family_summary(props: &FamilySummaryProps) -> Html {
    let family = &props.family;

    let on_generate = {
        let on_generate_bill = props.on_generate_bill.clone();
        Callback::from(move |_: MouseEvent| on_generate_bill.emit(()))
    };

    html! {
        <>
            <div class="family-header">
                <h2>{format!("Family Code: {}", family.family_code)}</h2>
                <p><strong>{"Semester:"}</strong>{" "}{&family.semester}</p>
                <p><strong>{"Parent Name(s):"}</strong>{" "}{family.parent_names()}</p>
            </div>

            <LineItems family={family.clone()} currency_symbol={props.currency_symbol.clone()} />
            <PaymentStatusGrid status={props.payment_status.clone()} />
            <BillTotals lines={props.lines.clone()} />

            <button
                class="primary-button"
                onclick={on_generate}
                aria-label="Generate bill"
                title="Create and display the bill for the selected family"
            >
                {"Generate Bill"}
            </button>
        </>
    }
}
