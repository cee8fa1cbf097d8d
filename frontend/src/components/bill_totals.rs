use shared::BillLines;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BillTotalsProps {
    pub lines: BillLines,
    /// Printable bill puts a labelled rule above the total
    #[prop_or_default]
    pub with_divider: bool,
}

#[function_component(BillTotals)]
pub fn bill_totals(props: &BillTotalsProps) -> Html {
    let lines = &props.lines;

    html! {
        <section class="bill-totals">
            <div class="totals-row subtotal">
                <p>{"Subtotal:"}</p>
                <p>{&lines.subtotal}</p>
            </div>
            <div class="totals-row muted">
                <p>{"Discount:"}</p>
                <p>{&lines.discount}</p>
            </div>
            <div class="totals-row muted">
                <p>{"Existing Credit:"}</p>
                <p>{&lines.existing_credit}</p>
            </div>
            <div class="totals-row muted">
                <p>{format!("{}:", lines.gst_label)}</p>
                <p>{&lines.gst}</p>
            </div>
            if props.with_divider {
                <div class="totals-divider" aria-hidden="true">
                    <span>{"Total Amount Due"}</span>
                </div>
            }
            <div class="totals-row total">
                <p>{"Total Amount Due:"}</p>
                <p>{&lines.total_due}</p>
            </div>
        </section>
    }
}
