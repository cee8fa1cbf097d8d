use shared::{format::money_plain, Family};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LineItemsProps {
    pub family: Family,
    pub currency_symbol: String,
}

/// "Payment Details": one card per class of every child
#[function_component(LineItems)]
pub fn line_items(props: &LineItemsProps) -> Html {
    let symbol = props.currency_symbol.as_str();

    html! {
        <section class="bill-section">
            <h3>{"Payment Details"}</h3>
            <div class="line-items">
                {for props.family.line_items().map(|item| html! {
                    <div class="line-item" key={item.key()}>
                        <div class="line-item-heading">
                            <p class="line-item-student">{item.student_heading()}</p>
                            <p class="line-item-class">{&item.class.name}</p>
                        </div>
                        <div class="line-item-detail">
                            <span>{format!("Weeks: {}", item.class.weeks)}</span>
                            <span>{format!("Cost/Session: {}", money_plain(symbol, item.class.cost_per_session))}</span>
                            <span class="line-item-total">{format!("Total: {}", money_plain(symbol, item.class.line_total()))}</span>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}
