use std::sync::Arc;

use shared::{BillingAction, BillingConfig, Family, PaymentStatus, ResultPanel};
use yew::prelude::*;

use super::bill_view::BillView;
use super::family_summary::FamilySummary;
use super::loading_skeleton::LoadingSkeleton;
use super::search_box::SearchBox;
use crate::hooks::use_billing_state::use_billing_state;
use crate::hooks::use_click_outside::use_click_outside;
use crate::hooks::use_search_task::use_search_task;

#[derive(Properties, PartialEq)]
pub struct BillingPageProps {
    pub families: Arc<[Family]>,
    pub payment_status: PaymentStatus,
    pub config: BillingConfig,
}

/// Family search, billing summary and printable bill
#[function_component(BillingPage)]
pub fn billing_page(props: &BillingPageProps) -> Html {
    let state = use_billing_state(props.families.clone());
    let dispatcher = state.dispatcher();

    let input_ref = use_node_ref();
    let dropdown_ref = use_node_ref();

    let submit_search = use_search_task(dispatcher.clone(), props.config.search_delay_ms);

    let on_click_outside = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |_: (), _| dispatcher.dispatch(BillingAction::ClickOutside))
    };
    use_click_outside(vec![input_ref.clone(), dropdown_ref.clone()], on_click_outside);

    let on_input = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |term: String| dispatcher.dispatch(BillingAction::SetSearchTerm(term)))
    };
    let on_focus = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(BillingAction::FocusSearch))
    };
    let on_select = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |suggestion: String| {
            dispatcher.dispatch(BillingAction::SelectSuggestion(suggestion))
        })
    };
    let on_submit = Callback::from(move |_: MouseEvent| submit_search.emit(()));
    let on_generate_bill = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(BillingAction::GenerateBill))
    };

    let config = &props.config;
    let lines = state.summary(config).lines(config);

    let content = match (&state.selected_family, state.show_bill_interface) {
        (Some(family), true) => html! {
            <BillView family={family.clone()} lines={lines} config={config.clone()} />
        },
        _ => {
            let result = match state.panel() {
                ResultPanel::Hidden => html! {},
                ResultPanel::Loading => html! { <LoadingSkeleton /> },
                ResultPanel::Error(error) => html! {
                    <div class="search-error">{error}</div>
                },
                ResultPanel::Found(family) => html! {
                    <FamilySummary
                        family={family.clone()}
                        lines={lines}
                        payment_status={props.payment_status.clone()}
                        currency_symbol={config.currency_symbol.clone()}
                        on_generate_bill={on_generate_bill}
                    />
                },
                ResultPanel::Empty => html! {},
            };

            html! {
                <>
                    <SearchBox
                        search_term={state.search_term.clone()}
                        suggestions={state.suggestions.clone()}
                        dropdown_visible={state.dropdown_visible()}
                        input_ref={input_ref.clone()}
                        dropdown_ref={dropdown_ref.clone()}
                        on_input={on_input}
                        on_focus={on_focus}
                        on_select={on_select}
                    />

                    if state.show_submit_button {
                        <button
                            class="primary-button submit-button"
                            onclick={on_submit}
                            aria-label="Submit search"
                            title="Search for a family based on the entered student name or ID"
                        >
                            {"Submit"}
                        </button>
                    }

                    if state.has_searched {
                        <div class="result-panel">{result}</div>
                    }
                </>
            }
        }
    };

    html! {
        <div class="billing-page">
            if !state.show_bill_interface {
                <div class="billing-title">{"Generate Family Billing"}</div>
            }
            <div class={classes!("billing-card", (!state.show_bill_interface).then_some("attached"))}>
                {content}
            </div>
        </div>
    }
}
