use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

use shared::{BillingAction, BillingViewState, Family};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Reducer wrapper so the shared view state can drive `use_reducer`
#[derive(Clone, PartialEq)]
pub struct BillingStore(BillingViewState);

impl Reducible for BillingStore {
    type Action = BillingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if matches!(
            action,
            BillingAction::BeginSearch(_) | BillingAction::ResolveSearch(_) | BillingAction::CancelSearch
        ) {
            Logger::debug_with_component("billing-state", &format!("{:?}", action));
        }

        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

impl Deref for BillingStore {
    type Target = BillingViewState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// View state for the billing screen, created once per mounted component
#[hook]
pub fn use_billing_state(families: Arc<[Family]>) -> UseReducerHandle<BillingStore> {
    use_reducer(move || BillingStore(BillingViewState::new(families)))
}
