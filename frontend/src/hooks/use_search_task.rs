use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::{BillingAction, SearchTicket, TicketIssuer};
use yew::prelude::*;

use super::use_billing_state::BillingStore;
use crate::services::logging::Logger;

/// Ticket of the search whose timer has not fired yet
#[derive(Clone, Default)]
pub struct InFlight(Rc<Cell<Option<SearchTicket>>>);

impl InFlight {
    /// Mark `ticket` as in flight, returning the search it supersedes
    pub fn start(&self, ticket: SearchTicket) -> Option<SearchTicket> {
        self.0.replace(Some(ticket))
    }

    /// Timer for `ticket` fired. Returns `false` if a newer search took over.
    pub fn finish(&self, ticket: SearchTicket) -> bool {
        if self.0.get() == Some(ticket) {
            self.0.set(None);
            true
        } else {
            false
        }
    }

    pub fn take(&self) -> Option<SearchTicket> {
        self.0.take()
    }
}

/// Hook that submits searches against the mock directory.
///
/// Each submission enters the loading state immediately and resolves after
/// `delay_ms`. The pending timer is owned by the component: a newer submission
/// drops (and so cancels) the previous one. Unmounting drops it too and
/// cancels the search in the view state. The ticket check in the view state
/// covers a timer that has already queued its callback.
#[hook]
pub fn use_search_task(dispatcher: UseReducerDispatcher<BillingStore>, delay_ms: u32) -> Callback<()> {
    let timer = use_mut_ref(|| Option::<Timeout>::None);
    let issuer = use_mut_ref(TicketIssuer::default);
    let in_flight = (*use_memo((), |_| InFlight::default())).clone();

    {
        let timer = timer.clone();
        let in_flight = in_flight.clone();
        let dispatcher = dispatcher.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(ticket) = in_flight.take() {
                    Logger::debug_with_component("search-task", &format!("Search {:?} dropped on unmount", ticket));
                    dispatcher.dispatch(BillingAction::CancelSearch);
                }
                timer.borrow_mut().take();
            }
        });
    }

    use_callback(delay_ms, move |_: (), delay_ms| {
        let ticket = issuer.borrow_mut().issue();
        if let Some(previous) = in_flight.start(ticket) {
            Logger::info_with_component("search-task", &format!("Search {:?} superseded by {:?}", previous, ticket));
        }
        dispatcher.dispatch(BillingAction::BeginSearch(ticket));

        let resolve = {
            let dispatcher = dispatcher.clone();
            let in_flight = in_flight.clone();
            move || {
                in_flight.finish(ticket);
                dispatcher.dispatch(BillingAction::ResolveSearch(ticket));
            }
        };

        // Replacing the handle drops, and so cancels, any earlier timer
        *timer.borrow_mut() = Some(Timeout::new(*delay_ms, resolve));
    })
}
