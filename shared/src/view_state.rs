//! # Billing View State
//!
//! Everything the billing screen shows is derived from one record owned by
//! the component instance. Transitions are plain methods so they can be driven
//! directly in tests, or through [`BillingAction`] from a reducer.
//!
//! ## Delayed searches
//! A submitted search resolves later. Each submission carries a
//! [`SearchTicket`]; only the ticket of the latest, still pending search may
//! write a result. Resolutions for superseded or cancelled searches are
//! ignored.

use std::sync::Arc;

use tracing::{info, warn};

use crate::billing::BillSummary;
use crate::config::BillingConfig;
use crate::models::Family;
use crate::search::{find_family, name_from_suggestion, suggestions};

/// Identifies one submitted search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Hands out increasing search tickets
#[derive(Debug, Default)]
pub struct TicketIssuer {
    last: u64,
}

impl TicketIssuer {
    pub fn issue(&mut self) -> SearchTicket {
        self.last += 1;
        SearchTicket(self.last)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PendingSearch {
    ticket: SearchTicket,
    /// Search term as it was when the search was submitted
    query: String,
}

/// What the area under the search box currently shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultPanel<'a> {
    /// Nothing searched yet
    Hidden,
    Loading,
    Error(&'a str),
    Found(&'a Family),
    /// Searched, but the last search was cancelled before resolving
    Empty,
}

/// User and timer events the billing screen reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum BillingAction {
    SetSearchTerm(String),
    FocusSearch,
    ClickOutside,
    SelectSuggestion(String),
    BeginSearch(SearchTicket),
    ResolveSearch(SearchTicket),
    CancelSearch,
    GenerateBill,
}

/// View state of the family billing screen
#[derive(Debug, Clone, PartialEq)]
pub struct BillingViewState {
    pub search_term: String,
    pub suggestions: Vec<String>,
    pub selected_family: Option<Family>,
    pub is_search_focused: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
    pub show_submit_button: bool,
    pub show_bill_interface: bool,
    directory: Arc<[Family]>,
    pending: Option<PendingSearch>,
}

impl BillingViewState {
    /// Fresh state over the given directory. The empty search term matches
    /// every student, so suggestions start out listing everyone.
    pub fn new(directory: impl Into<Arc<[Family]>>) -> Self {
        let directory = directory.into();
        let suggestions = suggestions("", &directory).collect();
        Self {
            search_term: String::new(),
            suggestions,
            selected_family: None,
            is_search_focused: false,
            is_loading: false,
            error: None,
            has_searched: false,
            show_submit_button: true,
            show_bill_interface: false,
            directory,
            pending: None,
        }
    }

    pub fn directory(&self) -> &[Family] {
        &self.directory
    }

    /// Ticket of the search currently awaiting resolution
    pub fn pending_ticket(&self) -> Option<SearchTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    pub fn apply(&mut self, action: BillingAction) {
        match action {
            BillingAction::SetSearchTerm(term) => self.set_search_term(term),
            BillingAction::FocusSearch => self.focus_search(),
            BillingAction::ClickOutside => self.click_outside(),
            BillingAction::SelectSuggestion(suggestion) => self.select_suggestion(&suggestion),
            BillingAction::BeginSearch(ticket) => self.begin_search(ticket),
            BillingAction::ResolveSearch(ticket) => {
                self.resolve_search(ticket);
            }
            BillingAction::CancelSearch => self.cancel_search(),
            BillingAction::GenerateBill => self.generate_bill(),
        }
    }

    pub fn set_search_term(&mut self, term: String) {
        self.suggestions = suggestions(&term, &self.directory).collect();
        self.search_term = term;
    }

    pub fn focus_search(&mut self) {
        self.is_search_focused = true;
        self.show_submit_button = true;
    }

    /// Pointer pressed outside both the search box and the dropdown.
    ///
    /// Only acts while the dropdown is on screen; once a search has been
    /// submitted it also hides the submit button until the box is focused
    /// again.
    pub fn click_outside(&mut self) {
        if !self.dropdown_visible() {
            return;
        }
        self.is_search_focused = false;
        if self.has_searched {
            self.show_submit_button = false;
        }
    }

    /// Fill the search box with the student name of a suggestion
    pub fn select_suggestion(&mut self, suggestion: &str) {
        let name = name_from_suggestion(suggestion).to_string();
        if name == self.search_term {
            self.suggestions.clear();
        } else {
            self.set_search_term(name);
        }
        self.is_search_focused = false;
    }

    /// Enter the loading state for a newly submitted search, superseding any
    /// search still pending
    pub fn begin_search(&mut self, ticket: SearchTicket) {
        if let Some(previous) = self.pending.take() {
            info!("Search {:?} superseded by {:?}", previous.ticket, ticket);
        }
        info!("Search {:?} started for '{}'", ticket, self.search_term);

        self.is_loading = true;
        self.error = None;
        self.has_searched = true;
        self.show_submit_button = false;
        self.is_search_focused = false;
        self.pending = Some(PendingSearch {
            ticket,
            query: self.search_term.clone(),
        });
    }

    /// Apply the outcome of a pending search. Returns `false`, leaving the
    /// state untouched, when `ticket` is not the pending search.
    pub fn resolve_search(&mut self, ticket: SearchTicket) -> bool {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                warn!("Ignoring stale search result {:?}", ticket);
                self.pending = other;
                return false;
            }
        };

        match find_family(&pending.query, &self.directory) {
            Ok(family) => {
                info!("Search {:?} found family {}", ticket, family.family_code);
                self.selected_family = Some(family.clone());
                self.error = None;
            }
            Err(e) => {
                info!("Search {:?} failed: {}", ticket, e);
                self.error = Some(e.to_string());
                self.selected_family = None;
            }
        }
        self.is_loading = false;
        true
    }

    /// Abandon the pending search, if any
    pub fn cancel_search(&mut self) {
        if let Some(pending) = self.pending.take() {
            info!("Search {:?} cancelled", pending.ticket);
            self.is_loading = false;
        }
    }

    /// Switch to the printable bill for the selected family
    pub fn generate_bill(&mut self) {
        if self.selected_family.is_some() {
            self.show_bill_interface = true;
        }
    }

    pub fn summary(&self, config: &BillingConfig) -> BillSummary {
        BillSummary::for_family(self.selected_family.as_ref(), config)
    }

    pub fn panel(&self) -> ResultPanel<'_> {
        if !self.has_searched {
            ResultPanel::Hidden
        } else if self.is_loading {
            ResultPanel::Loading
        } else if let Some(error) = &self.error {
            ResultPanel::Error(error.as_str())
        } else if let Some(family) = &self.selected_family {
            ResultPanel::Found(family)
        } else {
            ResultPanel::Empty
        }
    }

    pub fn dropdown_visible(&self) -> bool {
        self.is_search_focused && !self.suggestions.is_empty()
    }
}
