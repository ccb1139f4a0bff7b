//! The session object tying draft filters, applied filters, the URL and the
//! result lifecycle together.
//!
//! User actions return a [`Navigation`] for the caller to apply to the address
//! bar. The caller then reports the resulting location through
//! [`SearchSession::observe`], which is the only place executions start.

use tracing::{debug, info};

use crate::error::SearchError;
use crate::filters::{FilterDraft, FilterSet};
use crate::lifecycle::{ExecutionTicket, ResultLifecycle, ResultState};
use crate::navigation::{Navigation, NavigationState, Route};
use crate::types::{ResultPayload, SearchQuery};

/// One execution the caller must perform against the search service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: ExecutionTicket,
    pub state: NavigationState,
}

impl SearchRequest {
    pub fn endpoint_url(&self, api_base: &str) -> String {
        self.state.endpoint_url(api_base)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSession {
    route: Route,
    input: String,
    draft: FilterDraft,
    applied: FilterSet,
    query: Option<SearchQuery>,
    filters_explicitly_applied: bool,
    lifecycle: ResultLifecycle,
    /// State of the most recently initiated execution.
    last_request: Option<NavigationState>,
    /// Set by user actions so the next observed location executes even if it
    /// matches the last request.
    explicit: bool,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            route: Route::Landing,
            input: String::new(),
            draft: FilterDraft::default(),
            applied: FilterSet::default(),
            query: None,
            filters_explicitly_applied: false,
            lifecycle: ResultLifecycle::default(),
            last_request: None,
            explicit: false,
        }
    }
}

impl SearchSession {
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FilterDraft {
        &mut self.draft
    }

    pub fn applied(&self) -> &FilterSet {
        &self.applied
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub fn filters_explicitly_applied(&self) -> bool {
        self.filters_explicitly_applied
    }

    pub fn result_state(&self) -> &ResultState {
        self.lifecycle.state()
    }

    /// Query and applied filters; encodes to the URL currently shown.
    pub fn active_state(&self) -> Option<NavigationState> {
        self.query
            .as_ref()
            .map(|q| NavigationState::new(q.clone(), self.applied.clone()))
    }

    /// Submit the search box. Blank input is ignored.
    ///
    /// From the landing page the draft filters travel with the term; from the
    /// results page a new term starts unfiltered.
    pub fn submit(&mut self) -> Option<Navigation> {
        let query = match SearchQuery::new(self.input.trim()) {
            Some(q) => q,
            None => {
                debug!("Ignoring blank search term");
                return None;
            }
        };
        let filters = match self.route {
            Route::Search(_) => FilterSet::default(),
            Route::Landing | Route::NotFound(_) => self.draft.snapshot(),
        };
        self.draft.close_language_menu();
        self.explicit = true;
        let state = NavigationState::new(query, filters);
        info!("Submitting search {:?}", state.encode());
        Some(Navigation::to_state(&state))
    }

    /// Copy the draft into the applied filters and re-run the current term.
    pub fn apply_filters(&mut self) -> Option<Navigation> {
        let query = match &self.query {
            Some(q) => q.clone(),
            None => {
                debug!("No active query, nothing to apply filters to");
                return None;
            }
        };
        self.applied = self.draft.snapshot();
        self.draft.close_language_menu();
        self.filters_explicitly_applied = true;
        self.explicit = true;
        Some(Navigation::to_state(&NavigationState::new(
            query,
            self.applied.clone(),
        )))
    }

    /// Empty both draft and applied filters and re-run the current term
    /// without them. Without an active query only the draft is reset.
    pub fn clear_filters(&mut self) -> Option<Navigation> {
        self.draft.clear();
        self.applied = FilterSet::default();
        self.filters_explicitly_applied = false;
        let query = self.query.clone()?;
        self.explicit = true;
        Some(Navigation::to_state(&NavigationState::unfiltered(query)))
    }

    /// Synchronize with the location the browser now shows. Returns the
    /// execution to start, if any.
    pub fn observe(&mut self, route: Route) -> Option<SearchRequest> {
        let explicit = std::mem::take(&mut self.explicit);
        match route {
            Route::Search(Some(state)) => {
                self.route = Route::Search(Some(state.clone()));
                self.enter_search(state, explicit)
            }
            other => {
                if self.route != other {
                    self.route = other;
                    self.enter_idle();
                }
                None
            }
        }
    }

    fn enter_search(&mut self, state: NavigationState, explicit: bool) -> Option<SearchRequest> {
        if self.query.as_ref() != Some(&state.query) {
            self.filters_explicitly_applied = false;
        }
        self.input = state.query.term().to_string();
        self.query = Some(state.query.clone());
        self.applied = state.filters.clone();
        self.draft = FilterDraft::seeded(&self.applied);

        let settled = !matches!(
            self.lifecycle.state(),
            ResultState::Idle | ResultState::Failed(_)
        );
        if !explicit && settled && self.last_request.as_ref() == Some(&state) {
            debug!("Location matches the last search, not re-running");
            return None;
        }

        let ticket = self.lifecycle.begin();
        self.last_request = Some(state.clone());
        info!(
            "Starting search #{} for {:?}",
            ticket.sequence(),
            state.encode()
        );
        Some(SearchRequest { ticket, state })
    }

    fn enter_idle(&mut self) {
        self.input.clear();
        self.draft.clear();
        self.applied = FilterSet::default();
        self.query = None;
        self.filters_explicitly_applied = false;
        self.last_request = None;
        self.lifecycle.reset();
    }

    /// Record the outcome of an execution. Stale outcomes are discarded and
    /// `false` is returned.
    pub fn resolve(
        &mut self,
        ticket: ExecutionTicket,
        outcome: Result<ResultPayload, SearchError>,
    ) -> bool {
        if let Err(e) = &outcome {
            tracing::error!("Search #{} failed: {}", ticket.sequence(), e);
        }
        let applied = self.lifecycle.resolve(ticket, outcome);
        if !applied {
            debug!("Discarding stale result for search #{}", ticket.sequence());
        }
        applied
    }
}
