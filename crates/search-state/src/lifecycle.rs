use crate::error::SearchError;
use crate::types::ResultPayload;

/// What the results area shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultState {
    /// No query yet.
    #[default]
    Idle,
    Loading,
    /// Successful execution with `count == 0`.
    Empty(ResultPayload),
    Populated(ResultPayload),
    /// User-facing failure message.
    Failed(String),
}

impl ResultState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }

    pub fn payload(&self) -> Option<&ResultPayload> {
        match self {
            ResultState::Empty(p) | ResultState::Populated(p) => Some(p),
            _ => None,
        }
    }
}

/// Identifies one query execution. Later executions carry larger tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExecutionTicket(u64);

impl ExecutionTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Result lifecycle state machine.
///
/// Only the most recently issued ticket may move the machine out of
/// `Loading`; older resolutions are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultLifecycle {
    state: ResultState,
    issued: u64,
}

impl ResultLifecycle {
    pub fn state(&self) -> &ResultState {
        &self.state
    }

    /// Enter `Loading` for a new execution. Allowed from every state.
    pub fn begin(&mut self) -> ExecutionTicket {
        self.issued += 1;
        self.state = ResultState::Loading;
        ExecutionTicket(self.issued)
    }

    pub fn is_current(&self, ticket: ExecutionTicket) -> bool {
        ticket.0 == self.issued && self.state.is_loading()
    }

    /// Apply the outcome of an execution. Returns `false` and leaves the state
    /// untouched when the ticket has been superseded.
    pub fn resolve(
        &mut self,
        ticket: ExecutionTicket,
        outcome: Result<ResultPayload, SearchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(payload) if payload.is_empty() => ResultState::Empty(payload),
            Ok(payload) => ResultState::Populated(payload),
            Err(e) => ResultState::Failed(e.to_string()),
        };
        true
    }

    /// Back to `Idle`; any outstanding ticket becomes stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = ResultState::Idle;
    }
}
