// State and actions for the case lookup page - no dioxus imports needed here
use tracing::{debug, warn};

use crate::services::client::{CaseField, CaseQuery, CaseResult, LookupError};

/// Ticket issued for each submission. Later submissions get larger ids.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn next(self) -> Self {
        RequestId(self.0 + 1)
    }
}

/// Lifecycle of a lookup. Exactly one panel is rendered per state.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(CaseResult),
    Failure(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&CaseResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Final state for a settled request
    pub fn from_outcome(outcome: Result<CaseResult, LookupError>) -> Self {
        match outcome {
            Ok(result) => RequestState::Success(result),
            Err(error) => RequestState::Failure(error.user_message()),
        }
    }
}

/// Whether the backend answered the startup probe
#[derive(Clone, PartialEq, Debug, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online(String),
    Offline,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum LookupAction {
    UpdateField(CaseField, String),
    /// A submission was issued with this ticket
    BeginRequest(RequestId),
    /// A request settled, successfully or not
    Settle {
        request: RequestId,
        outcome: Result<CaseResult, LookupError>,
    },
    SetBackendStatus(BackendStatus),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LookupState {
    pub query: CaseQuery,
    pub request: RequestState,
    /// Ticket of the most recent submission; only its outcome is applied
    pub latest_request: RequestId,
    pub backend: BackendStatus,
}

impl LookupState {
    /// Apply an action. Mutates in place so Dioxus signals see a single write.
    pub fn reduce_in_place(&mut self, action: LookupAction) {
        match action {
            LookupAction::UpdateField(field, value) => {
                self.query.set(field, value);
            }
            LookupAction::BeginRequest(request) => {
                self.latest_request = request;
                self.request = RequestState::Loading;
            }
            LookupAction::Settle { request, outcome } => {
                if request != self.latest_request {
                    warn!(
                        "Dropping stale lookup result for request {} (latest is {})",
                        request.0, self.latest_request.0
                    );
                    return;
                }
                debug!("Request {} settled", request.0);
                self.request = RequestState::from_outcome(outcome);
            }
            LookupAction::SetBackendStatus(status) => {
                self.backend = status;
            }
        }
    }

    /// Issue the next ticket and switch to Loading, clearing any prior result
    pub fn begin_request(&mut self) -> RequestId {
        let request = self.latest_request.next();
        self.reduce_in_place(LookupAction::BeginRequest(request));
        request
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Searching..."
        } else {
            "Search Case"
        }
    }
}
