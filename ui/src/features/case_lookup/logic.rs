//! Async side of the lookup page: one backend call per submission.
//!
//! These functions return the action to dispatch rather than dispatching
//! themselves, so they run the same in the browser and under native tests.

use tracing::{info, instrument, warn};

use crate::features::case_lookup::types::{BackendStatus, LookupAction, RequestId};
use crate::services::client::{CaseClient, CaseLookupBackend, CaseQuery};
use crate::services::config::LookupConfig;

/// Run one lookup and produce the settle action for it.
///
/// Every outcome ends in `Settle`, so Loading is always cleared for the
/// request that issued it.
#[instrument(skip(backend, query))]
pub async fn lookup_case<B>(backend: &B, request: RequestId, query: CaseQuery) -> LookupAction
where
    B: CaseLookupBackend + ?Sized,
{
    info!(
        "Looking up {} {}/{}",
        query.case_type, query.case_number, query.case_year
    );

    let outcome = backend.fetch_case(&query).await;
    if let Err(error) = &outcome {
        warn!("Lookup failed: {}", error);
    }

    LookupAction::Settle { request, outcome }
}

/// Build a client from `config` and run one lookup with it
pub async fn lookup_case_with_config(
    config: LookupConfig,
    request: RequestId,
    query: CaseQuery,
) -> LookupAction {
    match CaseClient::new(config) {
        Ok(client) => lookup_case(&client, request, query).await,
        Err(error) => LookupAction::Settle {
            request,
            outcome: Err(error),
        },
    }
}

/// Ask the backend whether it is up
pub async fn probe_backend<B>(backend: &B) -> BackendStatus
where
    B: CaseLookupBackend + ?Sized,
{
    match backend.ping().await {
        Ok(message) => BackendStatus::Online(message),
        Err(error) => {
            warn!("Backend probe failed: {}", error);
            BackendStatus::Offline
        }
    }
}

pub async fn probe_backend_with_config(config: LookupConfig) -> BackendStatus {
    match CaseClient::new(config) {
        Ok(client) => probe_backend(&client).await,
        Err(_) => BackendStatus::Offline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::case_lookup::types::{LookupState, RequestState};
    use crate::services::client::{CaseResult, LookupError, OrderEntry};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// Backend double that records what it was asked and replays a canned answer
    struct MockBackend {
        answer: Result<CaseResult, LookupError>,
        calls: Cell<usize>,
        last_query: RefCell<Option<CaseQuery>>,
    }

    impl MockBackend {
        fn answering(answer: Result<CaseResult, LookupError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
                last_query: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl CaseLookupBackend for MockBackend {
        async fn fetch_case(&self, query: &CaseQuery) -> Result<CaseResult, LookupError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_query.borrow_mut() = Some(query.clone());
            self.answer.clone()
        }

        async fn ping(&self) -> Result<String, LookupError> {
            match &self.answer {
                Ok(_) => Ok("Welcome to the Court Data Fetcher API!".to_string()),
                Err(error) => Err(error.clone()),
            }
        }
    }

    fn result_with_orders(count: usize) -> CaseResult {
        CaseResult {
            party_names: "X VS. Y".to_string(),
            filing_date: "Year: 2021".to_string(),
            next_hearing_date: "01/01/2026".to_string(),
            orders_link: "https://example.org/orders".to_string(),
            orders: (0..count)
                .map(|i| OrderEntry {
                    date: format!("0{}/01/2024", i + 1),
                    url: format!("https://example.org/orders/{}.pdf", i),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_submit_settles_into_success() {
        let backend = MockBackend::answering(Ok(result_with_orders(3)));
        let mut state = LookupState::default();

        let request = state.begin_request();
        assert_eq!(state.request, RequestState::Loading);

        let action = lookup_case(&backend, request, state.query.clone()).await;
        state.reduce_in_place(action);

        assert_eq!(backend.calls.get(), 1);
        assert_eq!(
            backend.last_query.borrow().as_ref(),
            Some(&CaseQuery::default())
        );
        assert_eq!(state.request.result().map(|r| r.orders.len()), Some(3));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_submit_settles_into_failure() {
        let backend = MockBackend::answering(Err(LookupError::Server {
            status: 404,
            detail: Some("Case not found".to_string()),
        }));
        let mut state = LookupState::default();

        let request = state.begin_request();
        let action = lookup_case(&backend, request, state.query.clone()).await;
        state.reduce_in_place(action);

        assert_eq!(backend.calls.get(), 1);
        assert_eq!(
            state.request,
            RequestState::Failure("Error: Case not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_overlapping_submissions_keep_latest() {
        let slow = MockBackend::answering(Ok(result_with_orders(1)));
        let fast = MockBackend::answering(Ok(result_with_orders(2)));
        let mut state = LookupState::default();

        let first = state.begin_request();
        let second = state.begin_request();

        let second_done = lookup_case(&fast, second, state.query.clone()).await;
        let first_done = lookup_case(&slow, first, state.query.clone()).await;
        state.reduce_in_place(second_done);
        state.reduce_in_place(first_done);

        assert_eq!(state.request.result().map(|r| r.orders.len()), Some(2));
    }

    #[tokio::test]
    async fn test_probe_reports_status() {
        let up = MockBackend::answering(Ok(result_with_orders(0)));
        let down = MockBackend::answering(Err(LookupError::Network {
            message: "refused".to_string(),
        }));

        assert_eq!(
            probe_backend(&up).await,
            BackendStatus::Online("Welcome to the Court Data Fetcher API!".to_string())
        );
        assert_eq!(probe_backend(&down).await, BackendStatus::Offline);
    }
}
