// Client side of the case lookup backend
//
// - Wire types for the lookup request and result
// - Error mapping from HTTP responses to the messages shown in the UI
// - A reqwest-based client behind the CaseLookupBackend trait

pub mod case_client;
pub mod errors;
pub mod types;

pub use case_client::{CaseClient, CaseLookupBackend};
pub use errors::{LookupError, NETWORK_ERROR_MESSAGE, SERVER_FALLBACK_DETAIL};
pub use types::{CaseField, CaseQuery, CaseResult, OrderEntry, WelcomeResponse};
