pub mod case_lookup_service;

pub use case_lookup_service::CaseLookupService;
