pub mod case_lookup_form;

pub use case_lookup_form::*;
