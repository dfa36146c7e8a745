pub mod case_field_input;

pub use case_field_input::*;
