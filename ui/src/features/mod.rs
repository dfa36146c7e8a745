//! Page features: state, actions, validation and async logic, free of markup.

pub mod case_lookup;
