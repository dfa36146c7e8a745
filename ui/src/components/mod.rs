//! User Interface Components
//!
//! Reusable Dioxus components for the case lookup page:
//!
//! - **forms**: the three-field lookup form
//! - **display**: spinner, error box, result card, orders table and backend banner
//! - **input**: labelled, required text input bound to a query field
//!
//! Components take state and callbacks as props; none of them talk to the
//! backend directly.

pub mod display;
pub mod forms;
pub mod input;
