//! This crate contains all UI components, state and client code for the court case lookup page.

pub mod app;
pub use app::CaseLookupService;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
