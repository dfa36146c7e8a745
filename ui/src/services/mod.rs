//! Infrastructure Services
//!
//! - **client**: HTTP client for the case lookup backend and its wire types
//! - **config**: backend endpoint configuration
//!
//! The client is WASM-first: async traits are declared without Send bounds so
//! browser futures can implement them.

pub mod client;
pub mod config;
