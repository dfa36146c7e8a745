//! Cross-cutting helpers.
//!
//! - **console_macros**: `console_info!` and friends, timestamped browser console
//!   logging on top of gloo_console

pub mod console_macros;
