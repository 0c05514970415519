//! Core library components.
//!
//! Key state, the session controller that gates encryption on it, and the
//! seams results flow out through.

pub mod cipher;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod key;
pub mod session;
pub mod sink;
