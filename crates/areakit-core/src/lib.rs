//! # AreaKit Core
//!
//! Shared error types and constants for the AreaKit crates.
//! Every fallible engine operation reports one of the error kinds defined here
//! so that UI collaborators can surface a message without matching on strings.

pub mod constants;
pub mod error;

pub use error::{AreaError, AreaErrorKind, DocumentError, Error, LineError, Result};
