//! The `utils` module provides the shared pieces used across the crate:
//! the error types and logging initialisation.

pub mod error;
pub mod logging;
