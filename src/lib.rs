//! # subject-observer
//!
//! `subject-observer` is a small, single-threaded implementation of the
//! observer pattern: a subject holds a message and an ordered list of
//! observers, and pushes the message to each of them whenever it changes.
//!
//! ## Core Modules
//!
//! - `subject`: the `Subject` trait and `MessageSubject`, which manages the
//!   subscription list and broadcasts.
//! - `observer`: the `Observer` trait, `MessageObserver` and the identity
//!   source that numbers observers.
//! - `demo`: end-to-end walkthroughs used by the binary.
//! - `config`: loading settings from file and environment.
//! - `utils`: error types and logging initialisation.

pub mod config;
pub mod demo;
pub mod observer;
pub mod subject;
pub mod utils;

#[cfg(test)]
mod tests;
