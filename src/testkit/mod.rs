//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`chain`] — Scripted mocks for the chain collaborator ports:
//!   `StaticAccount`, `ScriptedApproval`, `ScriptedMarketplace`.

pub mod chain;
