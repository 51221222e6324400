#![deny(unsafe_code)]

//! Shared test utilities for the Pincer workspace.
//!
//! Provides reusable rule fixtures, config builders, and tracing helpers so
//! that individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! pincer-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod rules;
pub mod tracing_setup;
