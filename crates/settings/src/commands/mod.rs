//! Commands module - CLI command implementations.
//!
//! Each command writes to the given output so it can be exercised in tests.

pub mod check;
pub mod get;
pub mod show;
