//! Shared utilities.

pub mod dom;
