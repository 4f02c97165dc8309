//! Common utilities for the kata workspace.
//!
//! This crate provides shared infrastructure used by the selector builder,
//! the JSON helpers and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for inputs
//!   that are accepted but probably not what the caller meant

pub mod warning;
