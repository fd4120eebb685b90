//! Common utilities for the Sprig selector builder.
//!
//! This crate provides shared infrastructure used by all Sprig components:
//! - **Warning System** - colored terminal output for suspicious but accepted input

pub mod warning;
