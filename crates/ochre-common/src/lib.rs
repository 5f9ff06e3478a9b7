//! Common utilities for the Ochre style engine.
//!
//! This crate provides shared infrastructure used by the value model, the
//! invalidation classifier and the command line front end:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
