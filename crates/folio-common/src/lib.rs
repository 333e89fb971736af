//! Common utilities for the Folio style engine.
//!
//! This crate provides shared infrastructure used by the DOM and CSS crates:
//! - **Warning System** - deduplicated, coloured diagnostics on stderr

pub mod warning;
