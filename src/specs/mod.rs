// src/specs/mod.rs
//! Page-specific extraction specs.
//!
//! Each spec knows how to read one level of the directory hierarchy and
//! shapes the cleaned item texts into records. Specs are pure: no fetching,
//! no caching, no export formatting — that all lives with the pipeline.
//! Keeping them pure means every spec is testable offline against captured
//! fixtures.

pub mod addresses;
pub mod cities;
pub mod states;
