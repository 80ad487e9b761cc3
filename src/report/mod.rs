//! Renderers for the list and detail views.
//!
//! - [`terminal`] — colored table for search results and a header plus raw
//!   JSON dump for a single measurement; respects `--quiet`.
//! - [`json`] — machine-readable equivalents for `--report json`.

pub mod json;
pub mod terminal;
