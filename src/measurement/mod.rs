//! Presentation shaping for individual measurements.
//!
//! - [`classifier`] — decides the display category, color and tag of a record.
//! - [`input`] — splits a measurement `input` URL into display fragments.
//! - [`link`] — builds the relative detail-page link for a record.
//! - [`display`] — ASN and timestamp formatting, and assembly of list rows.

pub mod classifier;
pub mod display;
pub mod input;
pub mod link;
