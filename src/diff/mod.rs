//! Minimal-contiguous-region diff between two versions of a document.
//!
//! The locator assumes a single contiguous edit per invocation, which holds
//! for single-keystroke buffer updates; it is a two-phase common-prefix /
//! common-suffix scan, not an LCS diff. Multiple disjoint edits delivered in
//! one update collapse into one spanning region.

mod line;
mod subline;

pub use line::{DiffOutcome, LineRegion, line_region, locate};
pub use subline::{SublineRegion, subline_region};
