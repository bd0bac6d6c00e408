//! Range-scoped classification of a parse tree into highlight categories.
//!
//! Traversal is depth-first pre-order over `tree_sitter` nodes, restricted to
//! an optional row range so that re-highlighting after an edit touches only
//! the affected rows. Classification itself is a data-driven ordered rule
//! table, first match wins, kept separate from the traversal so the two can
//! be tested independently.

mod category;
mod rules;
mod walker;

pub use category::{Category, HighlightInstruction};
pub use rules::{RULES, Rule, classify_node};
pub use walker::classify;
