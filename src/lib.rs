//! siskin: incremental syntax re-highlighting for an editor host
//!
//! The engine keeps re-highlighting proportional to the size of an edit, not
//! the size of the document. On every buffer update it locates the minimal
//! contiguous changed region between the previous and next line sequences,
//! converts that region into the byte/row/column coordinates Tree-sitter
//! needs, reparses incrementally with the previous tree as a reuse hint, and
//! then classifies only the affected rows into highlight categories.
//!
//! The main types are:
//!
//! - [`Session`]: owns one record per open document and serializes updates
//!   per document id (updates for different documents run independently).
//!
//! - [`Engine`]: wires a [`BufferSource`] (where lines come from) and a
//!   [`HighlightSink`] (where instructions go) around a session.
//!
//! - [`EditDescriptor`]: the changed region in both absolute-byte and
//!   row/column form, convertible to a `tree_sitter::InputEdit`.
//!
//! - [`classify::classify`]: the range-scoped tree walk that turns a parse
//!   tree into ordered [`HighlightInstruction`]s.

pub mod classify;
pub mod diff;
mod document;
mod edit;
mod engine;
pub mod position;
mod session;
mod settings;

pub use classify::{Category, HighlightInstruction};
pub use diff::DiffOutcome;
pub use document::{DocId, Document};
pub use edit::EditDescriptor;
pub use engine::{BufferSource, DocumentEvent, Engine, HighlightSink};
pub use session::{ChangeOutcome, OpenOutcome, Session, Update};
pub use settings::Settings;
