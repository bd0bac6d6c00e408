use std::ops::RangeInclusive;

use tree_sitter::{InputEdit, Point};

use crate::document::Document;

/// The minimal contiguous region that differs between two versions of a
/// document, in both absolute-byte and row/column form.
///
/// All six coordinates are computed against a pair of documents: the start
/// and old end against the previous one, the new end against the next one.
/// A valid descriptor satisfies the contract checked by [`is_consistent`]:
/// outside the old and new regions the two documents carry identical bytes
/// at matching positions.
///
/// [`is_consistent`]: EditDescriptor::is_consistent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDescriptor {
    pub start_byte: usize,
    pub old_end_byte: usize,
    pub new_end_byte: usize,
    pub start_position: Point,
    pub old_end_position: Point,
    pub new_end_position: Point,
}

impl EditDescriptor {
    /// The form `tree_sitter::Tree::edit` consumes.
    pub fn to_input_edit(&self) -> InputEdit {
        InputEdit {
            start_byte: self.start_byte,
            old_end_byte: self.old_end_byte,
            new_end_byte: self.new_end_byte,
            start_position: self.start_position,
            old_end_position: self.old_end_position,
            new_end_position: self.new_end_position,
        }
    }

    /// Rows a re-highlight pass must cover after this edit.
    pub fn rows(&self) -> RangeInclusive<usize> {
        let last = self.old_end_position.row.max(self.new_end_position.row);
        self.start_position.row..=last
    }

    /// Checks the correctness contract against the document pair the
    /// descriptor was computed from: the previous content outside
    /// `[start_byte, old_end_byte)` equals the next content outside
    /// `[start_byte, new_end_byte)`.
    pub fn is_consistent(&self, previous: &Document, next: &Document) -> bool {
        let p = previous.content();
        let n = next.content();
        self.start_byte <= self.old_end_byte
            && self.start_byte <= self.new_end_byte
            && self.old_end_byte <= p.len()
            && self.new_end_byte <= n.len()
            && p[..self.start_byte] == n[..self.start_byte]
            && p[self.old_end_byte..] == n[self.new_end_byte..]
    }
}
