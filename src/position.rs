//! Coordinate arithmetic between (row, column) positions and absolute byte
//! offsets in a line-joined document.
//!
//! Every function takes the line sequence the answer is meant for. An offset
//! computed against the wrong sequence is silently wrong, not flagged: the
//! previous document's lines must never be mixed with the next document's
//! rows or vice versa. Callers composing an edit descriptor compute the old
//! end against the previous lines and the new end against the next lines;
//! the start offset is the one value valid in both, because the documents
//! are identical up to it.

use tree_sitter::Point;

/// Byte offset of the start of `row` in `lines` joined with `'\n'`.
///
/// Each preceding line contributes its byte length plus one separator byte.
pub fn line_start_offset(lines: &[String], row: usize) -> usize {
    lines[..row].iter().map(|line| line.len() + 1).sum()
}

/// Absolute byte offset of the position `col` bytes into `row`.
pub fn offset_at(lines: &[String], row: usize, col: usize) -> usize {
    line_start_offset(lines, row) + col
}

/// Byte length of the joined text, without materializing it.
pub fn content_len(lines: &[String]) -> usize {
    let bytes: usize = lines.iter().map(|line| line.len()).sum();
    bytes + lines.len().saturating_sub(1)
}

/// Point and offset of an exclusive whole-line region end.
///
/// `row < lines.len()` maps to the start of that line. `row == lines.len()`
/// means the region runs to the end of the document, which has no following
/// line start; it maps to the end of the last line instead.
pub fn region_boundary(lines: &[String], row: usize) -> (Point, usize) {
    if row < lines.len() {
        (Point { row, column: 0 }, line_start_offset(lines, row))
    } else if let Some(last) = lines.last() {
        let point = Point {
            row: lines.len() - 1,
            column: last.len(),
        };
        (point, content_len(lines))
    } else {
        (Point { row: 0, column: 0 }, 0)
    }
}
