use tree_sitter::Point;

use super::subline::subline_region;
use crate::document::Document;
use crate::edit::EditDescriptor;
use crate::position;

/// The smallest contiguous run of lines that differs between two line
/// sequences, under an exclusive-end convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRegion {
    /// Lines `[start, old_end)` were replaced by `[start, new_end)`. Covers
    /// whole-line insertion (`old_end == start`), whole-line removal
    /// (`new_end == start`) and multi-line replacement.
    Replaced {
        start: usize,
        old_end: usize,
        new_end: usize,
    },
    /// Exactly one line changed, within the line. Refined by the sub-line
    /// scan when the descriptor is composed.
    Modified { row: usize },
}

/// Result of diffing two successive versions of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// The sequences are identical; an explicit no-op, not an error.
    Unchanged,
    /// A single contiguous region changed.
    Edit(EditDescriptor),
    /// One sequence is an exact prefix of the other. The prefix scan finds
    /// no mismatch in the overlap, so it cannot place the boundary; the
    /// caller reparses from scratch instead of dropping the update, which
    /// would leave highlighting stale.
    Resync,
}

/// Raw two-phase line scan.
///
/// Phase 1 walks both sequences from the front; the first mismatching index
/// is `start`. Phase 2 walks both from the back counting matching trailing
/// lines, clamped so it never reads past either sequence and never crosses
/// into the prefix region; the exclusive ends are each length minus that
/// count.
///
/// Returns `None` when every index in the overlapping range matches. That
/// includes the case where one sequence is an exact prefix of the other,
/// even though the sequences differ; callers must compare lengths to tell
/// the two apart (see [`locate`]).
pub fn line_region(previous: &[String], next: &[String]) -> Option<LineRegion> {
    let overlap = previous.len().min(next.len());
    let start = (0..overlap).find(|&i| previous[i] != next[i])?;

    let limit = overlap - start;
    let mut suffix = 0;
    while suffix < limit && previous[previous.len() - 1 - suffix] == next[next.len() - 1 - suffix] {
        suffix += 1;
    }

    let old_end = previous.len() - suffix;
    let new_end = next.len() - suffix;
    if old_end == new_end && old_end == start + 1 {
        Some(LineRegion::Modified { row: start })
    } else {
        Some(LineRegion::Replaced { start, old_end, new_end })
    }
}

/// Diffs two documents and composes the edit descriptor for the changed
/// region, or reports that nothing changed or that a resync is needed.
pub fn locate(previous: &Document, next: &Document) -> DiffOutcome {
    match line_region(previous.lines(), next.lines()) {
        Some(region) => DiffOutcome::Edit(describe(previous, next, region)),
        None if previous.line_count() == next.line_count() => DiffOutcome::Unchanged,
        None => DiffOutcome::Resync,
    }
}

fn describe(previous: &Document, next: &Document, region: LineRegion) -> EditDescriptor {
    match region {
        LineRegion::Modified { row } => {
            let sub = subline_region(&previous.lines()[row], &next.lines()[row]);
            // The documents are identical up to the start point, so the
            // start offset is valid in either one. The old end is computed
            // against the previous lines, the new end against the next.
            EditDescriptor {
                start_byte: position::offset_at(previous.lines(), row, sub.start),
                old_end_byte: position::offset_at(previous.lines(), row, sub.old_end),
                new_end_byte: position::offset_at(next.lines(), row, sub.new_end),
                start_position: Point { row, column: sub.start },
                old_end_position: Point { row, column: sub.old_end },
                new_end_position: Point { row, column: sub.new_end },
            }
        }
        LineRegion::Replaced { start, old_end, new_end } => {
            let (old_end_position, old_end_byte) =
                position::region_boundary(previous.lines(), old_end);
            let (new_end_position, new_end_byte) =
                position::region_boundary(next.lines(), new_end);
            EditDescriptor {
                start_byte: position::line_start_offset(previous.lines(), start),
                old_end_byte,
                new_end_byte,
                start_position: Point { row: start, column: 0 },
                old_end_position,
                new_end_position,
            }
        }
    }
}
