/// The changed span within a single modified line, as byte offsets into the
/// old and new versions of that line.
///
/// `[start, old_end)` in the old line was replaced by `[start, new_end)` in
/// the new one. Offsets always fall on character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SublineRegion {
    pub start: usize,
    pub old_end: usize,
    pub new_end: usize,
}

/// Two-phase prefix/suffix scan over one pair of lines.
///
/// The suffix scan is clamped so it never reads past either string and never
/// overlaps the common prefix; a change touching either end of the line
/// yields an empty leading or trailing common region rather than an
/// out-of-range access.
pub fn subline_region(previous: &str, next: &str) -> SublineRegion {
    let start = common_prefix_bytes(previous, next);
    let limit = previous.len().min(next.len()) - start;
    let suffix = common_suffix_bytes(previous, next, limit);
    SublineRegion {
        start,
        old_end: previous.len() - suffix,
        new_end: next.len() - suffix,
    }
}

fn common_prefix_bytes(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

fn common_suffix_bytes(a: &str, b: &str, limit: usize) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb || len + ca.len_utf8() > limit {
            break;
        }
        len += ca.len_utf8();
    }
    len
}
