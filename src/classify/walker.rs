use std::ops::RangeInclusive;

use tree_sitter::{Node, Tree};

use super::category::{Category, HighlightInstruction};
use super::rules::classify_node;

/// Walks `tree` depth-first pre-order and classifies nodes into highlight
/// instructions, restricted to `rows` when given (`None` means the whole
/// document).
///
/// A subtree is skipped only when the node's own row range misses the
/// restriction; a node's range bounds its children's, so nothing inside it
/// can intersect either. Instructions come out in traversal order and the
/// walk holds no state across calls.
pub fn classify(tree: &Tree, rows: Option<&RangeInclusive<usize>>) -> Vec<HighlightInstruction> {
    let mut instructions = Vec::new();
    visit(tree.root_node(), rows, &mut instructions);
    instructions
}

fn visit(node: Node, rows: Option<&RangeInclusive<usize>>, out: &mut Vec<HighlightInstruction>) {
    if let Some(range) = rows {
        if node.end_position().row < *range.start() || node.start_position().row > *range.end() {
            return;
        }
    }

    if let Some(category) = classify_node(node) {
        emit(node, category, rows, out);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, rows, out);
    }
}

/// One instruction per covered row: the first row starts at the node's start
/// column, the last row ends at its end column, and any row that is not the
/// last runs to the end of the row. Rows outside the restriction are
/// clamped away.
fn emit(
    node: Node,
    category: Category,
    rows: Option<&RangeInclusive<usize>>,
    out: &mut Vec<HighlightInstruction>,
) {
    let start = node.start_position();
    let end = node.end_position();
    for row in start.row..=end.row {
        if let Some(range) = rows {
            if row < *range.start() || row > *range.end() {
                continue;
            }
        }
        out.push(HighlightInstruction {
            category,
            row,
            col_start: if row == start.row { start.column } else { 0 },
            col_end: if row == end.row { Some(end.column) } else { None },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    const SOURCE: &str = "\
function add(a, b) {
  return a + b;
}
const total = add(1, 2);
console.log(total);";

    fn parse(source: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn whole_document_pass_covers_every_interesting_token() {
        let tree = parse(SOURCE);
        let instructions = classify(&tree, None);

        let find = |category, row| {
            instructions
                .iter()
                .find(|i| i.category == category && i.row == row)
        };
        assert!(find(Category::Keyword, 0).is_some(), "function keyword");
        assert!(find(Category::Function, 0).is_some(), "definition name");
        assert!(find(Category::Keyword, 1).is_some(), "return keyword");
        assert!(find(Category::Operator, 1).is_some(), "plus operator");
        assert!(find(Category::Storage, 3).is_some(), "const keyword");
        assert!(find(Category::Function, 3).is_some(), "call site name");
        assert!(find(Category::Number, 3).is_some(), "number literal");
        assert!(find(Category::Function, 4).is_some(), "method property");
    }

    #[test]
    fn instructions_carry_exact_columns_for_single_row_nodes() {
        let tree = parse("foo(1);");
        let instructions = classify(&tree, None);
        let name = instructions
            .iter()
            .find(|i| i.category == Category::Function)
            .unwrap();
        assert_eq!(name.row, 0);
        assert_eq!(name.col_start, 0);
        assert_eq!(name.col_end, Some(3));
    }

    #[test]
    fn multi_row_node_spans_rows_with_open_ends() {
        let source = "const s = `one\ntwo\nthree`;";
        let tree = parse(source);
        let instructions = classify(&tree, None);
        let rows: Vec<_> = instructions
            .iter()
            .filter(|i| i.category == Category::String)
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].row, rows[0].col_start, rows[0].col_end), (0, 10, None));
        assert_eq!((rows[1].row, rows[1].col_start, rows[1].col_end), (1, 0, None));
        assert_eq!(rows[2].row, 2);
        assert_eq!(rows[2].col_start, 0);
        assert_eq!(rows[2].col_end, Some(6));
    }

    #[test]
    fn restriction_bounds_every_emitted_row() {
        let tree = parse(SOURCE);
        for restriction in [0..=0, 1..=2, 3..=4, 2..=3] {
            let instructions = classify(&tree, Some(&restriction));
            for instruction in &instructions {
                assert!(
                    restriction.contains(&instruction.row),
                    "row {} escaped restriction {restriction:?}",
                    instruction.row
                );
            }
        }
    }

    #[test]
    fn restriction_clamps_nodes_that_straddle_the_boundary() {
        // The template string spans rows 0..=2; restricting to row 1 must
        // keep only the middle-row slice of it.
        let tree = parse("const s = `one\ntwo\nthree`;");
        let instructions = classify(&tree, Some(&(1..=1)));
        assert!(!instructions.is_empty());
        assert!(instructions.iter().all(|i| i.row == 1));
    }

    #[test]
    fn restricted_pass_agrees_with_the_whole_document_pass() {
        let tree = parse(SOURCE);
        let whole = classify(&tree, None);
        let restriction = 3..=3;
        let scoped = classify(&tree, Some(&restriction));
        let expected: Vec<_> = whole.into_iter().filter(|i| i.row == 3).collect();
        assert_eq!(scoped, expected);
    }

    #[test]
    fn classification_is_idempotent() {
        let tree = parse(SOURCE);
        let restriction = 0..=2;
        assert_eq!(classify(&tree, None), classify(&tree, None));
        assert_eq!(
            classify(&tree, Some(&restriction)),
            classify(&tree, Some(&restriction))
        );
    }
}
