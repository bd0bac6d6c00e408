//! The ordered classification rule table for the JavaScript grammar.
//!
//! Rules are evaluated top to bottom per node, first match wins. Structural
//! rules (parent and sibling shape) come before the token-kind fallbacks, so
//! an identifier that names a function outranks the plain-identifier default.

use tree_sitter::Node;

use super::category::Category;

type Predicate = for<'t> fn(Node<'t>) -> bool;

/// One classification rule.
pub struct Rule {
    pub applies: Predicate,
    pub category: Category,
}

pub const RULES: &[Rule] = &[
    Rule { applies: is_definition_name, category: Category::Function },
    Rule { applies: is_callee_name, category: Category::Function },
    Rule { applies: is_method_callee_property, category: Category::Function },
    Rule { applies: is_function_keyword, category: Category::Keyword },
    Rule { applies: is_declarative_property, category: Category::Storage },
    Rule { applies: is_operator_token, category: Category::Operator },
    Rule { applies: is_punctuation_token, category: Category::Punctuation },
    Rule { applies: is_control_keyword, category: Category::Keyword },
    Rule { applies: is_constant_token, category: Category::Constant },
    Rule { applies: is_boolean_token, category: Category::Boolean },
    Rule { applies: is_number_token, category: Category::Number },
    Rule { applies: is_string_token, category: Category::String },
    Rule { applies: is_regex_token, category: Category::Regex },
    Rule { applies: is_declaration_keyword, category: Category::Storage },
    Rule { applies: is_plain_identifier, category: Category::Identifier },
];

/// First matching rule's category, or `None` for nodes no rule covers
/// (typically interior branch nodes), which emit nothing.
pub fn classify_node(node: Node) -> Option<Category> {
    RULES
        .iter()
        .find(|rule| (rule.applies)(node))
        .map(|rule| rule.category)
}

/// Identifier naming a function-defining construct.
fn is_definition_name(node: Node) -> bool {
    node.kind() == "identifier"
        && node.parent().is_some_and(|parent| {
            matches!(
                parent.kind(),
                "function_declaration"
                    | "function_expression"
                    | "function"
                    | "generator_function"
                    | "generator_function_declaration"
            )
        })
}

/// Identifier in callee position of a call or construction.
fn is_callee_name(node: Node) -> bool {
    node.kind() == "identifier"
        && node
            .parent()
            .is_some_and(|parent| matches!(parent.kind(), "call_expression" | "new_expression"))
}

/// Property at the end of a member chain that is itself the callee of a call,
/// e.g. the `log` in `console.log(...)`.
fn is_method_callee_property(node: Node) -> bool {
    if node.kind() != "property_identifier" {
        return false;
    }
    let Some(member) = node.parent() else {
        return false;
    };
    if member.kind() != "member_expression" {
        return false;
    }
    let final_child = member
        .child(member.child_count().saturating_sub(1))
        .is_some_and(|child| child.id() == node.id());
    if !final_child {
        return false;
    }
    let Some(call) = member.parent() else {
        return false;
    };
    call.kind() == "call_expression"
        && call.child(0).is_some_and(|callee| callee.id() == member.id())
}

/// The `function` keyword token itself, as opposed to a node type that
/// happens to carry the same name; the token is a leaf.
fn is_function_keyword(node: Node) -> bool {
    node.kind() == "function" && node.child_count() == 0
}

/// Property key in a key/value pair, or a shorthand property in an object
/// literal.
fn is_declarative_property(node: Node) -> bool {
    match node.kind() {
        "property_identifier" => node.parent().is_some_and(|parent| parent.kind() == "pair"),
        "shorthand_property_identifier" => true,
        _ => false,
    }
}

fn is_operator_token(node: Node) -> bool {
    matches!(
        node.kind(),
        "+" | "-"
            | "*"
            | "/"
            | "%"
            | "**"
            | "=="
            | "==="
            | "!="
            | "!=="
            | "<"
            | ">"
            | "<="
            | ">="
            | "&&"
            | "||"
            | "!"
            | "="
            | "+="
            | "-="
            | "*="
            | "/="
            | "%="
            | "&"
            | "|"
            | "^"
            | "~"
            | "<<"
            | ">>"
            | ">>>"
            | "++"
            | "--"
            | "?"
    )
}

fn is_punctuation_token(node: Node) -> bool {
    matches!(
        node.kind(),
        "(" | ")" | "[" | "]" | "{" | "}" | ";" | "," | "." | ":" | "=>" | "comment"
    )
}

fn is_control_keyword(node: Node) -> bool {
    matches!(
        node.kind(),
        "if" | "else"
            | "for"
            | "while"
            | "try"
            | "catch"
            | "switch"
            | "case"
            | "break"
            | "return"
            | "new"
            | "delete"
            | "async"
            | "await"
            | "do"
            | "in"
            | "of"
    )
}

fn is_constant_token(node: Node) -> bool {
    matches!(node.kind(), "null" | "undefined")
}

fn is_boolean_token(node: Node) -> bool {
    matches!(node.kind(), "true" | "false")
}

fn is_number_token(node: Node) -> bool {
    node.kind() == "number"
}

fn is_string_token(node: Node) -> bool {
    matches!(node.kind(), "string" | "template_string")
}

fn is_regex_token(node: Node) -> bool {
    node.kind() == "regex"
}

fn is_declaration_keyword(node: Node) -> bool {
    matches!(node.kind(), "var" | "let" | "const")
}

fn is_plain_identifier(node: Node) -> bool {
    node.kind() == "identifier"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse(source: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    /// First node in pre-order whose kind and source text both match.
    fn category_of(source: &str, kind: &str, text: &str) -> Option<Category> {
        let tree = parse(source);
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            if node.kind() == kind && node.utf8_text(source.as_bytes()).unwrap() == text {
                return classify_node(node);
            }
            for i in (0..node.child_count()).rev() {
                stack.push(node.child(i).unwrap());
            }
        }
        panic!("no {kind} node spelling {text:?} in {source:?}");
    }

    #[test]
    fn function_definition_name() {
        assert_eq!(
            category_of("function foo(a) { return a; }", "identifier", "foo"),
            Some(Category::Function)
        );
    }

    #[test]
    fn call_site_name() {
        assert_eq!(
            category_of("foo(1);", "identifier", "foo"),
            Some(Category::Function)
        );
        assert_eq!(
            category_of("new Thing();", "identifier", "Thing"),
            Some(Category::Function)
        );
    }

    #[test]
    fn method_call_property_is_a_function_name() {
        assert_eq!(
            category_of("console.log(x);", "property_identifier", "log"),
            Some(Category::Function)
        );
        // The object of the chain stays a plain identifier.
        assert_eq!(
            category_of("console.log(x);", "identifier", "console"),
            Some(Category::Identifier)
        );
    }

    #[test]
    fn property_access_without_call_is_not_a_function_name() {
        assert_eq!(
            category_of("const a = obj.field;", "property_identifier", "field"),
            None
        );
    }

    #[test]
    fn function_keyword_token() {
        assert_eq!(
            category_of("const f = function () {};", "function", "function"),
            Some(Category::Keyword)
        );
    }

    #[test]
    fn object_keys_are_storage_qualifiers() {
        let source = "const o = { key: 1, short };";
        assert_eq!(
            category_of(source, "property_identifier", "key"),
            Some(Category::Storage)
        );
        assert_eq!(
            category_of(source, "shorthand_property_identifier", "short"),
            Some(Category::Storage)
        );
    }

    #[test]
    fn token_kind_fallbacks() {
        let source = "let x = a + 1; if (x !== null) { return [true, \"s\", /re/]; }";
        assert_eq!(category_of(source, "let", "let"), Some(Category::Storage));
        assert_eq!(category_of(source, "+", "+"), Some(Category::Operator));
        assert_eq!(category_of(source, "!==", "!=="), Some(Category::Operator));
        assert_eq!(category_of(source, "if", "if"), Some(Category::Keyword));
        assert_eq!(category_of(source, "return", "return"), Some(Category::Keyword));
        assert_eq!(category_of(source, "null", "null"), Some(Category::Constant));
        assert_eq!(category_of(source, "true", "true"), Some(Category::Boolean));
        assert_eq!(category_of(source, "number", "1"), Some(Category::Number));
        assert_eq!(category_of(source, "string", "\"s\""), Some(Category::String));
        assert_eq!(category_of(source, "regex", "/re/"), Some(Category::Regex));
        assert_eq!(category_of(source, "[", "["), Some(Category::Punctuation));
        assert_eq!(category_of(source, ";", ";"), Some(Category::Punctuation));
        assert_eq!(category_of(source, "identifier", "a"), Some(Category::Identifier));
    }

    #[test]
    fn comments_fall_into_the_punctuation_bucket() {
        assert_eq!(
            category_of("// note\nx;", "comment", "// note"),
            Some(Category::Punctuation)
        );
    }

    #[test]
    fn branch_nodes_are_not_classified() {
        assert_eq!(category_of("foo(1);", "call_expression", "foo(1)"), None);
        assert_eq!(category_of("foo(1);", "program", "foo(1);"), None);
    }
}
