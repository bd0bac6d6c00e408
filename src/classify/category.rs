/// Highlight category attached to a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Function names at definition and call sites.
    Function,
    Keyword,
    /// Declarative-role names: declaration keywords and object property keys.
    Storage,
    Operator,
    Punctuation,
    Constant,
    Boolean,
    Number,
    String,
    Regex,
    /// Bare identifier with no more specific match; the default category.
    Identifier,
}

impl Category {
    /// Name the renderer collaborator keys its styles on.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Function => "function-name",
            Category::Keyword => "keyword",
            Category::Storage => "storage-qualifier",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::Constant => "constant",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::String => "string",
            Category::Regex => "regex",
            Category::Identifier => "identifier",
        }
    }
}

/// One renderer directive: a category applied to a column span of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightInstruction {
    pub category: Category,
    pub row: usize,
    /// Byte column where the span starts.
    pub col_start: usize,
    /// Byte column where the span ends; `None` extends to the end of the row.
    pub col_end: Option<usize>,
}
