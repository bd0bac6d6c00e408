/// Identifier assigned to a buffer by the editor host.
pub type DocId = u64;

/// An editable text buffer: ordered lines plus their canonical joined text.
///
/// `content()` is always exactly the lines joined with one `'\n'` between
/// adjacent lines and none trailing. Every offset computed elsewhere in the
/// crate depends on that being true, which is why the fields are private and
/// the joined text is built once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    content: String,
}

impl Document {
    pub fn new(lines: Vec<String>) -> Self {
        let content = lines.join("\n");
        Self { lines, content }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Byte length of the joined text.
    pub fn end_byte(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn content_is_lines_joined_with_separator() {
        let d = doc(&["const x = 1;", "", "x;"]);
        assert_eq!(d.content(), "const x = 1;\n\nx;");
        assert_eq!(d.line_count(), 3);
    }

    #[test]
    fn empty_document_has_empty_content() {
        let d = doc(&[]);
        assert_eq!(d.content(), "");
        assert_eq!(d.line_count(), 0);
        assert_eq!(d.end_byte(), 0);
    }

    #[test]
    fn single_line_has_no_separator() {
        let d = doc(&["hello"]);
        assert_eq!(d.content(), "hello");
        assert_eq!(d.end_byte(), 5);
    }
}
