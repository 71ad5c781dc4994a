//! Line-oriented builder for indented source text.

use super::Indent;

/// Fluent builder for indented code.
///
/// Every call consumes and returns the builder so emission reads top to
/// bottom. Blank lines never carry indentation.
///
/// # Example
///
/// ```
/// use kiln_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .block("export class User {", "}", |b| b.line("id: number;"))
///     .build();
///
/// assert_eq!(code, "export class User {\n  id: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Emit `s` at the current depth, followed by a newline.
    pub fn line(mut self, s: &str) -> Self {
        self.indent.write_to(&mut self.out, self.depth);
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.depth += 1;
        self
    }

    /// One level out; never below zero.
    pub fn dedent(mut self) -> Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// `header`, then `f`'s output one level deeper, then `close`.
    pub fn block(self, header: &str, close: &str, f: impl FnOnce(Self) -> Self) -> Self {
        f(self.line(header).indent()).dedent().line(close)
    }

    /// Fold `items` into the builder.
    pub fn each<T>(self, items: impl IntoIterator<Item = T>, f: impl Fn(Self, T) -> Self) -> Self {
        items.into_iter().fold(self, f)
    }

    pub fn build(self) -> String {
        self.out
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_indents_body() {
        let code = CodeBuilder::typescript()
            .block("export class Post {", "}", |b| b.line("title: string;"))
            .build();

        assert_eq!(code, "export class Post {\n  title: string;\n}\n");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let code = CodeBuilder::typescript()
            .indent()
            .line("a;")
            .blank()
            .line("b;")
            .build();

        assert_eq!(code, "  a;\n\n  b;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::typescript().dedent().dedent().line("x;").build();
        assert_eq!(code, "x;\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::typescript()
            .each(["id", "name"], |b, field| b.line(&format!("{field}: string;")))
            .build();

        assert_eq!(code, "id: string;\nname: string;\n");
    }

    #[test]
    fn test_tab_indent() {
        let code = CodeBuilder::new(Indent::Tab)
            .block("{", "}", |b| b.block("{", "}", |b| b.line("x;")))
            .build();

        assert_eq!(code, "{\n\t{\n\t\tx;\n\t}\n}\n");
    }
}
