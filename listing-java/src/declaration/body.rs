use listing_core::{Listing, Renderable};

/// An opaque block of pre-formatted source lines.
///
/// Lines are neither parsed nor validated; they are emitted at the
/// indentation of the enclosing braces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    lines: Vec<String>,
}

impl Body {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body from multi-line text.
    pub fn text(text: &str) -> Self {
        let mut body = Self::new();
        body.push_text(text);
        body
    }

    /// Append multi-line text.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.lines.extend(text.lines().map(str::to_string));
        self
    }

    /// Append a statement, terminated with `;`.
    pub fn push_statement(&mut self, statement: &str) -> &mut Self {
        self.lines.push(format!("{statement};"));
        self
    }

    /// The lines of this body.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if the body has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Renders the lines only, without braces.
impl Renderable for Body {
    fn render(&self, listing: &mut Listing<'_>) {
        for line in &self.lines {
            listing.push_line(line);
        }
    }
}

/// Render ` {`, the indented body and `}` on its own line.
pub(crate) fn render_braced(listing: &mut Listing<'_>, body: &Body) {
    listing
        .push_raw(" {")
        .push_newline()
        .push_indent()
        .emit(body)
        .push_dedent()
        .push_line("}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_statements_and_text() {
        let mut body = Body::text("// setup\n");
        body.push_statement("this.text = text").push_text("if (x) {\n  y();\n}");
        assert_eq!(
            body.lines(),
            ["// setup", "this.text = text;", "if (x) {", "  y();", "}"]
        );
    }

    #[test]
    fn test_braced() {
        let mut listing = Listing::default();
        listing.push_raw("void run()");
        render_braced(&mut listing, &Body::text("go();"));
        assert_eq!(listing.build(), "void run() {\n  go();\n}\n");

        let mut listing = Listing::default();
        listing.push_raw("void run()");
        render_braced(&mut listing, &Body::new());
        assert_eq!(listing.build(), "void run() {\n}\n");
    }
}
