//! The listing engine: an indentation-aware line buffer with name resolution.

use crate::{Config, Name, Spelling};

/// Decides how type names are spelled at use sites.
pub trait NameResolver {
    /// Choose the shortest unambiguous spelling for `name` at a position
    /// enclosed by `scope`.
    fn resolve(&self, name: &Name, scope: &Scope) -> Spelling;
}

/// One level of nesting around the position being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeFrame {
    /// The body of a type declaration.
    Declaration(Name),
    /// Type variables declared by a generic type, method or constructor.
    Variables(Vec<String>),
}

/// Type declaration bodies and type variables enclosing the current
/// position, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    frames: Vec<ScopeFrame>,
}

impl Scope {
    /// Create an empty scope, as at the top level of a unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enclose `self` in the body of the declaration called `name`.
    pub fn with_declaration(mut self, name: Name) -> Self {
        self.frames.push(ScopeFrame::Declaration(name));
        self
    }

    /// Enclose `self` in the reach of `variables`.
    pub fn with_variables<'v>(mut self, variables: impl IntoIterator<Item = &'v str>) -> Self {
        let variables = variables.into_iter().map(str::to_string).collect();
        self.frames.push(ScopeFrame::Variables(variables));
        self
    }

    /// All frames, outermost first.
    pub fn frames(&self) -> &[ScopeFrame] {
        &self.frames
    }

    /// Names of the enclosing type declarations, outermost first.
    pub fn declarations(&self) -> impl DoubleEndedIterator<Item = &Name> {
        self.frames.iter().filter_map(|frame| match frame {
            ScopeFrame::Declaration(name) => Some(name),
            ScopeFrame::Variables(_) => None,
        })
    }

    /// Check if `simple_name` denotes a type variable here.
    pub fn is_variable(&self, simple_name: &str) -> bool {
        self.frames.iter().any(|frame| match frame {
            ScopeFrame::Variables(variables) => variables.iter().any(|v| v == simple_name),
            ScopeFrame::Declaration(_) => false,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Trait for nodes that can render themselves into a [`Listing`].
pub trait Renderable {
    /// Append this node to the listing.
    fn render(&self, listing: &mut Listing<'_>);

    /// Render this node on its own, without name resolution.
    ///
    /// Every type name is spelled fully qualified.
    fn list(&self) -> String {
        let mut listing = Listing::default();
        self.render(&mut listing);
        listing.build()
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn render(&self, listing: &mut Listing<'_>) {
        (*self).render(listing)
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn render(&self, listing: &mut Listing<'_>) {
        self.as_ref().render(listing)
    }
}

/// Line-oriented text buffer used to render declaration trees.
///
/// Text is appended to the current line, which receives the indentation of
/// the current depth when its first text arrives. Finishing a line trims its
/// trailing whitespace, so lines holding only indentation end up empty.
///
/// # Example
///
/// ```
/// use listing_core::Listing;
///
/// let mut listing = Listing::default();
/// listing
///     .push_line("class A {")
///     .push_indent()
///     .push_line("int i;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(listing.build(), "class A {\n  int i;\n}\n");
/// ```
pub struct Listing<'a> {
    config: Config,
    resolver: Option<&'a dyn NameResolver>,
    scope: Scope,
    depth: usize,
    line: String,
    buffer: String,
}

impl<'a> Listing<'a> {
    /// Create a listing that spells every name fully qualified.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            resolver: None,
            scope: Scope::new(),
            depth: 0,
            line: String::new(),
            buffer: String::new(),
        }
    }

    /// Create a listing that consults `resolver` for every type name.
    pub fn resolving(config: Config, resolver: &'a dyn NameResolver) -> Self {
        Self {
            resolver: Some(resolver),
            ..Self::new(config)
        }
    }

    /// The layout configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Append raw text to the current line.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self;
        }
        if self.line.is_empty() {
            self.config.indent.write(&mut self.line, self.depth);
        }
        self.line.push_str(s);
        self
    }

    /// Append a single character to the current line.
    pub fn push_char(&mut self, c: char) -> &mut Self {
        let mut buf = [0u8; 4];
        self.push_raw(c.encode_utf8(&mut buf))
    }

    /// Finish the current line.
    pub fn push_newline(&mut self) -> &mut Self {
        self.buffer.push_str(self.line.trim_end());
        self.buffer.push_str(&self.config.line_separator);
        self.line.clear();
        self
    }

    /// Append text and finish the line.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.push_raw(s).push_newline()
    }

    /// Emit an empty line, finishing a pending one first.
    pub fn push_blank(&mut self) -> &mut Self {
        if !self.line.is_empty() {
            self.push_newline();
        }
        self.push_newline()
    }

    /// Append a multi-line text block, one indented line per text line.
    pub fn push_block(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.push_line(line);
        }
        self
    }

    /// Increase indentation depth.
    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease indentation depth.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Emit a renderable node.
    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) -> &mut Self {
        node.render(self);
        self
    }

    /// Emit nodes separated by `separator`.
    pub fn emit_joined<'n, R, I>(&mut self, nodes: I, separator: &str) -> &mut Self
    where
        R: Renderable + 'n,
        I: IntoIterator<Item = &'n R>,
    {
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                self.push_raw(separator);
            }
            node.render(self);
        }
        self
    }

    /// Decide how `name` is spelled here.
    pub fn spelling(&self, name: &Name) -> Spelling {
        match self.resolver {
            Some(resolver) => resolver.resolve(name, &self.scope),
            None => Spelling::Qualified,
        }
    }

    /// Append `name`, shortened as far as the resolver allows.
    pub fn push_name(&mut self, name: &Name) -> &mut Self {
        let (qualifier, simple) = name.spell(self.spelling(name));
        self.push_raw(&qualifier).push_raw(simple)
    }

    /// Enter the body of the type declaration called `name`.
    pub fn enter_scope(&mut self, name: Name) -> &mut Self {
        self.scope.frames.push(ScopeFrame::Declaration(name));
        self
    }

    /// Leave the innermost type declaration body.
    pub fn leave_scope(&mut self) -> &mut Self {
        self.scope.frames.pop();
        self
    }

    /// Bring type variables into scope, hiding types of the same name.
    pub fn enter_variables<'v>(
        &mut self,
        variables: impl IntoIterator<Item = &'v str>,
    ) -> &mut Self {
        let variables = variables.into_iter().map(str::to_string).collect();
        self.scope.frames.push(ScopeFrame::Variables(variables));
        self
    }

    /// Drop the innermost type variables again.
    pub fn leave_variables(&mut self) -> &mut Self {
        self.scope.frames.pop();
        self
    }

    /// Declarations and type variables enclosing the current position.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Get the current indentation depth.
    pub fn current_indent(&self) -> usize {
        self.depth
    }

    /// Check if nothing has been appended to the current line.
    pub fn is_line_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Consume the listing and return the text. A pending line is appended
    /// without a line separator.
    pub fn build(mut self) -> String {
        self.buffer.push_str(self.line.trim_end());
        self.buffer
    }
}

impl Default for Listing<'_> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Indent;

    struct Word(&'static str);

    impl Renderable for Word {
        fn render(&self, listing: &mut Listing<'_>) {
            listing.push_raw(self.0);
        }
    }

    struct ShortEverything;

    impl NameResolver for ShortEverything {
        fn resolve(&self, _name: &Name, _scope: &Scope) -> Spelling {
            Spelling::Simple { skip: 0 }
        }
    }

    #[test]
    fn test_indentation() {
        let mut listing = Listing::new(Config {
            indent: Indent::FOUR,
            ..Config::default()
        });
        listing
            .push_line("void run() {")
            .push_indent()
            .push_line("go();")
            .push_dedent()
            .push_line("}");
        assert_eq!(listing.build(), "void run() {\n    go();\n}\n");
    }

    #[test]
    fn test_newline_trims_trailing_whitespace() {
        let mut listing = Listing::default();
        listing.push_indent().push_raw("a   ").push_newline();
        listing.push_raw("   ").push_newline();
        assert_eq!(listing.build(), "  a\n\n");
    }

    #[test]
    fn test_blank_flushes_pending_line() {
        let mut listing = Listing::default();
        listing.push_raw("a").push_blank().push_raw("b");
        assert_eq!(listing.build(), "a\n\nb");
    }

    #[test]
    fn test_block_keeps_relative_indentation() {
        let mut listing = Listing::default();
        listing.push_indent().push_block("if (x) {\n  y();\n}\n");
        assert_eq!(listing.build(), "  if (x) {\n    y();\n  }\n");
    }

    #[test]
    fn test_emit_joined() {
        let words = [Word("a"), Word("b"), Word("c")];
        let mut listing = Listing::default();
        listing.emit_joined(&words, ", ");
        assert_eq!(listing.build(), "a, b, c");

        let none: [Word; 0] = [];
        let mut listing = Listing::default();
        listing.emit_joined(&none, ", ");
        assert_eq!(listing.build(), "");
    }

    #[test]
    fn test_push_name() {
        let name = Name::parse("java.util.Map.Entry").unwrap();

        let mut listing = Listing::default();
        listing.push_name(&name);
        assert_eq!(listing.build(), "java.util.Map.Entry");

        let resolver = ShortEverything;
        let mut listing = Listing::resolving(Config::default(), &resolver);
        listing.push_name(&name);
        assert_eq!(listing.build(), "Map.Entry");
    }

    #[test]
    fn test_line_separator() {
        let mut listing = Listing::new(Config {
            line_separator: "\r\n".to_string(),
            ..Config::default()
        });
        listing.push_line("a").push_line("b");
        assert_eq!(listing.build(), "a\r\nb\r\n");
    }

    #[test]
    fn test_scope_frames() {
        let outer = Name::parse("abc.Outer").unwrap();
        let mut listing = Listing::default();
        listing
            .enter_variables(["T"])
            .enter_scope(outer.clone())
            .enter_variables(["U", "V"]);
        assert!(listing.scope().is_variable("V"));
        assert!(listing.scope().is_variable("T"));
        assert_eq!(listing.scope().declarations().collect::<Vec<_>>(), [&outer]);

        listing.leave_variables().leave_scope();
        assert!(!listing.scope().is_variable("U"));
        assert_eq!(listing.scope().declarations().count(), 0);
        listing.leave_variables();
        assert!(listing.scope().is_empty());
    }

    #[test]
    fn test_list_without_resolver() {
        assert_eq!(Word("x").list(), "x");
    }
}
