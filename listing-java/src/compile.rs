//! Boundary types for handing rendered units to a Java compiler.
//!
//! No compiler ships with this crate. Implement [`Compiler`] on top of
//! whatever toolchain is at hand.

use std::{fmt, path::PathBuf};

use listing_core::Name;

/// Rendered text of a compilation unit, keyed by the qualified name of
/// its eponymous top-level type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: Name,
    text: String,
}

impl SourceFile {
    /// Wrap rendered `text` for the top-level type `name`.
    pub fn new(name: Name, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
        }
    }

    /// Name of the eponymous top-level type.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The rendered source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Conventional path relative to a source root: `abc/def/Xyz.java`.
    pub fn path(&self) -> PathBuf {
        let mut path: PathBuf = self.name.package().split('.').filter(|s| !s.is_empty()).collect();
        let top_level = &self.name.simple_names()[0];
        path.push(format!("{top_level}.java"));
        path
    }
}

/// Severity of a compiler diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A message reported by a compiler, positioned in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// 1-based line, if known.
    pub line: Option<u32>,
    /// 1-based column, if known.
    pub column: Option<u32>,
    pub severity: Severity,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "{line}:{column}: ")?,
            (Some(line), None) => write!(f, "{line}: ")?,
            _ => {}
        }
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Turns source files into loadable types.
pub trait Compiler {
    /// Handles to the compiled types, e.g. a map from name to class file.
    type Output;

    /// Compile `sources`, running the named annotation processors.
    fn compile(
        &self,
        sources: &[SourceFile],
        processors: &[String],
    ) -> Result<Self::Output, Vec<Diagnostic>>;
}
