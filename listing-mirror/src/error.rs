use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for mirror operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while translating descriptors into declarations.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Listing(#[from] listing_core::Error),

    #[error("failed to parse type descriptors")]
    #[diagnostic(code(mirror::json))]
    Json(#[from] serde_json::Error),

    #[error("invalid type syntax, expected {expected}")]
    #[diagnostic(code(mirror::type_syntax))]
    TypeSyntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
        expected: String,
    },

    #[error("'{ty}' cannot be used as {context}")]
    #[diagnostic(code(mirror::unexpected_type))]
    UnexpectedType { ty: String, context: String },

    #[error("'{name}' belongs to package '{found}', expected '{expected}'")]
    #[diagnostic(
        code(mirror::package_mismatch),
        help("mirror the types of each package into a unit of their own")
    )]
    PackageMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("the enclosing type of '{name}' is not among the descriptors")]
    #[diagnostic(code(mirror::missing_enclosing))]
    MissingEnclosing { name: String },

    #[error("no type descriptors to mirror")]
    #[diagnostic(code(mirror::empty))]
    Empty,
}

impl Error {
    /// Create a type syntax error pointing at `offset` in `text`.
    pub fn type_syntax(text: &str, offset: usize, expected: impl Into<String>) -> Self {
        let len = text[offset..].chars().next().map_or(0, char::len_utf8);
        Self::TypeSyntax {
            src: NamedSource::new("type", text.to_string()),
            span: (offset, len).into(),
            expected: expected.into(),
        }
    }

    /// Create an unexpected type error.
    pub fn unexpected_type(ty: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnexpectedType {
            ty: ty.into(),
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_syntax_span() {
        let err = Error::type_syntax("List<", 5, "a type");
        assert_eq!(err.to_string(), "invalid type syntax, expected a type");
        let Error::TypeSyntax { span, .. } = err else {
            panic!("expected a type syntax error");
        };
        assert_eq!(span.offset(), 5);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_listing_error_is_transparent() {
        let err: Error = listing_core::Error::empty_name("a type name").into();
        assert_eq!(err.to_string(), listing_core::Error::empty_name("a type name").to_string());
    }
}
