use miette::Diagnostic;
use thiserror::Error;

/// Result type for listing construction and configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction and configuration errors.
///
/// Every variant is raised synchronously at the builder call that would
/// have produced an invalid tree. Rendering itself never fails.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{name}' is not a legal identifier for {context}")]
    #[diagnostic(
        code(listing::invalid_identifier),
        help("identifiers start with a letter, '_' or '$' and continue with letters or digits")
    )]
    InvalidIdentifier { name: String, context: String },

    #[error("'{name}' is a reserved keyword and cannot be used as {context}")]
    #[diagnostic(code(listing::reserved_keyword))]
    ReservedKeyword { name: String, context: String },

    #[error("{context} must not be empty")]
    #[diagnostic(code(listing::empty_name))]
    EmptyName { context: String },

    #[error("'{name}' is not a legal package name")]
    #[diagnostic(
        code(listing::invalid_package),
        help("package names are dot-separated identifiers, e.g. 'com.example'")
    )]
    InvalidPackage { name: String },

    #[error("unknown modifier '{name}'")]
    #[diagnostic(code(listing::unknown_modifier))]
    UnknownModifier { name: String },

    #[error("simple name '{simple_name}' is already imported as '{existing}'")]
    #[diagnostic(
        code(listing::duplicate_import),
        help("refer to '{requested}' by its qualified name instead of importing it")
    )]
    DuplicateImport {
        simple_name: String,
        existing: String,
        requested: String,
    },

    #[error("parameter '{parameter}' of '{executable}' follows the variable arity parameter")]
    #[diagnostic(
        code(listing::variable_arity_not_last),
        help("a variable arity parameter must be the last parameter")
    )]
    VariableArityNotLast {
        executable: String,
        parameter: String,
    },

    #[error("'{executable}' already declares the variable arity parameter '{existing}'")]
    #[diagnostic(code(listing::duplicate_variable_arity))]
    DuplicateVariableArity {
        executable: String,
        existing: String,
    },

    #[error("variable arity parameter '{parameter}' must have an array type")]
    #[diagnostic(code(listing::variable_arity_not_array))]
    VariableArityNotArray { parameter: String },

    #[error("primitive type '{primitive}' cannot be used as a type argument")]
    #[diagnostic(
        code(listing::primitive_type_argument),
        help("use the boxed type instead, e.g. 'java.lang.Integer' for 'int'")
    )]
    PrimitiveTypeArgument { primitive: String },

    #[error("'void' cannot be used as {context}")]
    #[diagnostic(code(listing::void_component))]
    VoidComponent { context: String },

    #[error("a wildcard cannot be used as {context}")]
    #[diagnostic(
        code(listing::misplaced_wildcard),
        help("wildcards are only allowed as type arguments")
    )]
    MisplacedWildcard { context: String },

    #[error("an array type needs at least one dimension")]
    #[diagnostic(code(listing::zero_dimensions))]
    ZeroDimensions,

    #[error("{kind} declarations cannot have {what}")]
    #[diagnostic(code(listing::unsupported))]
    Unsupported { kind: String, what: String },

    #[error("failed to parse listing configuration")]
    #[diagnostic(code(listing::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            context: context.into(),
        }
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::ReservedKeyword {
            name: name.into(),
            context: context.into(),
        }
    }

    /// Create an empty name error.
    pub fn empty_name(context: impl Into<String>) -> Self {
        Self::EmptyName {
            context: context.into(),
        }
    }
}
