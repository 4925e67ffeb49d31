//! Java identifier rules.

use crate::{Error, Result};

/// Keywords and literals that can never be used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Check if a name is a reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_alphanumeric()
}

/// Check if `s` is a legal identifier: well-formed and not reserved.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_ident_start(first) && chars.all(is_ident_continue) && !is_reserved(s)
}

/// Validate an identifier, naming `context` in the error.
pub fn check_identifier<'a>(name: &'a str, context: &str) -> Result<&'a str> {
    if name.is_empty() {
        return Err(Error::empty_name(context));
    }
    if is_reserved(name) {
        return Err(Error::reserved_keyword(name, context));
    }
    if !is_identifier(name) {
        return Err(Error::invalid_identifier(name, context));
    }
    Ok(name)
}

/// Validate a dot-separated package name. The empty string is the unnamed package.
pub fn check_package(name: &str) -> Result<&str> {
    if name.is_empty() || name.split('.').all(is_identifier) {
        Ok(name)
    } else {
        Err(Error::InvalidPackage {
            name: name.to_string(),
        })
    }
}
