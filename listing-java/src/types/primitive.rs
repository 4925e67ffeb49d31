use std::fmt;

use listing_core::{Listing, Renderable};

/// Primitive types, plus `void` for method results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
}

impl PrimitiveType {
    /// Get the keyword of this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Void => "void",
        }
    }

    /// Look a primitive up by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [
            Self::Boolean,
            Self::Byte,
            Self::Char,
            Self::Double,
            Self::Float,
            Self::Int,
            Self::Long,
            Self::Short,
            Self::Void,
        ]
        .into_iter()
        .find(|p| p.keyword() == keyword)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Renderable for PrimitiveType {
    fn render(&self, listing: &mut Listing<'_>) {
        listing.push_raw(self.keyword());
    }
}
