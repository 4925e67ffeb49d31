//! Serializable descriptors of compiled types.
//!
//! Type references are written in source syntax, for example
//! `java.util.List<? extends T>[]`. Nested types may use either the
//! canonical (`java.util.Map.Entry`) or the binary (`java.util.Map$Entry`)
//! spelling; the descriptor's own `name` is always a binary name.

use serde::{Deserialize, Serialize};

/// Kind of a described type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Modifiers as access flags or as keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModifierSpec {
    /// Bits in the `java.lang.reflect.Modifier` layout.
    Flags(u32),
    /// Keywords like `"public"`.
    Keywords(Vec<String>),
}

impl Default for ModifierSpec {
    fn default() -> Self {
        Self::Keywords(Vec::new())
    }
}

/// A compiled type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Binary name, e.g. `abc.Outer$Inner`.
    pub name: String,
    #[serde(default)]
    pub kind: Kind,
    #[serde(default)]
    pub modifiers: ModifierSpec,
    /// Canonical names of marker annotations.
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDescriptor>,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub constants: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameterDescriptor {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub modifiers: ModifierSpec,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Variable arity; the type must be an array.
    #[serde(default)]
    pub variable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    #[serde(default)]
    pub modifiers: ModifierSpec,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub throws: Vec<String>,
    /// Pre-formatted body text.
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default = "void")]
    pub returns: String,
    #[serde(default)]
    pub modifiers: ModifierSpec,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDescriptor>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub throws: Vec<String>,
    /// Pre-formatted body text.
    #[serde(default)]
    pub body: Option<String>,
}

fn void() -> String {
    "void".to_string()
}

/// Parse a JSON array of type descriptors.
pub fn from_json(text: &str) -> crate::Result<Vec<TypeDescriptor>> {
    Ok(serde_json::from_str(text)?)
}
