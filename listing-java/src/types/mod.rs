//! Type-uses: how a type is referenced at a particular position.
//!
//! - [`PrimitiveType`] - `int`, `boolean`, ..., and `void` for method results
//! - [`ArrayType`] - component type plus dimensions
//! - [`ClassType`] - class or interface, optionally parameterized
//! - [`TypeVariable`] - reference to a type parameter
//! - [`WildcardType`] - `?`, `? extends T`, `? super T`

mod array;
mod class;
mod primitive;
mod variable;
mod wildcard;

pub use array::ArrayType;
pub use class::ClassType;
use listing_core::{Error, Listing, Renderable, Result};
pub use primitive::PrimitiveType;
pub use variable::TypeVariable;
pub use wildcard::WildcardType;

use crate::{Annotation, ElementType};

/// A type-use.
#[derive(Debug, Clone, PartialEq)]
pub enum JavaType {
    Primitive(PrimitiveType),
    Array(ArrayType),
    Class(ClassType),
    Variable(TypeVariable),
    Wildcard(WildcardType),
}

impl JavaType {
    /// `void`, only meaningful as a method result.
    pub fn void() -> Self {
        Self::Primitive(PrimitiveType::Void)
    }

    /// `boolean`.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    /// `int`.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// `long`.
    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    /// `double`.
    pub fn double() -> Self {
        Self::Primitive(PrimitiveType::Double)
    }

    /// A raw class type parsed from a canonical name.
    pub fn class(canonical: &str) -> Result<Self> {
        Ok(Self::Class(ClassType::of(canonical)?))
    }

    /// A reference to the type parameter `name`.
    pub fn variable(name: &str) -> Result<Self> {
        Ok(Self::Variable(TypeVariable::new(name)?))
    }

    /// The unbounded wildcard `?`.
    pub fn wildcard() -> Self {
        Self::Wildcard(WildcardType::new())
    }

    /// Wrap this type into an array with `dimensions` dimensions.
    pub fn array_of(self, dimensions: usize) -> Result<Self> {
        Ok(Self::Array(ArrayType::new(self, dimensions)?))
    }

    /// Annotations on this use; always empty for primitives and type variables.
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Self::Primitive(_) | Self::Variable(_) => &[],
            Self::Array(array) => &array.annotations,
            Self::Class(class) => &class.annotations,
            Self::Wildcard(wildcard) => &wildcard.annotations,
        }
    }

    /// Every type-use is annotated at [`ElementType::TypeUse`].
    pub fn annotation_target(&self) -> ElementType {
        ElementType::TypeUse
    }

    /// Check if this is `void`.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Void))
    }

    /// Check if this is a primitive type, including `void`.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Check if this is `java.lang.Object`.
    pub fn is_java_lang_object(&self) -> bool {
        matches!(self, Self::Class(class) if class.is_java_lang_object())
    }

    /// Get the class type, if this is one.
    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Get the array type, if this is one.
    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Fail unless this type may appear as a type argument or bound.
    pub(crate) fn check_reference(&self) -> Result<()> {
        match self {
            Self::Primitive(primitive) => Err(Error::PrimitiveTypeArgument {
                primitive: primitive.keyword().to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Fail if this type is a wildcard.
    pub(crate) fn check_not_wildcard(&self, context: &str) -> Result<()> {
        if matches!(self, Self::Wildcard(_)) {
            Err(Error::MisplacedWildcard {
                context: context.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Fail if this type is `void`.
    pub(crate) fn check_not_void(&self, context: &str) -> Result<()> {
        if self.is_void() {
            Err(Error::VoidComponent {
                context: context.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl Renderable for JavaType {
    fn render(&self, listing: &mut Listing<'_>) {
        match self {
            Self::Primitive(primitive) => listing.emit(primitive),
            Self::Array(array) => listing.emit(array),
            Self::Class(class) => listing.emit(class),
            Self::Variable(variable) => listing.emit(variable),
            Self::Wildcard(wildcard) => listing.emit(wildcard),
        };
    }
}

impl From<PrimitiveType> for JavaType {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<ArrayType> for JavaType {
    fn from(array: ArrayType) -> Self {
        Self::Array(array)
    }
}

impl From<ClassType> for JavaType {
    fn from(class: ClassType) -> Self {
        Self::Class(class)
    }
}

impl From<TypeVariable> for JavaType {
    fn from(variable: TypeVariable) -> Self {
        Self::Variable(variable)
    }
}

impl From<WildcardType> for JavaType {
    fn from(wildcard: WildcardType) -> Self {
        Self::Wildcard(wildcard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(JavaType::void().is_void());
        assert!(JavaType::int().is_primitive());
        assert!(JavaType::class("java.lang.Object").unwrap().is_java_lang_object());
        assert!(JavaType::variable("T").is_ok());
        assert!(JavaType::variable("1T").is_err());
    }

    #[test]
    fn test_annotations_only_on_annotatable_variants() {
        let tag = Annotation::of("Tag").unwrap();
        let class = ClassType::of("java.lang.String").unwrap().with_annotation(tag.clone());
        assert_eq!(JavaType::from(class).annotations().len(), 1);
        assert!(JavaType::int().annotations().is_empty());
        assert_eq!(JavaType::int().annotation_target(), ElementType::TypeUse);
    }

    #[test]
    fn test_check_reference() {
        assert!(JavaType::int().check_reference().is_err());
        assert!(JavaType::wildcard().check_reference().is_ok());
        assert!(JavaType::void().check_not_void("a field type").is_err());
        assert!(JavaType::wildcard().check_not_wildcard("a bound").is_err());
        assert!(JavaType::int().check_not_wildcard("a bound").is_ok());
    }
}
