use listing_core::{Listing, Name, Renderable, Result};

use super::JavaType;
use crate::{Annotated, Annotation, ElementType};

/// A class or interface type, optionally parameterized.
///
/// Type arguments and annotations belong to the innermost simple name.
/// When the name is rendered qualified, annotations sit between the
/// qualifier and the simple name: `java.lang.@Tag String`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    name: Name,
    type_arguments: Vec<JavaType>,
    diamond: bool,
    pub(super) annotations: Vec<Annotation>,
}

impl ClassType {
    /// Create a raw class type.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            type_arguments: Vec::new(),
            diamond: false,
            annotations: Vec::new(),
        }
    }

    /// Create a raw class type from a canonical name such as `java.util.List`.
    pub fn of(canonical: &str) -> Result<Self> {
        Ok(Self::new(Name::parse(canonical)?))
    }

    /// Create a parameterized type, e.g. `java.util.List<java.lang.String>`.
    pub fn parameterized(
        canonical: &str,
        arguments: impl IntoIterator<Item = JavaType>,
    ) -> Result<Self> {
        Self::of(canonical)?.with_type_arguments(arguments)
    }

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::new(Name::java_lang_object())
    }

    /// Append type arguments. Primitive types are rejected.
    pub fn with_type_arguments(
        mut self,
        arguments: impl IntoIterator<Item = JavaType>,
    ) -> Result<Self> {
        for argument in arguments {
            self.add_type_argument(argument)?;
        }
        Ok(self)
    }

    /// Append a type argument. Primitive types are rejected.
    pub fn add_type_argument(&mut self, argument: JavaType) -> Result<&mut Self> {
        argument.check_reference()?;
        self.type_arguments.push(argument);
        Ok(self)
    }

    /// Render present type arguments as the diamond `<>`.
    pub fn diamond(mut self) -> Self {
        self.diamond = true;
        self
    }

    /// Attach a type-use annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The qualified name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Type arguments of the innermost simple name.
    pub fn type_arguments(&self) -> &[JavaType] {
        &self.type_arguments
    }

    /// Check if the diamond form was requested.
    pub fn is_diamond(&self) -> bool {
        self.diamond
    }

    /// The type enclosing this one, without type arguments or annotations.
    pub fn enclosing(&self) -> Option<Self> {
        self.name.enclosing().map(Self::new)
    }

    /// Check if this is `java.lang.Object`.
    pub fn is_java_lang_object(&self) -> bool {
        self.name.is_java_lang_object()
    }
}

impl Annotated for ClassType {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        ElementType::TypeUse
    }
}

impl Renderable for ClassType {
    fn render(&self, listing: &mut Listing<'_>) {
        let (qualifier, simple) = self.name.spell(listing.spelling(&self.name));
        listing.push_raw(&qualifier);
        for annotation in &self.annotations {
            listing.emit(annotation).push_char(' ');
        }
        listing.push_raw(simple);
        if self.type_arguments.is_empty() {
            return;
        }
        if self.diamond {
            listing.push_raw("<>");
        } else {
            listing
                .push_char('<')
                .emit_joined(&self.type_arguments, ", ")
                .push_char('>');
        }
    }
}

impl From<Name> for ClassType {
    fn from(name: Name) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn string() -> JavaType {
        JavaType::class("java.lang.String").unwrap()
    }

    #[test]
    fn test_raw() {
        let list = ClassType::of("java.util.List").unwrap();
        assert_eq!(list.list(), "java.util.List");
        assert_eq!(ClassType::of("Unnamed").unwrap().list(), "Unnamed");
    }

    #[test]
    fn test_parameterized() {
        let map =
            ClassType::parameterized("java.util.Map", [string(), JavaType::wildcard()]).unwrap();
        assert_eq!(map.list(), "java.util.Map<java.lang.String, ?>");
    }

    #[test]
    fn test_nested() {
        let entry = ClassType::parameterized("java.util.Map.Entry", [string(), string()]).unwrap();
        assert_eq!(
            entry.list(),
            "java.util.Map.Entry<java.lang.String, java.lang.String>"
        );
        assert_eq!(entry.enclosing().unwrap().list(), "java.util.Map");
    }

    #[test]
    fn test_diamond() {
        let list = ClassType::parameterized("java.util.ArrayList", [string()])
            .unwrap()
            .diamond();
        assert_eq!(list.list(), "java.util.ArrayList<>");

        let raw = ClassType::of("java.util.ArrayList").unwrap().diamond();
        assert_eq!(raw.list(), "java.util.ArrayList");
    }

    #[test]
    fn test_annotated_qualified() {
        let tag = Annotation::of("Tag").unwrap();
        let string = ClassType::of("java.lang.String").unwrap().with_annotation(tag);
        assert_eq!(string.list(), "java.lang.@Tag String");
    }

    #[test]
    fn test_rejects_primitive_argument() {
        assert!(ClassType::parameterized("java.util.List", [JavaType::int()]).is_err());
    }
}
