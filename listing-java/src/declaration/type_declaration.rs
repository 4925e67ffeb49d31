use std::fmt;

use listing_core::{Error, Listing, Name, Renderable, Result, naming::check_identifier};

use super::{
    Body, ConstructorDeclaration, FieldDeclaration, MethodDeclaration, TypeParameter,
    type_parameter::render_type_parameters,
};
use crate::{
    Annotated, Annotation, ClassType, ElementType, JavaType, Modified, Modifiers,
    element::render_annotations,
};

/// The four kinds of type declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    /// The declaring keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "@interface",
        }
    }

    /// The annotation target of a declaration of this kind.
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Annotation => ElementType::AnnotationType,
            _ => ElementType::Type,
        }
    }

    fn unsupported(self, what: &str) -> Error {
        Error::Unsupported {
            kind: self.to_string(),
            what: what.to_string(),
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Annotation => "annotation type",
            kind => kind.keyword(),
        })
    }
}

/// A member of a type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
}

impl Member {
    /// Name of the type declaration this member belongs to.
    pub fn enclosing_type(&self) -> Option<&Name> {
        match self {
            Self::Field(field) => field.enclosing_type(),
            Self::Method(method) => method.enclosing_type(),
            Self::Constructor(constructor) => constructor.enclosing_type(),
        }
    }

    /// Check if a blank line goes before this member.
    fn is_separated(&self) -> bool {
        !matches!(self, Self::Field(_))
    }
}

impl Renderable for Member {
    fn render(&self, listing: &mut Listing<'_>) {
        match self {
            Self::Field(field) => field.render(listing),
            Self::Method(method) => method.render(listing),
            Self::Constructor(constructor) => constructor.render(listing),
        }
    }
}

/// An enum constant with optional constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    name: String,
    arguments: Option<String>,
}

impl EnumConstant {
    /// Create a constant without arguments or body.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_identifier(&name, "an enum constant")?;
        Ok(Self {
            name,
            arguments: None,
        })
    }

    /// Pass pre-formatted constructor arguments: `RED("#f00")`.
    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> Option<&str> {
        self.arguments.as_deref()
    }
}

impl Renderable for EnumConstant {
    fn render(&self, listing: &mut Listing<'_>) {
        listing.push_raw(&self.name);
        if let Some(arguments) = &self.arguments {
            listing.push_char('(').push_raw(arguments).push_char(')');
        }
    }
}

/// A class, interface, enum or annotation type declaration.
///
/// Members and nested types are created through this declaration and
/// owned by it. Every member learns the name of its enclosing declaration
/// when it is added.
///
/// # Example
///
/// ```
/// use listing_core::{Name, Renderable};
/// use listing_java::{JavaType, Modified, Modifier, TypeDeclaration, TypeKind};
///
/// let name = Name::of("abc", "Counter").unwrap();
/// let mut class = TypeDeclaration::new(TypeKind::Class, name);
/// class.add_modifier(Modifier::Public);
/// class.add_field(JavaType::int(), "count").unwrap();
/// assert_eq!(class.list(), "public class Counter {\n  int count;\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    kind: TypeKind,
    name: Name,
    annotations: Vec<Annotation>,
    modifiers: Modifiers,
    type_parameters: Vec<TypeParameter>,
    superclass: Option<ClassType>,
    interfaces: Vec<ClassType>,
    constants: Vec<EnumConstant>,
    body: Option<Body>,
    members: Vec<Member>,
    nested: Vec<TypeDeclaration>,
}

impl TypeDeclaration {
    /// Create a detached declaration called `name`.
    pub fn new(kind: TypeKind, name: Name) -> Self {
        Self {
            kind,
            name,
            annotations: Vec::new(),
            modifiers: Modifiers::new(),
            type_parameters: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            constants: Vec::new(),
            body: None,
            members: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Declare a nested class.
    pub fn declare_class(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Class, name)
    }

    /// Declare a nested interface.
    pub fn declare_interface(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Interface, name)
    }

    /// Declare a nested enum.
    pub fn declare_enum(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Enum, name)
    }

    /// Declare a nested annotation type.
    pub fn declare_annotation(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Annotation, name)
    }

    fn declare(&mut self, kind: TypeKind, name: &str) -> Result<&mut TypeDeclaration> {
        let name = self.name.nested(name)?;
        self.nested.push(TypeDeclaration::new(kind, name));
        let index = self.nested.len() - 1;
        Ok(&mut self.nested[index])
    }

    /// Add a type parameter. Only classes and interfaces are generic.
    pub fn add_type_parameter(&mut self, parameter: TypeParameter) -> Result<&mut Self> {
        if matches!(self.kind, TypeKind::Enum | TypeKind::Annotation) {
            return Err(self.kind.unsupported("type parameters"));
        }
        self.type_parameters.push(parameter);
        Ok(self)
    }

    /// Set the superclass. Only classes have one; `java.lang.Object` is
    /// implied and never rendered.
    pub fn set_superclass(&mut self, superclass: ClassType) -> Result<&mut Self> {
        if self.kind != TypeKind::Class {
            return Err(self.kind.unsupported("a superclass"));
        }
        self.superclass = Some(superclass).filter(|s| !s.is_java_lang_object());
        Ok(self)
    }

    /// Add an implemented or, for interfaces, extended interface.
    pub fn add_interface(&mut self, interface: ClassType) -> Result<&mut Self> {
        if self.kind == TypeKind::Annotation {
            return Err(self.kind.unsupported("superinterfaces"));
        }
        self.interfaces.push(interface);
        Ok(self)
    }

    /// Add an enum constant. Only enums have constants.
    pub fn add_enum_constant(&mut self, constant: EnumConstant) -> Result<&mut Self> {
        if self.kind != TypeKind::Enum {
            return Err(self.kind.unsupported("enum constants"));
        }
        self.constants.push(constant);
        Ok(self)
    }

    /// Set opaque body text, rendered after enum constants and before
    /// members.
    pub fn set_body(&mut self, text: &str) -> &mut Self {
        self.body = Some(Body::text(text));
        self
    }

    /// Add a field of type `ty` called `name`.
    pub fn add_field(
        &mut self,
        ty: impl Into<JavaType>,
        name: &str,
    ) -> Result<&mut FieldDeclaration> {
        Ok(self.add_field_declaration(FieldDeclaration::new(ty, name)?))
    }

    /// Add a detached field, making this declaration its enclosing type.
    pub fn add_field_declaration(&mut self, mut field: FieldDeclaration) -> &mut FieldDeclaration {
        field.enclosing = Some(self.name.clone());
        self.members.push(Member::Field(field));
        match self.members.last_mut() {
            Some(Member::Field(field)) => field,
            _ => unreachable!("a field was just pushed"),
        }
    }

    /// Add a method returning `return_type` called `name`.
    pub fn add_method(
        &mut self,
        return_type: impl Into<JavaType>,
        name: &str,
    ) -> Result<&mut MethodDeclaration> {
        Ok(self.add_method_declaration(MethodDeclaration::new(return_type, name)?))
    }

    /// Add a detached method, making this declaration its enclosing type.
    pub fn add_method_declaration(
        &mut self,
        mut method: MethodDeclaration,
    ) -> &mut MethodDeclaration {
        method.enclosing = Some(self.name.clone());
        method.enclosing_kind = Some(self.kind);
        self.members.push(Member::Method(method));
        match self.members.last_mut() {
            Some(Member::Method(method)) => method,
            _ => unreachable!("a method was just pushed"),
        }
    }

    /// Add a constructor. Interfaces and annotation types have none.
    pub fn add_constructor(&mut self) -> Result<&mut ConstructorDeclaration> {
        if matches!(self.kind, TypeKind::Interface | TypeKind::Annotation) {
            return Err(self.kind.unsupported("constructors"));
        }
        let constructor = ConstructorDeclaration::new(self.name.clone());
        self.members.push(Member::Constructor(constructor));
        match self.members.last_mut() {
            Some(Member::Constructor(constructor)) => Ok(constructor),
            _ => unreachable!("a constructor was just pushed"),
        }
    }

    /// The kind of type declared.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The qualified name, including enclosing types.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The type parameters.
    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    /// The `extends` clause of a class.
    pub fn superclass(&self) -> Option<&ClassType> {
        self.superclass.as_ref()
    }

    /// Implemented or, for interfaces, extended interfaces.
    pub fn interfaces(&self) -> &[ClassType] {
        &self.interfaces
    }

    /// Enum constants in declaration order.
    pub fn constants(&self) -> &[EnumConstant] {
        &self.constants
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Directly nested type declarations in insertion order.
    pub fn nested(&self) -> &[TypeDeclaration] {
        &self.nested
    }

    /// Find this declaration or a transitively nested one by name.
    pub fn find(&self, name: &Name) -> Option<&TypeDeclaration> {
        if &self.name == name {
            return Some(self);
        }
        self.nested.iter().find_map(|nested| nested.find(name))
    }

    /// Find this declaration or a transitively nested one by name, mutably.
    pub fn find_mut(&mut self, name: &Name) -> Option<&mut TypeDeclaration> {
        if &self.name == name {
            return Some(self);
        }
        self.nested.iter_mut().find_map(|nested| nested.find_mut(name))
    }

    fn render_header(&self, listing: &mut Listing<'_>) {
        render_annotations(listing, &self.annotations, self.annotation_target());
        listing
            .emit(&self.modifiers)
            .push_raw(self.kind.keyword())
            .push_char(' ')
            .push_raw(self.name.simple_name())
            .enter_variables(self.type_parameters.iter().map(TypeParameter::name));
        render_type_parameters(listing, &self.type_parameters);
        if let Some(superclass) = &self.superclass {
            listing.push_raw(" extends ").emit(superclass);
        }
        if !self.interfaces.is_empty() {
            let keyword = match self.kind {
                TypeKind::Interface => " extends ",
                _ => " implements ",
            };
            listing.push_raw(keyword).emit_joined(&self.interfaces, ", ");
        }
    }

    fn render_body(&self, listing: &mut Listing<'_>) {
        let separate = listing.config().blank_line_between_members;
        let mut first = true;
        let more = self.body.is_some() || !self.members.is_empty() || !self.nested.is_empty();
        // an enum body declaring anything besides constants needs the `;`
        if !self.constants.is_empty() || (self.kind == TypeKind::Enum && more) {
            listing.emit_joined(&self.constants, ", ");
            if more {
                listing.push_char(';');
            }
            listing.push_newline();
            first = false;
        }
        if let Some(body) = &self.body {
            listing.emit(body);
            first = first && body.is_empty();
        }
        for member in &self.members {
            if separate && !first && member.is_separated() {
                listing.push_blank();
            }
            listing.emit(member);
            first = false;
        }
        for nested in &self.nested {
            if separate && !first {
                listing.push_blank();
            }
            listing.emit(nested);
            first = false;
        }
    }
}

impl Annotated for TypeDeclaration {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        self.kind.element_type()
    }
}

impl Modified for TypeDeclaration {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }
}

impl Renderable for TypeDeclaration {
    fn render(&self, listing: &mut Listing<'_>) {
        self.render_header(listing);
        listing
            .push_raw(" {")
            .push_newline()
            .enter_scope(self.name.clone())
            .push_indent();
        self.render_body(listing);
        listing
            .push_dedent()
            .leave_scope()
            .leave_variables()
            .push_line("}");
    }
}
