use listing_core::{Listing, Name, Renderable, Result, naming::check_identifier};

use super::{
    Body, MethodParameter, TypeKind, TypeParameter,
    body::render_braced,
    parameter::push_parameter,
    type_parameter::render_type_parameters,
};
use crate::{
    Annotated, Annotation, ClassType, ElementType, JavaType, Modified, Modifier, Modifiers,
    Value, element::render_annotations,
};

/// A method declaration.
///
/// # Example
///
/// ```
/// use listing_core::Renderable;
/// use listing_java::{JavaType, MethodDeclaration, Modified, Modifier};
///
/// let mut method = MethodDeclaration::new(JavaType::void(), "run").unwrap();
/// method.add_modifier(Modifier::Public).add_statement("go()");
/// assert_eq!(method.list(), "public void run() {\n  go();\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    annotations: Vec<Annotation>,
    modifiers: Modifiers,
    type_parameters: Vec<TypeParameter>,
    return_type: JavaType,
    name: String,
    parameters: Vec<MethodParameter>,
    throws: Vec<ClassType>,
    default_value: Option<Value>,
    body: Option<Body>,
    pub(super) enclosing: Option<Name>,
    pub(super) enclosing_kind: Option<TypeKind>,
}

impl MethodDeclaration {
    /// Create a detached method.
    pub fn new(return_type: impl Into<JavaType>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_identifier(&name, "a method name")?;
        Ok(Self {
            annotations: Vec::new(),
            modifiers: Modifiers::new(),
            type_parameters: Vec::new(),
            return_type: return_type.into(),
            name,
            parameters: Vec::new(),
            throws: Vec::new(),
            default_value: None,
            body: None,
            enclosing: None,
            enclosing_kind: None,
        })
    }

    /// Add a type parameter.
    pub fn add_type_parameter(&mut self, parameter: TypeParameter) -> &mut Self {
        self.type_parameters.push(parameter);
        self
    }

    /// Add a parameter of type `ty` called `name`.
    pub fn add_parameter(&mut self, ty: impl Into<JavaType>, name: &str) -> Result<&mut Self> {
        self.add_method_parameter(MethodParameter::new(ty, name)?)
    }

    /// Add a fully configured parameter. A variable arity parameter must
    /// be the last one and there may be only one.
    pub fn add_method_parameter(&mut self, parameter: MethodParameter) -> Result<&mut Self> {
        push_parameter(&self.name, &mut self.parameters, parameter)?;
        Ok(self)
    }

    /// Add an exception type to the `throws` clause.
    pub fn add_throws(&mut self, exception: ClassType) -> &mut Self {
        self.throws.push(exception);
        self
    }

    /// Set the default value of an annotation type element.
    pub fn set_default_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default_value = Some(value.into());
        self
    }

    /// Replace the body with pre-formatted text.
    pub fn set_body(&mut self, text: &str) -> &mut Self {
        self.body = Some(Body::text(text));
        self
    }

    /// Append a statement to the body, creating it if needed.
    pub fn add_statement(&mut self, statement: &str) -> &mut Self {
        self.body.get_or_insert_with(Body::new).push_statement(statement);
        self
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The result type.
    pub fn return_type(&self) -> &JavaType {
        &self.return_type
    }

    /// The formal parameters.
    pub fn parameters(&self) -> &[MethodParameter] {
        &self.parameters
    }

    /// The type parameters.
    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    /// The `throws` clause.
    pub fn throws(&self) -> &[ClassType] {
        &self.throws
    }

    /// The body, if one was set.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Name of the type declaration this method was added to.
    pub fn enclosing_type(&self) -> Option<&Name> {
        self.enclosing.as_ref()
    }

    /// Check if this method renders `;` instead of a body.
    ///
    /// `default`, `static` and `private` interface methods always carry a
    /// body, an empty one if none was set.
    fn is_bodiless(&self) -> bool {
        if self.body.is_some() {
            return false;
        }
        if self.has_modifier(Modifier::Abstract) || self.has_modifier(Modifier::Native) {
            return true;
        }
        let in_interface = self
            .enclosing_kind
            .is_some_and(|kind| matches!(kind, TypeKind::Interface | TypeKind::Annotation));
        let implemented = [Modifier::Default, Modifier::Static, Modifier::Private]
            .into_iter()
            .any(|modifier| self.has_modifier(modifier));
        in_interface && !implemented
    }
}

impl Annotated for MethodDeclaration {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        ElementType::Method
    }
}

impl Modified for MethodDeclaration {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }
}

impl Renderable for MethodDeclaration {
    fn render(&self, listing: &mut Listing<'_>) {
        render_annotations(listing, &self.annotations, self.annotation_target());
        listing
            .emit(&self.modifiers)
            .enter_variables(self.type_parameters.iter().map(TypeParameter::name));
        if !self.type_parameters.is_empty() {
            render_type_parameters(listing, &self.type_parameters);
            listing.push_char(' ');
        }
        listing.emit(&self.return_type).push_char(' ').push_raw(&self.name);
        render_signature_tail(listing, &self.parameters, &self.throws);
        if let Some(value) = &self.default_value {
            listing.push_raw(" default ").emit(value);
        }
        if self.is_bodiless() {
            listing.push_char(';').push_newline();
        } else {
            render_braced(listing, self.body.as_ref().unwrap_or(&Body::new()));
        }
        listing.leave_variables();
    }
}

/// Render `(parameters)` and the `throws` clause.
pub(super) fn render_signature_tail(
    listing: &mut Listing<'_>,
    parameters: &[MethodParameter],
    throws: &[ClassType],
) {
    listing
        .push_char('(')
        .emit_joined(parameters, ", ")
        .push_char(')');
    if !throws.is_empty() {
        listing.push_raw(" throws ").emit_joined(throws, ", ");
    }
}
