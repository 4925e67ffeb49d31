use listing_core::{Listing, Name, Renderable, Result};

use super::{
    Body, MethodParameter, TypeParameter, body::render_braced, method::render_signature_tail,
    parameter::push_parameter, type_parameter::render_type_parameters,
};
use crate::{
    Annotated, Annotation, ClassType, ElementType, JavaType, Modified, Modifiers,
    element::render_annotations,
};

/// A constructor declaration. Always created by its enclosing type
/// declaration, whose simple name it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDeclaration {
    annotations: Vec<Annotation>,
    modifiers: Modifiers,
    type_parameters: Vec<TypeParameter>,
    parameters: Vec<MethodParameter>,
    throws: Vec<ClassType>,
    body: Body,
    enclosing: Name,
}

impl ConstructorDeclaration {
    pub(super) fn new(enclosing: Name) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: Modifiers::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            throws: Vec::new(),
            body: Body::new(),
            enclosing,
        }
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
        push_parameter(
            self.enclosing.simple_name(),
            &mut self.parameters,
            parameter,
        )?;
        Ok(self)
    }

    /// Add an exception type to the `throws` clause.
    pub fn add_throws(&mut self, exception: ClassType) -> &mut Self {
        self.throws.push(exception);
        self
    }

    /// Replace the body with pre-formatted text.
    pub fn set_body(&mut self, text: &str) -> &mut Self {
        self.body = Body::text(text);
        self
    }

    /// Append a statement to the body.
    pub fn add_statement(&mut self, statement: &str) -> &mut Self {
        self.body.push_statement(statement);
        self
    }

    /// The simple name of the constructed type.
    pub fn name(&self) -> &str {
        self.enclosing.simple_name()
    }

    /// The formal parameters.
    pub fn parameters(&self) -> &[MethodParameter] {
        &self.parameters
    }

    /// The body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Name of the type declaration this constructor belongs to.
    pub fn enclosing_type(&self) -> Option<&Name> {
        Some(&self.enclosing)
    }
}

impl Annotated for ConstructorDeclaration {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        ElementType::Constructor
    }
}

impl Modified for ConstructorDeclaration {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }
}

impl Renderable for ConstructorDeclaration {
    fn render(&self, listing: &mut Listing<'_>) {
        render_annotations(listing, &self.annotations, self.annotation_target());
        listing
            .emit(&self.modifiers)
            .enter_variables(self.type_parameters.iter().map(TypeParameter::name));
        if !self.type_parameters.is_empty() {
            render_type_parameters(listing, &self.type_parameters);
            listing.push_char(' ');
        }
        listing.push_raw(self.name());
        render_signature_tail(listing, &self.parameters, &self.throws);
        render_braced(listing, &self.body);
        listing.leave_variables();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Modifier;

    #[test]
    fn test_constructor() {
        let mut constructor = ConstructorDeclaration::new(Name::of("uss", "Enterprise").unwrap());
        constructor
            .add_modifier(Modifier::Public)
            .add_parameter(JavaType::class("java.lang.String").unwrap(), "text")
            .unwrap()
            .add_statement("this.text = text");
        assert_eq!(constructor.name(), "Enterprise");
        assert_eq!(constructor.annotation_target(), ElementType::Constructor);
        assert_eq!(
            constructor.list(),
            "public Enterprise(java.lang.String text) {\n  this.text = text;\n}\n"
        );
    }
}
