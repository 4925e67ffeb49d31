use listing_core::{Listing, Name, Renderable, Result, naming::check_identifier};

use crate::{
    Annotated, Annotation, ElementType, JavaType, Modified, Modifiers, Value,
    element::render_annotations,
};

/// A field declaration: `private final int i = 4711;`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    annotations: Vec<Annotation>,
    modifiers: Modifiers,
    ty: JavaType,
    name: String,
    initializer: Option<Value>,
    pub(super) enclosing: Option<Name>,
}

impl FieldDeclaration {
    /// Create a detached field. `void` is rejected.
    pub fn new(ty: impl Into<JavaType>, name: impl Into<String>) -> Result<Self> {
        let ty = ty.into();
        let name = name.into();
        check_identifier(&name, "a field name")?;
        ty.check_not_void("a field type")?;
        Ok(Self {
            annotations: Vec::new(),
            modifiers: Modifiers::new(),
            ty,
            name,
            initializer: None,
            enclosing: None,
        })
    }

    /// Set the initializer. Use [`Value::raw`] for arbitrary expressions.
    pub fn set_initializer(&mut self, value: impl Into<Value>) -> &mut Self {
        self.initializer = Some(value.into());
        self
    }

    /// The field type.
    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The initializer, if any.
    pub fn initializer(&self) -> Option<&Value> {
        self.initializer.as_ref()
    }

    /// Name of the type declaration this field was added to.
    pub fn enclosing_type(&self) -> Option<&Name> {
        self.enclosing.as_ref()
    }
}

impl Annotated for FieldDeclaration {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        ElementType::Field
    }
}

impl Modified for FieldDeclaration {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }
}

impl Renderable for FieldDeclaration {
    fn render(&self, listing: &mut Listing<'_>) {
        render_annotations(listing, &self.annotations, self.annotation_target());
        listing
            .emit(&self.modifiers)
            .emit(&self.ty)
            .push_char(' ')
            .push_raw(&self.name);
        if let Some(initializer) = &self.initializer {
            listing.push_raw(" = ").emit(initializer);
        }
        listing.push_char(';').push_newline();
    }
}
