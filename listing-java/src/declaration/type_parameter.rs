use listing_core::{Listing, Renderable, Result, naming::check_identifier};

use crate::{
    Annotated, Annotation, ClassType, ElementType, TypeVariable, element::render_annotations,
};

/// A type parameter of a generic class, interface, method or constructor.
///
/// Class bounds and a single type variable bound are mutually exclusive:
/// the last setter wins and clears the other. `java.lang.Object` bounds
/// are dropped since every type extends it implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    name: String,
    bounds: Vec<ClassType>,
    bound_variable: Option<TypeVariable>,
    annotations: Vec<Annotation>,
}

impl TypeParameter {
    /// Create an unbounded type parameter.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_identifier(&name, "a type parameter")?;
        Ok(Self {
            name,
            bounds: Vec::new(),
            bound_variable: None,
            annotations: Vec::new(),
        })
    }

    /// Add a class bound, clearing any type variable bound.
    pub fn with_bound(mut self, bound: ClassType) -> Self {
        self.add_bound(bound);
        self
    }

    /// Set the type variable bound, clearing all class bounds.
    pub fn with_bound_variable(mut self, variable: TypeVariable) -> Self {
        self.set_bound_variable(variable);
        self
    }

    /// Attach a type parameter annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a class bound, clearing any type variable bound.
    pub fn add_bound(&mut self, bound: ClassType) -> &mut Self {
        self.bound_variable = None;
        if !bound.is_java_lang_object() {
            self.bounds.push(bound);
        }
        self
    }

    /// Add several class bounds, clearing any type variable bound.
    pub fn add_bounds(&mut self, bounds: impl IntoIterator<Item = ClassType>) -> &mut Self {
        for bound in bounds {
            self.add_bound(bound);
        }
        self
    }

    /// Set the type variable bound, clearing all class bounds.
    pub fn set_bound_variable(&mut self, variable: TypeVariable) -> &mut Self {
        self.bounds.clear();
        self.bound_variable = Some(variable);
        self
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class bounds.
    pub fn bounds(&self) -> &[ClassType] {
        &self.bounds
    }

    /// The type variable bound.
    pub fn bound_variable(&self) -> Option<&TypeVariable> {
        self.bound_variable.as_ref()
    }
}

impl Annotated for TypeParameter {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        ElementType::TypeParameter
    }
}

impl Renderable for TypeParameter {
    fn render(&self, listing: &mut Listing<'_>) {
        render_annotations(listing, &self.annotations, self.annotation_target());
        listing.push_raw(&self.name);
        if let Some(variable) = &self.bound_variable {
            listing.push_raw(" extends ").emit(variable);
        } else if !self.bounds.is_empty() {
            listing.push_raw(" extends ").emit_joined(&self.bounds, " & ");
        }
    }
}

/// Render `<A, B extends C>`, or nothing for an empty list.
pub(crate) fn render_type_parameters(listing: &mut Listing<'_>, parameters: &[TypeParameter]) {
    if parameters.is_empty() {
        return;
    }
    listing
        .push_char('<')
        .emit_joined(parameters, ", ")
        .push_char('>');
}
