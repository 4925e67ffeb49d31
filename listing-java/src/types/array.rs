use listing_core::{Error, Listing, Renderable, Result};

use super::JavaType;
use crate::{Annotated, Annotation, ElementType};

/// An array type: a component type plus one or more dimensions.
///
/// Annotations on the array type apply to its first dimension and render
/// in front of the brackets: `String @NonEmpty []`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    component: Box<JavaType>,
    dimensions: usize,
    pub(super) annotations: Vec<Annotation>,
}

impl ArrayType {
    /// Create an array of `component` with `dimensions` dimensions.
    pub fn new(component: JavaType, dimensions: usize) -> Result<Self> {
        component.check_not_void("an array component type")?;
        component.check_not_wildcard("an array component type")?;
        if dimensions == 0 {
            return Err(Error::ZeroDimensions);
        }
        Ok(Self {
            component: Box::new(component),
            dimensions,
            annotations: Vec::new(),
        })
    }

    /// Attach a type-use annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The component type.
    pub fn component(&self) -> &JavaType {
        &self.component
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Render as the type of a variable arity parameter: the last bracket
    /// pair becomes an ellipsis.
    pub fn render_variable_arity(&self, listing: &mut Listing<'_>) {
        self.render_with(listing, self.dimensions - 1);
        listing.push_raw("...");
    }

    fn render_with(&self, listing: &mut Listing<'_>, brackets: usize) {
        listing.emit(self.component.as_ref());
        if !self.annotations.is_empty() {
            listing.push_char(' ');
            for annotation in &self.annotations {
                listing.emit(annotation).push_char(' ');
            }
        }
        for _ in 0..brackets {
            listing.push_raw("[]");
        }
    }
}

impl Annotated for ArrayType {
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

impl Renderable for ArrayType {
    fn render(&self, listing: &mut Listing<'_>) {
        self.render_with(listing, self.dimensions);
    }
}
