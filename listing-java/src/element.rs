//! Annotation targets and the [`Annotated`] trait.

use std::fmt;

use listing_core::Listing;

use crate::Annotation;

/// Syntactic position an annotation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Class, interface or enum declaration.
    Type,
    /// Field declaration, including enum constants.
    Field,
    /// Method declaration.
    Method,
    /// Formal parameter declaration.
    Parameter,
    /// Constructor declaration.
    Constructor,
    /// Local variable declaration.
    LocalVariable,
    /// Annotation type declaration.
    AnnotationType,
    /// Package declaration.
    Package,
    /// Type parameter declaration.
    TypeParameter,
    /// Use of a type.
    TypeUse,
}

impl ElementType {
    /// Get the canonical name of this target.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "TYPE",
            Self::Field => "FIELD",
            Self::Method => "METHOD",
            Self::Parameter => "PARAMETER",
            Self::Constructor => "CONSTRUCTOR",
            Self::LocalVariable => "LOCAL_VARIABLE",
            Self::AnnotationType => "ANNOTATION_TYPE",
            Self::Package => "PACKAGE",
            Self::TypeParameter => "TYPE_PARAMETER",
            Self::TypeUse => "TYPE_USE",
        }
    }

    /// Check if annotations on this target render on the same line as the
    /// annotated node rather than on lines of their own.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Parameter | Self::TypeParameter | Self::TypeUse | Self::LocalVariable
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node that carries annotations.
pub trait Annotated {
    /// Annotations in insertion order.
    fn annotations(&self) -> &[Annotation];

    /// Mutable access to the annotations.
    fn annotations_mut(&mut self) -> &mut Vec<Annotation>;

    /// The position this node's annotations are attached to.
    fn annotation_target(&self) -> ElementType;

    /// Attach an annotation. Applicability is not checked.
    fn add_annotation(&mut self, annotation: Annotation) -> &mut Self
    where
        Self: Sized,
    {
        self.annotations_mut().push(annotation);
        self
    }

    /// Attach several annotations.
    fn add_annotations(&mut self, annotations: impl IntoIterator<Item = Annotation>) -> &mut Self
    where
        Self: Sized,
    {
        self.annotations_mut().extend(annotations);
        self
    }

    /// Check if any annotation is attached.
    fn is_annotated(&self) -> bool {
        !self.annotations().is_empty()
    }
}

/// Emit annotations placed according to `target`: one per line for
/// declarations, followed by a space each for inline targets.
pub(crate) fn render_annotations(
    listing: &mut Listing<'_>,
    annotations: &[Annotation],
    target: ElementType,
) {
    for annotation in annotations {
        listing.emit(annotation);
        if target.is_inline() {
            listing.push_char(' ');
        } else {
            listing.push_newline();
        }
    }
}
