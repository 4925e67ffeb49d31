use listing_core::{Listing, Renderable, Result, naming::check_package};

use crate::{Annotated, Annotation, ElementType, element::render_annotations};

/// The package declaration of a compilation unit. The unnamed package
/// renders nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageDeclaration {
    annotations: Vec<Annotation>,
    name: String,
}

impl PackageDeclaration {
    /// Declare the package `name`; empty for the unnamed package.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_package(&name)?;
        Ok(Self {
            annotations: Vec::new(),
            name,
        })
    }

    /// The unnamed package.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// The dotted package name, empty for the unnamed package.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is the unnamed package.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

impl Annotated for PackageDeclaration {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        ElementType::Package
    }
}

impl Renderable for PackageDeclaration {
    fn render(&self, listing: &mut Listing<'_>) {
        if self.is_unnamed() {
            return;
        }
        render_annotations(listing, &self.annotations, self.annotation_target());
        listing
            .push_raw("package ")
            .push_raw(&self.name)
            .push_char(';')
            .push_newline();
    }
}
