use listing_core::{Listing, Renderable, Result};

use super::JavaType;
use crate::{Annotated, Annotation, ElementType};

/// A wildcard type argument.
///
/// Upper and lower bound are mutually exclusive: setting one clears the
/// other. An upper bound of `java.lang.Object` is not rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WildcardType {
    upper_bound: Option<Box<JavaType>>,
    lower_bound: Option<Box<JavaType>>,
    pub(super) annotations: Vec<Annotation>,
}

impl WildcardType {
    /// Create the unbounded wildcard `?`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `? extends bound`.
    pub fn extends(bound: JavaType) -> Result<Self> {
        let mut wildcard = Self::new();
        wildcard.set_upper_bound(bound)?;
        Ok(wildcard)
    }

    /// Create `? super bound`.
    pub fn super_(bound: JavaType) -> Result<Self> {
        let mut wildcard = Self::new();
        wildcard.set_lower_bound(bound)?;
        Ok(wildcard)
    }

    /// Set the upper bound and clear the lower bound.
    pub fn set_upper_bound(&mut self, bound: JavaType) -> Result<&mut Self> {
        check_bound(&bound)?;
        self.lower_bound = None;
        self.upper_bound = Some(Box::new(bound));
        Ok(self)
    }

    /// Set the lower bound and clear the upper bound.
    pub fn set_lower_bound(&mut self, bound: JavaType) -> Result<&mut Self> {
        check_bound(&bound)?;
        self.upper_bound = None;
        self.lower_bound = Some(Box::new(bound));
        Ok(self)
    }

    /// Attach a type-use annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The `extends` bound.
    pub fn upper_bound(&self) -> Option<&JavaType> {
        self.upper_bound.as_deref()
    }

    /// The `super` bound.
    pub fn lower_bound(&self) -> Option<&JavaType> {
        self.lower_bound.as_deref()
    }
}

fn check_bound(bound: &JavaType) -> Result<()> {
    bound.check_reference()?;
    bound.check_not_wildcard("a wildcard bound")
}

impl Annotated for WildcardType {
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

impl Renderable for WildcardType {
    fn render(&self, listing: &mut Listing<'_>) {
        for annotation in &self.annotations {
            listing.emit(annotation).push_char(' ');
        }
        listing.push_char('?');
        if let Some(lower) = &self.lower_bound {
            listing.push_raw(" super ").emit(lower.as_ref());
        } else if let Some(upper) = self
            .upper_bound
            .as_deref()
            .filter(|upper| !upper.is_java_lang_object())
        {
            listing.push_raw(" extends ").emit(upper);
        }
    }
}
