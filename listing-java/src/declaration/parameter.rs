use listing_core::{Error, Listing, Renderable, Result, naming::check_identifier};

use crate::{Annotated, Annotation, ElementType, JavaType, element::render_annotations};

/// A formal parameter of a method or constructor.
///
/// # Example
///
/// ```
/// use listing_core::Renderable;
/// use listing_java::{JavaType, MethodParameter};
///
/// let ints = JavaType::int().array_of(1).unwrap();
/// let parameter = MethodParameter::new(ints, "values").unwrap().variable().unwrap();
/// assert_eq!(parameter.list(), "int... values");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodParameter {
    ty: JavaType,
    name: String,
    is_final: bool,
    is_variable: bool,
    annotations: Vec<Annotation>,
}

impl MethodParameter {
    /// Create a parameter. `void` is rejected.
    pub fn new(ty: impl Into<JavaType>, name: impl Into<String>) -> Result<Self> {
        let ty = ty.into();
        let name = name.into();
        check_identifier(&name, "a parameter name")?;
        ty.check_not_void("a parameter type")?;
        Ok(Self {
            ty,
            name,
            is_final: false,
            is_variable: false,
            annotations: Vec::new(),
        })
    }

    /// Mark the parameter `final`.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Make this the variable arity parameter. Its type must be an array.
    pub fn variable(mut self) -> Result<Self> {
        if self.ty.as_array().is_none() {
            return Err(Error::VariableArityNotArray {
                parameter: self.name,
            });
        }
        self.is_variable = true;
        Ok(self)
    }

    /// Attach a parameter annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The parameter type.
    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the parameter is `final`.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Check if this is a variable arity parameter.
    pub fn is_variable(&self) -> bool {
        self.is_variable
    }
}

impl Annotated for MethodParameter {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    fn annotation_target(&self) -> ElementType {
        ElementType::Parameter
    }
}

impl Renderable for MethodParameter {
    fn render(&self, listing: &mut Listing<'_>) {
        render_annotations(listing, &self.annotations, self.annotation_target());
        if self.is_final {
            listing.push_raw("final ");
        }
        match (&self.ty, self.is_variable) {
            (JavaType::Array(array), true) => array.render_variable_arity(listing),
            (ty, _) => {
                listing.emit(ty);
            }
        }
        listing.push_char(' ').push_raw(&self.name);
    }
}

/// Append `parameter` to `parameters`, keeping the variable arity
/// parameter unique and last.
pub(crate) fn push_parameter(
    executable: &str,
    parameters: &mut Vec<MethodParameter>,
    parameter: MethodParameter,
) -> Result<()> {
    if let Some(last) = parameters.last().filter(|last| last.is_variable) {
        return Err(if parameter.is_variable {
            Error::DuplicateVariableArity {
                executable: executable.to_string(),
                existing: last.name.clone(),
            }
        } else {
            Error::VariableArityNotLast {
                executable: executable.to_string(),
                parameter: parameter.name,
            }
        });
    }
    parameters.push(parameter);
    Ok(())
}
