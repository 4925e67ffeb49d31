use listing_core::{Listing, Renderable, Result, naming::check_identifier};

/// A reference to a type parameter by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeVariable {
    name: String,
}

impl TypeVariable {
    /// Create a type variable. The name must be a legal identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_identifier(&name, "a type variable")?;
        Ok(Self { name })
    }

    /// The variable name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for TypeVariable {
    fn render(&self, listing: &mut Listing<'_>) {
        listing.push_raw(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_variable() {
        assert_eq!(TypeVariable::new("T").unwrap().list(), "T");
        assert!(TypeVariable::new("").is_err());
        assert!(TypeVariable::new("int").is_err());
    }
}
