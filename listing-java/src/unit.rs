//! Compilation units.

use listing_core::{Config, Listing, Name, Renderable, Result};

use crate::{
    ImportDeclarations, ImportTable, Modified, Modifier, PackageDeclaration, TypeDeclaration,
    TypeKind, compile::SourceFile,
};

/// A compilation unit: one package declaration, its imports and the
/// top-level type declarations in insertion order.
///
/// Rendering a unit resolves every type name against its package and
/// imports, see [`ImportTable`].
///
/// # Example
///
/// ```
/// use listing_core::Renderable;
/// use listing_java::{JavaUnit, Modified, Modifier};
///
/// let mut unit = JavaUnit::new("abc.def").unwrap();
/// unit.declare_class("Xyz").unwrap().add_modifier(Modifier::Public);
/// assert_eq!(unit.list(), "package abc.def;\n\npublic class Xyz {\n}\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JavaUnit {
    package: PackageDeclaration,
    imports: ImportDeclarations,
    declarations: Vec<TypeDeclaration>,
}

impl JavaUnit {
    /// Create a unit of `package`.
    pub fn new(package: &str) -> Result<Self> {
        Ok(Self {
            package: PackageDeclaration::new(package)?,
            ..Self::default()
        })
    }

    /// Create a unit of the unnamed package.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn package_declaration(&self) -> &PackageDeclaration {
        &self.package
    }

    pub fn package_declaration_mut(&mut self) -> &mut PackageDeclaration {
        &mut self.package
    }

    pub fn imports(&self) -> &ImportDeclarations {
        &self.imports
    }

    pub fn imports_mut(&mut self) -> &mut ImportDeclarations {
        &mut self.imports
    }

    /// Top-level type declarations in insertion order.
    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    /// Declare a top-level class.
    pub fn declare_class(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Class, name)
    }

    /// Declare a top-level interface.
    pub fn declare_interface(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Interface, name)
    }

    /// Declare a top-level enum.
    pub fn declare_enum(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Enum, name)
    }

    /// Declare a top-level annotation type.
    pub fn declare_annotation(&mut self, name: &str) -> Result<&mut TypeDeclaration> {
        self.declare(TypeKind::Annotation, name)
    }

    fn declare(&mut self, kind: TypeKind, name: &str) -> Result<&mut TypeDeclaration> {
        let name = Name::of(self.package.name(), name)?;
        self.declarations.push(TypeDeclaration::new(kind, name));
        let index = self.declarations.len() - 1;
        Ok(&mut self.declarations[index])
    }

    /// Find a declaration of this unit, nested ones included.
    pub fn find(&self, name: &Name) -> Option<&TypeDeclaration> {
        self.declarations
            .iter()
            .find_map(|declaration| declaration.find(name))
    }

    /// Find a declaration of this unit mutably, nested ones included.
    pub fn find_mut(&mut self, name: &Name) -> Option<&mut TypeDeclaration> {
        self.declarations
            .iter_mut()
            .find_map(|declaration| declaration.find_mut(name))
    }

    /// The declaration the unit is named after: the first `public`
    /// top-level declaration, else the first one.
    pub fn eponymous_declaration(&self) -> Option<&TypeDeclaration> {
        self.declarations
            .iter()
            .find(|declaration| declaration.has_modifier(Modifier::Public))
            .or_else(|| self.declarations.first())
    }

    /// Names of all type declarations, depth first.
    pub fn declared_names(&self) -> Vec<Name> {
        fn collect(declaration: &TypeDeclaration, names: &mut Vec<Name>) {
            names.push(declaration.name().clone());
            for nested in declaration.nested() {
                collect(nested, names);
            }
        }
        let mut names = Vec::new();
        for declaration in &self.declarations {
            collect(declaration, &mut names);
        }
        names
    }

    /// Render with `config`, shortening names through the import table.
    pub fn list_with(&self, config: &Config) -> String {
        tracing::debug!(
            package = self.package.name(),
            declarations = self.declarations.len(),
            "rendering unit"
        );
        let table = ImportTable::new(self.package.name(), &self.imports)
            .with_declared(self.declared_names());
        let mut listing = Listing::resolving(config.clone(), &table);
        self.render(&mut listing);
        listing.build()
    }

    /// Pair the rendered text with the name of the eponymous declaration.
    pub fn source_file(&self) -> Option<SourceFile> {
        let declaration = self.eponymous_declaration()?;
        Some(SourceFile::new(declaration.name().clone(), self.list()))
    }
}

impl Renderable for JavaUnit {
    fn render(&self, listing: &mut Listing<'_>) {
        let mut separate = false;
        if !self.package.is_unnamed() {
            listing.emit(&self.package);
            separate = true;
        }
        if !self.imports.is_empty() {
            if separate {
                listing.push_blank();
            }
            listing.emit(&self.imports);
            separate = true;
        }
        for declaration in &self.declarations {
            if separate {
                listing.push_blank();
            }
            listing.emit(declaration);
            separate = true;
        }
    }

    fn list(&self) -> String {
        self.list_with(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_unit() {
        assert_eq!(JavaUnit::unnamed().list(), "");
        assert!(JavaUnit::unnamed().source_file().is_none());
    }

    #[test]
    fn test_unnamed_package() {
        let mut unit = JavaUnit::unnamed();
        unit.declare_interface("I").unwrap();
        assert_eq!(unit.list(), "interface I {\n}\n");
    }

    #[test]
    fn test_eponymous_declaration() {
        let mut unit = JavaUnit::new("abc").unwrap();
        unit.declare_class("Helper").unwrap();
        unit.declare_class("Main").unwrap().add_modifier(Modifier::Public);
        let eponymous = unit.eponymous_declaration().unwrap();
        assert_eq!(eponymous.name().simple_name(), "Main");

        let mut unit = JavaUnit::new("abc").unwrap();
        unit.declare_enum("First").unwrap();
        unit.declare_enum("Second").unwrap();
        assert_eq!(
            unit.eponymous_declaration().unwrap().name().simple_name(),
            "First"
        );
    }

    #[test]
    fn test_declarations_separated_by_blank_lines() {
        let mut unit = JavaUnit::new("abc").unwrap();
        unit.imports_mut()
            .add_single_type_import(Name::parse("java.util.List").unwrap())
            .unwrap();
        unit.declare_class("A").unwrap();
        unit.declare_class("B").unwrap();
        assert_eq!(
            unit.list(),
            "package abc;\n\nimport java.util.List;\n\nclass A {\n}\n\nclass B {\n}\n"
        );
    }

    #[test]
    fn test_find_nested() {
        let mut unit = JavaUnit::new("abc").unwrap();
        unit.declare_class("Outer")
            .unwrap()
            .declare_class("Inner")
            .unwrap();
        let inner = Name::parse("abc.Outer.Inner").unwrap();
        assert_eq!(unit.find(&inner).unwrap().name(), &inner);
        assert!(unit.find_mut(&inner).is_some());
        assert_eq!(
            unit.declared_names(),
            [Name::parse("abc.Outer").unwrap(), inner]
        );
    }

    #[test]
    fn test_list_with_config() {
        let mut unit = JavaUnit::new("abc").unwrap();
        unit.declare_class("A")
            .unwrap()
            .add_field(crate::JavaType::int(), "i")
            .unwrap();
        let config = Config::from_toml("indent = \"tab\"\nline_separator = \"\\r\\n\"").unwrap();
        assert_eq!(
            unit.list_with(&config),
            "package abc;\r\n\r\nclass A {\r\n\tint i;\r\n}\r\n"
        );
    }

    #[test]
    fn test_source_file() {
        let mut unit = JavaUnit::new("abc.def").unwrap();
        unit.declare_class("Xyz").unwrap();
        let source = unit.source_file().unwrap();
        assert_eq!(source.name(), &Name::parse("abc.def.Xyz").unwrap());
        assert_eq!(source.text(), unit.list());
    }
}
