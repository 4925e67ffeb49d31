//! Declaration model and import-aware renderer for Java compilation units.
//!
//! Build a declaration tree through the fluent builders, then render it
//! with [`Renderable::list`](listing_core::Renderable::list). A
//! [`JavaUnit`] shortens type names through its imports; any other node
//! renders on its own with fully qualified names.
//!
//! # Module Organization
//!
//! - [`types`] - Type-uses (primitive, array, class, type variable, wildcard)
//! - [`annotation`] - Annotations and typed element values
//! - [`declaration`] - Type declarations and their members
//! - [`imports`] - Import declarations and the import table
//! - [`compile`] - Boundary types for an external compiler
//!
//! # Example
//!
//! ```
//! use listing_core::{Name, Renderable};
//! use listing_java::{ClassType, JavaType, JavaUnit, Modified, Modifier};
//!
//! let mut unit = JavaUnit::new("abc").unwrap();
//! unit.imports_mut()
//!     .add_single_type_import(Name::parse("java.util.List").unwrap())
//!     .unwrap();
//! let string = JavaType::class("java.lang.String").unwrap();
//! let strings = ClassType::parameterized("java.util.List", [string]).unwrap();
//! unit.declare_class("Names")
//!     .unwrap()
//!     .add_field(strings, "names")
//!     .unwrap()
//!     .add_modifier(Modifier::Private);
//!
//! assert_eq!(
//!     unit.list(),
//!     concat!(
//!         "package abc;\n\nimport java.util.List;\n\n",
//!         "class Names {\n  private List<String> names;\n}\n",
//!     ),
//! );
//! ```

pub mod annotation;
pub mod compile;
pub mod declaration;
mod element;
pub mod imports;
mod modifier;
pub mod types;
mod unit;

pub use annotation::{Annotation, Value};
pub use declaration::{
    Body, ConstructorDeclaration, EnumConstant, FieldDeclaration, Member, MethodDeclaration,
    MethodParameter, PackageDeclaration, TypeDeclaration, TypeKind, TypeParameter,
};
pub use element::{Annotated, ElementType};
pub use imports::{ImportDeclarations, ImportTable};
pub use modifier::{Modified, Modifier, Modifiers};
pub use types::{ArrayType, ClassType, JavaType, PrimitiveType, TypeVariable, WildcardType};
pub use unit::JavaUnit;
