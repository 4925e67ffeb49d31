//! The Declaration Model: type declarations, their members and the
//! pieces members are made of.

mod body;
mod constructor;
mod field;
mod method;
mod package;
mod parameter;
mod type_declaration;
mod type_parameter;

pub use body::Body;
pub use constructor::ConstructorDeclaration;
pub use field::FieldDeclaration;
pub use method::MethodDeclaration;
pub use package::PackageDeclaration;
pub use parameter::MethodParameter;
pub use type_declaration::{EnumConstant, Member, TypeDeclaration, TypeKind};
pub use type_parameter::TypeParameter;
