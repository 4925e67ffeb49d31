//! Core building blocks for rendering Java source.
//!
//! This crate provides the language-level primitives shared by the
//! declaration model:
//!
//! - [`Listing`] - Indentation-aware line buffer that renders [`Renderable`] nodes
//! - [`NameResolver`] - Hook deciding how [`Name`]s are spelled at use sites
//! - [`Scope`] - Declarations and type variables enclosing a use site
//! - [`Config`] - Layout options, loadable from TOML
//! - [`naming`] - Identifier and package name rules
//! - [`literal`] - Character and string literal escaping

mod config;
mod error;
mod indent;
mod listing;
pub mod literal;
mod name;
pub mod naming;

pub use config::Config;
pub use error::{Error, Result};
pub use indent::Indent;
pub use listing::{Listing, NameResolver, Renderable, Scope, ScopeFrame};
pub use name::{Name, Spelling};
