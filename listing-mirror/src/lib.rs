//! Seed Java declaration trees from descriptors of already compiled types.
//!
//! Descriptors are plain serde data, typically produced by a reflective
//! tool on the Java side and exchanged as JSON. [`mirror`] turns them into
//! a [`JavaUnit`](listing_java::JavaUnit) that renders like any
//! hand-built one.
//!
//! - [`descriptor`] - The descriptor data model
//! - [`parse_type`] - Type-uses written in source syntax
//! - [`mirror`] - Descriptor to declaration translation

pub mod descriptor;
mod error;
mod mirror;
mod syntax;

pub use descriptor::{TypeDescriptor, from_json};
pub use error::{Error, Result};
pub use mirror::{mirror, mirror_json};
pub use syntax::{parse_class_type, parse_type};
