//! Foundation types for the classgen toolchain.
//!
//! This module provides fundamental types used throughout the generator:
//! - [`UnitId`] - Compilation unit identifiers
//! - [`QualifiedName`], [`SimpleName`] - Dotted type names and their keys
//!
//! This module has NO dependencies on other classgen modules.

mod name;
mod unit_id;

pub use name::{NameError, QualifiedName, SimpleName};
pub use unit_id::UnitId;
