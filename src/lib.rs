//! # classgen-base
//!
//! Core library for generating class-based source code from a model:
//! the syntax tree generators build, and the import resolution pass that
//! turns fully qualified references into short names plus imports.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! pack    → Import resolution (ignore set, symbol table, rewrite, import list)
//!   ↓
//! config  → Immutable generator configuration (built-in namespace, type codes)
//!   ↓
//! tree    → Compilation units, declarations, type references, traversal
//!   ↓
//! base    → Primitives (UnitId, QualifiedName, SimpleName)
//! ```
//!
//! ## Usage
//!
//! ```
//! use classgen::base::QualifiedName;
//! use classgen::pack::pack;
//! use classgen::tree::{CompilationUnit, TypeDecl, TypeRef};
//!
//! let decl = TypeDecl::class("Order")
//!     .field("lines", TypeRef::parse("java.util.List<com.shop.Line>").unwrap());
//! let mut unit = CompilationUnit::new(Some(QualifiedName::parse("com.shop").unwrap()))
//!     .with_type(decl);
//!
//! pack(&mut unit);
//!
//! assert_eq!(unit.import_block(), "import java.util.List;\n");
//! ```

/// Foundation types: UnitId, QualifiedName, SimpleName
pub mod base;

/// Generator configuration shared by reference
pub mod config;

/// Import resolution over compilation units
pub mod pack;

/// Syntax tree model and traversal
pub mod tree;

// Re-export commonly needed items
pub use base::{NameError, QualifiedName, SimpleName, UnitId};
pub use config::{PackConfig, TypeCodes};
pub use pack::{PackReport, pack, pack_all, pack_with};
pub use tree::{CompilationUnit, ImportEntry, TypeRef};
