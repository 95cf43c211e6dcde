//! Tree model — the syntax tree generators build and import resolution rewrites.
//!
//! A [`CompilationUnit`] holds a package name, an ordered import list and
//! the type declarations of one output file. Every place a type is used is a
//! [`TypeRef`]; [`walk`] reaches all of them in a fixed pre-order.

mod decl;
mod parse;
mod types;
mod unit;
pub mod walk;

pub use decl::{FieldDecl, Member, MethodDecl, ParamDecl, TypeDecl, TypeKind, TypeParam};
pub use parse::TypeParseError;
pub use types::{BoundKind, TypeArg, TypeRef, WildcardBound};
pub use unit::{CompilationUnit, ImportEntry};
pub use walk::{RefSite, TypeRefVisitor, TypeRefVisitorMut};
