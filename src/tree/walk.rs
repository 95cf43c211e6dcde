//! Deterministic pre-order traversal over the type references of a unit.
//!
//! State lives in the visitor value that is passed down through the walk
//! functions; nothing is captured from an outer scope. Order, per type
//! declaration: annotations, type-parameter bounds, `extends`, `implements`,
//! then members in declaration order (fields: annotations, type; methods:
//! annotations, type-parameter bounds, return type, parameters, `throws`;
//! nested types recursively). A reference is visited before its generic
//! arguments, which are visited left to right.

use super::decl::{FieldDecl, Member, MethodDecl, ParamDecl, TypeDecl, TypeParam};
use super::types::TypeRef;
use super::unit::CompilationUnit;

/// Where a type reference appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefSite {
    Annotation,
    TypeParamBound,
    Extends,
    Implements,
    Field,
    Return,
    Param,
    Throws,
    /// Generic argument or wildcard bound inside another reference.
    TypeArg,
}

/// Read-only visitor over a unit's type references.
pub trait TypeRefVisitor {
    fn visit_type_ref(&mut self, ty: &TypeRef, site: RefSite);

    /// Called for each type declaration before its references.
    fn visit_type_decl(&mut self, _decl: &TypeDecl) {}

    /// Called for each declared type parameter before its bounds.
    fn visit_type_param(&mut self, _param: &TypeParam) {}
}

/// Visitor that may rewrite references in place.
///
/// Only the reference handed to the visitor should be changed; the walker
/// descends into its generic arguments afterwards.
pub trait TypeRefVisitorMut {
    fn visit_type_ref_mut(&mut self, ty: &mut TypeRef, site: RefSite);
}

// ============================================================================
// READ-ONLY WALK
// ============================================================================

/// Visit every type reference in `unit`.
pub fn walk_unit<V: TypeRefVisitor>(unit: &CompilationUnit, visitor: &mut V) {
    for decl in &unit.types {
        walk_type_decl(decl, visitor);
    }
}

fn walk_type_decl<V: TypeRefVisitor>(decl: &TypeDecl, visitor: &mut V) {
    visitor.visit_type_decl(decl);
    walk_refs(&decl.annotations, RefSite::Annotation, visitor);
    walk_type_params(&decl.type_params, visitor);
    walk_refs(&decl.extends, RefSite::Extends, visitor);
    walk_refs(&decl.implements, RefSite::Implements, visitor);

    for member in &decl.members {
        match member {
            Member::Field(FieldDecl {
                annotations, ty, ..
            }) => {
                walk_refs(annotations, RefSite::Annotation, visitor);
                walk_type_ref(ty, RefSite::Field, visitor);
            }
            Member::Method(method) => walk_method(method, visitor),
            Member::Type(nested) => walk_type_decl(nested, visitor),
        }
    }
}

fn walk_method<V: TypeRefVisitor>(method: &MethodDecl, visitor: &mut V) {
    walk_refs(&method.annotations, RefSite::Annotation, visitor);
    walk_type_params(&method.type_params, visitor);
    if let Some(ret) = &method.return_type {
        walk_type_ref(ret, RefSite::Return, visitor);
    }
    for ParamDecl {
        annotations, ty, ..
    } in &method.params
    {
        walk_refs(annotations, RefSite::Annotation, visitor);
        walk_type_ref(ty, RefSite::Param, visitor);
    }
    walk_refs(&method.throws, RefSite::Throws, visitor);
}

fn walk_type_params<V: TypeRefVisitor>(params: &[TypeParam], visitor: &mut V) {
    for param in params {
        visitor.visit_type_param(param);
        walk_refs(&param.bounds, RefSite::TypeParamBound, visitor);
    }
}

fn walk_refs<V: TypeRefVisitor>(refs: &[TypeRef], site: RefSite, visitor: &mut V) {
    for ty in refs {
        walk_type_ref(ty, site, visitor);
    }
}

/// Visit `ty` and then, in order, every reference in its generic arguments.
pub fn walk_type_ref<V: TypeRefVisitor>(ty: &TypeRef, site: RefSite, visitor: &mut V) {
    visitor.visit_type_ref(ty, site);
    for arg in ty.arg_refs() {
        walk_type_ref(arg, RefSite::TypeArg, visitor);
    }
}

// ============================================================================
// MUTABLE WALK
// ============================================================================

/// Visit every type reference in `unit`, allowing in-place rewrites.
///
/// Same order as [`walk_unit`].
pub fn walk_unit_mut<V: TypeRefVisitorMut>(unit: &mut CompilationUnit, visitor: &mut V) {
    for decl in &mut unit.types {
        walk_type_decl_mut(decl, visitor);
    }
}

fn walk_type_decl_mut<V: TypeRefVisitorMut>(decl: &mut TypeDecl, visitor: &mut V) {
    walk_refs_mut(&mut decl.annotations, RefSite::Annotation, visitor);
    for param in &mut decl.type_params {
        walk_refs_mut(&mut param.bounds, RefSite::TypeParamBound, visitor);
    }
    walk_refs_mut(&mut decl.extends, RefSite::Extends, visitor);
    walk_refs_mut(&mut decl.implements, RefSite::Implements, visitor);

    for member in &mut decl.members {
        match member {
            Member::Field(field) => {
                walk_refs_mut(&mut field.annotations, RefSite::Annotation, visitor);
                walk_type_ref_mut(&mut field.ty, RefSite::Field, visitor);
            }
            Member::Method(method) => walk_method_mut(method, visitor),
            Member::Type(nested) => walk_type_decl_mut(nested, visitor),
        }
    }
}

fn walk_method_mut<V: TypeRefVisitorMut>(method: &mut MethodDecl, visitor: &mut V) {
    walk_refs_mut(&mut method.annotations, RefSite::Annotation, visitor);
    for param in &mut method.type_params {
        walk_refs_mut(&mut param.bounds, RefSite::TypeParamBound, visitor);
    }
    if let Some(ret) = &mut method.return_type {
        walk_type_ref_mut(ret, RefSite::Return, visitor);
    }
    for param in &mut method.params {
        walk_refs_mut(&mut param.annotations, RefSite::Annotation, visitor);
        walk_type_ref_mut(&mut param.ty, RefSite::Param, visitor);
    }
    walk_refs_mut(&mut method.throws, RefSite::Throws, visitor);
}

fn walk_refs_mut<V: TypeRefVisitorMut>(refs: &mut [TypeRef], site: RefSite, visitor: &mut V) {
    for ty in refs {
        walk_type_ref_mut(ty, site, visitor);
    }
}

/// Mutable counterpart of [`walk_type_ref`].
pub fn walk_type_ref_mut<V: TypeRefVisitorMut>(ty: &mut TypeRef, site: RefSite, visitor: &mut V) {
    visitor.visit_type_ref_mut(ty, site);
    for arg in &mut ty.args {
        if let Some(inner) = arg.type_ref_mut() {
            walk_type_ref_mut(inner, RefSite::TypeArg, visitor);
        }
    }
}
