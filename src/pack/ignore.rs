//! Ignore set — simple names already used unqualified in a unit.
//!
//! A bare `T` or `Name` in the tree stands for something import resolution
//! cannot see (a type parameter, a hand-written reference). Shortening any
//! qualified reference to the same simple name would silently alias it, so
//! those names are off limits.

use rustc_hash::FxHashSet;

use crate::base::SimpleName;
use crate::config::PackConfig;
use crate::tree::walk::{walk_unit, RefSite, TypeRefVisitor};
use crate::tree::{CompilationUnit, TypeDecl, TypeParam, TypeRef};

/// Set of simple names that must never be claimed for a qualified reference.
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    names: FxHashSet<SimpleName>,
}

impl IgnoreSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a simple name.
    pub fn insert(&mut self, name: SimpleName) -> bool {
        self.names.insert(name)
    }

    /// Check membership.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Get the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Collect every simple name used unqualified in `unit`. Read-only.
///
/// Covers all type references, including generic arguments, wildcard and
/// type-parameter bounds, annotations and `throws` lists. With
/// [`PackConfig::reserve_declared_names`] the names of declared types and
/// type parameters are added as well.
pub fn build_ignore_set(unit: &CompilationUnit, config: &PackConfig) -> IgnoreSet {
    let mut builder = IgnoreSetBuilder {
        set: IgnoreSet::new(),
        reserve_declared_names: config.reserve_declared_names,
    };
    walk_unit(unit, &mut builder);
    builder.set
}

struct IgnoreSetBuilder {
    set: IgnoreSet,
    reserve_declared_names: bool,
}

impl TypeRefVisitor for IgnoreSetBuilder {
    fn visit_type_ref(&mut self, ty: &TypeRef, _site: RefSite) {
        if ty.name.is_simple() {
            self.set.insert(ty.name.simple_name());
        }
    }

    fn visit_type_decl(&mut self, decl: &TypeDecl) {
        if self.reserve_declared_names {
            self.set.insert(SimpleName::new(&decl.name));
        }
    }

    fn visit_type_param(&mut self, param: &TypeParam) {
        if self.reserve_declared_names {
            self.set.insert(SimpleName::new(&param.name));
        }
    }
}
