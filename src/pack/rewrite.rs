//! Reference rewriter — shortens qualified references in place.

use tracing::{debug, trace};

use crate::base::QualifiedName;
use crate::config::PackConfig;
use crate::tree::walk::{RefSite, TypeRefVisitorMut};
use crate::tree::TypeRef;

use super::diagnostics::DiagnosticCollector;
use super::ignore::IgnoreSet;
use super::source_form;
use super::symbols::{Claim, SymbolTable};

/// Accumulator threaded through the mutable walk.
///
/// Owns the symbol table for the duration of the walk; hand it back with
/// [`Rewriter::finish`].
pub struct Rewriter<'a> {
    ignore: &'a IgnoreSet,
    config: &'a PackConfig,
    diagnostics: &'a mut DiagnosticCollector,
    table: SymbolTable,
    rewritten: usize,
}

impl<'a> Rewriter<'a> {
    pub fn new(
        ignore: &'a IgnoreSet,
        table: SymbolTable,
        config: &'a PackConfig,
        diagnostics: &'a mut DiagnosticCollector,
    ) -> Self {
        Self {
            ignore,
            config,
            diagnostics,
            table,
            rewritten: 0,
        }
    }

    /// The grown symbol table and the number of references shortened.
    pub fn finish(self) -> (SymbolTable, usize) {
        (self.table, self.rewritten)
    }

    /// Decide whether `name` may be written as its simple name.
    ///
    /// 1. simple name used bare somewhere → keep qualified
    /// 2. simple name already bound to `name` → shorten
    /// 3. simple name free → bind it, shorten
    /// 4. simple name bound to another type → keep qualified
    fn may_shorten(&mut self, name: &QualifiedName) -> bool {
        if self.ignore.contains(name.simple_str()) {
            trace!(name = %name, "simple name used unqualified; keeping qualified");
            self.diagnostics.shadowed_by_simple_name(name);
            return false;
        }
        match self.table.claim(name) {
            Claim::Bound | Claim::Existing => true,
            Claim::Taken(winner) => {
                debug!(name = %name, winner = %winner, "name collision; keeping qualified");
                self.diagnostics.name_collision(name, winner);
                false
            }
        }
    }
}

impl TypeRefVisitorMut for Rewriter<'_> {
    fn visit_type_ref_mut(&mut self, ty: &mut TypeRef, site: RefSite) {
        if ty.name.is_simple() {
            return;
        }
        if site == RefSite::Throws && !self.config.rewrite_throws {
            return;
        }

        let name = source_form(&ty.name, self.config);
        if self.may_shorten(&name) {
            trace!(from = %name, to = name.simple_str(), "shortened reference");
            ty.name = QualifiedName::from(name.simple_name());
            self.rewritten += 1;
        } else {
            ty.name = name;
        }
    }
}
