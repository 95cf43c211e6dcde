//! Import resolution — shortening qualified names and rebuilding imports.
//!
//! Generators emit every type reference fully qualified. [`pack`] rewrites a
//! [`CompilationUnit`] so that references use the shortest name that is
//! still unambiguous, and replaces its import list with exactly the imports
//! those short names need.
//!
//! # Passes
//!
//! 1. **Ignore set** ([`build_ignore_set`]) - simple names already used bare
//! 2. **Import scan** ([`scan_imports`]) - seed the [`SymbolTable`] from
//!    existing single-type imports; set aside static and wildcard imports
//! 3. **Rewrite** ([`Rewriter`]) - one pre-order walk; first claim of a
//!    simple name wins, later colliding references stay qualified
//! 4. **Import list** ([`build_import_list`]) - preserved imports, then the
//!    table minus same-package and built-in names, sorted
//!
//! All state is created per call and dropped afterwards, so units can be
//! packed in parallel ([`pack_all`]).

mod batch;
mod diagnostics;
mod ignore;
mod imports;
mod rewrite;
mod symbols;

pub use batch::{BatchReport, pack_all};
pub use diagnostics::{Diagnostic, DiagnosticCollector, RelatedInfo, Severity, codes};
pub use ignore::{IgnoreSet, build_ignore_set};
pub use imports::{ImportScan, build_import_list, scan_imports};
pub use rewrite::Rewriter;
pub use symbols::{Claim, SymbolTable};

use tracing::debug;

use crate::base::QualifiedName;
use crate::config::PackConfig;
use crate::tree::CompilationUnit;
use crate::tree::walk::walk_unit_mut;

/// Outcome of packing one unit.
///
/// The tree mutation is the result; the report only explains it.
#[derive(Clone, Debug, Default)]
pub struct PackReport {
    /// Number of references rewritten to their simple name.
    pub rewritten: usize,
    /// Number of entries in the final import list.
    pub imports: usize,
    /// References left qualified and imports dropped, with reasons.
    pub diagnostics: Vec<Diagnostic>,
}

impl PackReport {
    /// Whether any reference had to stay qualified or any import was dropped.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}

/// Pack `unit` with the default configuration.
pub fn pack(unit: &mut CompilationUnit) -> PackReport {
    pack_with(unit, &PackConfig::default())
}

/// Pack `unit`: shorten its type references and rebuild its import list.
///
/// Total over well-formed trees; collisions never fail, they leave the
/// losing reference fully qualified. Running it again on its own output
/// changes nothing.
pub fn pack_with(unit: &mut CompilationUnit, config: &PackConfig) -> PackReport {
    let mut diagnostics = DiagnosticCollector::new(unit.id);

    let ignore = build_ignore_set(unit, config);
    let ImportScan { table, preserved } =
        scan_imports(&unit.imports, unit.package.as_ref(), config, &mut diagnostics);

    let mut rewriter = Rewriter::new(&ignore, table, config, &mut diagnostics);
    walk_unit_mut(unit, &mut rewriter);
    let (table, rewritten) = rewriter.finish();

    unit.imports = build_import_list(&table, preserved, unit.package.as_ref(), config);

    debug!(
        unit = %unit.id,
        rewritten,
        imports = unit.imports.len(),
        ignored = ignore.len(),
        warnings = diagnostics.warning_count(),
        "packed compilation unit"
    );

    PackReport {
        rewritten,
        imports: unit.imports.len(),
        diagnostics: diagnostics.take(),
    }
}

/// The name resolution works with: binary nested names become source form
/// when [`PackConfig::nested_names`] is on.
pub(crate) fn source_form(name: &QualifiedName, config: &PackConfig) -> QualifiedName {
    if config.nested_names {
        if let Some(source) = name.nested_source_form() {
            return source;
        }
    }
    name.clone()
}
