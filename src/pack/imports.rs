//! Reading the existing import list and writing the final one.

use tracing::{debug, trace};

use crate::base::QualifiedName;
use crate::config::PackConfig;
use crate::tree::ImportEntry;

use super::diagnostics::DiagnosticCollector;
use super::source_form;
use super::symbols::{Claim, SymbolTable};

/// What the import-declaration scan produces.
#[derive(Clone, Debug, Default)]
pub struct ImportScan {
    /// Table seeded with the unit's single-type imports.
    pub table: SymbolTable,
    /// Static and wildcard imports, in their original order.
    pub preserved: Vec<ImportEntry>,
}

/// Walk the existing import list once.
///
/// Static and wildcard entries are kept aside untouched. Each single-type
/// import claims its simple name; when an earlier import already owns that
/// name the later one is dropped and reported. Imports of implicitly visible
/// types (same package, built-in namespace) claim nothing: the final list
/// never contains them, so a claim would not survive a second pass.
pub fn scan_imports(
    imports: &[ImportEntry],
    package: Option<&QualifiedName>,
    config: &PackConfig,
    diagnostics: &mut DiagnosticCollector,
) -> ImportScan {
    let mut scan = ImportScan::default();

    for entry in imports {
        if entry.is_passthrough() {
            scan.preserved.push(entry.clone());
            continue;
        }
        let name = source_form(&entry.name, config);
        if is_implicitly_visible(&name, package, config) {
            trace!(name = %name, "dropping redundant import");
            continue;
        }
        if let Claim::Taken(kept) = scan.table.claim(&name) {
            debug!(dropped = %name, kept = %kept, "duplicate import claim");
            diagnostics.duplicate_import_claim(&name, kept);
        }
    }

    scan
}

/// Build the final import list.
///
/// Preserved entries come first, in their original order. Then every name
/// bound in `table` that is neither in `package` nor in the built-in
/// namespace, sorted by its dotted text, as a plain single-type import.
pub fn build_import_list(
    table: &SymbolTable,
    preserved: Vec<ImportEntry>,
    package: Option<&QualifiedName>,
    config: &PackConfig,
) -> Vec<ImportEntry> {
    let mut generated: Vec<&QualifiedName> = table
        .qualified_names()
        .filter(|name| !is_implicitly_visible(name, package, config))
        .collect();
    generated.sort_unstable();

    let mut imports = preserved;
    imports.reserve(generated.len());
    imports.extend(generated.into_iter().cloned().map(ImportEntry::single));
    imports
}

/// Whether `name` is visible without an import: it lives in the unit's own
/// package or in the built-in namespace.
fn is_implicitly_visible(
    name: &QualifiedName,
    package: Option<&QualifiedName>,
    config: &PackConfig,
) -> bool {
    name.namespace() == package.map(QualifiedName::as_str) || config.is_builtin(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::UnitId;

    fn name(text: &str) -> QualifiedName {
        QualifiedName::parse(text).unwrap()
    }

    fn rendered(imports: &[ImportEntry]) -> Vec<String> {
        imports.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_scan_separates_passthrough() {
        let imports = vec![
            ImportEntry::single(name("a.List")),
            ImportEntry::static_member(name("pkg.Utils.assertThat")),
            ImportEntry::wildcard(name("b")),
            ImportEntry::single(name("a.Map")),
        ];
        let mut diagnostics = DiagnosticCollector::new(UnitId::new(0));
        let scan = scan_imports(
            &imports,
            Some(&name("p")),
            &PackConfig::default(),
            &mut diagnostics,
        );

        assert_eq!(scan.preserved, vec![imports[1].clone(), imports[2].clone()]);
        assert_eq!(scan.table.len(), 2);
        assert_eq!(scan.table.lookup("List"), Some(&name("a.List")));
        assert!(diagnostics.diagnostics().is_empty());
    }

    #[test]
    fn test_scan_first_import_wins() {
        let imports = vec![
            ImportEntry::single(name("a.Date")),
            ImportEntry::single(name("b.Date")),
        ];
        let mut diagnostics = DiagnosticCollector::new(UnitId::new(0));
        let scan = scan_imports(
            &imports,
            Some(&name("p")),
            &PackConfig::default(),
            &mut diagnostics,
        );

        assert_eq!(scan.table.lookup("Date"), Some(&name("a.Date")));
        assert_eq!(diagnostics.diagnostics().len(), 1);
        assert_eq!(diagnostics.diagnostics()[0].subject, name("b.Date"));
    }

    #[test]
    fn test_scan_canonicalizes_nested_imports() {
        let imports = vec![ImportEntry::single(name("a.Outer$Inner"))];
        let mut diagnostics = DiagnosticCollector::new(UnitId::new(0));

        let scan = scan_imports(
            &imports,
            Some(&name("p")),
            &PackConfig::default(),
            &mut diagnostics,
        );
        assert_eq!(scan.table.lookup("Inner"), Some(&name("a.Outer.Inner")));

        let config = PackConfig::default().with_nested_names(false);
        let scan = scan_imports(&imports, Some(&name("p")), &config, &mut diagnostics);
        assert_eq!(scan.table.lookup("Outer$Inner"), Some(&name("a.Outer$Inner")));
    }

    #[test]
    fn test_scan_skips_redundant_imports() {
        let imports = vec![
            ImportEntry::single(name("p.Local")),
            ImportEntry::single(name("java.lang.String")),
            ImportEntry::single(name("p.sub.Other")),
        ];
        let mut diagnostics = DiagnosticCollector::new(UnitId::new(0));
        let scan = scan_imports(
            &imports,
            Some(&name("p")),
            &PackConfig::default(),
            &mut diagnostics,
        );

        assert_eq!(scan.table.len(), 1);
        assert!(scan.table.lookup("Local").is_none());
        assert!(scan.table.lookup("String").is_none());
        assert_eq!(scan.table.lookup("Other"), Some(&name("p.sub.Other")));
    }

    #[test]
    fn test_build_filters_and_sorts() {
        let mut table = SymbolTable::new();
        for n in ["z.Zed", "org.x.Helper", "java.lang.String", "a.B", "java.lang.reflect.Method"] {
            table.claim(&name(n));
        }
        let preserved = vec![
            ImportEntry::static_member(name("pkg.Utils.assertThat")),
            ImportEntry::wildcard(name("q")),
        ];

        let imports = build_import_list(
            &table,
            preserved,
            Some(&name("org.x")),
            &PackConfig::default(),
        );

        assert_eq!(
            rendered(&imports),
            vec![
                "import static pkg.Utils.assertThat;",
                "import q.*;",
                "import a.B;",
                "import java.lang.reflect.Method;",
                "import z.Zed;",
            ]
        );
    }

    #[test]
    fn test_build_default_package() {
        let mut table = SymbolTable::new();
        table.claim(&name("Local"));
        table.claim(&name("a.B"));

        let imports = build_import_list(&table, Vec::new(), None, &PackConfig::default());
        assert_eq!(rendered(&imports), vec!["import a.B;"]);
    }
}
