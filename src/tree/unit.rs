//! Compilation units and their import declarations.

use std::fmt;

use crate::base::{QualifiedName, UnitId};

use super::decl::TypeDecl;

/// One import declaration.
///
/// Static and wildcard imports are carried through import resolution
/// verbatim; only plain single-type imports take part in name claims.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportEntry {
    pub name: QualifiedName,
    pub is_static: bool,
    pub is_wildcard: bool,
}

impl ImportEntry {
    /// `import a.b.C;`
    pub fn single(name: QualifiedName) -> Self {
        Self {
            name,
            is_static: false,
            is_wildcard: false,
        }
    }

    /// `import static a.b.C.member;`
    pub fn static_member(name: QualifiedName) -> Self {
        Self {
            name,
            is_static: true,
            is_wildcard: false,
        }
    }

    /// `import a.b.*;`
    pub fn wildcard(name: QualifiedName) -> Self {
        Self {
            name,
            is_static: false,
            is_wildcard: true,
        }
    }

    /// `import static a.b.C.*;`
    pub fn static_wildcard(name: QualifiedName) -> Self {
        Self {
            name,
            is_static: true,
            is_wildcard: true,
        }
    }

    /// Whether this entry is opaque to import resolution.
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        self.is_static || self.is_wildcard
    }
}

impl fmt::Display for ImportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("import ")?;
        if self.is_static {
            f.write_str("static ")?;
        }
        write!(f, "{}", self.name)?;
        if self.is_wildcard {
            f.write_str(".*")?;
        }
        f.write_str(";")
    }
}

/// The tree for one generated output file: package, imports, types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationUnit {
    pub id: UnitId,
    /// `None` for the default package.
    pub package: Option<QualifiedName>,
    pub imports: Vec<ImportEntry>,
    pub types: Vec<TypeDecl>,
}

impl CompilationUnit {
    /// Create an empty unit in `package`.
    pub fn new(package: Option<QualifiedName>) -> Self {
        Self {
            package,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: UnitId) -> Self {
        self.id = id;
        self
    }

    pub fn with_import(mut self, entry: ImportEntry) -> Self {
        self.imports.push(entry);
        self
    }

    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    /// Render the import block, one declaration per line.
    pub fn import_block(&self) -> String {
        self.imports
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> QualifiedName {
        QualifiedName::parse(text).unwrap()
    }

    #[test]
    fn test_import_display() {
        assert_eq!(
            ImportEntry::single(name("java.util.List")).to_string(),
            "import java.util.List;"
        );
        assert_eq!(
            ImportEntry::static_member(name("pkg.Utils.assertThat")).to_string(),
            "import static pkg.Utils.assertThat;"
        );
        assert_eq!(
            ImportEntry::wildcard(name("java.util")).to_string(),
            "import java.util.*;"
        );
        assert_eq!(
            ImportEntry::static_wildcard(name("org.junit.Assert")).to_string(),
            "import static org.junit.Assert.*;"
        );
    }

    #[test]
    fn test_passthrough() {
        assert!(!ImportEntry::single(name("a.B")).is_passthrough());
        assert!(ImportEntry::static_member(name("a.B.c")).is_passthrough());
        assert!(ImportEntry::wildcard(name("a")).is_passthrough());
    }

    #[test]
    fn test_import_block() {
        let unit = CompilationUnit::new(Some(name("p")))
            .with_import(ImportEntry::single(name("a.B")))
            .with_import(ImportEntry::wildcard(name("c")));
        assert_eq!(unit.import_block(), "import a.B;\nimport c.*;\n");
    }
}
