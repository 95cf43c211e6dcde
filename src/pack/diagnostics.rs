//! Diagnostics — reporting references import resolution left qualified.
//!
//! None of these are errors: every situation reported here has already been
//! resolved by keeping the fully qualified name. They exist so callers can
//! see *why* a reference was not shortened.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::base::{QualifiedName, UnitId};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Info,
}

/// A diagnostic message about one qualified name.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The unit this diagnostic was raised for.
    pub unit: UnitId,
    /// The name the diagnostic is about.
    pub subject: QualifiedName,
    /// Severity level.
    pub severity: Severity,
    /// Warning code (e.g., "W0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Optional related information.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug)]
pub struct RelatedInfo {
    /// The other name involved.
    pub name: QualifiedName,
    /// The message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(unit: UnitId, subject: QualifiedName, message: impl Into<Arc<str>>) -> Self {
        Self::with_severity(unit, subject, Severity::Warning, message)
    }

    /// Create a new informational diagnostic.
    pub fn info(unit: UnitId, subject: QualifiedName, message: impl Into<Arc<str>>) -> Self {
        Self::with_severity(unit, subject, Severity::Info, message)
    }

    fn with_severity(
        unit: UnitId,
        subject: QualifiedName,
        severity: Severity,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            unit,
            subject,
            severity,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Set the warning code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes raised by import resolution.
pub mod codes {
    /// A different type already owns the simple name.
    pub const NAME_COLLISION: &str = "W0001";
    /// The simple name is already used unqualified in the unit.
    pub const SHADOWED_BY_SIMPLE_NAME: &str = "W0002";
    /// A single-type import was dropped; an earlier import claimed its simple name.
    pub const DUPLICATE_IMPORT_CLAIM: &str = "W0003";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics for one unit.
///
/// Each (code, name) pair is reported once, however many references hit it.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    unit: UnitId,
    diagnostics: Vec<Diagnostic>,
    reported: FxHashSet<(&'static str, QualifiedName)>,
}

impl DiagnosticCollector {
    /// Create a new empty collector for `unit`.
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record that `code` fired for `subject`. Returns `false` if it already had.
    fn first_report(&mut self, code: &'static str, subject: &QualifiedName) -> bool {
        self.reported.insert((code, subject.clone()))
    }

    /// `loser` stayed qualified because `winner` owns its simple name.
    pub fn name_collision(&mut self, loser: &QualifiedName, winner: &QualifiedName) {
        if !self.first_report(codes::NAME_COLLISION, loser) {
            return;
        }
        self.add(
            Diagnostic::warning(
                self.unit,
                loser.clone(),
                format!(
                    "'{}' kept fully qualified: '{}' is already imported as '{}'",
                    loser,
                    winner,
                    winner.simple_str()
                ),
            )
            .with_code(codes::NAME_COLLISION)
            .with_related(RelatedInfo {
                name: winner.clone(),
                message: Arc::from(format!("'{}' claimed first", winner)),
            }),
        );
    }

    /// `name` stayed qualified because its simple name is used bare in the unit.
    pub fn shadowed_by_simple_name(&mut self, name: &QualifiedName) {
        if !self.first_report(codes::SHADOWED_BY_SIMPLE_NAME, name) {
            return;
        }
        self.add(
            Diagnostic::info(
                self.unit,
                name.clone(),
                format!(
                    "'{}' kept fully qualified: '{}' is already used unqualified",
                    name,
                    name.simple_str()
                ),
            )
            .with_code(codes::SHADOWED_BY_SIMPLE_NAME),
        );
    }

    /// The import of `dropped` was removed because `kept` claimed the simple name.
    pub fn duplicate_import_claim(&mut self, dropped: &QualifiedName, kept: &QualifiedName) {
        if !self.first_report(codes::DUPLICATE_IMPORT_CLAIM, dropped) {
            return;
        }
        self.add(
            Diagnostic::warning(
                self.unit,
                dropped.clone(),
                format!(
                    "import of '{}' dropped: '{}' is imported earlier",
                    dropped, kept
                ),
            )
            .with_code(codes::DUPLICATE_IMPORT_CLAIM)
            .with_related(RelatedInfo {
                name: kept.clone(),
                message: Arc::from(format!("'{}' imported here", kept)),
            }),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.reported.clear();
        std::mem::take(&mut self.diagnostics)
    }
}
