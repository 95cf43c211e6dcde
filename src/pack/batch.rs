//! Packing many compilation units at once.

use rayon::prelude::*;
use tracing::info;

use crate::base::UnitId;
use crate::config::PackConfig;
use crate::tree::CompilationUnit;

use super::{Diagnostic, PackReport, pack_with};

/// Per-unit reports of a batch, in input order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    reports: Vec<(UnitId, PackReport)>,
}

impl BatchReport {
    /// Get the report for one unit.
    pub fn for_unit(&self, unit: UnitId) -> Option<&PackReport> {
        self.reports
            .iter()
            .find(|(id, _)| *id == unit)
            .map(|(_, report)| report)
    }

    /// Iterate over all reports in input order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &PackReport)> {
        self.reports.iter().map(|(id, report)| (*id, report))
    }

    /// Total references rewritten across the batch.
    pub fn total_rewritten(&self) -> usize {
        self.reports.iter().map(|(_, r)| r.rewritten).sum()
    }

    /// All diagnostics across the batch.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.reports.iter().flat_map(|(_, r)| r.diagnostics.iter())
    }

    /// Get the number of units.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Check if the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Pack every unit in parallel.
///
/// Each unit gets its own symbol table and ignore set; nothing is shared
/// between workers except `config`, which is read-only.
pub fn pack_all(units: &mut [CompilationUnit], config: &PackConfig) -> BatchReport {
    let reports: Vec<_> = units
        .par_iter_mut()
        .map(|unit| (unit.id, pack_with(unit, config)))
        .collect();

    let batch = BatchReport { reports };
    info!(
        units = batch.len(),
        rewritten = batch.total_rewritten(),
        "packed batch"
    );
    batch
}
