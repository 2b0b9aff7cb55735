use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::ResourceName;

/// The findings of a single completeness check run.
///
/// Violations are held in ordered sets, so the report does not depend on the
/// order in which resources were enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// The number of resources that were checked.
    pub resources: usize,

    /// Non-exempt resources with no import script.
    pub missing_import_script: BTreeSet<ResourceName>,

    /// Resources whose name does not occur in the changelog.
    pub missing_changelog_entry: BTreeSet<ResourceName>,

    /// Exempt names that matched no scanned resource.
    ///
    /// These are informational and never fail the check.
    pub stale_exemptions: BTreeSet<ResourceName>,
}

impl VerificationReport {
    /// Returns `true` if no violations were found.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.missing_import_script.is_empty() && self.missing_changelog_entry.is_empty()
    }

    /// Returns the total number of violations across both checks.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.missing_import_script.len() + self.missing_changelog_entry.len()
    }
}
