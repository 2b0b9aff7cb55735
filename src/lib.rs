//! Documentation completeness checks
//!
//! Resource examples live in one directory per resource. Each resource is
//! expected to ship an import script and to be mentioned in the changelog.

pub mod domain;
pub use domain::{
    Changelog, CheckSelection, Config, ExemptionList, Resource, ResourceName, VerificationReport,
};

/// Filesystem access for resource trees, changelogs and configuration.
pub mod storage;
pub use storage::{ResourceRoot, Workspace};
