//! Domain models for documentation completeness checks.
//!
//! This module contains the core domain types including resource names,
//! exemption lists, the changelog, configuration and the checker itself.

/// Resource names and scanned resources.
pub mod resource;
pub use resource::{InvalidResourceName, Resource, ResourceName};

mod changelog;
pub use changelog::Changelog;

pub mod checker;
pub use checker::{CheckSelection, overlapping_names, verify};

mod config;
pub use config::Config;

mod exemptions;
pub use exemptions::ExemptionList;

mod report;
pub use report::VerificationReport;
