//! The completeness checker.
//!
//! [`verify`] is a pure function over resources that have already been
//! enumerated, so it can be exercised without touching the filesystem.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::domain::{Changelog, ExemptionList, Resource, ResourceName, VerificationReport};

/// Which checks a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSelection {
    /// Require every resource to be mentioned in the changelog.
    pub changelog: bool,

    /// Require every non-exempt resource to have an import script.
    pub import_script: bool,
}

impl CheckSelection {
    /// Run every check.
    pub const ALL: Self = Self {
        changelog: true,
        import_script: true,
    };

    /// Run only the changelog check.
    pub const CHANGELOG: Self = Self {
        changelog: true,
        import_script: false,
    };

    /// Run only the import-script check.
    pub const IMPORT_SCRIPT: Self = Self {
        changelog: false,
        import_script: true,
    };

    /// Combines two selections, running a check if either selects it.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            changelog: self.changelog || other.changelog,
            import_script: self.import_script || other.import_script,
        }
    }
}

impl Default for CheckSelection {
    fn default() -> Self {
        Self::ALL
    }
}

/// Checks every resource and accumulates all violations.
///
/// A resource is reported in `missing_changelog_entry` if its name does not
/// occur anywhere in the changelog, and in `missing_import_script` if it has no
/// import script and is not exempt. The scan never stops early.
#[instrument(level = "debug", skip_all)]
pub fn verify<'a, I>(
    resources: I,
    changelog: &Changelog,
    exemptions: &ExemptionList,
    selection: CheckSelection,
) -> VerificationReport
where
    I: IntoIterator<Item = &'a Resource>,
{
    let mut report = VerificationReport::default();
    let mut seen = BTreeSet::new();

    for resource in resources {
        report.resources += 1;
        seen.insert(&resource.name);

        let mentioned = changelog.mentions(&resource.name);
        let exempt = exemptions.is_exempt(&resource.name);
        debug!(
            resource = %resource.name,
            mentioned,
            has_import_script = resource.has_import_script,
            exempt,
            "checked resource"
        );

        if selection.changelog && !mentioned {
            report.missing_changelog_entry.insert(resource.name.clone());
        }

        if selection.import_script && !exempt && !resource.has_import_script {
            report.missing_import_script.insert(resource.name.clone());
        }
    }

    report.stale_exemptions = exemptions
        .iter()
        .filter(|name| !seen.contains(name))
        .cloned()
        .collect();

    report
}

/// Finds pairs of resource names where the first occurs inside the second.
///
/// Changelog lookup is a substring test, so a mention of the longer name also
/// counts as a mention of the shorter one. These pairs mark where a
/// "mentioned" verdict may be a false positive.
#[must_use]
pub fn overlapping_names<'a, I>(names: I) -> Vec<(ResourceName, ResourceName)>
where
    I: IntoIterator<Item = &'a ResourceName>,
{
    let names: BTreeSet<&ResourceName> = names.into_iter().collect();
    let mut pairs = Vec::new();
    for &short in &names {
        for &long in &names {
            if short != long && long.contains(short.as_str()) {
                pairs.push((short.clone(), long.clone()));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ResourceName {
        ResourceName::try_from(s).unwrap()
    }

    fn names(list: &[&str]) -> BTreeSet<ResourceName> {
        list.iter().copied().map(name).collect()
    }

    fn resource(s: &str, has_import_script: bool) -> Resource {
        Resource::new(name(s), has_import_script)
    }

    fn sample() -> Vec<Resource> {
        vec![
            resource("a_foo", true),
            resource("b_bar", false),
            resource("c_baz", true),
        ]
    }

    const SAMPLE_CHANGELOG: &str = "## 1.0.0\n\n* new resource a_foo\n* new resource b_bar\n";

    #[test]
    fn complete_tree_passes() {
        let resources = vec![resource("a_foo", true), resource("b_bar", true)];
        let changelog = Changelog::from(SAMPLE_CHANGELOG);

        let report = verify(&resources, &changelog, &ExemptionList::new(), CheckSelection::ALL);

        assert!(report.is_passing());
        assert_eq!(report.resources, 2);
        assert!(report.missing_import_script.is_empty());
        assert!(report.missing_changelog_entry.is_empty());
    }

    #[test]
    fn reports_both_kinds_of_violation() {
        let changelog = Changelog::from(SAMPLE_CHANGELOG);

        let report = verify(&sample(), &changelog, &ExemptionList::new(), CheckSelection::ALL);

        assert_eq!(report.missing_import_script, names(&["b_bar"]));
        assert_eq!(report.missing_changelog_entry, names(&["c_baz"]));
        assert!(!report.is_passing());
    }

    #[test]
    fn exemption_excuses_import_script_only() {
        let changelog = Changelog::from(SAMPLE_CHANGELOG);
        let exemptions: ExemptionList = [name("b_bar")].into_iter().collect();

        let report = verify(&sample(), &changelog, &exemptions, CheckSelection::ALL);

        assert!(report.missing_import_script.is_empty());
        assert_eq!(report.missing_changelog_entry, names(&["c_baz"]));
        assert!(!report.is_passing());
    }

    #[test]
    fn exempt_resource_still_needs_changelog_entry() {
        let resources = vec![resource("d_qux", false)];
        let exemptions: ExemptionList = [name("d_qux")].into_iter().collect();

        let report = verify(&resources, &Changelog::default(), &exemptions, CheckSelection::ALL);

        assert!(report.missing_import_script.is_empty());
        assert_eq!(report.missing_changelog_entry, names(&["d_qux"]));
    }

    #[test]
    fn enumeration_order_does_not_matter() {
        let changelog = Changelog::from(SAMPLE_CHANGELOG);
        let mut reversed = sample();
        reversed.reverse();

        let forward = verify(&sample(), &changelog, &ExemptionList::new(), CheckSelection::ALL);
        let backward = verify(&reversed, &changelog, &ExemptionList::new(), CheckSelection::ALL);

        assert_eq!(forward, backward);
    }

    #[test]
    fn unselected_checks_report_nothing() {
        let changelog = Changelog::from(SAMPLE_CHANGELOG);

        let only_changelog =
            verify(&sample(), &changelog, &ExemptionList::new(), CheckSelection::CHANGELOG);
        assert!(only_changelog.missing_import_script.is_empty());
        assert_eq!(only_changelog.missing_changelog_entry, names(&["c_baz"]));

        let only_import =
            verify(&sample(), &changelog, &ExemptionList::new(), CheckSelection::IMPORT_SCRIPT);
        assert_eq!(only_import.missing_import_script, names(&["b_bar"]));
        assert!(only_import.missing_changelog_entry.is_empty());
    }

    #[test]
    fn substring_match_hides_missing_shorter_name() {
        let resources = vec![
            resource("pingfederate_oauth_client", true),
            resource("pingfederate_oauth_client_settings", true),
        ];
        let changelog = Changelog::from("* pingfederate_oauth_client_settings");

        let report = verify(&resources, &changelog, &ExemptionList::new(), CheckSelection::ALL);

        assert!(report.is_passing());
    }

    #[test]
    fn unmatched_exemptions_are_stale() {
        let exemptions: ExemptionList = [name("b_bar"), name("z_gone")].into_iter().collect();

        let report = verify(&sample(), &Changelog::default(), &exemptions, CheckSelection::ALL);

        assert_eq!(report.stale_exemptions, names(&["z_gone"]));
    }

    #[test]
    fn overlapping_names_finds_contained_pairs() {
        let list = names(&[
            "pingfederate_oauth_client",
            "pingfederate_oauth_client_settings",
            "pingfederate_license",
        ]);

        let pairs = overlapping_names(&list);

        assert_eq!(
            pairs,
            vec![(
                name("pingfederate_oauth_client"),
                name("pingfederate_oauth_client_settings")
            )]
        );
    }

    #[test]
    fn selection_union_combines() {
        assert_eq!(
            CheckSelection::CHANGELOG.union(CheckSelection::IMPORT_SCRIPT),
            CheckSelection::ALL
        );
    }
}
