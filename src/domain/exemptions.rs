use std::collections::BTreeSet;

use crate::domain::ResourceName;

/// Resources excused from the import-script requirement.
///
/// Exemptions never affect the changelog check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemptionList {
    names: BTreeSet<ResourceName>,
}

impl ExemptionList {
    /// Creates an empty exemption list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Returns `true` if the resource is exempt from the import-script check.
    #[must_use]
    pub fn is_exempt(&self, name: &ResourceName) -> bool {
        self.names.contains(name)
    }

    /// Iterates over the exempt resources in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceName> {
        self.names.iter()
    }
}

impl FromIterator<ResourceName> for ExemptionList {
    fn from_iter<T: IntoIterator<Item = ResourceName>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
