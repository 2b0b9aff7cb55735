use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Serialize, Serializer};

/// The name of a resource, equal to the base name of its example directory.
///
/// A resource name is a single path segment: it is never empty and never
/// contains a path separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceName(NonEmptyString);

impl ResourceName {
    /// Creates a new `ResourceName` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResourceName` if the string is empty, is `.` or `..`,
    /// or contains a path separator.
    pub fn new(s: String) -> Result<Self, InvalidResourceName> {
        if s == "." || s == ".." || s.contains(['/', '\\']) {
            return Err(InvalidResourceName(s));
        }
        let non_empty = NonEmptyString::new(s).map_err(InvalidResourceName)?;
        Ok(Self(non_empty))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for ResourceName {
    type Error = InvalidResourceName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourceName {
    type Error = InvalidResourceName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for ResourceName {
    type Err = InvalidResourceName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for ResourceName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ResourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error returned when a string cannot name a resource directory.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid resource name '{0}': must be a non-empty single path segment")]
pub struct InvalidResourceName(String);

/// A resource discovered in the resource root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The resource name (its directory's base name).
    pub name: ResourceName,

    /// Whether the import script exists directly inside the resource
    /// directory.
    pub has_import_script: bool,
}

impl Resource {
    /// Creates a resource record.
    #[must_use]
    pub const fn new(name: ResourceName, has_import_script: bool) -> Self {
        Self {
            name,
            has_import_script,
        }
    }
}
