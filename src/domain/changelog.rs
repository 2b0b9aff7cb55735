/// The full text of a changelog.
///
/// Only substring containment is supported. No release structure is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    text: String,
}

impl Changelog {
    /// Wraps changelog text that has already been read.
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self { text }
    }

    /// Returns `true` if `name` occurs anywhere in the changelog text.
    ///
    /// This is a plain substring test, so `pingfederate_oauth_client` is
    /// "mentioned" by a changelog that only names
    /// `pingfederate_oauth_client_settings`.
    #[must_use]
    pub fn mentions(&self, name: &str) -> bool {
        self.text.contains(name)
    }
}

impl From<String> for Changelog {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Changelog {
    fn from(text: &str) -> Self {
        Self::new(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const CHANGELOG: &str = "# v1.2.0\n\n### Resources\n\n* `pingfederate_oauth_client_settings` (#123)\n";

    #[test_case("pingfederate_oauth_client_settings", true; "exact name")]
    #[test_case("pingfederate_oauth_client", true; "prefix of longer name")]
    #[test_case("oauth", true; "inner fragment")]
    #[test_case("pingfederate_license", false; "absent")]
    fn mentions_is_substring_match(name: &str, expected: bool) {
        let changelog = Changelog::from(CHANGELOG);
        assert_eq!(changelog.mentions(name), expected);
    }

    #[test]
    fn empty_changelog_mentions_nothing() {
        assert!(!Changelog::default().mentions("pingfederate_license"));
    }
}
