//! A single URI pattern: exact, prefix (`*`), or `{id}` template.

use std::borrow::Cow;
use std::fmt;

/// Placeholder substituted with the caller's numeric id.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Prefix-wildcard marker.
const WILDCARD: char = '*';

/// A URI pattern from the authorization policy.
///
/// Matching is case-sensitive. After optional `{id}` substitution a pattern
/// ending in `*` matches any URI starting with the rest of the pattern;
/// anything else must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriPattern {
    raw: String,
    templated: bool,
}

impl UriPattern {
    /// Parses a pattern.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let templated = raw.contains(ID_PLACEHOLDER);
        Self { raw, templated }
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern contains `{id}`.
    pub fn is_templated(&self) -> bool {
        self.templated
    }

    /// Whether the pattern ends in `*`.
    pub fn is_prefix(&self) -> bool {
        self.raw.ends_with(WILDCARD)
    }

    /// Tests `uri` against this pattern.
    ///
    /// `id` is the caller's resolved user id; without one, a templated
    /// pattern is compared literally.
    pub fn matches(&self, uri: &str, id: Option<i64>) -> bool {
        let resolved: Cow<'_, str> = match id {
            Some(id) if self.templated => {
                Cow::Owned(self.raw.replace(ID_PLACEHOLDER, &id.to_string()))
            }
            _ => Cow::Borrowed(&self.raw),
        };

        match resolved.strip_suffix(WILDCARD) {
            Some(prefix) => uri.starts_with(prefix),
            None => uri == resolved,
        }
    }
}

impl fmt::Display for UriPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for UriPattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for UriPattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
