use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A name/identifier: `[_A-Za-z][_0-9A-Za-z]*`.
///
/// See [Names](https://spec.graphql.org/September2025/#sec-Names) in the
/// spec.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
}

impl Name<'_> {
    /// Returns the name's text.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<&str> for Name<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
