// SPDX-License-Identifier: MPL-2.0
//! The current route of the dashboard.

use std::fmt;

/// Path of the page being shown, e.g. `/inventory/new`.
///
/// Any string is accepted; paths that match no page resolve to the
/// not-found page rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub const ROOT: &'static str = "/";

    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }
}

impl Default for Location {
    fn default() -> Self {
        Self(Self::ROOT.to_string())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
