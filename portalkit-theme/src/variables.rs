//! CSS custom property maps.

use indexmap::IndexMap;
use serde::Serialize;

/// Prefix shared by every published variable.
pub const VAR_PREFIX: &str = "--portal-";

/// Build a variable name from its role segments, e.g. `["primary", "500"]`
/// becomes `--portal-primary-500`.
pub fn var_name(segments: &[&str]) -> String {
    format!("{}{}", VAR_PREFIX, segments.join("-"))
}

/// An ordered, flat map of CSS custom properties.
///
/// Insertion order is kept so the published stylesheet is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeVariables {
    variables: IndexMap<String, String>,
}

impl ThemeVariables {
    /// Create a new empty variable map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ThemeVariables {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}
