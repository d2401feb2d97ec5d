// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable container.
//!
//! ```text
//! Environ
//! vars: BTreeMap<String, String>
//! iteration / serialization in lexicographic key order
//! merge: other wins on key collision
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of environment variables in the sense of environ(7).
///
/// Keys iterate in lexicographic order, which keeps element scans and
/// rendered output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environ {
    vars: BTreeMap<String, String>,
}

impl Environ {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Removes an environment variable, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Merges another environment into this one.
    ///
    /// Variables from `other` override existing entries with the same name.
    pub fn merge(&mut self, other: Self) -> &mut Self {
        self.vars.extend(other.vars);
        self
    }

    /// Keeps only the variables for which the predicate returns true.
    pub fn retain(&mut self, mut predicate: impl FnMut(&str, &str) -> bool) {
        self.vars.retain(|key, value| predicate(key, value));
    }

    /// Returns an iterator over variables in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }
}
