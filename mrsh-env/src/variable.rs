// This file is part of mrsh, an embeddable POSIX-style command interpreter.
// Copyright (C) 2026 the mrsh authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Shell variables
//!
//! A [`VariableSet`] is the environment of a shell instance: an ordered
//! name-to-value mapping. Iteration order is the lexical order of names, so
//! listings are deterministic. Subshell isolation is implemented by cloning
//! the whole set and restoring it afterwards.

use std::collections::BTreeMap;

/// Collection of variables
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VariableSet {
    values: BTreeMap<String, String>,
}

impl VariableSet {
    /// Creates an empty variable set.
    #[must_use]
    pub fn new() -> VariableSet {
        VariableSet::default()
    }

    /// Returns the value of the variable, or `None` if unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns true if the variable is set, even to an empty value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Assigns a value to the variable, creating it if necessary.
    pub fn assign<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.values.insert(name.into(), value.into());
    }

    /// Removes the variable, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Iterates over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variable is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_get_unset() {
        let mut variables = VariableSet::new();
        assert_eq!(variables.get("x"), None);
        variables.assign("x", "1");
        assert_eq!(variables.get("x"), Some("1"));
        variables.assign("x", "2");
        assert_eq!(variables.get("x"), Some("2"));
        assert_eq!(variables.unset("x"), Some("2".to_string()));
        assert_eq!(variables.get("x"), None);
    }

    #[test]
    fn empty_value_is_set() {
        let mut variables = VariableSet::new();
        variables.assign("x", "");
        assert!(variables.is_set("x"));
        assert_eq!(variables.get("x"), Some(""));
    }

    #[test]
    fn iteration_is_in_name_order() {
        let mut variables = VariableSet::new();
        variables.assign("b", "2");
        variables.assign("a", "1");
        variables.assign("c", "3");
        let names: Vec<&str> = variables.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn clone_makes_an_independent_snapshot() {
        let mut variables = VariableSet::new();
        variables.assign("x", "1");
        let snapshot = variables.clone();
        variables.assign("x", "2");
        variables.assign("y", "3");
        assert_eq!(snapshot.get("x"), Some("1"));
        assert_eq!(snapshot.get("y"), None);
    }
}
