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

//! Defining aliases
//!
//! An alias substitutes a command word with replacement text before the
//! statement is re-parsed. Aliases are applied by the evaluator, one
//! substitution pass per command invocation.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Name-value pair that defines an alias
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alias {
    /// Name that is matched against a command word
    pub name: String,
    /// Text that substitutes the command word
    pub replacement: String,
}

/// Wrapper of [`Alias`] for inserting into a hash set
///
/// A `HashEntry` wraps an `Alias` in `Rc` so that the definition can be
/// referred to even after it is removed from the set. The `Hash` and
/// `PartialEq` implementations compare only names.
#[derive(Clone, Debug, Eq)]
pub struct HashEntry(pub Rc<Alias>);

impl HashEntry {
    /// Convenience method for creating a new alias definition
    pub fn new<N: Into<String>, R: Into<String>>(name: N, replacement: R) -> HashEntry {
        HashEntry(Rc::new(Alias {
            name: name.into(),
            replacement: replacement.into(),
        }))
    }
}

impl PartialEq for HashEntry {
    fn eq(&self, other: &HashEntry) -> bool {
        self.0.name == other.0.name
    }
}

impl Hash for HashEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state)
    }
}

impl Borrow<str> for HashEntry {
    fn borrow(&self) -> &str {
        &self.0.name
    }
}

/// Collection of aliases
pub type AliasSet = HashSet<HashEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let mut aliases = AliasSet::new();
        aliases.insert(HashEntry::new("ll", "ls -l"));
        assert_eq!(aliases.get("ll").unwrap().0.replacement, "ls -l");
        assert_eq!(aliases.get("ls"), None);
    }

    #[test]
    fn replacing_keeps_one_entry_per_name() {
        let mut aliases = AliasSet::new();
        aliases.insert(HashEntry::new("x", "old"));
        let old = aliases.replace(HashEntry::new("x", "new")).unwrap();
        assert_eq!(old.0.replacement, "old");
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get("x").unwrap().0.replacement, "new");
    }
}
