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

//! Defining functions
//!
//! Functions are stored in a name-indexed table rather than as references
//! among AST nodes, so a function body may freely call the function that is
//! being defined, or any function defined later.

use mrsh_syntax::syntax::CompoundCommand;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Definition of a function
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    /// Name the function is invoked by
    pub name: String,
    /// Command performed when the function is invoked
    ///
    /// The body is reference-counted because it outlives the program that
    /// defined it.
    pub body: Rc<CompoundCommand>,
}

impl Function {
    /// Convenience method for creating a new function definition
    pub fn new<N: Into<String>>(name: N, body: Rc<CompoundCommand>) -> Function {
        Function {
            name: name.into(),
            body,
        }
    }
}

/// Wrapper of [`Function`] for inserting into a hash set
///
/// The `Hash` and `PartialEq` implementations compare only names.
#[derive(Clone, Debug)]
pub struct HashEntry(pub Rc<Function>);

impl PartialEq for HashEntry {
    fn eq(&self, other: &HashEntry) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for HashEntry {}

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

/// Collection of functions
pub type FunctionSet = HashSet<HashEntry>;
