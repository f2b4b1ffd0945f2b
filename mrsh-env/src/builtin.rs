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

//! Host-provided commands
//!
//! The shell itself implements no commands; the host registers them. A
//! [`Builtin`] couples a name (plus aliases) with a typed parameter schema
//! and an async handler. The [`Registry`] resolves invocations by alias or
//! name, and the [`args`] module parses a command line against the schema
//! before the handler runs.

pub mod args;

use crate::semantics::ExitStatus;
use crate::Env;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Type of a declared parameter
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParamType {
    /// Boolean flag; present means true
    Bool,
    /// Free-form string
    Str,
    /// Number, validated at parse time
    Num,
    /// String list; repeated occurrences accumulate
    List,
}

/// Value of a parsed parameter
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Str(String),
    Num(f64),
    List(Vec<String>),
}

/// Declaration of one option a command accepts
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSpec {
    /// Long option name, used as `--name`
    pub name: String,
    /// Value type
    pub r#type: ParamType,
    /// Single-character form, used as `-x`
    pub short: Option<char>,
    /// Value used when the option is absent
    pub default: Option<Value>,
    /// Whether omitting the option is a usage error
    pub required: bool,
}

impl ParamSpec {
    /// Creates a new parameter declaration.
    pub fn new<N: Into<String>>(name: N, r#type: ParamType) -> ParamSpec {
        ParamSpec {
            name: name.into(),
            r#type,
            short: None,
            default: None,
            required: false,
        }
    }

    /// Declares a single-character form for this option.
    #[must_use]
    pub fn short(mut self, short: char) -> ParamSpec {
        self.short = Some(short);
        self
    }

    /// Declares the value used when the option is absent.
    #[must_use]
    pub fn default_value(mut self, default: Value) -> ParamSpec {
        self.default = Some(default);
        self
    }

    /// Makes the option mandatory.
    #[must_use]
    pub fn required(mut self) -> ParamSpec {
        self.required = true;
        self
    }
}

/// Result of parsing a command line against a schema
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    options: HashMap<String, Value>,
    /// Arguments that did not parse as options, in order
    pub operands: Vec<String>,
}

impl Params {
    /// Returns the value of an option.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Returns a boolean option, defaulting to false.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.options.get(name), Some(Value::Bool(true)))
    }

    /// Returns a string option.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns a numeric option.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.options.get(name) {
            Some(Value::Num(n)) => Some(*n),
            _ => None,
        }
    }

    pub(crate) fn set(&mut self, name: &str, value: Value) {
        self.options.insert(name.to_string(), value);
    }

    pub(crate) fn push_list(&mut self, name: &str, item: String) {
        match self.options.get_mut(name) {
            Some(Value::List(items)) => items.push(item),
            _ => {
                self.options
                    .insert(name.to_string(), Value::List(vec![item]));
            }
        }
    }
}

/// Result of command handler execution
///
/// The result combines an exit status with an optional
/// [`Divert`](crate::semantics::Divert) that affects the shell after the
/// handler returns, such as a request to exit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub struct Result {
    exit_status: ExitStatus,
    divert: crate::semantics::Result,
}

impl Result {
    /// Creates a new result with no divert.
    pub const fn new(exit_status: ExitStatus) -> Self {
        Self {
            exit_status,
            divert: std::ops::ControlFlow::Continue(()),
        }
    }

    /// Creates a new result with a divert.
    pub const fn with_exit_status_and_divert(
        exit_status: ExitStatus,
        divert: crate::semantics::Result,
    ) -> Self {
        Self {
            exit_status,
            divert,
        }
    }

    /// Returns the exit status of this result.
    #[must_use]
    pub const fn exit_status(&self) -> ExitStatus {
        self.exit_status
    }

    /// Returns the divert requested by the handler.
    #[must_use]
    pub const fn divert(&self) -> crate::semantics::Result {
        self.divert
    }
}

impl Default for Result {
    fn default() -> Self {
        Self::new(ExitStatus::default())
    }
}

impl From<ExitStatus> for Result {
    fn from(exit_status: ExitStatus) -> Self {
        Self::new(exit_status)
    }
}

/// Type of functions that implement the behavior of a command
///
/// The first argument is the environment the command runs in; the second is
/// the parsed parameters. The handler returns its result asynchronously.
pub type Main = fn(&mut Env, Params) -> Pin<Box<dyn Future<Output = Result> + '_>>;

/// Host command definition
#[derive(Clone)]
pub struct Builtin {
    /// Primary name
    pub name: String,
    /// Alternative names resolved to this command
    pub aliases: Vec<String>,
    /// One-line description, for help listings
    pub description: String,
    /// Optional grouping label, for help listings
    pub category: Option<String>,
    /// Declared options
    pub params: Vec<ParamSpec>,
    /// Extra single-character aliases mapping to long option names
    pub short_aliases: Vec<(char, String)>,
    /// Function that implements the behavior of the command
    pub execute: Main,
    /// Whether the command is omitted from visible listings
    pub hidden: bool,
}

impl Builtin {
    /// Creates a command definition with no options.
    pub fn new<N, D>(name: N, description: D, execute: Main) -> Builtin
    where
        N: Into<String>,
        D: Into<String>,
    {
        Builtin {
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            category: None,
            params: Vec::new(),
            short_aliases: Vec::new(),
            execute,
            hidden: false,
        }
    }
}

impl Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}

/// Collection of host commands, indexed by name and alias
#[derive(Clone, Debug, Default)]
pub struct Registry {
    commands: HashMap<String, Rc<Builtin>>,
    aliases: HashMap<String, String>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registers a command under its name and all of its aliases.
    ///
    /// A previous command of the same name is replaced.
    pub fn register(&mut self, builtin: Builtin) {
        let builtin = Rc::new(builtin);
        for alias in &builtin.aliases {
            self.aliases.insert(alias.clone(), builtin.name.clone());
        }
        self.commands.insert(builtin.name.clone(), builtin);
    }

    /// Looks up a command, trying aliases first, then names.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<Builtin>> {
        let canonical = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.commands.get(canonical).cloned()
    }

    /// Returns all commands, sorted by name.
    #[must_use]
    pub fn list(&self) -> Vec<Rc<Builtin>> {
        let mut commands: Vec<_> = self.commands.values().cloned().collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    /// Returns all commands that are not hidden, sorted by name.
    #[must_use]
    pub fn list_visible(&self) -> Vec<Rc<Builtin>> {
        let mut commands = self.list();
        commands.retain(|builtin| !builtin.hidden);
        commands
    }
}
