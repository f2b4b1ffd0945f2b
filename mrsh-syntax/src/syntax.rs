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

//! Shell command language syntax
//!
//! This module contains types that represent abstract syntax trees (ASTs) of
//! the shell language.
//!
//! ## Syntactic elements
//!
//! The AST type that represents a whole script is [`List`], a vector of
//! [`Item`]s. An `Item` is a possibly asynchronous [`AndOrList`], which is a
//! sequence of conditionally executed [`Pipeline`]s. A `Pipeline` is a
//! sequence of [`Command`]s separated by `|`.
//!
//! There are three types of `Command`s: [`SimpleCommand`],
//! [`CompoundCommand`] and [`FunctionDefinition`], where `CompoundCommand`
//! in turn comes in many variants.
//!
//! ## Lexical elements
//!
//! Tokens that make up commands may contain quotations and expansions. A
//! [`Word`] represents such a token; it is a tree whose leaves are literal
//! chunks, parameter expansions, command substitutions and arithmetic
//! expansions.
//!
//! ## Parsing
//!
//! Most AST types defined in this module implement the
//! [`FromStr`](std::str::FromStr) trait, which means you can easily get an
//! AST out of source code by calling `parse` on a `&str`. See the
//! [`parser`](crate::parser) module for the lower-level interface.

use crate::source::Position;
use std::rc::Rc;

/// Returns true if the string is a valid variable or function name.
///
/// A name starts with an ASCII letter or underscore and continues with ASCII
/// letters, digits and underscores.
#[must_use]
pub fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Returns true if the character names a special parameter.
///
/// Special parameters are accessed as `$?`, `$#`, and so on; see
/// [`Word::Param`].
#[must_use]
pub fn is_special_param(c: char) -> bool {
    matches!(c, '@' | '*' | '#' | '?' | '-' | '$' | '!' | '0'..='9')
}

/// Flag that specifies how the value is substituted in a [switch](Switch)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchType {
    /// Alter an existing value, if any. (`+`)
    Alter,
    /// Substitute a missing value with a default. (`-`)
    Default,
    /// Assign a default to the variable if the value is missing. (`=`)
    Assign,
    /// Error out if the value is missing. (`?`)
    Error,
}

/// Condition that triggers a [switch](Switch)
///
/// In the lexical grammar, a switch condition is an optional colon that
/// precedes a switch type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchCondition {
    /// Without a colon, the switch is triggered if the parameter is unset.
    Unset,
    /// With a colon, the switch is triggered if the parameter is unset or
    /// empty.
    UnsetOrEmpty,
}

/// Parameter expansion [modifier](Modifier) that conditionally substitutes
/// the value being expanded
///
/// Examples of switches include `+foo`, `:-bar` and `:=baz`.
#[derive(Clone, Debug, PartialEq)]
pub struct Switch {
    /// How the value is substituted
    pub r#type: SwitchType,
    /// Condition that determines whether the value is substituted or not
    pub condition: SwitchCondition,
    /// Word that substitutes the parameter value
    pub word: Box<Word>,
}

/// Flag that specifies which side of the expanded value is removed in a
/// [trim](Trim)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrimSide {
    /// Beginning of the value (`#` and `##`)
    Prefix,
    /// End of the value (`%` and `%%`)
    Suffix,
}

/// Flag that specifies the pattern matching strategy in a [trim](Trim)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrimLength {
    /// Match as few characters as possible.
    Shortest,
    /// Match as many characters as possible.
    Longest,
}

/// Parameter expansion [modifier](Modifier) that removes the beginning or
/// end of the value being expanded
///
/// Examples of trims include `#foo`, `##bar` and `%%baz*`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trim {
    /// Which side of the value is removed
    pub side: TrimSide,
    /// How much of the value the pattern should match
    pub length: TrimLength,
    /// Pattern to be matched with the expanded value
    pub pattern: Box<Word>,
}

/// Attribute that modifies a parameter expansion
#[derive(Clone, Debug, PartialEq)]
pub enum Modifier {
    /// No modifier (`${foo}`)
    None,
    /// `#` prefix (`${#foo}`), expanding to the length of the value
    Length,
    /// `+`, `-`, `=` or `?` suffix, optionally with `:` (`${foo:-bar}`)
    Switch(Switch),
    /// `#`, `##`, `%` or `%%` suffix followed by a pattern (`${foo%bar}`)
    Trim(Trim),
}

/// Parameter expansion
///
/// The name is either a plain variable name (`foo`), a special parameter
/// (`?`, `#`, `@`, ...) or a positional digit. Which kind it is can be told
/// from the name itself, so no separate discriminant is stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    /// Name of the parameter, without the `$` or braces
    pub name: String,
    /// Modifier applied to the value
    pub modifier: Modifier,
    /// Position of this expansion in the source code
    pub position: Position,
}

/// Word: a token that may involve quotations and expansions
///
/// A word is a tree of variants, one per syntactic kind. A composite token
/// like `a"b$c"` parses into a [`Concat`](Self::Concat) of smaller words; a
/// concatenation of one element collapses into that element.
#[derive(Clone, Debug, PartialEq)]
pub enum Word {
    /// Literal chunk of text
    Literal {
        /// The text, with quoting characters removed
        value: String,
        /// Whether the chunk was single-quoted, which suppresses all
        /// expansion
        single_quoted: bool,
        /// Whether the chunk would be subject to field splitting
        ///
        /// Field splitting itself is not performed by the word engine; the
        /// flag records what the quoting context was.
        split_fields: bool,
    },
    /// Parameter expansion (`$foo`, `${foo:-bar}`, ...)
    Param(Param),
    /// Command substitution (`$(...)` or `` `...` ``)
    CommandSubst {
        /// The substituted program, parsed eagerly at word-construction time
        ///
        /// The list is reference-counted so that cloning a word does not
        /// clone the whole sub-program.
        body: Rc<List>,
        /// True for the backquoted form
        back_quoted: bool,
        /// Position of this substitution in the source code
        position: Position,
    },
    /// Arithmetic expansion (`$((...))`)
    Arith {
        /// The expression, itself a word that is expanded before evaluation
        body: Box<Word>,
        /// Position of this expansion in the source code
        position: Position,
    },
    /// Concatenation of smaller words
    Concat {
        /// The parts, expanded left to right
        units: Vec<Word>,
        /// True if the parts come from a double-quoted region
        double_quoted: bool,
    },
}

impl Word {
    /// Creates an unquoted literal word.
    #[must_use]
    pub fn literal<S: Into<String>>(value: S) -> Word {
        Word::Literal {
            value: value.into(),
            single_quoted: false,
            split_fields: true,
        }
    }

    /// Creates an empty unquoted literal word.
    #[must_use]
    pub fn empty() -> Word {
        Word::literal("")
    }

    /// Returns the literal value if this word contains no quoting and no
    /// expansions.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Word::Literal {
                value,
                single_quoted: false,
                ..
            } => Some(value),
            _ => None,
        }
    }
}

/// File descriptor number appearing in a redirection
///
/// This is the `newtype` pattern applied to `i32`. Only 0, 1 and 2 are
/// meaningful to the string-level evaluator, but any decimal digit parses.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Fd(pub i32);

impl Fd {
    /// File descriptor of the standard input
    pub const STDIN: Fd = Fd(0);
    /// File descriptor of the standard output
    pub const STDOUT: Fd = Fd(1);
    /// File descriptor of the standard error
    pub const STDERR: Fd = Fd(2);
}

/// Redirection operators
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RedirOp {
    /// `<` (read a file into the standard input)
    FileIn,
    /// `<>` (open a file for input and output)
    FileInOut,
    /// `>` (write the standard output to a file, truncating)
    FileOut,
    /// `>>` (write the standard output to a file, appending)
    FileAppend,
    /// `>|` (like `>`, always truncating)
    FileClobber,
    /// `<&` (duplicate an input file descriptor)
    FdIn,
    /// `>&` (duplicate an output file descriptor)
    FdOut,
    /// `<<` or `<<-` (here-document; parsed but inert)
    HereDoc {
        /// True for the `<<-` operator
        remove_tabs: bool,
    },
}

/// Redirection
#[derive(Clone, Debug, PartialEq)]
pub struct Redir {
    /// File descriptor the redirection applies to, if one was written
    pub fd: Option<Fd>,
    /// Operator
    pub op: RedirOp,
    /// Operand word (target path, file descriptor digit, or here-document
    /// delimiter)
    pub operand: Word,
}

impl Redir {
    /// Computes the file descriptor that is modified by this redirection.
    ///
    /// If `self.fd` is `Some(_)`, that value is returned intact. Otherwise,
    /// the default file descriptor is selected depending on the operator.
    #[must_use]
    pub fn fd_or_default(&self) -> Fd {
        use RedirOp::*;
        self.fd.unwrap_or(match self.op {
            FileIn | FileInOut | FdIn | HereDoc { .. } => Fd::STDIN,
            FileOut | FileAppend | FileClobber | FdOut => Fd::STDOUT,
        })
    }
}

/// Assignment word
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    /// Name of the variable to assign to; always a valid name
    pub name: String,
    /// Value assigned to the variable
    pub value: Word,
    /// Position of the assignment word
    pub position: Position,
}

/// Command that involves assignments, redirections, and word expansions
///
/// A valid simple command contains at least one of assignments, redirections
/// and words. The parser never produces a completely empty simple command.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleCommand {
    /// Assignments
    pub assigns: Vec<Assign>,
    /// Command name and arguments
    pub words: Vec<Word>,
    /// Redirections
    pub redirs: Vec<Redir>,
}

impl SimpleCommand {
    /// Returns true if the command has no assignments, words or
    /// redirections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigns.is_empty() && self.words.is_empty() && self.redirs.is_empty()
    }
}

/// `elif-then` clause of an `if` command
#[derive(Clone, Debug, PartialEq)]
pub struct ElifThen {
    pub condition: List,
    pub body: List,
}

/// Branch item of a `case` compound command
#[derive(Clone, Debug, PartialEq)]
pub struct CaseItem {
    /// Patterns matched against the subject word
    ///
    /// A syntactically valid case item has at least one pattern.
    pub patterns: Vec<Word>,
    /// Commands executed when a pattern matches
    pub body: List,
}

/// Command that contains other commands
#[derive(Clone, Debug, PartialEq)]
pub enum CompoundCommand {
    /// `{ ... }` grouping, run in the current environment
    Grouping(List),
    /// `( ... )`, run with the environment and working directory restored
    /// afterwards
    Subshell(List),
    /// For loop
    For {
        /// Loop variable name
        name: String,
        /// Values to iterate over; `None` when the `in` clause is absent
        values: Option<Vec<Word>>,
        body: List,
    },
    /// While loop
    While { condition: List, body: List },
    /// Until loop
    Until { condition: List, body: List },
    /// If conditional construct
    If {
        condition: List,
        body: List,
        elifs: Vec<ElifThen>,
        r#else: Option<List>,
    },
    /// Case conditional construct
    Case { subject: Word, items: Vec<CaseItem> },
}

/// Function definition command
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDefinition {
    /// Function name
    pub name: String,
    /// Function body
    ///
    /// The body is reference-counted because it is retained in the function
    /// table past the lifetime of the defining program.
    pub body: Rc<CompoundCommand>,
}

/// Element of a pipe sequence
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Simple command
    Simple(SimpleCommand),
    /// Compound command
    Compound(CompoundCommand),
    /// Function definition command
    Function(FunctionDefinition),
}

/// Commands separated by `|`
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    /// Elements of the pipeline; a valid pipeline has at least one command
    pub commands: Vec<Command>,
    /// Whether the pipeline begins with a `!`
    pub negation: bool,
}

/// Condition that decides if a [`Pipeline`] in an [and-or
/// list](AndOrList) should be executed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AndOr {
    /// `&&`
    AndThen,
    /// `||`
    OrElse,
}

/// Pipelines separated by `&&` and `||`
#[derive(Clone, Debug, PartialEq)]
pub struct AndOrList {
    pub first: Pipeline,
    pub rest: Vec<(AndOr, Pipeline)>,
}

/// Element of a [`List`]
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Main part of this item
    pub and_or: AndOrList,
    /// Whether the item was terminated by `&`
    ///
    /// The flag is recorded but the item still runs synchronously;
    /// background scheduling is outside the language core.
    pub is_async: bool,
}

/// Sequence of [and-or lists](AndOrList) separated by `;`, `&` or newlines
///
/// This is the type of a whole program as well as of each compound command
/// body. It depends on context whether an empty list is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct List(pub Vec<Item>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validity() {
        assert!(is_name("foo"));
        assert!(is_name("_foo_1"));
        assert!(is_name("F"));
        assert!(!is_name(""));
        assert!(!is_name("1a"));
        assert!(!is_name("a-b"));
        assert!(!is_name("a.b"));
    }

    #[test]
    fn special_params() {
        for c in "@*#?-$!0123456789".chars() {
            assert!(is_special_param(c), "{c:?}");
        }
        assert!(!is_special_param('a'));
        assert!(!is_special_param('{'));
    }

    #[test]
    fn redir_fd_or_default() {
        let redir = Redir {
            fd: None,
            op: RedirOp::FileOut,
            operand: Word::literal("file"),
        };
        assert_eq!(redir.fd_or_default(), Fd::STDOUT);

        let redir = Redir {
            fd: None,
            op: RedirOp::FileIn,
            operand: Word::literal("file"),
        };
        assert_eq!(redir.fd_or_default(), Fd::STDIN);

        let redir = Redir {
            fd: Some(Fd(2)),
            op: RedirOp::FileOut,
            operand: Word::literal("file"),
        };
        assert_eq!(redir.fd_or_default(), Fd::STDERR);
    }

    #[test]
    fn word_as_literal() {
        assert_eq!(Word::literal("x").as_literal(), Some("x"));
        let quoted = Word::Literal {
            value: "x".to_string(),
            single_quoted: true,
            split_fields: false,
        };
        assert_eq!(quoted.as_literal(), None);
    }
}
