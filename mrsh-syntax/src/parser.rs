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

//! Syntax parser for the shell language
//!
//! This module implements a recursive-descent parser with one-token
//! look-ahead. The [lexer](lex) turns source text into [tokens](lex::Token)
//! whose values are raw source fragments; the [`Parser`] consumes the token
//! stream and produces the abstract syntax tree defined in
//! [`syntax`](crate::syntax).
//!
//! The simplest entry point is [`parse`], which parses a whole program:
//!
//! ```
//! let program = mrsh_syntax::parser::parse("echo hello | tr a-z A-Z").unwrap();
//! assert_eq!(program.0.len(), 1);
//! ```
//!
//! Word tokens are re-scanned into [`Word`](crate::syntax::Word) trees at
//! parse time, with `$(...)` and backquote bodies parsed eagerly into
//! sub-programs.

pub mod lex;

mod braced_param;
mod case;
mod command;
mod compound_command;
mod core;
mod error;
mod for_loop;
mod from_str;
mod function;
mod grouping;
mod r#if;
mod list;
mod redir;
mod simple_command;
mod while_loop;
mod word;

pub use self::core::{parse, Parser, Result};
pub use self::error::{Error, SyntaxError};
