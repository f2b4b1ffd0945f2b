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

//! Shell command language syntax for mrsh
//!
//! This crate contains the lexical analyzer and the recursive-descent parser
//! that turn shell source text into an abstract syntax tree. The three
//! modules are:
//!
//! - [`source`]: positions in source code
//! - [`syntax`]: AST type definitions
//! - [`parser`]: the lexer and the parser
//!
//! Most AST types implement [`FromStr`](std::str::FromStr), so the easiest
//! way to obtain an AST is to call `parse` on a `&str`:
//!
//! ```
//! use mrsh_syntax::syntax::List;
//! let list: List = "diff foo bar && echo same".parse().unwrap();
//! assert_eq!(list.0.len(), 1);
//! ```

pub mod parser;
pub mod source;
pub mod syntax;
