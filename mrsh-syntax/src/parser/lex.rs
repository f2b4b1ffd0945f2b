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

//! Lexical analyzer
//!
//! The lexer splits source text into [token](Token)s. A token's value is the
//! raw source fragment, including any quoting characters; the parser
//! re-scans word tokens to build [`Word`](crate::syntax::Word) trees.

mod core;
mod keyword;
mod op;
mod word;

pub use self::core::{is_blank, Lexer, Token, TokenId};
pub use self::keyword::Keyword;
pub use self::op::Operator;
