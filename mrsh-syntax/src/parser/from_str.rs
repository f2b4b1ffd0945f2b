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

//! Implementations of [`FromStr`] for AST types
//!
//! These implementations are a convenience for tests and embedders: an AST
//! can be obtained by calling `parse` on a source string.

use super::core::{parse, Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Lexer, TokenId};
use super::word::word_from_raw;
use crate::source::Position;
use crate::syntax::{Command, List, Word};
use std::str::FromStr;

impl FromStr for List {
    type Err = Error;
    fn from_str(s: &str) -> Result<List> {
        parse(s)
    }
}

impl FromStr for Command {
    type Err = Error;
    fn from_str(s: &str) -> Result<Command> {
        let mut parser = Parser::new(Lexer::new(s));
        let command = parser.command()?;
        if parser.peek_id() != TokenId::EndOfInput {
            return parser.error(SyntaxError::RedundantToken);
        }
        match command {
            Some(command) => Ok(command),
            None => parser.error(SyntaxError::InvalidCommandToken),
        }
    }
}

impl FromStr for Word {
    type Err = Error;
    fn from_str(s: &str) -> Result<Word> {
        word_from_raw(s, Position::start())
    }
}
