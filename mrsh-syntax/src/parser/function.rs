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

//! Syntax parser for function definition commands

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Operator::CloseParen;
use crate::syntax::{Command, FunctionDefinition};
use std::rc::Rc;

impl Parser<'_> {
    /// Parses a function definition after its name.
    ///
    /// The name token has been consumed; the next token must be `(`.
    pub(super) fn function_definition(&mut self, name: String) -> Result<Command> {
        self.take();
        if !self.accept_operator(CloseParen) {
            return self.error(SyntaxError::UnmatchedParenthesis);
        }

        self.skip_newlines();
        match self.maybe_compound_command()? {
            Some(body) => Ok(Command::Function(FunctionDefinition {
                name,
                body: Rc::new(body),
            })),
            None => self.error(SyntaxError::MissingFunctionBody),
        }
    }
}
