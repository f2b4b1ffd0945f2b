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

//! Syntax parser for if command

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Keyword::{Elif, Else, Fi, Then};
use crate::syntax::{CompoundCommand, ElifThen};

impl Parser<'_> {
    /// Parses an elif-then clause.
    ///
    /// Returns `Ok(None)` if the next token is not `elif`.
    fn elif_then_clause(&mut self) -> Result<Option<ElifThen>> {
        if !self.accept_keyword(Elif) {
            return Ok(None);
        }

        let condition = self.command_list()?;
        if condition.0.is_empty() {
            return self.error(SyntaxError::EmptyCondition);
        }
        if !self.accept_keyword(Then) {
            let opening = self.peek().position;
            return self.error(SyntaxError::MissingThen { opening });
        }
        let body = self.command_list()?;
        Ok(Some(ElifThen { condition, body }))
    }

    /// Parses an if conditional construct.
    ///
    /// The next token must be the `if` reserved word.
    pub(super) fn if_command(&mut self) -> Result<CompoundCommand> {
        let opening = self.take().position;

        let condition = self.command_list()?;
        if condition.0.is_empty() {
            return self.error(SyntaxError::EmptyCondition);
        }
        if !self.accept_keyword(Then) {
            return self.error(SyntaxError::MissingThen { opening });
        }
        let body = self.command_list()?;

        let mut elifs = Vec::new();
        while let Some(elif) = self.elif_then_clause()? {
            elifs.push(elif);
        }

        let r#else = if self.accept_keyword(Else) {
            Some(self.command_list()?)
        } else {
            None
        };

        if self.accept_keyword(Fi) {
            Ok(CompoundCommand::If {
                condition,
                body,
                elifs,
                r#else,
            })
        } else {
            self.error(SyntaxError::UnclosedIf { opening })
        }
    }
}
