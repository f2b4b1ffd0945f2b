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

//! Syntax parser for while and until loops

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Keyword::{Do, Done};
use crate::syntax::CompoundCommand;

impl Parser<'_> {
    /// Parses a while or until loop.
    ///
    /// The next token must be the `while` or `until` reserved word,
    /// matching the `is_until` argument.
    pub(super) fn while_loop(&mut self, is_until: bool) -> Result<CompoundCommand> {
        let opening = self.take().position;

        let condition = self.command_list()?;
        if condition.0.is_empty() {
            return self.error(SyntaxError::EmptyCondition);
        }
        if !self.accept_keyword(Do) {
            return self.error(SyntaxError::MissingDo { opening });
        }
        let body = self.command_list()?;
        if !self.accept_keyword(Done) {
            return self.error(SyntaxError::UnclosedDoClause { opening });
        }

        Ok(if is_until {
            CompoundCommand::Until { condition, body }
        } else {
            CompoundCommand::While { condition, body }
        })
    }
}
