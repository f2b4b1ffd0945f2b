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

//! Syntax parser for for loops

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Keyword::{Do, Done, In};
use super::lex::Operator::Semicolon;
use super::lex::TokenId;
use super::word::word_from_token;
use crate::syntax::{is_name, CompoundCommand};

impl Parser<'_> {
    /// Parses a for loop.
    ///
    /// The next token must be the `for` reserved word.
    pub(super) fn for_loop(&mut self) -> Result<CompoundCommand> {
        let opening = self.take().position;

        let name = match self.peek_id() {
            TokenId::Word(_) if is_name(&self.peek().value) => self.take().value,
            _ => return self.error(SyntaxError::InvalidForName),
        };

        self.skip_newlines();
        let values = if self.accept_keyword(In) {
            let mut values = Vec::new();
            while let TokenId::Word(_) = self.peek_id() {
                let token = self.take();
                values.push(word_from_token(&token)?);
            }
            Some(values)
        } else {
            None
        };

        self.skip_newlines();
        self.accept_operator(Semicolon);
        self.skip_newlines();
        if !self.accept_keyword(Do) {
            return self.error(SyntaxError::MissingDo { opening });
        }
        let body = self.command_list()?;
        if !self.accept_keyword(Done) {
            return self.error(SyntaxError::UnclosedDoClause { opening });
        }

        Ok(CompoundCommand::For { name, values, body })
    }
}
