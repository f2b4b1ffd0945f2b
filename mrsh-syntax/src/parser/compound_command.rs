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

//! Syntax parser for compound commands

use super::core::{Parser, Result};
use super::lex::Keyword::{Case, For, If, Until, While};
use super::lex::Operator::{OpenBrace, OpenParen};
use super::lex::TokenId;
use crate::syntax::CompoundCommand;

impl Parser<'_> {
    /// Parses a compound command.
    ///
    /// Returns `Ok(None)` if the next token does not open a compound
    /// command. The token is not consumed in that case.
    pub(super) fn maybe_compound_command(&mut self) -> Result<Option<CompoundCommand>> {
        match self.peek_id() {
            TokenId::Operator(OpenBrace) => self.brace_group().map(Some),
            TokenId::Operator(OpenParen) => self.subshell().map(Some),
            TokenId::Word(Some(If)) => self.if_command().map(Some),
            TokenId::Word(Some(For)) => self.for_loop().map(Some),
            TokenId::Word(Some(While)) => self.while_loop(false).map(Some),
            TokenId::Word(Some(Until)) => self.while_loop(true).map(Some),
            TokenId::Word(Some(Case)) => self.case_command().map(Some),
            _ => Ok(None),
        }
    }
}
