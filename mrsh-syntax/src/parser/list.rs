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

//! Syntax parser for lists, and-or lists, and pipelines

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Keyword::Bang;
use super::lex::Operator::{
    And, AndAnd, Bar, BarBar, CloseBrace, CloseParen, Semicolon, SemicolonSemicolon,
};
use super::lex::TokenId;
use crate::syntax::{AndOr, AndOrList, Item, List, Pipeline};

impl Parser<'_> {
    /// Returns true if the next token closes the current compound list.
    ///
    /// Closers are the tokens consumed by the enclosing construct: `)`, `}`,
    /// `;;`, a clause-delimiting reserved word, or the end of input.
    fn at_closer(&mut self) -> bool {
        match self.peek_id() {
            TokenId::Operator(CloseParen | CloseBrace | SemicolonSemicolon) => true,
            TokenId::Word(Some(keyword)) => keyword.is_clause_delimiter(),
            TokenId::EndOfInput => true,
            _ => false,
        }
    }

    /// Parses a possibly empty compound list.
    ///
    /// Commands are parsed until a [closer](Self::at_closer) is seen. The
    /// closer itself is not consumed.
    pub(super) fn command_list(&mut self) -> Result<List> {
        let mut items = Vec::new();
        loop {
            self.skip_newlines();
            if self.at_closer() {
                return Ok(List(items));
            }

            let and_or = self.and_or_list()?;
            let mut is_async = false;
            match self.peek_id() {
                TokenId::Operator(And) => {
                    self.take();
                    is_async = true;
                }
                TokenId::Operator(Semicolon) => {
                    self.take();
                }
                TokenId::Newline => {
                    self.take();
                }
                _ if self.at_closer() => {
                    items.push(Item { and_or, is_async });
                    return Ok(List(items));
                }
                _ => return self.error(SyntaxError::MissingSeparator),
            }
            items.push(Item { and_or, is_async });
        }
    }

    /// Parses an and-or list: pipelines connected by `&&` and `||`.
    fn and_or_list(&mut self) -> Result<AndOrList> {
        let first = self.pipeline()?;
        let mut rest = Vec::new();
        loop {
            let and_or = match self.peek_id() {
                TokenId::Operator(AndAnd) => AndOr::AndThen,
                TokenId::Operator(BarBar) => AndOr::OrElse,
                _ => return Ok(AndOrList { first, rest }),
            };
            self.take();
            self.skip_newlines();
            if self.at_closer() {
                return self.error(SyntaxError::MissingCommandAfterAndOr);
            }
            rest.push((and_or, self.pipeline()?));
        }
    }

    /// Parses a pipeline: commands connected by `|`, optionally negated.
    fn pipeline(&mut self) -> Result<Pipeline> {
        let negation = self.accept_keyword(Bang);

        let first = match self.command()? {
            Some(command) => command,
            None if negation => return self.error(SyntaxError::MissingCommandAfterBang),
            None => return self.error(SyntaxError::InvalidCommandToken),
        };

        let mut commands = vec![first];
        while self.accept_operator(Bar) {
            self.skip_newlines();
            match self.command()? {
                Some(command) => commands.push(command),
                None => return self.error(SyntaxError::MissingCommandAfterBar),
            }
        }
        Ok(Pipeline { commands, negation })
    }
}
