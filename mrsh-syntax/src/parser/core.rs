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

//! Fundamentals of the syntax parser
//!
//! The [`Parser`] wraps a [`Lexer`] and adds the utilities the grammar
//! productions in the sibling modules are built from: conditional token
//! acceptance and error construction. The productions themselves live in one
//! module per construct.

use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Lexer, Operator, Token, TokenId};
use crate::syntax::List;

/// Result of parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Parses a whole program.
///
/// This is the main entry point of the parser. All input must be consumed;
/// a leftover token is a [`SyntaxError::RedundantToken`].
pub fn parse(source: &str) -> Result<List> {
    Parser::new(Lexer::new(source)).program()
}

/// Shell language syntax parser
///
/// The parser is a recursive-descent parser with one-token look-ahead.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser reading tokens from the given lexer.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Parser<'a> {
        Parser { lexer }
    }

    /// Peeks the next token.
    pub(super) fn peek(&mut self) -> &Token {
        self.lexer.peek_token()
    }

    /// Peeks the next token's identifier.
    pub(super) fn peek_id(&mut self) -> TokenId {
        self.lexer.peek_token().id
    }

    /// Consumes and returns the next token.
    pub(super) fn take(&mut self) -> Token {
        self.lexer.next_token()
    }

    /// Returns true if the next token is the given operator.
    pub(super) fn at_operator(&mut self, op: Operator) -> bool {
        self.peek_id() == TokenId::Operator(op)
    }

    /// Consumes the next token if it is the given operator.
    pub(super) fn accept_operator(&mut self, op: Operator) -> bool {
        let hit = self.at_operator(op);
        if hit {
            self.take();
        }
        hit
    }

    /// Returns true if the next token is the given reserved word.
    pub(super) fn at_keyword(&mut self, keyword: Keyword) -> bool {
        self.peek_id() == TokenId::Word(Some(keyword))
    }

    /// Consumes the next token if it is the given reserved word.
    pub(super) fn accept_keyword(&mut self, keyword: Keyword) -> bool {
        let hit = self.at_keyword(keyword);
        if hit {
            self.take();
        }
        hit
    }

    /// Consumes any number of newline tokens.
    pub(super) fn skip_newlines(&mut self) {
        while self.peek_id() == TokenId::Newline {
            self.take();
        }
    }

    /// Produces an error located at the next token.
    pub(super) fn error<T>(&mut self, cause: SyntaxError) -> Result<T> {
        let position = self.peek().position;
        Err(Error { cause, position })
    }

    /// Parses a whole program: a compound list followed by the end of input.
    pub fn program(&mut self) -> Result<List> {
        let list = self.command_list()?;
        if self.peek_id() == TokenId::EndOfInput {
            Ok(list)
        } else {
            self.error(SyntaxError::RedundantToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        let list = parse("").unwrap();
        assert_eq!(list.0, []);
        let list = parse("  \n # comment \n").unwrap();
        assert_eq!(list.0, []);
    }

    #[test]
    fn redundant_token_is_an_error() {
        let error = parse("echo x; fi").unwrap_err();
        assert_eq!(error.cause, SyntaxError::RedundantToken);
        assert_eq!(error.position.offset, 8);
    }

    #[test]
    fn error_positions_point_at_the_offending_token() {
        let error = parse("echo | | cat").unwrap_err();
        assert_eq!(error.position.offset, 7);
    }
}
