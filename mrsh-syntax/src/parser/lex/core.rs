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

//! Fundamental building blocks for the lexical analyzer.

use super::keyword::Keyword;
use super::op::{is_operator_start, Operator};
use crate::source::Position;
use std::fmt;

/// Returns true if the character is a blank character.
#[must_use]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Token identifier, or classification of tokens
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenId {
    /// Word token
    ///
    /// If the word _looks like_ a reserved word, this variant has an
    /// associated `Keyword` describing it. However, it depends on context
    /// whether the token is actually regarded as a reserved word or just as
    /// an ordinary word; the parser decides. Quoting defeats the keyword
    /// classification, so `"if"` is a plain word.
    Word(Option<Keyword>),
    /// Operator token
    Operator(Operator),
    /// Newline
    Newline,
    /// Single digit immediately preceding a redirection operator
    IoNumber,
    /// Imaginary token identifier for the end of input
    EndOfInput,
}

/// Result of lexical analysis produced by the [`Lexer`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// Raw source fragment of the token, including any quoting characters
    ///
    /// Empty only for the end-of-input token.
    pub value: String,
    /// Token identifier
    pub id: TokenId,
    /// Position of the first character of the token
    pub position: Position,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id == TokenId::EndOfInput {
            f.write_str("end of input")
        } else {
            f.write_str(&self.value)
        }
    }
}

/// Lexical analyzer
///
/// A lexer scans a complete source string and parses the characters into
/// tokens. It has primitive functions such as [`peek_char`](Lexer::peek_char)
/// that provide access to the character at the current position; derived
/// functions in the sibling modules depend on those primitives to parse more
/// complex structures.
///
/// The lexer is lenient about unterminated constructs: a quote or
/// substitution that is still open at the end of input is closed there, and
/// the parser reports an error if the resulting word is malformed.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    base: Position,
    pos: Position,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for a source string.
    #[must_use]
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::with_origin(source, Position::start())
    }

    /// Creates a new lexer whose positions start at `origin`.
    ///
    /// This is used when parsing a fragment embedded in a larger source,
    /// e.g. the body of a command substitution, so that positions in the
    /// fragment refer to the enclosing source.
    #[must_use]
    pub fn with_origin(source: &'a str, origin: Position) -> Lexer<'a> {
        Lexer {
            source,
            base: origin,
            pos: origin,
            peeked: None,
        }
    }

    /// Returns the not-yet-consumed part of the source.
    pub(super) fn rest(&self) -> &'a str {
        &self.source[self.pos.offset - self.base.offset..]
    }

    /// Peeks the next character.
    pub(super) fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes the next character and returns it.
    pub(super) fn consume_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos = self.pos.after(c);
        Some(c)
    }

    /// Returns the source fragment between `start` and the current position.
    fn fragment_from(&self, start: Position) -> &'a str {
        &self.source[start.offset - self.base.offset..self.pos.offset - self.base.offset]
    }

    /// Skips blanks, comments, and line continuations.
    ///
    /// A `#` outside any quote begins a comment through the end of the line;
    /// the newline itself is not skipped.
    fn skip_blanks_and_comment(&mut self) {
        loop {
            match self.peek_char() {
                Some(c) if is_blank(c) => {
                    self.consume_char();
                }
                Some('\\') if self.rest()[1..].starts_with('\n') => {
                    self.consume_char();
                    self.consume_char();
                }
                Some('#') => {
                    while !matches!(self.peek_char(), None | Some('\n')) {
                        self.consume_char();
                    }
                }
                _ => return,
            }
        }
    }

    /// Peeks the next token without consuming it.
    pub fn peek_token(&mut self) -> &Token {
        if self.peeked.is_none() {
            self.peeked = Some(self.read_token());
        }
        self.peeked.as_ref().unwrap()
    }

    /// Consumes and returns the next token.
    ///
    /// After the end of input has been reached, every call returns another
    /// end-of-input token.
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.read_token(),
        }
    }

    fn read_token(&mut self) -> Token {
        self.skip_blanks_and_comment();
        let start = self.pos;

        let Some(c) = self.peek_char() else {
            return Token {
                value: String::new(),
                id: TokenId::EndOfInput,
                position: start,
            };
        };

        if c == '\n' {
            self.consume_char();
            return Token {
                value: "\n".to_string(),
                id: TokenId::Newline,
                position: start,
            };
        }

        // A single digit directly followed by `<` or `>` is an IO number.
        if c.is_ascii_digit() {
            let mut chars = self.rest().chars();
            chars.next();
            if matches!(chars.next(), Some('<' | '>')) {
                self.consume_char();
                return Token {
                    value: c.to_string(),
                    id: TokenId::IoNumber,
                    position: start,
                };
            }
        }

        if is_operator_start(c) {
            let op = self.operator();
            return Token {
                value: self.fragment_from(start).to_string(),
                id: TokenId::Operator(op),
                position: start,
            };
        }

        let plain = self.raw_word();
        let value = self.fragment_from(start).to_string();
        let keyword = if plain { value.parse().ok() } else { None };
        Token {
            value,
            id: TokenId::Word(keyword),
            position: start,
        }
    }
}
