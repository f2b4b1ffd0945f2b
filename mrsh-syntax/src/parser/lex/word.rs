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

//! Part of the lexer that scans word tokens.
//!
//! A word token's value is the raw source fragment, so the functions here
//! only advance the cursor past quotations and embedded expansions; the
//! parser re-scans the fragment to build the word tree. Each reader is
//! lenient: the end of input closes any open construct.

use super::core::{is_blank, Lexer};
use crate::syntax::is_special_param;

impl Lexer<'_> {
    /// Consumes a word from the source.
    ///
    /// Reading proceeds until an unquoted metacharacter. Returns true if the
    /// word consisted of plain characters only, in which case it may be a
    /// reserved word.
    pub(super) fn raw_word(&mut self) -> bool {
        let mut plain = true;
        loop {
            let Some(c) = self.peek_char() else {
                return plain;
            };
            match c {
                c if is_blank(c) => return plain,
                '\n' | '|' | '&' | ';' | '<' | '>' | '(' | ')' => return plain,
                '\'' => {
                    plain = false;
                    self.single_quote();
                }
                '"' => {
                    plain = false;
                    self.double_quote();
                }
                '\\' => {
                    plain = false;
                    self.consume_char();
                    self.consume_char();
                }
                '$' => {
                    plain = false;
                    self.dollar();
                }
                '`' => {
                    plain = false;
                    self.backquote();
                }
                _ => {
                    self.consume_char();
                }
            }
        }
    }

    /// Consumes a single-quoted string, including both quotes.
    ///
    /// Nothing is interpreted between the quotes.
    fn single_quote(&mut self) {
        self.consume_char();
        while let Some(c) = self.consume_char() {
            if c == '\'' {
                return;
            }
        }
    }

    /// Consumes a double-quoted string, including both quotes.
    ///
    /// Backslashes escape the following character; `$` and backquote
    /// substitutions keep their usual structure.
    fn double_quote(&mut self) {
        self.consume_char();
        loop {
            match self.peek_char() {
                None => return,
                Some('"') => {
                    self.consume_char();
                    return;
                }
                Some('\\') => {
                    self.consume_char();
                    self.consume_char();
                }
                Some('$') => self.dollar(),
                Some('`') => self.backquote(),
                Some(_) => {
                    self.consume_char();
                }
            }
        }
    }

    /// Consumes a backquoted command substitution, including both
    /// backquotes. A backslash escapes the following character.
    fn backquote(&mut self) {
        self.consume_char();
        loop {
            match self.peek_char() {
                None => return,
                Some('`') => {
                    self.consume_char();
                    return;
                }
                Some('\\') => {
                    self.consume_char();
                    self.consume_char();
                }
                Some(_) => {
                    self.consume_char();
                }
            }
        }
    }

    /// Consumes a `$`-introduced expansion.
    ///
    /// Depending on what follows the dollar, this reads an arithmetic
    /// expansion `$((...))`, a command substitution `$(...)`, a braced
    /// parameter `${...}`, a special parameter, or a greedy parameter name.
    /// A lone `$` is consumed as a literal.
    fn dollar(&mut self) {
        self.consume_char();
        match self.peek_char() {
            Some('(') => {
                self.consume_char();
                if self.peek_char() == Some('(') {
                    self.consume_char();
                    self.arith_body();
                } else {
                    self.command_subst_body();
                }
            }
            Some('{') => {
                self.consume_char();
                let mut depth = 1;
                while let Some(c) = self.consume_char() {
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                return;
                            }
                        }
                        _ => {}
                    }
                }
            }
            Some(c) if is_special_param(c) => {
                self.consume_char();
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                while let Some(c) = self.peek_char() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        self.consume_char();
                    } else {
                        return;
                    }
                }
            }
            _ => {}
        }
    }

    /// Consumes the rest of an arithmetic expansion, after `$((`.
    ///
    /// Parentheses are balanced down to depth zero.
    fn arith_body(&mut self) {
        let mut depth = 2;
        while let Some(c) = self.consume_char() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Consumes the rest of a command substitution, after `$(`.
    ///
    /// Parentheses are balanced, honoring nested quotations.
    fn command_subst_body(&mut self) {
        let mut depth = 1;
        loop {
            match self.peek_char() {
                None => return,
                Some('\'') => self.single_quote(),
                Some('"') => self.double_quote(),
                Some('`') => self.backquote(),
                Some('\\') => {
                    self.consume_char();
                    self.consume_char();
                }
                Some('(') => {
                    self.consume_char();
                    depth += 1;
                }
                Some(')') => {
                    self.consume_char();
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                Some(_) => {
                    self.consume_char();
                }
            }
        }
    }
}
