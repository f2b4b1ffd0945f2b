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

//! Part of the lexer that parses operators.

use super::core::Lexer;
use std::fmt;

/// Operator token identifier
///
/// Newlines are not operators; they have their own
/// [token identifier](super::TokenId::Newline).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    /// `&`
    And,
    /// `&&`
    AndAnd,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `;`
    Semicolon,
    /// `;;`
    SemicolonSemicolon,
    /// `<`
    Less,
    /// `<&`
    LessAnd,
    /// `<<`
    LessLess,
    /// `<<-`
    LessLessDash,
    /// `<>`
    LessGreater,
    /// `>`
    Greater,
    /// `>&`
    GreaterAnd,
    /// `>>`
    GreaterGreater,
    /// `>|`
    GreaterBar,
    /// `|`
    Bar,
    /// `||`
    BarBar,
}

impl Operator {
    /// Returns the source text of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        use Operator::*;
        match self {
            And => "&",
            AndAnd => "&&",
            OpenParen => "(",
            CloseParen => ")",
            OpenBrace => "{",
            CloseBrace => "}",
            Semicolon => ";",
            SemicolonSemicolon => ";;",
            Less => "<",
            LessAnd => "<&",
            LessLess => "<<",
            LessLessDash => "<<-",
            LessGreater => "<>",
            Greater => ">",
            GreaterAnd => ">&",
            GreaterGreater => ">>",
            GreaterBar => ">|",
            Bar => "|",
            BarBar => "||",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All operators, sorted so that a prefix never precedes its extension.
///
/// Matching the source against this table in order implements the
/// longest-match rule.
const OPERATORS: &[(&str, Operator)] = &[
    ("&&", Operator::AndAnd),
    ("||", Operator::BarBar),
    (";;", Operator::SemicolonSemicolon),
    ("<<-", Operator::LessLessDash),
    ("<<", Operator::LessLess),
    ("<&", Operator::LessAnd),
    ("<>", Operator::LessGreater),
    (">>", Operator::GreaterGreater),
    (">&", Operator::GreaterAnd),
    (">|", Operator::GreaterBar),
    ("&", Operator::And),
    ("|", Operator::Bar),
    (";", Operator::Semicolon),
    ("<", Operator::Less),
    (">", Operator::Greater),
    ("(", Operator::OpenParen),
    (")", Operator::CloseParen),
    ("{", Operator::OpenBrace),
    ("}", Operator::CloseBrace),
];

/// Returns true if the character can start an operator.
#[must_use]
pub(super) fn is_operator_start(c: char) -> bool {
    matches!(c, '|' | '&' | ';' | '<' | '>' | '(' | ')' | '{' | '}')
}

impl Lexer<'_> {
    /// Consumes an operator from the source.
    ///
    /// The current character must be an [operator start](is_operator_start),
    /// or this function panics.
    pub(super) fn operator(&mut self) -> Operator {
        let (text, op) = OPERATORS
            .iter()
            .find(|(text, _)| self.rest().starts_with(text))
            .expect("current character must start an operator");
        for _ in text.chars() {
            self.consume_char();
        }
        *op
    }
}
