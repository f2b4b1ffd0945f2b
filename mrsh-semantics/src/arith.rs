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

//! Integer arithmetic evaluation
//!
//! This module evaluates the expression of an arithmetic expansion after
//! all parameter substitution has happened: plain decimal integers combined
//! with `+ - * / %`, unary minus, and parentheses. Arithmetic is 64-bit
//! two's complement; overflow wraps and division truncates toward zero.

use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// Cause of an arithmetic evaluation error
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum Error {
    /// A character that is not part of the arithmetic grammar
    #[error("invalid character {0:?} in arithmetic expression")]
    InvalidCharacter(char),
    /// A number too large to scan
    #[error("invalid number in arithmetic expression")]
    InvalidNumber,
    /// An operator with a missing operand, or an empty expression
    #[error("missing operand in arithmetic expression")]
    MissingOperand,
    /// A `(` without a matching `)`
    #[error("unbalanced parentheses in arithmetic expression")]
    UnbalancedParen,
    /// Division or remainder by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Leftover tokens after a complete expression
    #[error("malformed arithmetic expression")]
    TrailingToken,
}

/// Binary operator token
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    OpenParen,
    CloseParen,
}

impl Operator {
    /// Binding strength of the operator when used as a binary operator.
    fn precedence(self) -> Option<u8> {
        match self {
            Operator::Plus | Operator::Minus => Some(1),
            Operator::Star | Operator::Slash | Operator::Percent => Some(2),
            Operator::OpenParen | Operator::CloseParen => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token {
    Value(i64),
    Operator(Operator),
}

/// Token scanner over an expression string
struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
    peeked: Option<Option<Token>>,
}

impl Tokens<'_> {
    fn new(expression: &str) -> Tokens<'_> {
        Tokens {
            chars: expression.chars().peekable(),
            peeked: None,
        }
    }

    fn scan(&mut self) -> Result<Option<Token>, Error> {
        while self.chars.next_if(|c| *c == ' ').is_some() {}
        let Some(&c) = self.chars.peek() else {
            return Ok(None);
        };

        let operator = match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            '%' => Some(Operator::Percent),
            '(' => Some(Operator::OpenParen),
            ')' => Some(Operator::CloseParen),
            _ => None,
        };
        if let Some(operator) = operator {
            self.chars.next();
            return Ok(Some(Token::Operator(operator)));
        }

        if c.is_ascii_digit() {
            let mut number = String::new();
            while let Some(d) = self.chars.next_if(char::is_ascii_digit) {
                number.push(d);
            }
            let value = number.parse().map_err(|_| Error::InvalidNumber)?;
            return Ok(Some(Token::Value(value)));
        }

        Err(Error::InvalidCharacter(c))
    }

    fn peek(&mut self) -> Result<Option<Token>, Error> {
        if self.peeked.is_none() {
            self.peeked = Some(self.scan()?);
        }
        Ok(self.peeked.unwrap())
    }

    fn next(&mut self) -> Result<Option<Token>, Error> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }
}

/// Parses and evaluates a primary: a number, a unary sign, or a
/// parenthesized expression.
fn primary(tokens: &mut Tokens<'_>) -> Result<i64, Error> {
    match tokens.next()? {
        Some(Token::Value(value)) => Ok(value),
        Some(Token::Operator(Operator::Minus)) => Ok(primary(tokens)?.wrapping_neg()),
        Some(Token::Operator(Operator::Plus)) => primary(tokens),
        Some(Token::Operator(Operator::OpenParen)) => {
            let value = expression(tokens, 0)?;
            match tokens.next()? {
                Some(Token::Operator(Operator::CloseParen)) => Ok(value),
                _ => Err(Error::UnbalancedParen),
            }
        }
        _ => Err(Error::MissingOperand),
    }
}

/// Precedence-climbing evaluation of binary operators.
fn expression(tokens: &mut Tokens<'_>, min_precedence: u8) -> Result<i64, Error> {
    let mut accumulator = primary(tokens)?;
    loop {
        let operator = match tokens.peek()? {
            Some(Token::Operator(operator)) => operator,
            _ => return Ok(accumulator),
        };
        let Some(precedence) = operator.precedence() else {
            return Ok(accumulator);
        };
        if precedence < min_precedence {
            return Ok(accumulator);
        }
        tokens.next()?;

        let rhs = expression(tokens, precedence + 1)?;
        accumulator = match operator {
            Operator::Plus => accumulator.wrapping_add(rhs),
            Operator::Minus => accumulator.wrapping_sub(rhs),
            Operator::Star => accumulator.wrapping_mul(rhs),
            Operator::Slash if rhs == 0 => return Err(Error::DivisionByZero),
            Operator::Slash => accumulator.wrapping_div(rhs),
            Operator::Percent if rhs == 0 => return Err(Error::DivisionByZero),
            Operator::Percent => accumulator.wrapping_rem(rhs),
            Operator::OpenParen | Operator::CloseParen => unreachable!(),
        };
    }
}

/// Evaluates an arithmetic expression.
pub fn eval(source: &str) -> Result<i64, Error> {
    let mut tokens = Tokens::new(source);
    let value = expression(&mut tokens, 0)?;
    match tokens.next()? {
        None => Ok(value),
        Some(_) => Err(Error::TrailingToken),
    }
}
