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

//! Syntax parser for redirections

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::{Operator, TokenId};
use super::word::word_from_token;
use crate::syntax::{Fd, Redir, RedirOp};

/// Converts an operator token to a redirection operator.
///
/// Returns `None` for operators that are not redirections.
#[must_use]
pub(super) fn redir_op(op: Operator) -> Option<RedirOp> {
    use Operator::*;
    match op {
        Less => Some(RedirOp::FileIn),
        LessGreater => Some(RedirOp::FileInOut),
        Greater => Some(RedirOp::FileOut),
        GreaterGreater => Some(RedirOp::FileAppend),
        GreaterBar => Some(RedirOp::FileClobber),
        LessAnd => Some(RedirOp::FdIn),
        GreaterAnd => Some(RedirOp::FdOut),
        LessLess => Some(RedirOp::HereDoc { remove_tabs: false }),
        LessLessDash => Some(RedirOp::HereDoc { remove_tabs: true }),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a redirection.
    ///
    /// The next token must be a redirection operator; `fd` is the value of
    /// the preceding IO number token, if any.
    pub(super) fn redirection(&mut self, fd: Option<Fd>) -> Result<Redir> {
        let token = self.take();
        let op = match token.id {
            TokenId::Operator(op) => redir_op(op).expect("token must be a redirection operator"),
            _ => unreachable!("token must be a redirection operator"),
        };

        match self.peek_id() {
            TokenId::Word(_) => {
                let token = self.take();
                let operand = word_from_token(&token)?;
                Ok(Redir { fd, op, operand })
            }
            _ => self.error(SyntaxError::MissingRedirOperand),
        }
    }
}
