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

//! Syntax parser for grouping and subshell

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Operator::{CloseBrace, CloseParen};
use crate::syntax::CompoundCommand;

impl Parser<'_> {
    /// Parses a brace grouping.
    ///
    /// The next token must be `{`.
    pub(super) fn brace_group(&mut self) -> Result<CompoundCommand> {
        let opening = self.take().position;
        let body = self.command_list()?;
        if self.accept_operator(CloseBrace) {
            Ok(CompoundCommand::Grouping(body))
        } else {
            self.error(SyntaxError::UnclosedGrouping { opening })
        }
    }

    /// Parses a subshell.
    ///
    /// The next token must be `(`.
    pub(super) fn subshell(&mut self) -> Result<CompoundCommand> {
        let opening = self.take().position;
        let body = self.command_list()?;
        if self.accept_operator(CloseParen) {
            Ok(CompoundCommand::Subshell(body))
        } else {
            self.error(SyntaxError::UnclosedSubshell { opening })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::parse;
    use super::*;
    use crate::source::Position;
    use crate::syntax::Command;
    use assert_matches::assert_matches;

    #[test]
    fn brace_group_with_multiple_items() {
        let list = parse("{ a; b; }").unwrap();
        assert_matches!(&list.0[0].and_or.first.commands[0], Command::Compound(c) => {
            assert_matches!(c, CompoundCommand::Grouping(body) => {
                assert_eq!(body.0.len(), 2);
            });
        });
    }

    #[test]
    fn subshell_does_not_require_separators() {
        let list = parse("(a)").unwrap();
        assert_matches!(&list.0[0].and_or.first.commands[0], Command::Compound(c) => {
            assert_matches!(c, CompoundCommand::Subshell(body) => {
                assert_eq!(body.0.len(), 1);
            });
        });
    }

    #[test]
    fn newlines_allowed_inside_groupings() {
        let list = parse("{\n a\n b\n }").unwrap();
        assert_matches!(&list.0[0].and_or.first.commands[0], Command::Compound(c) => {
            assert_matches!(c, CompoundCommand::Grouping(body) => {
                assert_eq!(body.0.len(), 2);
            });
        });
    }

    #[test]
    fn unclosed_grouping() {
        let error = parse("{ a; b").unwrap_err();
        assert_eq!(
            error.cause,
            SyntaxError::UnclosedGrouping {
                opening: Position::start()
            }
        );
    }

    #[test]
    fn unclosed_subshell() {
        let error = parse("(a; b").unwrap_err();
        assert_eq!(
            error.cause,
            SyntaxError::UnclosedSubshell {
                opening: Position::start()
            }
        );
    }
}
