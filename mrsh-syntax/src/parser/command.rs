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

//! Syntax parser for commands

use super::core::{Parser, Result};
use super::lex::{Keyword, TokenId};
use crate::syntax::Command;

impl Parser<'_> {
    /// Parses a command, dispatching between compound commands, simple
    /// commands, and function definitions.
    ///
    /// Returns `Ok(None)` if the next token cannot begin a command. The
    /// token is not consumed in that case.
    pub(super) fn command(&mut self) -> Result<Option<Command>> {
        if let Some(compound) = self.maybe_compound_command()? {
            return Ok(Some(Command::Compound(compound)));
        }

        match self.peek_id() {
            // A clause delimiter or `!` cannot begin a command here; the
            // caller decides whether that is an error.
            TokenId::Word(Some(keyword))
                if keyword.is_clause_delimiter() || keyword == Keyword::Bang =>
            {
                Ok(None)
            }
            TokenId::Word(_) | TokenId::IoNumber => self.simple_command(),
            TokenId::Operator(op) if super::redir::redir_op(op).is_some() => {
                self.simple_command()
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::parse;
    use crate::syntax::{Command, CompoundCommand};
    use assert_matches::assert_matches;

    fn single_command(source: &str) -> Command {
        let mut list = parse(source).unwrap();
        assert_eq!(list.0.len(), 1);
        let item = list.0.remove(0);
        assert_eq!(item.and_or.rest.len(), 0);
        let mut pipeline = item.and_or.first;
        assert_eq!(pipeline.commands.len(), 1);
        pipeline.commands.remove(0)
    }

    #[test]
    fn dispatches_simple_command() {
        assert_matches!(single_command("echo x"), Command::Simple(_));
    }

    #[test]
    fn dispatches_compound_commands() {
        assert_matches!(
            single_command("{ a; }"),
            Command::Compound(CompoundCommand::Grouping(_))
        );
        assert_matches!(
            single_command("(a)"),
            Command::Compound(CompoundCommand::Subshell(_))
        );
        assert_matches!(
            single_command("if a; then b; fi"),
            Command::Compound(CompoundCommand::If { .. })
        );
        assert_matches!(
            single_command("while a; do b; done"),
            Command::Compound(CompoundCommand::While { .. })
        );
    }

    #[test]
    fn dispatches_function_definition() {
        assert_matches!(single_command("f() { a; }"), Command::Function(_));
    }

    #[test]
    fn redirection_can_begin_a_simple_command() {
        assert_matches!(single_command("> out echo x"), Command::Simple(simple) => {
            assert_eq!(simple.redirs.len(), 1);
            assert_eq!(simple.words.len(), 2);
        });
    }
}
