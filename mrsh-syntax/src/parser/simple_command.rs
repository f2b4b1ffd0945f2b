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

//! Syntax parser for simple commands

use super::core::{Parser, Result};
use super::lex::Operator::OpenParen;
use super::lex::{Token, TokenId};
use super::word::{word_from_raw, word_from_token};
use crate::syntax::{is_name, Assign, Command, Fd, SimpleCommand};

/// Tries to parse a token as an assignment word.
///
/// A token is an assignment if it contains a `=` and the part before the
/// first `=` is a valid name. The part after the `=` becomes the value word.
fn assignment(token: &Token) -> Result<Option<Assign>> {
    let Some(eq_index) = token.value.find('=') else {
        return Ok(None);
    };
    let name = &token.value[..eq_index];
    if !is_name(name) {
        return Ok(None);
    }

    let mut value_position = token.position;
    for c in token.value[..=eq_index].chars() {
        value_position = value_position.after(c);
    }
    let value = word_from_raw(&token.value[eq_index + 1..], value_position)?;
    Ok(Some(Assign {
        name: name.to_string(),
        value,
        position: token.position,
    }))
}

impl Parser<'_> {
    /// Parses a simple command.
    ///
    /// Assignments and redirections may precede the command name; after the
    /// name is bound, every word token is an argument. Returns `Ok(None)` if
    /// nothing was consumed.
    ///
    /// If the first word is a valid name directly followed by `(`, the
    /// parse continues as a function definition instead.
    pub(super) fn simple_command(&mut self) -> Result<Option<Command>> {
        let mut assigns = Vec::new();
        let mut words: Vec<crate::syntax::Word> = Vec::new();
        let mut redirs = Vec::new();

        loop {
            match self.peek_id() {
                TokenId::IoNumber => {
                    let io = self.take();
                    let fd = io.value.parse().ok().map(Fd);
                    redirs.push(self.redirection(fd)?);
                }
                TokenId::Operator(op) if super::redir::redir_op(op).is_some() => {
                    redirs.push(self.redirection(None)?);
                }
                TokenId::Word(_) => {
                    let token = self.take();

                    if words.is_empty()
                        && assigns.is_empty()
                        && redirs.is_empty()
                        && is_name(&token.value)
                        && self.at_operator(OpenParen)
                    {
                        return self.function_definition(token.value).map(Some);
                    }

                    if words.is_empty() {
                        if let Some(assign) = assignment(&token)? {
                            assigns.push(assign);
                            continue;
                        }
                    }
                    words.push(word_from_token(&token)?);
                }
                _ => break,
            }
        }

        if assigns.is_empty() && words.is_empty() && redirs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Command::Simple(SimpleCommand {
                assigns,
                words,
                redirs,
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::parse;
    use super::*;
    use crate::syntax::Word;
    use assert_matches::assert_matches;

    fn simple(source: &str) -> SimpleCommand {
        let mut list = parse(source).unwrap();
        assert_matches!(
            list.0.remove(0).and_or.first.commands.remove(0),
            Command::Simple(simple) => simple
        )
    }

    #[test]
    fn name_and_arguments() {
        let command = simple("cp -r src dst");
        assert_eq!(command.words.len(), 4);
        assert_eq!(command.words[0].as_literal(), Some("cp"));
        assert_eq!(command.words[3].as_literal(), Some("dst"));
        assert_eq!(command.assigns, []);
        assert_eq!(command.redirs, []);
    }

    #[test]
    fn assignments_before_the_command_name() {
        let command = simple("A=1 B=two echo");
        assert_eq!(command.assigns.len(), 2);
        assert_eq!(command.assigns[0].name, "A");
        assert_eq!(command.assigns[0].value.as_literal(), Some("1"));
        assert_eq!(command.assigns[1].name, "B");
        assert_eq!(command.words.len(), 1);
    }

    #[test]
    fn assignments_only() {
        let command = simple("A=1");
        assert_eq!(command.assigns.len(), 1);
        assert_eq!(command.words, []);
    }

    #[test]
    fn empty_assignment_value() {
        let command = simple("A=");
        assert_eq!(command.assigns[0].value.as_literal(), Some(""));
    }

    #[test]
    fn assignment_value_may_contain_expansions() {
        let command = simple("A=$x");
        assert_matches!(&command.assigns[0].value, Word::Param(_));
    }

    #[test]
    fn equals_after_command_name_is_an_argument() {
        let command = simple("echo A=1");
        assert_eq!(command.assigns, []);
        assert_eq!(command.words.len(), 2);
        assert_eq!(command.words[1].as_literal(), Some("A=1"));
    }

    #[test]
    fn invalid_name_is_not_an_assignment() {
        let command = simple("1a=x");
        assert_eq!(command.assigns, []);
        assert_eq!(command.words[0].as_literal(), Some("1a=x"));
    }

    #[test]
    fn assignment_position_points_at_the_value() {
        let command = simple("ABC=value");
        assert_eq!(command.assigns[0].position.offset, 0);
        assert_matches!(&command.assigns[0].value, Word::Literal { .. });
    }

    #[test]
    fn keywords_are_ordinary_arguments() {
        let command = simple("echo if done esac");
        assert_eq!(command.words.len(), 4);
    }
}
