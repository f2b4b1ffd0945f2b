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

//! Syntax parser for case command

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Keyword::{Esac, In};
use super::lex::Operator::{Bar, CloseParen, OpenParen, SemicolonSemicolon};
use super::lex::TokenId;
use super::word::word_from_token;
use crate::syntax::{CaseItem, CompoundCommand, Word};

impl Parser<'_> {
    /// Parses a pattern word of a case item.
    ///
    /// The reserved word `esac` is not accepted as a pattern; it always
    /// closes the case command.
    fn case_pattern(&mut self) -> Result<Word> {
        match self.peek_id() {
            TokenId::Word(Some(Esac)) => self.error(SyntaxError::MissingPattern),
            TokenId::Word(_) => {
                let token = self.take();
                word_from_token(&token)
            }
            _ => self.error(SyntaxError::MissingPattern),
        }
    }

    /// Parses a single case item: patterns, body, and the `;;` terminator.
    ///
    /// The leading `(` must already have been consumed if it was present.
    fn case_item(&mut self) -> Result<CaseItem> {
        let mut patterns = vec![self.case_pattern()?];
        while self.accept_operator(Bar) {
            patterns.push(self.case_pattern()?);
        }
        if !self.accept_operator(CloseParen) {
            return self.error(SyntaxError::UnclosedPatternList);
        }

        let body = self.command_list()?;
        // The terminator is optional before `esac`.
        self.accept_operator(SemicolonSemicolon);
        Ok(CaseItem { patterns, body })
    }

    /// Parses a case conditional construct.
    ///
    /// The next token must be the `case` reserved word.
    pub(super) fn case_command(&mut self) -> Result<CompoundCommand> {
        let opening = self.take().position;

        let subject = match self.peek_id() {
            TokenId::Word(Some(In | Esac)) => {
                return self.error(SyntaxError::MissingCaseSubject)
            }
            TokenId::Word(_) => {
                let token = self.take();
                word_from_token(&token)?
            }
            _ => return self.error(SyntaxError::MissingCaseSubject),
        };

        self.skip_newlines();
        if !self.accept_keyword(In) {
            return self.error(SyntaxError::MissingIn { opening });
        }

        let mut items = Vec::new();
        loop {
            self.skip_newlines();
            if self.accept_keyword(Esac) {
                return Ok(CompoundCommand::Case { subject, items });
            }
            if self.peek_id() == TokenId::EndOfInput {
                return self.error(SyntaxError::UnclosedCase { opening });
            }
            self.accept_operator(OpenParen);
            items.push(self.case_item()?);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::parse;
    use super::*;
    use crate::syntax::Command;
    use assert_matches::assert_matches;

    fn case_parts(source: &str) -> (Word, Vec<CaseItem>) {
        let mut list = parse(source).unwrap();
        assert_matches!(
            list.0.remove(0).and_or.first.commands.remove(0),
            Command::Compound(CompoundCommand::Case { subject, items }) => (subject, items)
        )
    }

    #[test]
    fn empty_case() {
        let (subject, items) = case_parts("case x in esac");
        assert_eq!(subject.as_literal(), Some("x"));
        assert_eq!(items, []);
    }

    #[test]
    fn single_item() {
        let (_, items) = case_parts("case x in a) echo a;; esac");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].patterns.len(), 1);
        assert_eq!(items[0].body.0.len(), 1);
    }

    #[test]
    fn multiple_patterns_and_items() {
        let (_, items) = case_parts("case x in (a|b) f;; *) g;; esac");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].patterns.len(), 2);
        assert_eq!(items[1].patterns[0].as_literal(), Some("*"));
    }

    #[test]
    fn last_terminator_is_optional() {
        let (_, items) = case_parts("case x in a) f ;; b) g esac");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn items_may_span_lines() {
        let (_, items) = case_parts("case x in\n a)\n f\n ;;\n b) g;;\nesac");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn every_item_has_at_least_one_pattern() {
        for source in ["case x in a) f;; esac", "case x in (a|b) f;; (c) g;; esac"] {
            let (_, items) = case_parts(source);
            for item in items {
                assert!(!item.patterns.is_empty());
            }
        }
    }

    #[test]
    fn missing_in() {
        let error = parse("case x esac").unwrap_err();
        assert_matches!(error.cause, SyntaxError::MissingIn { .. });
    }

    #[test]
    fn missing_subject() {
        let error = parse("case in esac").unwrap_err();
        // `in` is a reserved word here, so the subject is missing.
        assert_eq!(error.cause, SyntaxError::MissingCaseSubject);
    }

    #[test]
    fn unclosed_case() {
        let error = parse("case x in a) f;;").unwrap_err();
        assert_matches!(error.cause, SyntaxError::UnclosedCase { .. });
    }

    #[test]
    fn missing_pattern_after_bar() {
        let error = parse("case x in a| esac").unwrap_err();
        assert_matches!(error.cause, SyntaxError::MissingPattern);
    }

    #[test]
    fn unclosed_pattern_list() {
        let error = parse("case x in a b) f;; esac").unwrap_err();
        assert_matches!(error.cause, SyntaxError::UnclosedPatternList);
    }
}
