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

//! Reconstruction of word trees from raw word tokens
//!
//! The lexer stores a word token as the raw source fragment. The functions
//! here re-scan the fragment into a [`Word`] tree, following the same
//! quoting rules the lexer used to delimit the token. Command substitution
//! bodies are parsed eagerly into sub-programs; braced parameters are parsed
//! by the [`braced_param`](super::braced_param) module.

use super::core::{Parser, Result};
use super::lex::{Lexer, Token};
use crate::source::Position;
use crate::syntax::{is_special_param, List, Modifier, Param, Word};
use std::rc::Rc;

/// Builds the word tree for a word token.
pub(super) fn word_from_token(token: &Token) -> Result<Word> {
    word_from_raw(&token.value, token.position)
}

/// Builds a word tree from a raw source fragment.
///
/// If the fragment contains no quoting and no expansions, the result is a
/// single literal. Otherwise the fragment is scanned left to right into a
/// concatenation, which collapses when it has a single element.
pub(super) fn word_from_raw(raw: &str, position: Position) -> Result<Word> {
    if !raw.contains(['$', '`', '"', '\'', '\\']) {
        return Ok(Word::literal(raw));
    }

    let mut scanner = Scanner::new(raw, position);
    let mut units = scan_units(&mut scanner, false)?;
    Ok(match units.len() {
        0 => Word::empty(),
        1 => units.pop().unwrap(),
        _ => Word::Concat {
            units,
            double_quoted: false,
        },
    })
}

/// Parses a source fragment as a whole program.
///
/// Positions in the resulting AST refer to the enclosing source.
fn parse_program_at(source: &str, origin: Position) -> Result<List> {
    Parser::new(Lexer::with_origin(source, origin)).program()
}

/// Character cursor over a raw word fragment
struct Scanner<'a> {
    src: &'a str,
    index: usize,
    pos: Position,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, start: Position) -> Scanner<'a> {
        Scanner {
            src,
            index: 0,
            pos: start,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.index..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += c.len_utf8();
        self.pos = self.pos.after(c);
        Some(c)
    }

    fn skip_single_quote(&mut self) {
        self.bump();
        while let Some(c) = self.bump() {
            if c == '\'' {
                return;
            }
        }
    }

    fn skip_double_quote(&mut self) {
        self.bump();
        loop {
            match self.bump() {
                None | Some('"') => return,
                Some('\\') => {
                    self.bump();
                }
                Some(_) => {}
            }
        }
    }

    fn skip_backquote(&mut self) {
        self.bump();
        loop {
            match self.bump() {
                None | Some('`') => return,
                Some('\\') => {
                    self.bump();
                }
                Some(_) => {}
            }
        }
    }
}

/// Appends the pending literal characters to the unit list.
fn flush(units: &mut Vec<Word>, literal: &mut String, in_double_quotes: bool) {
    if !literal.is_empty() {
        units.push(Word::Literal {
            value: std::mem::take(literal),
            single_quoted: false,
            split_fields: !in_double_quotes,
        });
    }
}

/// Scans word units until the end of the fragment, or until the closing
/// double-quote when `in_double_quotes` is true.
fn scan_units(s: &mut Scanner<'_>, in_double_quotes: bool) -> Result<Vec<Word>> {
    let mut units = Vec::new();
    let mut literal = String::new();

    loop {
        let Some(c) = s.peek() else { break };
        match c {
            '"' if in_double_quotes => {
                s.bump();
                break;
            }
            '"' => {
                flush(&mut units, &mut literal, in_double_quotes);
                s.bump();
                let inner = scan_units(s, true)?;
                units.push(Word::Concat {
                    units: inner,
                    double_quoted: true,
                });
            }
            '\'' if !in_double_quotes => {
                flush(&mut units, &mut literal, in_double_quotes);
                s.bump();
                let mut value = String::new();
                while let Some(c) = s.bump() {
                    if c == '\'' {
                        break;
                    }
                    value.push(c);
                }
                units.push(Word::Literal {
                    value,
                    single_quoted: true,
                    split_fields: false,
                });
            }
            '\\' => {
                s.bump();
                match s.bump() {
                    // A lone backslash at the end of input stays.
                    None => literal.push('\\'),
                    Some('\n') => {}
                    Some(e) if in_double_quotes => {
                        if matches!(e, '$' | '`' | '"' | '\\') {
                            literal.push(e);
                        } else {
                            literal.push('\\');
                            literal.push(e);
                        }
                    }
                    Some(e) => literal.push(e),
                }
            }
            '$' => match scan_dollar(s)? {
                Some(unit) => {
                    flush(&mut units, &mut literal, in_double_quotes);
                    units.push(unit);
                }
                None => literal.push('$'),
            },
            '`' => {
                flush(&mut units, &mut literal, in_double_quotes);
                units.push(scan_backquote(s)?);
            }
            _ => {
                s.bump();
                literal.push(c);
            }
        }
    }

    flush(&mut units, &mut literal, in_double_quotes);
    Ok(units)
}

/// Scans a `$`-introduced expansion.
///
/// The dollar is consumed either way; `Ok(None)` means it was a literal
/// dollar not followed by anything expandable.
fn scan_dollar(s: &mut Scanner<'_>) -> Result<Option<Word>> {
    let position = s.pos;
    s.bump();

    match s.peek() {
        Some('(') => {
            s.bump();
            if s.peek() == Some('(') {
                s.bump();
                let body_pos = s.pos;
                let body = capture_arith(s);
                let body = word_from_raw(body, body_pos)?;
                Ok(Some(Word::Arith {
                    body: Box::new(body),
                    position,
                }))
            } else {
                let body_pos = s.pos;
                let body = capture_command_subst(s);
                let body = parse_program_at(body, body_pos)?;
                Ok(Some(Word::CommandSubst {
                    body: Rc::new(body),
                    back_quoted: false,
                    position,
                }))
            }
        }
        Some('{') => {
            s.bump();
            let content_pos = s.pos;
            let content = capture_braced(s);
            let param = super::braced_param::braced_param(content, content_pos, position)?;
            Ok(Some(Word::Param(param)))
        }
        Some(c) if is_special_param(c) => {
            s.bump();
            Ok(Some(Word::Param(Param {
                name: c.to_string(),
                modifier: Modifier::None,
                position,
            })))
        }
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            let mut name = String::new();
            while let Some(c) = s.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    s.bump();
                    name.push(c);
                } else {
                    break;
                }
            }
            Ok(Some(Word::Param(Param {
                name,
                modifier: Modifier::None,
                position,
            })))
        }
        _ => Ok(None),
    }
}

/// Captures the body of an arithmetic expansion, after `$((`.
///
/// Parentheses are balanced down to depth zero; the two closing parentheses
/// are excluded from the result.
fn capture_arith<'a>(s: &mut Scanner<'a>) -> &'a str {
    let start = s.index;
    let mut depth = 2u32;
    let end;
    loop {
        let before = s.index;
        match s.bump() {
            None => {
                end = before;
                break;
            }
            Some('(') => depth += 1,
            Some(')') => {
                depth -= 1;
                if depth == 0 {
                    end = before;
                    break;
                }
            }
            Some(_) => {}
        }
    }
    let inner = &s.src[start..end];
    inner.strip_suffix(')').unwrap_or(inner)
}

/// Captures the body of a command substitution, after `$(`.
///
/// Parentheses are balanced, honoring nested quotations; the closing
/// parenthesis is excluded from the result.
fn capture_command_subst<'a>(s: &mut Scanner<'a>) -> &'a str {
    let start = s.index;
    let mut depth = 1u32;
    loop {
        match s.peek() {
            None => return &s.src[start..],
            Some('\'') => s.skip_single_quote(),
            Some('"') => s.skip_double_quote(),
            Some('`') => s.skip_backquote(),
            Some('\\') => {
                s.bump();
                s.bump();
            }
            Some('(') => {
                s.bump();
                depth += 1;
            }
            Some(')') => {
                let before = s.index;
                s.bump();
                depth -= 1;
                if depth == 0 {
                    return &s.src[start..before];
                }
            }
            Some(_) => {
                s.bump();
            }
        }
    }
}

/// Captures the body of a braced parameter expansion, after `${`.
fn capture_braced<'a>(s: &mut Scanner<'a>) -> &'a str {
    let start = s.index;
    let mut depth = 1u32;
    loop {
        let before = s.index;
        match s.bump() {
            None => return &s.src[start..],
            Some('{') => depth += 1,
            Some('}') => {
                depth -= 1;
                if depth == 0 {
                    return &s.src[start..before];
                }
            }
            Some(_) => {}
        }
    }
}

/// Scans a backquoted command substitution.
///
/// A backslash escapes `$`, `` ` `` and `\`; any other pair is kept as is.
/// The unescaped content is parsed as a program.
fn scan_backquote(s: &mut Scanner<'_>) -> Result<Word> {
    let position = s.pos;
    s.bump();

    let mut content = String::new();
    loop {
        match s.bump() {
            None | Some('`') => break,
            Some('\\') => match s.bump() {
                Some(e @ ('$' | '`' | '\\')) => content.push(e),
                Some(e) => {
                    content.push('\\');
                    content.push(e);
                }
                None => content.push('\\'),
            },
            Some(c) => content.push(c),
        }
    }

    // The unescaped content is a fresh string, so positions inside it are
    // relative to the opening backquote.
    let body = Parser::new(Lexer::with_origin(&content, position)).program()?;
    Ok(Word::CommandSubst {
        body: Rc::new(body),
        back_quoted: true,
        position,
    })
}
