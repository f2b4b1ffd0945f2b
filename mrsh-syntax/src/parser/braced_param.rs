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

//! Parsing of braced parameter expansions
//!
//! This module turns the content of a `${...}` span into a [`Param`]: a
//! parameter name plus an optional modifier. The modifier's argument is a
//! word in its own right and may contain further expansions.

use super::core::Result;
use super::error::{Error, SyntaxError};
use super::word::word_from_raw;
use crate::source::Position;
use crate::syntax::{
    is_name, is_special_param, Modifier, Param, Switch, SwitchCondition, SwitchType, Trim,
    TrimLength, TrimSide,
};

/// Advances a position over every character of a string.
fn advance_over(position: Position, s: &str) -> Position {
    s.chars().fold(position, Position::after)
}

/// Returns true if the string is a complete parameter identifier: a name, a
/// special parameter, or a positional digit sequence.
fn is_param_id(s: &str) -> bool {
    if is_name(s) {
        return true;
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_special_param(c) => true,
        _ => s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty(),
    }
}

/// Splits the leading parameter identifier off the content.
fn split_name(content: &str) -> Option<(&str, &str)> {
    let first = content.chars().next()?;
    if first.is_ascii_digit() {
        let end = content
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(content.len());
        Some(content.split_at(end))
    } else if first.is_ascii_alphabetic() || first == '_' {
        let end = content
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(content.len());
        Some(content.split_at(end))
    } else if is_special_param(first) {
        Some(content.split_at(first.len_utf8()))
    } else {
        None
    }
}

/// Parses the modifier that follows the parameter name.
fn modifier(rest: &str, rest_position: Position, position: Position) -> Result<Modifier> {
    if rest.is_empty() {
        return Ok(Modifier::None);
    }

    let switch = |r#type, colon: bool| -> Result<Modifier> {
        let skip = if colon { 2 } else { 1 };
        let arg = &rest[skip..];
        let word = word_from_raw(arg, advance_over(rest_position, &rest[..skip]))?;
        Ok(Modifier::Switch(Switch {
            r#type,
            condition: if colon {
                SwitchCondition::UnsetOrEmpty
            } else {
                SwitchCondition::Unset
            },
            word: Box::new(word),
        }))
    };

    let trim = |side, length, skip: usize| -> Result<Modifier> {
        let arg = &rest[skip..];
        let pattern = word_from_raw(arg, advance_over(rest_position, &rest[..skip]))?;
        Ok(Modifier::Trim(Trim {
            side,
            length,
            pattern: Box::new(pattern),
        }))
    };

    let mut chars = rest.chars();
    match (chars.next().unwrap(), chars.next()) {
        (':', Some('-')) => switch(SwitchType::Default, true),
        (':', Some('=')) => switch(SwitchType::Assign, true),
        (':', Some('?')) => switch(SwitchType::Error, true),
        (':', Some('+')) => switch(SwitchType::Alter, true),
        ('-', _) => switch(SwitchType::Default, false),
        ('=', _) => switch(SwitchType::Assign, false),
        ('?', _) => switch(SwitchType::Error, false),
        ('+', _) => switch(SwitchType::Alter, false),
        ('#', Some('#')) => trim(TrimSide::Prefix, TrimLength::Longest, 2),
        ('#', _) => trim(TrimSide::Prefix, TrimLength::Shortest, 1),
        ('%', Some('%')) => trim(TrimSide::Suffix, TrimLength::Longest, 2),
        ('%', _) => trim(TrimSide::Suffix, TrimLength::Shortest, 1),
        _ => Err(Error {
            cause: SyntaxError::InvalidModifier,
            position,
        }),
    }
}

/// Parses the content of a `${...}` span.
///
/// `content_position` is the position of the first content character;
/// `position` is the position of the introducing `$`, recorded in the
/// resulting [`Param`] and used for errors.
pub(super) fn braced_param(
    content: &str,
    content_position: Position,
    position: Position,
) -> Result<Param> {
    if content.is_empty() {
        return Err(Error {
            cause: SyntaxError::EmptyParam,
            position,
        });
    }

    // `${#foo}` is the length of `foo`, but `${#}` is the parameter `#`.
    if let Some(rest) = content.strip_prefix('#') {
        if is_param_id(rest) {
            return Ok(Param {
                name: rest.to_string(),
                modifier: Modifier::Length,
                position,
            });
        }
    }

    let Some((name, rest)) = split_name(content) else {
        return Err(Error {
            cause: SyntaxError::InvalidParam,
            position,
        });
    };
    let modifier = modifier(rest, advance_over(content_position, name), position)?;
    Ok(Param {
        name: name.to_string(),
        modifier,
        position,
    })
}
