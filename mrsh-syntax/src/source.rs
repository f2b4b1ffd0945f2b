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

//! Positions in shell script source code
//!
//! A [`Position`] identifies a character in the source text by its byte
//! offset together with a human-readable line and column. Positions are
//! attached to every token and carried into the AST nodes that need to
//! report errors.

use std::fmt;

/// Position of a character in source code
///
/// The `offset` is a 0-based byte index into the source string. `line` and
/// `column` are 1-based and count characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    /// Byte offset from the beginning of the source
    pub offset: usize,
    /// 1-based line number
    pub line: u64,
    /// 1-based column number
    pub column: u64,
}

impl Position {
    /// Position of the first character of a source string.
    #[must_use]
    pub const fn start() -> Position {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the position just after the given character.
    ///
    /// A newline advances the line count and resets the column to 1. Any
    /// other character advances the column by one and the offset by the
    /// UTF-8 length of the character.
    #[must_use]
    pub fn after(self, c: char) -> Position {
        let offset = self.offset + c.len_utf8();
        if c == '\n' {
            Position {
                offset,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                offset,
                column: self.column + 1,
                ..self
            }
        }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Pair of positions delimiting a source fragment
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Range {
    pub begin: Position,
    pub end: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_after_plain_character() {
        let p = Position::start().after('a');
        assert_eq!(p.offset, 1);
        assert_eq!(p.line, 1);
        assert_eq!(p.column, 2);
    }

    #[test]
    fn position_after_multibyte_character() {
        let p = Position::start().after('\u{30A4}');
        assert_eq!(p.offset, 3);
        assert_eq!(p.column, 2);
    }

    #[test]
    fn position_after_newline() {
        let p = Position::start().after('x').after('\n');
        assert_eq!(p.offset, 2);
        assert_eq!(p.line, 2);
        assert_eq!(p.column, 1);
    }
}
