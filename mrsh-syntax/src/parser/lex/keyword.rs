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

//! Types and functions for parsing reserved words
//!
//! The lexer does not distinguish reserved words from ordinary words; a word
//! token merely carries an optional `Keyword` describing what the word would
//! mean if it appeared in a context where reserved words are recognized. The
//! parser decides, in context, whether to honor it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error value indicating that a string is not a reserved word
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("not a reserved word")]
pub struct ParseKeywordError;

/// Token identifier for reserved words
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Keyword {
    /// `!`
    Bang,
    Case,
    Do,
    Done,
    Elif,
    Else,
    Esac,
    Fi,
    For,
    If,
    In,
    Then,
    Until,
    While,
}

impl Keyword {
    /// Returns the literal string representation of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Bang => "!",
            Case => "case",
            Do => "do",
            Done => "done",
            Elif => "elif",
            Else => "else",
            Esac => "esac",
            Fi => "fi",
            For => "for",
            If => "if",
            In => "in",
            Then => "then",
            Until => "until",
            While => "while",
        }
    }

    /// Determines if this keyword closes an open clause.
    ///
    /// A compound list stops before one of these so that the enclosing
    /// construct can consume it.
    #[must_use]
    pub const fn is_clause_delimiter(self) -> bool {
        use Keyword::*;
        matches!(self, Do | Done | Elif | Else | Esac | Fi | Then)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = ParseKeywordError;
    fn from_str(s: &str) -> Result<Keyword, ParseKeywordError> {
        use Keyword::*;
        match s {
            "!" => Ok(Bang),
            "case" => Ok(Case),
            "do" => Ok(Do),
            "done" => Ok(Done),
            "elif" => Ok(Elif),
            "else" => Ok(Else),
            "esac" => Ok(Esac),
            "fi" => Ok(Fi),
            "for" => Ok(For),
            "if" => Ok(If),
            "in" => Ok(In),
            "then" => Ok(Then),
            "until" => Ok(Until),
            "while" => Ok(While),
            _ => Err(ParseKeywordError),
        }
    }
}
