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

//! Word expansion
//!
//! [`expand_word`] turns a [`Word`] into a single string: literals pass
//! through, concatenations expand left to right (so side effects like
//! `${x:=d}` happen in a deterministic order), parameters resolve against
//! the environment, command substitutions run with their output captured,
//! and arithmetic expansions evaluate to a decimal number.
//!
//! Field splitting and pathname expansion are not performed; a word always
//! expands to exactly one string.

mod arith;
mod command_subst;
mod param;

use mrsh_env::Env;
use mrsh_syntax::source::Position;
use mrsh_syntax::syntax::Word;
use thiserror::Error;

/// Types of errors that may occur in word expansion
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ErrorCause {
    /// `${name:?message}` with an unset or null parameter
    #[error("{name}: {message}")]
    VacantParameter {
        /// Parameter that was unset or null
        name: String,
        /// Message to show; the word after `?`, or a default
        message: String,
    },
}

/// Explanation of an expansion failure
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    pub cause: ErrorCause,
    pub position: Position,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.cause.fmt(f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Result of word expansion
pub type Result<T = String> = std::result::Result<T, Error>;

/// Expands a word to a string.
pub async fn expand_word(env: &mut Env, word: &Word) -> Result {
    // Boxing needed for recursion
    Box::pin(async move {
        match word {
            Word::Literal { value, .. } => Ok(value.clone()),
            Word::Concat { units, .. } => {
                let mut result = String::new();
                for unit in units {
                    result.push_str(&expand_word(env, unit).await?);
                }
                Ok(result)
            }
            Word::Param(param) => param::expand(env, param).await,
            Word::CommandSubst { body, .. } => command_subst::expand(env, body).await,
            Word::Arith { body, .. } => {
                let body = expand_word(env, body).await?;
                Ok(arith::expand(env, &body))
            }
        }
    })
    .await
}

/// Expands a sequence of words, left to right.
pub async fn expand_words(env: &mut Env, words: &[Word]) -> Result<Vec<String>> {
    let mut results = Vec::with_capacity(words.len());
    for word in words {
        results.push(expand_word(env, word).await?);
    }
    Ok(results)
}
