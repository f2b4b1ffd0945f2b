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

//! Glob pattern matching
//!
//! Case patterns and `${x#pattern}`-family trims use globbing: `*` matches
//! any sequence, `?` matches any single character, and everything else
//! matches itself. Matching is performed by translating the glob into a
//! regular expression.

use mrsh_syntax::syntax::{TrimLength, TrimSide};
use regex::Regex;

/// Translates a glob pattern into an unanchored regular expression body.
#[must_use]
pub fn to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            c if c.is_ascii() && !c.is_ascii_alphanumeric() => {
                regex.push('\\');
                regex.push(c);
            }
            c => regex.push(c),
        }
    }
    regex
}

/// Compiles a glob pattern into a whole-string matcher.
fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(&format!("^(?s:{})$", to_regex(pattern))).ok()
}

/// Tests whether a glob pattern matches the whole subject.
#[must_use]
pub fn matches_fully(pattern: &str, subject: &str) -> bool {
    compile(pattern).is_some_and(|regex| regex.is_match(subject))
}

/// Removes the matching prefix or suffix of a value.
///
/// The pattern must match the removed part in its entirety. If nothing
/// matches, the value is returned unchanged. `length` selects the shortest
/// or the longest match.
#[must_use]
pub fn trim(value: &str, pattern: &str, side: TrimSide, length: TrimLength) -> String {
    let Some(regex) = compile(pattern) else {
        return value.to_string();
    };

    // Candidate split points, one per character boundary.
    let mut boundaries: Vec<usize> = value.char_indices().map(|(i, _)| i).collect();
    boundaries.push(value.len());

    let chosen = match (side, length) {
        (TrimSide::Prefix, TrimLength::Shortest) => boundaries
            .iter()
            .find(|&&i| regex.is_match(&value[..i]))
            .map(|&i| i),
        (TrimSide::Prefix, TrimLength::Longest) => boundaries
            .iter()
            .rev()
            .find(|&&i| regex.is_match(&value[..i]))
            .map(|&i| i),
        (TrimSide::Suffix, TrimLength::Shortest) => boundaries
            .iter()
            .rev()
            .find(|&&i| regex.is_match(&value[i..]))
            .map(|&i| i),
        (TrimSide::Suffix, TrimLength::Longest) => boundaries
            .iter()
            .find(|&&i| regex.is_match(&value[i..]))
            .map(|&i| i),
    };

    match (chosen, side) {
        (Some(i), TrimSide::Prefix) => value[i..].to_string(),
        (Some(i), TrimSide::Suffix) => value[..i].to_string(),
        (None, _) => value.to_string(),
    }
}
