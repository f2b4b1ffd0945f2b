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

//! Arithmetic expansion
//!
//! The body of `$((...))` is first expanded as a word. Within the expanded
//! string, any remaining `$name` is substituted with the variable's value,
//! the string is restricted to the arithmetic character set, and the result
//! is [evaluated](crate::arith). Any failure yields `"0"`.

use crate::arith;
use mrsh_env::Env;

/// Substitutes `$name` occurrences with variable values.
fn substitute_params(env: &Env, body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(dollar) = rest.find('$') {
        result.push_str(&rest[..dollar]);
        rest = &rest[dollar + 1..];
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(rest.len());
        if end == 0 {
            result.push('$');
        } else {
            result.push_str(env.variables.get(&rest[..end]).unwrap_or_default());
            rest = &rest[end..];
        }
    }
    result.push_str(rest);
    result
}

/// Evaluates an expanded arithmetic body to its decimal result.
pub(super) fn expand(env: &Env, body: &str) -> String {
    let substituted = substitute_params(env, body);
    let cleaned: String = substituted
        .chars()
        .filter(|c| matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '%' | '(' | ')' | ' '))
        .collect();
    match arith::eval(&cleaned) {
        Ok(value) => value.to_string(),
        Err(_) => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_expression() {
        let env = Env::new_virtual();
        assert_eq!(expand(&env, "2 * (3 + 4)"), "14");
    }

    #[test]
    fn dollar_names_are_substituted() {
        let mut env = Env::new_virtual();
        env.variables.assign("a", "6");
        env.variables.assign("a1", "10");
        assert_eq!(expand(&env, "$a * 7"), "42");
        assert_eq!(expand(&env, "$a1+1"), "11");
        assert_eq!(expand(&env, "$missing + 3"), "3");
    }

    #[test]
    fn stray_characters_are_stripped() {
        let env = Env::new_virtual();
        assert_eq!(expand(&env, "1 + 2; rm x"), "3");
    }

    #[test]
    fn failures_yield_zero() {
        let env = Env::new_virtual();
        assert_eq!(expand(&env, "1 / 0"), "0");
        assert_eq!(expand(&env, "("), "0");
        assert_eq!(expand(&env, ""), "0");
    }
}
