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

//! Command prompt
//!
//! The prompt is the value of `PS1` with a small set of backslash escapes
//! expanded:
//!
//! | Escape | Replacement |
//! |--------|-------------|
//! | `\w`   | working directory, with a `$HOME` prefix shown as `~` |
//! | `\W`   | last segment of the working directory |
//! | `\u`   | `$USER` |
//! | `\h`   | `$HOSTNAME` |
//! | `\$`   | `$` |
//!
//! Any other escape is kept verbatim.

use crate::path::file_name;
use crate::Env;

/// Expands the prompt for the given environment.
#[must_use]
pub fn expand_prompt(env: &Env) -> String {
    let ps1 = env.variables.get("PS1").unwrap_or("$ ");
    let mut result = String::with_capacity(ps1.len());
    let mut chars = ps1.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('w') => {
                let home = env.variables.get("HOME").unwrap_or_default();
                // Only a whole-segment prefix counts: /home/username must
                // not render as ~name for HOME=/home/user.
                let rest = env
                    .cwd
                    .strip_prefix(home)
                    .filter(|rest| {
                        !home.is_empty() && (rest.is_empty() || rest.starts_with('/'))
                    });
                match rest {
                    Some(rest) => {
                        result.push('~');
                        result.push_str(rest);
                    }
                    None => result.push_str(&env.cwd),
                }
            }
            Some('W') => result.push_str(file_name(&env.cwd)),
            Some('u') => result.push_str(env.variables.get("USER").unwrap_or_default()),
            Some('h') => result.push_str(env.variables.get("HOSTNAME").unwrap_or_default()),
            Some('$') => result.push('$'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_at(cwd: &str) -> Env {
        let mut env = Env::new_virtual();
        env.cwd = cwd.to_string();
        env.variables.assign("USER", "u");
        env.variables.assign("HOSTNAME", "h");
        env
    }

    #[test]
    fn default_prompt() {
        let env = env_at("/home/user");
        assert_eq!(expand_prompt(&env), "$ ");
    }

    #[test]
    fn working_directory_with_home_prefix() {
        let mut env = env_at("/home/user/src");
        env.variables.assign("PS1", r"\w\$ ");
        assert_eq!(expand_prompt(&env), "~/src$ ");

        env.cwd = "/etc".to_string();
        assert_eq!(expand_prompt(&env), "/etc$ ");
    }

    #[test]
    fn user_host_and_basename() {
        let mut env = env_at("/home/user/src");
        env.variables.assign("PS1", r"\u@\h \W> ");
        assert_eq!(expand_prompt(&env), "u@h src> ");
    }

    #[test]
    fn home_prefix_must_end_at_a_segment_boundary() {
        let mut env = env_at("/home/username");
        env.variables.assign("PS1", r"\w");
        assert_eq!(expand_prompt(&env), "/home/username");
    }

    #[test]
    fn unknown_escape_is_kept() {
        let mut env = env_at("/");
        env.variables.assign("PS1", r"\x\$");
        assert_eq!(expand_prompt(&env), r"\x$");
    }
}
