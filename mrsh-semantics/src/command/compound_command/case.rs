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

//! Implementation of the case conditional construct.

use super::Command;
use crate::expansion::expand_word;
use crate::pattern;
use crate::Handle;
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax::{CaseItem, Word};
use std::ops::ControlFlow::Continue;

/// Executes a case command.
///
/// Patterns are expanded one by one and tried in order of appearance; the
/// body of the first item with a matching pattern is executed. With no
/// match, the exit status is zero.
pub async fn execute(env: &mut Env, subject: &Word, items: &[CaseItem]) -> Result {
    let subject = match expand_word(env, subject).await {
        Ok(subject) => subject,
        Err(error) => return error.handle(env).await,
    };

    for item in items {
        for pattern_word in &item.patterns {
            let pattern = match expand_word(env, pattern_word).await {
                Ok(pattern) => pattern,
                Err(error) => return error.handle(env).await,
            };
            if pattern::matches_fully(&pattern, &subject) {
                return item.body.execute(env).await;
            }
        }
    }

    env.exit_status = ExitStatus::SUCCESS;
    Continue(())
}
