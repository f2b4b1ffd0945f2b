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

//! Implementation of the for loop semantics.

use super::Command;
use crate::expansion::expand_words;
use crate::Handle;
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax::{List, Word};
use std::ops::ControlFlow::Continue;

/// Executes a for loop.
///
/// Without an `in` clause the loop iterates nothing, as positional
/// parameters are not supported. The loop variable keeps its last assigned
/// value after the loop.
pub async fn execute(env: &mut Env, name: &str, values: Option<&[Word]>, body: &List) -> Result {
    let values = match values {
        Some(words) => match expand_words(env, words).await {
            Ok(values) => values,
            Err(error) => return error.handle(env).await,
        },
        None => Vec::new(),
    };

    env.exit_status = ExitStatus::SUCCESS;
    for value in values {
        if !env.running {
            break;
        }
        env.variables.assign(name, value);
        body.execute(env).await?;
    }
    Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::env_with_io;
    use futures_util::FutureExt;

    fn run(env: &mut Env, source: &str) {
        let list: List = source.parse().unwrap();
        let result = list.execute(env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
    }

    #[test]
    fn iterates_each_value() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "for i in a b c; do echo $i; done");
        assert_eq!(*stdout.borrow(), "a\nb\nc\n");
        // The variable keeps its final value.
        assert_eq!(env.variables.get("i"), Some("c"));
    }

    #[test]
    fn values_are_expanded() {
        let (mut env, stdout, _) = env_with_io();
        env.variables.assign("x", "expanded");
        run(&mut env, "for i in $x 'lit eral'; do echo $i; done");
        assert_eq!(*stdout.borrow(), "expanded\nlit eral\n");
    }

    #[test]
    fn empty_value_list_succeeds() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "status 3; for i in; do echo no; done");
        assert_eq!(*stdout.borrow(), "");
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
    }

    #[test]
    fn missing_in_clause_iterates_nothing() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "for i do echo no; done");
        assert_eq!(*stdout.borrow(), "");
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
    }

    #[test]
    fn exit_status_is_the_last_body_run() {
        let (mut env, ..) = env_with_io();
        run(&mut env, "for i in 1 2 5; do status $i; done");
        assert_eq!(env.exit_status, ExitStatus(5));
    }
}
