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

//! Implementation of the and-or list semantics.

use super::Command;
use mrsh_env::semantics::Result;
use mrsh_env::Env;
use mrsh_syntax::syntax::AndOr::{AndThen, OrElse};
use mrsh_syntax::syntax::AndOrList;
use std::ops::ControlFlow::Continue;

/// Executes the and-or list.
///
/// The `&&` operator first executes the left-hand-side pipeline, and if and
/// only if the exit status is zero, executes the right-hand-side. The `||`
/// operator works similarly but runs the right-hand-side if and only if the
/// left-hand-side exit status is non-zero. The operators are
/// left-associative and have equal precedence.
///
/// The exit status of the and-or list is that of the last executed
/// pipeline.
impl Command for AndOrList {
    async fn execute(&self, env: &mut Env) -> Result {
        self.first.execute(env).await?;

        for (and_or, pipeline) in &self.rest {
            let success = env.exit_status.is_successful();
            let run = match and_or {
                AndThen => success,
                OrElse => !success,
            };
            if run {
                pipeline.execute(env).await?;
            }
        }
        Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::env_with_io;
    use futures_util::FutureExt;
    use mrsh_env::semantics::ExitStatus;

    fn run(env: &mut Env, source: &str) {
        let list: AndOrList = match source.parse::<mrsh_syntax::syntax::List>() {
            Ok(mut list) => list.0.remove(0).and_or,
            Err(e) => panic!("parse error: {e}"),
        };
        let result = list.execute(env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
    }

    #[test]
    fn true_and_true() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "echo one && echo two");
        assert_eq!(*stdout.borrow(), "one\ntwo\n");
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
    }

    #[test]
    fn false_and_any() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "status 1 && echo skipped");
        assert_eq!(*stdout.borrow(), "");
        assert_eq!(env.exit_status, ExitStatus(1));
    }

    #[test]
    fn true_or_any() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "echo kept || echo skipped");
        assert_eq!(*stdout.borrow(), "kept\n");
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
    }

    #[test]
    fn false_or_true() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "status 2 || echo rescued");
        assert_eq!(*stdout.borrow(), "rescued\n");
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
    }

    #[test]
    fn chains_short_circuit_left_to_right() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "status 1 && echo a || echo b");
        assert_eq!(*stdout.borrow(), "b\n");

        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "echo a && status 3 && echo never");
        assert_eq!(*stdout.borrow(), "a\n");
        assert_eq!(env.exit_status, ExitStatus(3));
    }
}
