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

//! Implementation of the if conditional construct.

use super::{evaluate_condition, Command};
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax::{ElifThen, List};
use std::ops::ControlFlow::Continue;

pub async fn execute(
    env: &mut Env,
    condition: &List,
    body: &List,
    elifs: &[ElifThen],
    r#else: Option<&List>,
) -> Result {
    if evaluate_condition(env, condition).await? {
        return body.execute(env).await;
    }

    for elif in elifs {
        if evaluate_condition(env, &elif.condition).await? {
            return elif.body.execute(env).await;
        }
    }

    if let Some(r#else) = r#else {
        return r#else.execute(env).await;
    }

    env.exit_status = ExitStatus::SUCCESS;
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
    fn true_condition_runs_the_body() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "if status 0; then echo yes; else echo no; fi");
        assert_eq!(*stdout.borrow(), "yes\n");
    }

    #[test]
    fn false_condition_runs_the_else() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "if status 1; then echo yes; else echo no; fi");
        assert_eq!(*stdout.borrow(), "no\n");
    }

    #[test]
    fn elif_chain_selects_the_first_true_branch() {
        let (mut env, stdout, _) = env_with_io();
        run(
            &mut env,
            "if status 1; then echo a; elif status 1; then echo b; \
             elif status 0; then echo c; else echo d; fi",
        );
        assert_eq!(*stdout.borrow(), "c\n");
    }

    #[test]
    fn no_branch_selected_is_success() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "status 3; if status 1; then echo x; fi");
        assert_eq!(*stdout.borrow(), "");
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
    }

    #[test]
    fn exit_status_comes_from_the_taken_branch() {
        let (mut env, ..) = env_with_io();
        run(&mut env, "if status 0; then status 5; fi");
        assert_eq!(env.exit_status, ExitStatus(5));
    }
}
