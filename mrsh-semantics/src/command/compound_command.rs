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

//! Implementation of the compound command semantics.

use super::Command;
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax;
use std::ops::ControlFlow::Continue;

mod case;
mod for_loop;
mod r#if;
mod subshell;
mod while_loop;

/// Executes the condition of an if/while/until command.
async fn evaluate_condition(env: &mut Env, condition: &syntax::List) -> Result<bool> {
    condition.execute(env).await?;
    Continue(env.exit_status == ExitStatus::SUCCESS)
}

/// Executes the compound command.
///
/// # Grouping
///
/// A grouping is executed by running the contained list in the current
/// environment.
///
/// # Subshell
///
/// A subshell runs the contained list and then restores the variables and
/// the working directory, so mutations do not escape the body.
///
/// # For loop
///
/// The values are expanded, each is assigned to the loop variable in turn,
/// and the body runs once per value. An absent or empty value list runs
/// nothing and succeeds.
///
/// # While and until loops
///
/// The `condition` is executed, and while its exit status is zero (while)
/// or non-zero (until), the `body` is executed and the condition tried
/// again.
///
/// # If conditional construct
///
/// The `condition` decides between `body`, the elif clauses, and the `else`
/// clause. With no clause selected, the exit status is zero.
///
/// # Case conditional construct
///
/// The subject word is expanded and matched against each item's patterns in
/// order; the first item with a matching pattern runs. With no match, the
/// exit status is zero.
impl Command for syntax::CompoundCommand {
    async fn execute(&self, env: &mut Env) -> Result {
        use syntax::CompoundCommand::*;
        match self {
            Grouping(list) => list.execute(env).await,
            Subshell(list) => subshell::execute(env, list).await,
            For { name, values, body } => for_loop::execute(env, name, values.as_deref(), body).await,
            While { condition, body } => while_loop::execute(env, condition, body, false).await,
            Until { condition, body } => while_loop::execute(env, condition, body, true).await,
            If {
                condition,
                body,
                elifs,
                r#else,
            } => r#if::execute(env, condition, body, elifs, r#else.as_ref()).await,
            Case { subject, items } => case::execute(env, subject, items).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::env_with_io;
    use futures_util::FutureExt;

    #[test]
    fn grouping_runs_in_the_current_environment() {
        let (mut env, stdout, _) = env_with_io();
        let list: syntax::List = "{ X=1; echo in; }; echo $X".parse().unwrap();
        let result = list.execute(&mut env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
        assert_eq!(*stdout.borrow(), "in\n1\n");
        assert_eq!(env.variables.get("X"), Some("1"));
    }

    #[test]
    fn condition_evaluation() {
        let (mut env, ..) = env_with_io();
        let condition: syntax::List = "status 0".parse().unwrap();
        let result = evaluate_condition(&mut env, &condition)
            .now_or_never()
            .unwrap();
        assert_eq!(result, Continue(true));

        let condition: syntax::List = "status 1".parse().unwrap();
        let result = evaluate_condition(&mut env, &condition)
            .now_or_never()
            .unwrap();
        assert_eq!(result, Continue(false));
    }
}
