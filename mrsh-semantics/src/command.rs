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

//! Command execution

mod and_or;
mod compound_command;
mod function_definition;
mod pipeline;
mod simple_command;

use mrsh_env::semantics::Result;
use mrsh_env::Env;
use mrsh_syntax::syntax;
use std::ops::ControlFlow::Continue;

/// Syntactic construct that can be executed
pub trait Command {
    /// Executes this command.
    ///
    /// Implementations of this method are expected to update
    /// `env.exit_status` to reflect the result of the execution.
    #[allow(async_fn_in_trait)]
    async fn execute(&self, env: &mut Env) -> Result;
}

/// Executes the command by delegating to the implementation for its
/// variant.
impl Command for syntax::Command {
    async fn execute(&self, env: &mut Env) -> Result {
        use syntax::Command::*;
        match self {
            Simple(command) => command.execute(env).await,
            Compound(command) => command.execute(env).await,
            Function(definition) => definition.execute(env).await,
        }
    }
}

/// Executes the item.
///
/// The asynchronous flag is recorded by the parser but the item still runs
/// synchronously; background scheduling is outside the language core.
impl Command for syntax::Item {
    async fn execute(&self, env: &mut Env) -> Result {
        self.and_or.execute(env).await
    }
}

/// Executes the list.
///
/// Items run in sequence. The list stops early when an item diverts, or
/// when the shell has been asked to stop running.
impl Command for syntax::List {
    async fn execute(&self, env: &mut Env) -> Result {
        // Boxing needed for recursion
        Box::pin(async move {
            for item in &self.0 {
                if !env.running {
                    break;
                }
                item.execute(env).await?;
            }
            Continue(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::env_with_io;
    use futures_util::FutureExt;
    use mrsh_env::semantics::{Divert, ExitStatus};
    use std::ops::ControlFlow::Break;

    #[test]
    fn list_executes_items_in_sequence() {
        let (mut env, stdout, _) = env_with_io();
        let list: syntax::List = "echo 1; echo 2; echo 3;".parse().unwrap();
        let result = list.execute(&mut env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
        assert_eq!(*stdout.borrow(), "1\n2\n3\n");
    }

    #[test]
    fn list_exit_status_is_the_last_command() {
        let (mut env, ..) = env_with_io();
        let list: syntax::List = "status 1; status 4".parse().unwrap();
        let result = list.execute(&mut env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
        assert_eq!(env.exit_status, ExitStatus(4));
    }

    #[test]
    fn list_stops_on_divert() {
        let (mut env, stdout, _) = env_with_io();
        let list: syntax::List = "echo a; exit 9; echo b".parse().unwrap();
        let result = list.execute(&mut env).now_or_never().unwrap();
        assert_eq!(result, Break(Divert::Exit(Some(ExitStatus(9)))));
        assert_eq!(*stdout.borrow(), "a\n");
    }

    #[test]
    fn list_stops_when_not_running() {
        let (mut env, stdout, _) = env_with_io();
        env.running = false;
        let list: syntax::List = "echo a".parse().unwrap();
        let result = list.execute(&mut env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
        assert_eq!(*stdout.borrow(), "");
    }

    #[test]
    fn async_items_run_synchronously() {
        let (mut env, stdout, _) = env_with_io();
        let list: syntax::List = "echo first& echo second".parse().unwrap();
        assert!(list.0[0].is_async);
        let result = list.execute(&mut env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
        assert_eq!(*stdout.borrow(), "first\nsecond\n");
    }
}
