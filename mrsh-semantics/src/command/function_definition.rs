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

//! Implementation of the function definition semantics.

use super::Command;
use mrsh_env::function::Function;
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax;
use std::ops::ControlFlow::Continue;
use std::rc::Rc;

/// Executes the function definition command.
///
/// The definition is installed in the function table, replacing any
/// previous function of the same name. The exit status is zero.
impl Command for syntax::FunctionDefinition {
    async fn execute(&self, env: &mut Env) -> Result {
        env.define_function(Function::new(self.name.clone(), Rc::clone(&self.body)));
        env.exit_status = ExitStatus::SUCCESS;
        Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::env_with_io;
    use futures_util::FutureExt;
    use mrsh_syntax::syntax::List;

    fn run(env: &mut Env, source: &str) {
        let list: List = source.parse().unwrap();
        let result = list.execute(env).now_or_never().unwrap();
        assert_eq!(result, Continue(()));
    }

    #[test]
    fn definition_installs_the_function() {
        let (mut env, ..) = env_with_io();
        run(&mut env, "status 5; f() { echo x; }");
        assert!(env.function("f").is_some());
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
    }

    #[test]
    fn redefinition_replaces_the_body() {
        let (mut env, stdout, _) = env_with_io();
        run(&mut env, "f() { echo old; }; f() { echo new; }; f");
        assert_eq!(*stdout.borrow(), "new\n");
    }

    #[test]
    fn functions_may_call_functions_defined_later() {
        let (mut env, stdout, _) = env_with_io();
        run(
            &mut env,
            "outer() { inner; }; inner() { echo reached; }; outer",
        );
        assert_eq!(*stdout.borrow(), "reached\n");
    }
}
