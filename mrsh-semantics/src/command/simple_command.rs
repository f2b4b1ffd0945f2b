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

//! Implementation of the simple command semantics.
//!
//! A simple command executes in this order:
//!
//! 1. Redirections are set up; a failure fails the command without running
//!    it.
//! 2. Assignment values are expanded and committed to the environment. A
//!    command with no name stops here with exit status zero.
//! 3. The command name and arguments are expanded.
//! 4. If the name is an alias, its replacement text is prepended to the
//!    arguments and the result re-parsed and executed, one substitution
//!    pass per invocation.
//! 5. If the name is a function, its body is executed.
//! 6. Otherwise, the name is looked up in the command registry; a miss
//!    reports `command not found` and returns 127.
//! 7. The arguments are parsed against the command's parameter schema; a
//!    validation failure reports a usage error and returns 2.
//! 8. The handler runs; afterwards, captured output is committed to any
//!    redirection target files and the stream bindings are restored.

use super::Command;
use crate::expansion::{expand_word, expand_words};
use crate::redir::RedirGuard;
use crate::Handle;
use itertools::Itertools;
use mrsh_env::alias::Alias;
use mrsh_env::builtin::args;
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::{Env, Frame};
use mrsh_syntax::parser::parse;
use mrsh_syntax::syntax;
use std::ops::ControlFlow::Continue;
use std::rc::Rc;

/// Commits redirections and restores the stream bindings.
///
/// Every path out of a simple command that has run to completion ends
/// here. A commit failure is reported and fails the command.
fn finish(mut env: RedirGuard<'_>) -> Result {
    if let Err(error) = env.commit() {
        let message = format!("{}: {}\n", env.program_name, error);
        env.print_error(&message);
        env.exit_status = ExitStatus::FAILURE;
    }
    Continue(())
}

/// Re-parses and executes an alias substitution.
async fn run_alias(mut env: RedirGuard<'_>, alias: Rc<Alias>, args: Vec<String>) -> Result {
    let source = std::iter::once(alias.replacement.clone())
        .chain(args)
        .join(" ");
    match parse(&source) {
        Ok(list) => {
            env.push_frame(Frame::AliasSubstitution);
            let result = Box::pin(list.execute(&mut *env)).await;
            env.pop_frame();
            result?;
            finish(env)
        }
        Err(error) => {
            let message = format!("{}: {}\n", env.program_name, error);
            env.print_error(&message);
            env.exit_status = ExitStatus::ERROR;
            finish(env)
        }
    }
}

impl Command for syntax::SimpleCommand {
    async fn execute(&self, env: &mut Env) -> Result {
        let mut env = RedirGuard::new(env);

        if let Err(error) = env.perform_redirs(&self.redirs).await {
            return error.handle(&mut env).await;
        }

        for assign in &self.assigns {
            let value = match expand_word(&mut env, &assign.value).await {
                Ok(value) => value,
                Err(error) => return error.handle(&mut env).await,
            };
            env.variables.assign(assign.name.clone(), value);
        }

        let Some((name_word, arg_words)) = self.words.split_first() else {
            env.exit_status = ExitStatus::SUCCESS;
            return finish(env);
        };

        let name = match expand_word(&mut env, name_word).await {
            Ok(name) => name,
            Err(error) => return error.handle(&mut env).await,
        };
        let args = match expand_words(&mut env, arg_words).await {
            Ok(args) => args,
            Err(error) => return error.handle(&mut env).await,
        };

        if !env.in_alias_substitution() {
            if let Some(alias) = env.alias(&name) {
                return run_alias(env, alias, args).await;
            }
        }

        if let Some(function) = env.function(&name) {
            Box::pin(function.body.execute(&mut *env)).await?;
            return finish(env);
        }

        let Some(builtin) = env.builtins.get(&name) else {
            let message = format!("{}: {}: command not found\n", env.program_name, name);
            env.print_error(&message);
            env.exit_status = ExitStatus::NOT_FOUND;
            return finish(env);
        };

        let params = match args::parse_arguments(&builtin, &args) {
            Ok(params) => params,
            Err(error) => {
                let message = format!("{}: {}: {}\n", env.program_name, name, error);
                env.print_error(&message);
                env.exit_status = ExitStatus::ERROR;
                return finish(env);
            }
        };

        let result = (builtin.execute)(&mut env, params).await;
        env.exit_status = result.exit_status();
        // Standard input is consumed by the command it was staged for.
        env.pipe_buffer.clear();
        finish(env)?;
        result.divert()
    }
}
