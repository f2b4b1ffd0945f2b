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

//! Implementation of pipeline semantics.

use super::Command;
use mrsh_env::io::Stream;
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax;
use std::ops::ControlFlow::Continue;

/// Executes the pipeline.
///
/// A one-command pipeline runs the command directly. With more commands,
/// each stage runs in order with its standard output captured into a
/// string, which becomes the standard input of the next stage. Standard
/// error is not redirected. The exit status of the pipeline is that of the
/// last command.
///
/// If the pipeline is negated with `!`, a zero exit status becomes one and
/// any non-zero exit status becomes zero.
impl Command for syntax::Pipeline {
    async fn execute(&self, env: &mut Env) -> Result {
        if !self.negation {
            return execute_commands(env, &self.commands).await;
        }

        execute_commands(env, &self.commands).await?;
        env.exit_status = if env.exit_status.is_successful() {
            ExitStatus::FAILURE
        } else {
            ExitStatus::SUCCESS
        };
        Continue(())
    }
}

async fn execute_commands(env: &mut Env, commands: &[syntax::Command]) -> Result {
    let Some((last, stages)) = commands.split_last() else {
        env.exit_status = ExitStatus::SUCCESS;
        return Continue(());
    };

    for command in stages {
        let (capture, buffer) = Stream::capture();
        let saved = std::mem::replace(&mut env.stdout, capture);
        let result = command.execute(env).await;
        env.stdout = saved;
        result?;
        env.pipe_buffer = buffer.take();
    }

    last.execute(env).await
}
