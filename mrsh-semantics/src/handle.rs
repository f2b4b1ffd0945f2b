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

//! Reporting errors and converting them to exit statuses

use crate::expansion;
use crate::redir;
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use std::ops::ControlFlow::Continue;

/// Error that the shell reports on standard error and contains within the
/// current command, turning it into a nonzero exit status
pub trait Handle {
    /// Prints the error and updates the exit status accordingly.
    #[allow(async_fn_in_trait)]
    async fn handle(&self, env: &mut Env) -> Result;
}

/// An expansion error is reported as `"<program>: <name>: <message>"` and
/// fails the command with exit status 1. The enclosing list continues.
impl Handle for expansion::Error {
    async fn handle(&self, env: &mut Env) -> Result {
        let message = format!("{}: {}\n", env.program_name, self);
        env.print_error(&message);
        env.exit_status = ExitStatus::FAILURE;
        Continue(())
    }
}

/// A redirection error is reported the same way and fails the command with
/// exit status 1.
impl Handle for redir::Error {
    async fn handle(&self, env: &mut Env) -> Result {
        match &self.cause {
            redir::ErrorCause::Expansion(error) => error.handle(env).await,
            redir::ErrorCause::File { .. } => {
                let message = format!("{}: {}\n", env.program_name, self);
                env.print_error(&message);
                env.exit_status = ExitStatus::FAILURE;
                Continue(())
            }
        }
    }
}
