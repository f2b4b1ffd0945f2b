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

//! Implementation of the subshell semantics.

use super::Command;
use mrsh_env::semantics::{Divert, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax::List;
use std::ops::ControlFlow::{Break, Continue};

/// Executes a subshell.
///
/// The variables and the working directory are snapshotted before the body
/// runs and restored afterwards, on every path. The exit status of the body
/// remains visible. An `exit` inside the body terminates only the subshell.
pub async fn execute(env: &mut Env, body: &List) -> Result {
    let saved_variables = env.variables.clone();
    let saved_cwd = env.cwd.clone();

    let result = body.execute(env).await;

    env.variables = saved_variables;
    env.cwd = saved_cwd;

    match result {
        Break(Divert::Exit(exit_status)) => {
            if let Some(exit_status) = exit_status {
                env.exit_status = exit_status;
            }
            Continue(())
        }
        other => other,
    }
}
