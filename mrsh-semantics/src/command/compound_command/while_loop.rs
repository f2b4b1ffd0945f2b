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

//! Implementation of the while and until loop semantics.

use super::{evaluate_condition, Command};
use mrsh_env::semantics::{ExitStatus, Result};
use mrsh_env::Env;
use mrsh_syntax::syntax::List;
use std::ops::ControlFlow::Continue;

/// Executes a while loop (`until == false`) or an until loop
/// (`until == true`).
///
/// The exit status of the loop is that of the last body execution, or zero
/// if the body never ran.
pub async fn execute(env: &mut Env, condition: &List, body: &List, until: bool) -> Result {
    let mut exit_status = ExitStatus::SUCCESS;
    loop {
        if !env.running {
            break;
        }
        if evaluate_condition(env, condition).await? == until {
            break;
        }
        body.execute(env).await?;
        exit_status = env.exit_status;
    }
    env.exit_status = exit_status;
    Continue(())
}
