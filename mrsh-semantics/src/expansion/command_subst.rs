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

//! Command substitution

use super::Result;
use crate::command::Command;
use mrsh_env::io::Stream;
use mrsh_env::semantics::Divert;
use mrsh_env::Env;
use mrsh_syntax::syntax::List;
use std::ops::ControlFlow::Break;

/// Performs command substitution.
///
/// The sub-program runs with standard output captured; the captured text,
/// with at most one trailing newline removed, is the expansion result. An
/// `exit` inside the substitution terminates only the substitution, like a
/// subshell; its exit status is recorded.
pub(super) async fn expand(env: &mut Env, body: &List) -> Result {
    let (capture, buffer) = Stream::capture();
    let saved = std::mem::replace(&mut env.stdout, capture);
    let result = body.execute(env).await;
    env.stdout = saved;

    if let Break(Divert::Exit(Some(exit_status))) = result {
        env.exit_status = exit_status;
    }

    let mut output = buffer.take();
    if output.ends_with('\n') {
        output.pop();
    }
    Ok(output)
}
