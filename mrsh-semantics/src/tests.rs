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

//! Utility for unit tests
//!
//! The shell core implements no commands of its own, so the tests register
//! a small set here: enough to observe output, exit statuses, diversion,
//! the filesystem, and the working directory.

use itertools::Itertools;
use mrsh_env::builtin::{Builtin, ParamSpec, ParamType, Params, Result};
use mrsh_env::io::Stream;
use mrsh_env::path::resolve;
use mrsh_env::semantics::{Divert, ExitStatus};
use mrsh_env::Env;
use std::cell::RefCell;
use std::future::{ready, Future};
use std::ops::ControlFlow::Break;
use std::pin::Pin;
use std::rc::Rc;

type Main = Pin<Box<dyn Future<Output = Result>>>;

/// Creates a test environment with captured output streams and the test
/// commands registered.
pub(crate) fn env_with_io() -> (Env, Rc<RefCell<String>>, Rc<RefCell<String>>) {
    let mut env = Env::new_virtual();
    let (stream, stdout) = Stream::capture();
    env.stdout = stream;
    let (stream, stderr) = Stream::capture();
    env.stderr = stream;
    register_test_builtins(&mut env);
    (env, stdout, stderr)
}

/// Registers every test command into the environment.
pub(crate) fn register_test_builtins(env: &mut Env) {
    env.builtins.register(echo_builtin());
    env.builtins.register(cat_builtin());
    env.builtins.register(status_builtin());
    env.builtins.register(exit_builtin());
    env.builtins.register(complain_builtin());
    env.builtins.register(test_builtin());
    env.builtins.register(wc_builtin());
    env.builtins.register(mkdir_builtin());
    env.builtins.register(pwd_builtin());
    env.builtins.register(cd_builtin());
}

fn echo_main(env: &mut Env, params: Params) -> Main {
    let line = format!("{}\n", params.operands.iter().format(" "));
    env.stdout.write(&line);
    Box::pin(ready(Result::new(ExitStatus::SUCCESS)))
}

/// Returns a minimal implementation of the `echo` command.
pub(crate) fn echo_builtin() -> Builtin {
    Builtin::new("echo", "write arguments to standard output", echo_main)
}

fn cat_main(env: &mut Env, params: Params) -> Main {
    let mut exit_status = ExitStatus::SUCCESS;
    if params.operands.is_empty() {
        let stdin = env.pipe_buffer.clone();
        env.stdout.write(&stdin);
    } else {
        for operand in &params.operands {
            let path = resolve(&env.cwd, operand);
            match env.fs.read_file(&path) {
                Ok(content) => env.stdout.write(&content),
                Err(errno) => {
                    env.stderr.write(&format!("cat: {operand}: {errno}\n"));
                    exit_status = ExitStatus::FAILURE;
                }
            }
        }
    }
    Box::pin(ready(Result::new(exit_status)))
}

/// Returns a minimal implementation of the `cat` command.
pub(crate) fn cat_builtin() -> Builtin {
    Builtin::new("cat", "concatenate files or standard input", cat_main)
}

fn status_main(_env: &mut Env, params: Params) -> Main {
    let code = params
        .operands
        .first()
        .and_then(|operand| operand.parse().ok())
        .unwrap_or(0);
    Box::pin(ready(Result::new(ExitStatus(code))))
}

/// Returns a command that exits with the status given as its operand,
/// without diverting.
pub(crate) fn status_builtin() -> Builtin {
    Builtin::new("status", "return the given exit status", status_main)
}

fn exit_main(env: &mut Env, params: Params) -> Main {
    let exit_status = params
        .operands
        .first()
        .map(|operand| ExitStatus(operand.parse().unwrap_or(2)));
    let result =
        Result::with_exit_status_and_divert(env.exit_status, Break(Divert::Exit(exit_status)));
    Box::pin(ready(result))
}

/// Returns a minimal implementation of the `exit` command.
pub(crate) fn exit_builtin() -> Builtin {
    Builtin::new("exit", "exit the shell", exit_main)
}

fn complain_main(env: &mut Env, _params: Params) -> Main {
    env.stderr.write("grumble\n");
    Box::pin(ready(Result::new(ExitStatus::SUCCESS)))
}

/// Returns a command that writes to standard error only.
pub(crate) fn complain_builtin() -> Builtin {
    Builtin::new("complain", "write a complaint to standard error", complain_main)
}

fn test_main(env: &mut Env, params: Params) -> Main {
    let truth = match params.operands.as_slice() {
        [] => false,
        [value] => !value.is_empty(),
        [left, op, right] => match op.as_str() {
            "=" => left == right,
            "!=" => left != right,
            "-eq" | "-ne" | "-lt" | "-le" | "-gt" | "-ge" => {
                match (left.parse::<i64>(), right.parse::<i64>()) {
                    (Ok(left), Ok(right)) => match op.as_str() {
                        "-eq" => left == right,
                        "-ne" => left != right,
                        "-lt" => left < right,
                        "-le" => left <= right,
                        "-gt" => left > right,
                        _ => left >= right,
                    },
                    _ => {
                        env.stderr.write("test: integer expression expected\n");
                        return Box::pin(ready(Result::new(ExitStatus::ERROR)));
                    }
                }
            }
            _ => {
                env.stderr.write("test: unknown operator\n");
                return Box::pin(ready(Result::new(ExitStatus::ERROR)));
            }
        },
        _ => {
            env.stderr.write("test: too many arguments\n");
            return Box::pin(ready(Result::new(ExitStatus::ERROR)));
        }
    };
    let exit_status = if truth {
        ExitStatus::SUCCESS
    } else {
        ExitStatus::FAILURE
    };
    Box::pin(ready(Result::new(exit_status)))
}

/// Returns a minimal implementation of the `test` command.
pub(crate) fn test_builtin() -> Builtin {
    Builtin::new("test", "evaluate a conditional expression", test_main)
}

fn wc_main(env: &mut Env, params: Params) -> Main {
    let stdin = env.pipe_buffer.clone();
    let lines = stdin.matches('\n').count();
    let output = if params.flag("lines") {
        format!("{lines:8}\n")
    } else {
        let words = stdin.split_whitespace().count();
        let bytes = stdin.len();
        format!("{lines:8}{words:8}{bytes:8}\n")
    };
    env.stdout.write(&output);
    Box::pin(ready(Result::new(ExitStatus::SUCCESS)))
}

/// Returns a minimal implementation of the `wc` command.
pub(crate) fn wc_builtin() -> Builtin {
    let mut builtin = Builtin::new("wc", "count lines, words and bytes", wc_main);
    builtin.params = vec![ParamSpec::new("lines", ParamType::Bool).short('l')];
    builtin
}

fn mkdir_main(env: &mut Env, params: Params) -> Main {
    let recursive = params.flag("parents");
    let mut exit_status = ExitStatus::SUCCESS;
    for operand in &params.operands {
        let path = resolve(&env.cwd, operand);
        if let Err(errno) = env.fs.create_dir(&path, recursive) {
            env.stderr.write(&format!("mkdir: {operand}: {errno}\n"));
            exit_status = ExitStatus::FAILURE;
        }
    }
    Box::pin(ready(Result::new(exit_status)))
}

/// Returns a minimal implementation of the `mkdir` command.
pub(crate) fn mkdir_builtin() -> Builtin {
    let mut builtin = Builtin::new("mkdir", "create directories", mkdir_main);
    builtin.params = vec![ParamSpec::new("parents", ParamType::Bool).short('p')];
    builtin
}

fn pwd_main(env: &mut Env, _params: Params) -> Main {
    let line = format!("{}\n", env.cwd);
    env.stdout.write(&line);
    Box::pin(ready(Result::new(ExitStatus::SUCCESS)))
}

/// Returns a minimal implementation of the `pwd` command.
pub(crate) fn pwd_builtin() -> Builtin {
    Builtin::new("pwd", "print the working directory", pwd_main)
}

fn cd_main(env: &mut Env, params: Params) -> Main {
    let target = match params.operands.first().map(String::as_str) {
        None => env.variables.get("HOME").unwrap_or("/").to_string(),
        Some("-") => env
            .variables
            .get("OLDPWD")
            .unwrap_or(&env.cwd)
            .to_string(),
        Some(operand) => operand.to_string(),
    };

    let path = resolve(&env.cwd, &target);
    let exit_status = match env.fs.metadata(&path) {
        Ok(metadata) if metadata.is_directory => {
            let old = env.cwd.clone();
            env.variables.assign("OLDPWD", old);
            env.set_cwd(&path);
            ExitStatus::SUCCESS
        }
        _ => {
            env.stderr
                .write(&format!("cd: {target}: No such file or directory\n"));
            ExitStatus::FAILURE
        }
    };
    Box::pin(ready(Result::new(exit_status)))
}

/// Returns a minimal implementation of the `cd` command.
pub(crate) fn cd_builtin() -> Builtin {
    Builtin::new("cd", "change the working directory", cd_main)
}
