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

//! Redirection semantics
//!
//! Redirections operate at the string level. An output redirection rebinds
//! standard output to a capture buffer; when the command has finished, the
//! buffer is committed to the target file through the filesystem
//! capability. An input redirection loads the target file into the pipe
//! buffer, where the command reads its standard input from. `>&2` rebinds
//! standard output to standard error. The remaining operators parse but do
//! nothing here.
//!
//! [`RedirGuard`] owns the temporary stream bindings and restores them when
//! dropped, on every exit path.

use crate::expansion::{self, expand_word};
use mrsh_env::io::Stream;
use mrsh_env::path::resolve;
use mrsh_env::system::Errno;
use mrsh_env::Env;
use mrsh_syntax::syntax::{Redir, RedirOp};
use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use thiserror::Error;

/// Cause of a redirection error
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ErrorCause {
    /// Expanding the redirection target failed.
    #[error(transparent)]
    Expansion(#[from] expansion::Error),
    /// The target file could not be read or written.
    #[error("{target}: {errno}")]
    File {
        /// Target word as the user wrote it, after expansion
        target: String,
        errno: Errno,
    },
}

/// Explanation of a redirection failure
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(transparent)]
pub struct Error {
    pub cause: ErrorCause,
}

impl From<expansion::Error> for Error {
    fn from(error: expansion::Error) -> Error {
        Error {
            cause: ErrorCause::Expansion(error),
        }
    }
}

/// Output capture waiting to be written to a file
#[derive(Debug)]
struct PendingFile {
    /// Expanded target, as written by the user
    target: String,
    append: bool,
    buffer: Rc<RefCell<String>>,
}

/// Environment wrapper that performs redirections and undoes the stream
/// bindings when dropped
#[derive(Debug)]
pub struct RedirGuard<'e> {
    env: &'e mut Env,
    saved_stdout: Option<Stream>,
    pending: Vec<PendingFile>,
}

impl Deref for RedirGuard<'_> {
    type Target = Env;
    fn deref(&self) -> &Env {
        self.env
    }
}

impl DerefMut for RedirGuard<'_> {
    fn deref_mut(&mut self) -> &mut Env {
        self.env
    }
}

impl Drop for RedirGuard<'_> {
    fn drop(&mut self) {
        if let Some(stdout) = self.saved_stdout.take() {
            self.env.stdout = stdout;
        }
    }
}

impl<'e> RedirGuard<'e> {
    /// Creates a guard that performs no redirections yet.
    pub fn new(env: &'e mut Env) -> RedirGuard<'e> {
        RedirGuard {
            env,
            saved_stdout: None,
            pending: Vec::new(),
        }
    }

    /// Rebinds standard output, remembering the original binding once.
    fn rebind_stdout(&mut self, stream: Stream) {
        let previous = std::mem::replace(&mut self.env.stdout, stream);
        if self.saved_stdout.is_none() {
            self.saved_stdout = Some(previous);
        }
    }

    /// Captures standard output for later writing to a file.
    fn redirect_to_file(&mut self, target: String, append: bool) {
        let (stream, buffer) = Stream::capture();
        self.rebind_stdout(stream);
        self.pending.push(PendingFile {
            target,
            append,
            buffer,
        });
    }

    /// Applies all redirections of a command, in order.
    pub async fn perform_redirs(&mut self, redirs: &[Redir]) -> Result<(), Error> {
        for redir in redirs {
            let target = expand_word(self.env, &redir.operand).await?;
            match redir.op {
                RedirOp::FileOut | RedirOp::FileClobber => {
                    self.redirect_to_file(target, false);
                }
                RedirOp::FileAppend => self.redirect_to_file(target, true),
                RedirOp::FdOut => match target.as_str() {
                    // Writing to fd 1 is already the default.
                    "1" => {}
                    "2" => {
                        let stderr = self.env.stderr.clone();
                        self.rebind_stdout(stderr);
                    }
                    _ => {}
                },
                RedirOp::FileIn => {
                    let path = resolve(&self.env.cwd, &target);
                    match self.env.fs.read_file(&path) {
                        Ok(content) => self.env.pipe_buffer = content,
                        Err(errno) => {
                            return Err(Error {
                                cause: ErrorCause::File { target, errno },
                            })
                        }
                    }
                }
                // Parsed but inert in the string-level core.
                RedirOp::FdIn | RedirOp::FileInOut | RedirOp::HereDoc { .. } => {}
            }
        }
        Ok(())
    }

    /// Writes the captured output of every file redirection to its target.
    ///
    /// Called once after the command has finished. Stream bindings are
    /// restored by `Drop` regardless.
    pub fn commit(&mut self) -> Result<(), Error> {
        for file in self.pending.drain(..) {
            let path = resolve(&self.env.cwd, &file.target);
            let data = file.buffer.take();
            let result = if file.append {
                self.env.fs.append_file(&path, &data)
            } else {
                self.env.fs.write_file(&path, &data)
            };
            if let Err(errno) = result {
                return Err(Error {
                    cause: ErrorCause::File {
                        target: file.target,
                        errno,
                    },
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::env_with_io;
    use assert_matches::assert_matches;
    use futures_util::FutureExt;
    use mrsh_syntax::syntax::{Command, SimpleCommand};

    fn redirs_of(source: &str) -> Vec<Redir> {
        let command: Command = source.parse().unwrap();
        assert_matches!(command, Command::Simple(SimpleCommand { redirs, .. }) => redirs)
    }

    #[test]
    fn output_capture_commits_to_file() {
        let (mut env, stdout, _) = env_with_io();
        let redirs = redirs_of("x > out.txt");
        let mut guard = RedirGuard::new(&mut env);
        guard.perform_redirs(&redirs).now_or_never().unwrap().unwrap();
        guard.stdout.write("captured\n");
        guard.commit().unwrap();
        drop(guard);

        assert_eq!(env.fs.read_file("/home/user/out.txt").unwrap(), "captured\n");
        assert_eq!(*stdout.borrow(), "");
        // The original binding is restored.
        env.stdout.write("after\n");
        assert_eq!(*stdout.borrow(), "after\n");
    }

    #[test]
    fn append_redirection() {
        let (mut env, ..) = env_with_io();
        env.fs.write_file("/home/user/log", "old\n").unwrap();
        let redirs = redirs_of("x >> log");
        let mut guard = RedirGuard::new(&mut env);
        guard.perform_redirs(&redirs).now_or_never().unwrap().unwrap();
        guard.stdout.write("new\n");
        guard.commit().unwrap();
        drop(guard);

        assert_eq!(env.fs.read_file("/home/user/log").unwrap(), "old\nnew\n");
    }

    #[test]
    fn input_redirection_loads_pipe_buffer() {
        let (mut env, ..) = env_with_io();
        env.fs.write_file("/home/user/in.txt", "stdin data").unwrap();
        let redirs = redirs_of("x < in.txt");
        let mut guard = RedirGuard::new(&mut env);
        guard.perform_redirs(&redirs).now_or_never().unwrap().unwrap();
        assert_eq!(guard.pipe_buffer, "stdin data");
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let (mut env, ..) = env_with_io();
        let redirs = redirs_of("x < nope.txt");
        let mut guard = RedirGuard::new(&mut env);
        let error = guard
            .perform_redirs(&redirs)
            .now_or_never()
            .unwrap()
            .unwrap_err();
        assert_matches!(error.cause, ErrorCause::File { target, errno } => {
            assert_eq!(target, "nope.txt");
            assert_eq!(errno, Errno::Enoent);
        });
    }

    #[test]
    fn stdout_to_stderr_duplication() {
        let (mut env, stdout, stderr) = env_with_io();
        let redirs = redirs_of("x >&2");
        let mut guard = RedirGuard::new(&mut env);
        guard.perform_redirs(&redirs).now_or_never().unwrap().unwrap();
        guard.stdout.write("to stderr");
        drop(guard);

        assert_eq!(*stdout.borrow(), "");
        assert_eq!(*stderr.borrow(), "to stderr");
        env.stdout.write("to stdout");
        assert_eq!(*stdout.borrow(), "to stdout");
    }

    #[test]
    fn inert_operators_do_nothing() {
        let (mut env, ..) = env_with_io();
        let redirs = redirs_of("x <<EOF <&0 <>f");
        let mut guard = RedirGuard::new(&mut env);
        guard.perform_redirs(&redirs).now_or_never().unwrap().unwrap();
        assert_eq!(guard.pipe_buffer, "");
        assert!(guard.saved_stdout.is_none());
    }

    #[test]
    fn drop_without_commit_restores_and_discards() {
        let (mut env, stdout, _) = env_with_io();
        let redirs = redirs_of("x > out.txt");
        {
            let mut guard = RedirGuard::new(&mut env);
            guard.perform_redirs(&redirs).now_or_never().unwrap().unwrap();
            guard.stdout.write("lost");
        }
        assert_eq!(env.fs.access("/home/user/out.txt").unwrap_err(), Errno::Enoent);
        env.stdout.write("ok");
        assert_eq!(*stdout.borrow(), "ok");
    }

    #[test]
    fn expanded_target() {
        let (mut env, ..) = env_with_io();
        env.variables.assign("f", "var.txt");
        let redirs = redirs_of("x > $f");
        let mut guard = RedirGuard::new(&mut env);
        guard.perform_redirs(&redirs).now_or_never().unwrap().unwrap();
        guard.commit().unwrap();
        drop(guard);
        assert!(env.fs.access("/home/user/var.txt").is_ok());
    }
}
