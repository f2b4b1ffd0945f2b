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

//! This crate defines the shell execution environment.
//!
//! A shell execution environment is the collection of data that may affect
//! or be affected by command execution: [variable](variable)s,
//! [alias](alias)es, [function](function)s, the registered
//! [command](builtin)s, the working directory, the exit status of the last
//! command, and the I/O plumbing. Everything lives in the [`Env`] struct,
//! which is passed through the evaluator and into command handlers.
//!
//! The shell is embedded in a host process: it has no processes, no file
//! descriptors, and no real filesystem. Standard output and standard error
//! are [`Stream`](io::Stream)s, standard input of a command is the string in
//! [`Env::pipe_buffer`], and files live behind the
//! [`FileSystem`](system::FileSystem) capability the host supplies.

pub mod alias;
pub mod builtin;
pub mod function;
pub mod io;
pub mod path;
pub mod prompt;
pub mod semantics;
pub mod system;
pub mod variable;

use self::alias::{Alias, AliasSet};
use self::builtin::Registry;
use self::function::{Function, FunctionSet};
use self::io::Stream;
use self::semantics::ExitStatus;
use self::system::{FileSystem, VirtualFileSystem};
use self::variable::VariableSet;
use std::rc::Rc;

/// Context frame the evaluator pushes while executing nested constructs
///
/// Frames let deeply nested code ask what kind of construct it is running
/// in without threading extra parameters through every call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Frame {
    /// The command resulted from a single alias substitution pass; alias
    /// resolution is suppressed inside to prevent infinite recursion.
    AliasSubstitution,
}

/// Whole shell execution environment
#[derive(Debug)]
pub struct Env {
    /// Variables defined in the environment
    pub variables: VariableSet,

    /// Aliases defined in the environment
    pub aliases: AliasSet,

    /// Functions defined in the environment
    pub functions: FunctionSet,

    /// Commands registered by the host
    pub builtins: Registry,

    /// Working directory; always an absolute normalized path
    pub cwd: String,

    /// Exit status of the last executed command
    pub exit_status: ExitStatus,

    /// False after the shell has been asked to exit
    pub running: bool,

    /// Standard input of the next command, staged by pipelines and `<`
    /// redirections
    pub pipe_buffer: String,

    /// Standard output
    pub stdout: Stream,

    /// Standard error
    pub stderr: Stream,

    /// Filesystem capability supplied by the host
    pub fs: Rc<dyn FileSystem>,

    /// Name the shell uses for itself in diagnostics
    pub program_name: String,

    stack: Vec<Frame>,
}

/// Default home directory, also the initial working directory
const DEFAULT_HOME: &str = "/home/user";

impl Env {
    /// Creates a new environment using the given filesystem capability.
    ///
    /// The variables `HOME`, `PWD`, `PATH` and `PS1` receive defaults; the
    /// working directory starts at `$HOME`. Output streams are initially
    /// null; embedders replace them with callbacks or captures.
    #[must_use]
    pub fn new(fs: Rc<dyn FileSystem>) -> Env {
        let mut variables = VariableSet::new();
        variables.assign("HOME", DEFAULT_HOME);
        variables.assign("PWD", DEFAULT_HOME);
        variables.assign("PATH", "/bin:/usr/bin");
        variables.assign("PS1", "$ ");

        Env {
            variables,
            aliases: AliasSet::new(),
            functions: FunctionSet::new(),
            builtins: Registry::new(),
            cwd: DEFAULT_HOME.to_string(),
            exit_status: ExitStatus::SUCCESS,
            running: true,
            pipe_buffer: String::new(),
            stdout: Stream::Null,
            stderr: Stream::Null,
            fs,
            program_name: "mrsh".to_string(),
            stack: Vec::new(),
        }
    }

    /// Creates a new environment with an in-memory filesystem containing
    /// the home directory.
    #[must_use]
    pub fn new_virtual() -> Env {
        let fs = VirtualFileSystem::new();
        fs.create_dir(DEFAULT_HOME, true)
            .expect("creating the home directory cannot fail on an empty filesystem");
        Env::new(Rc::new(fs))
    }

    /// Changes the working directory.
    ///
    /// The path is resolved against the current working directory and
    /// normalized; `PWD` is updated to match.
    pub fn set_cwd(&mut self, new_path: &str) {
        self.cwd = path::resolve(&self.cwd, new_path);
        self.variables.assign("PWD", self.cwd.clone());
    }

    /// Writes a message to standard error.
    pub fn print_error(&self, message: &str) {
        self.stderr.write(message);
    }

    /// Writes a `"<program>: <subject>: <reason>"` diagnostic to standard
    /// error.
    pub fn report_error(&self, subject: &str, reason: &str) {
        self.print_error(&format!("{}: {}: {}\n", self.program_name, subject, reason));
    }

    /// Defines or replaces an alias.
    pub fn set_alias<N: Into<String>, R: Into<String>>(&mut self, name: N, replacement: R) {
        self.aliases.replace(alias::HashEntry::new(name, replacement));
    }

    /// Removes an alias. Returns true if it existed.
    pub fn unset_alias(&mut self, name: &str) -> bool {
        self.aliases.remove(name)
    }

    /// Looks up an alias definition.
    #[must_use]
    pub fn alias(&self, name: &str) -> Option<Rc<Alias>> {
        self.aliases.get(name).map(|entry| Rc::clone(&entry.0))
    }

    /// Defines or replaces a function.
    pub fn define_function(&mut self, function: Function) {
        self.functions
            .replace(function::HashEntry(Rc::new(function)));
    }

    /// Looks up a function definition.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Rc<Function>> {
        self.functions.get(name).map(|entry| Rc::clone(&entry.0))
    }

    /// Pushes a context frame. The caller must pop it.
    pub fn push_frame(&mut self, frame: Frame) {
        self.stack.push(frame);
    }

    /// Pops the most recent context frame.
    pub fn pop_frame(&mut self) {
        self.stack.pop();
    }

    /// Returns true if an alias substitution frame is on the stack.
    #[must_use]
    pub fn in_alias_substitution(&self) -> bool {
        self.stack.contains(&Frame::AliasSubstitution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_defaults() {
        let env = Env::new_virtual();
        assert_eq!(env.cwd, "/home/user");
        assert_eq!(env.variables.get("HOME"), Some("/home/user"));
        assert_eq!(env.variables.get("PWD"), Some("/home/user"));
        assert_eq!(env.variables.get("PATH"), Some("/bin:/usr/bin"));
        assert_eq!(env.variables.get("PS1"), Some("$ "));
        assert_eq!(env.exit_status, ExitStatus::SUCCESS);
        assert!(env.running);
        assert!(env.fs.access("/home/user").is_ok());
    }

    #[test]
    fn set_cwd_resolves_and_updates_pwd() {
        let mut env = Env::new_virtual();
        env.set_cwd("docs");
        assert_eq!(env.cwd, "/home/user/docs");
        assert_eq!(env.variables.get("PWD"), Some("/home/user/docs"));
        env.set_cwd("../..");
        assert_eq!(env.cwd, "/home");
        env.set_cwd("/etc/../var");
        assert_eq!(env.cwd, "/var");
    }

    #[test]
    fn cwd_stays_absolute_and_normalized() {
        let mut env = Env::new_virtual();
        for step in ["..", "..", "..", "a//b", "./c", "../../.."] {
            env.set_cwd(step);
            assert!(env.cwd.starts_with('/'));
            assert!(!env.cwd.contains("//"));
            assert!(!env.cwd.split('/').any(|s| s == "." || s == ".."));
        }
    }

    #[test]
    fn alias_definition_and_removal() {
        let mut env = Env::new_virtual();
        env.set_alias("ll", "ls -l");
        assert_eq!(env.alias("ll").unwrap().replacement, "ls -l");
        assert!(env.unset_alias("ll"));
        assert!(!env.unset_alias("ll"));
        assert!(env.alias("ll").is_none());
    }

    #[test]
    fn report_error_shape() {
        let mut env = Env::new_virtual();
        let (stream, captured) = Stream::capture();
        env.stderr = stream;
        env.report_error("x", "No such file or directory");
        assert_eq!(*captured.borrow(), "mrsh: x: No such file or directory\n");
    }

    #[test]
    fn alias_substitution_frames() {
        let mut env = Env::new_virtual();
        assert!(!env.in_alias_substitution());
        env.push_frame(Frame::AliasSubstitution);
        assert!(env.in_alias_substitution());
        env.pop_frame();
        assert!(!env.in_alias_substitution());
    }
}
