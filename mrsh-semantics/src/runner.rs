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

//! The shell facade
//!
//! A [`Shell`] owns an execution environment and runs source text against
//! it. This is the interface an embedder works with: feed lines to
//! [`execute`](Shell::execute), read the prompt from
//! [`prompt`](Shell::prompt), and manage state through the environment.

use crate::command::Command;
use mrsh_env::builtin::Builtin;
use mrsh_env::function::Function;
use mrsh_env::prompt::expand_prompt;
use mrsh_env::semantics::{Divert, ExitStatus};
use mrsh_env::system::FileSystem;
use mrsh_env::Env;
use mrsh_syntax::parser::parse;
use std::ops::ControlFlow::{Break, Continue};
use std::rc::Rc;

/// An embeddable shell instance
///
/// The environment is public; anything not covered by a convenience method
/// can be reached through it directly.
#[derive(Debug)]
pub struct Shell {
    pub env: Env,
}

impl Shell {
    /// Creates a shell backed by the given filesystem capability.
    #[must_use]
    pub fn new(fs: Rc<dyn FileSystem>) -> Shell {
        Shell { env: Env::new(fs) }
    }

    /// Creates a shell backed by a fresh in-memory filesystem.
    #[must_use]
    pub fn new_virtual() -> Shell {
        Shell {
            env: Env::new_virtual(),
        }
    }

    /// Parses and executes source text.
    ///
    /// A parse error is reported on standard error and yields exit status
    /// 2. Otherwise the program runs to completion (or until an `exit`),
    /// and the exit status of the last command is returned and recorded.
    /// After an `exit`, the shell stops running and further calls return
    /// the recorded status without executing anything.
    pub async fn run(&mut self, source: &str) -> ExitStatus {
        if !self.env.running {
            return self.env.exit_status;
        }

        match parse(source) {
            Err(error) => {
                let message = format!("{}: {}\n", self.env.program_name, error);
                self.env.print_error(&message);
                self.env.exit_status = ExitStatus::ERROR;
            }
            Ok(program) => match program.execute(&mut self.env).await {
                Continue(()) => {}
                Break(Divert::Exit(exit_status)) => {
                    self.env.running = false;
                    if let Some(exit_status) = exit_status {
                        self.env.exit_status = exit_status;
                    }
                }
            },
        }
        self.env.exit_status
    }

    /// Blocking convenience wrapper around [`run`](Self::run).
    pub fn execute(&mut self, source: &str) -> ExitStatus {
        futures_executor::block_on(self.run(source))
    }

    /// Expands the prompt from `$PS1`.
    #[must_use]
    pub fn prompt(&self) -> String {
        expand_prompt(&self.env)
    }

    /// Registers a host command.
    pub fn register(&mut self, builtin: Builtin) {
        self.env.builtins.register(builtin);
    }

    /// Looks up a registered command by name or alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<Builtin>> {
        self.env.builtins.get(name)
    }

    /// Returns all registered commands.
    #[must_use]
    pub fn list(&self) -> Vec<Rc<Builtin>> {
        self.env.builtins.list()
    }

    /// Returns all registered commands that are not hidden.
    #[must_use]
    pub fn list_visible(&self) -> Vec<Rc<Builtin>> {
        self.env.builtins.list_visible()
    }

    /// Defines or replaces an alias.
    pub fn set_alias<N, R>(&mut self, name: N, replacement: R)
    where
        N: Into<String>,
        R: Into<String>,
    {
        self.env.set_alias(name, replacement);
    }

    /// Removes an alias. Returns true if it existed.
    pub fn unset_alias(&mut self, name: &str) -> bool {
        self.env.unset_alias(name)
    }

    /// Defines or replaces a function.
    pub fn define_function(&mut self, function: Function) {
        self.env.define_function(function);
    }

    /// Returns the working directory.
    #[must_use]
    pub fn cwd(&self) -> &str {
        &self.env.cwd
    }

    /// Changes the working directory.
    pub fn set_cwd(&mut self, path: &str) {
        self.env.set_cwd(path);
    }

    /// Returns the value of a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.env.variables.get(name)
    }

    /// Assigns a variable.
    pub fn set_variable<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.env.variables.assign(name, value);
    }

    /// Removes a variable, returning its previous value.
    pub fn unset_variable(&mut self, name: &str) -> Option<String> {
        self.env.variables.unset(name)
    }

    /// Returns the exit status of the last executed command.
    #[must_use]
    pub fn last_exit_status(&self) -> ExitStatus {
        self.env.exit_status
    }

    /// Returns false after the shell has exited.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.env.running
    }

    /// Stops the shell with the given exit status.
    pub fn exit(&mut self, exit_status: ExitStatus) {
        self.env.running = false;
        self.env.exit_status = exit_status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::register_test_builtins;
    use mrsh_env::io::Stream;
    use std::cell::RefCell;

    /// A shell wired like the end-to-end reference setup: empty filesystem
    /// with `/home/user`, `USER=u`, `HOSTNAME=h`, captured streams, and the
    /// test commands registered.
    fn test_shell() -> (Shell, Rc<RefCell<String>>, Rc<RefCell<String>>) {
        let mut shell = Shell::new_virtual();
        shell.set_variable("USER", "u");
        shell.set_variable("HOSTNAME", "h");
        let (stream, stdout) = Stream::capture();
        shell.env.stdout = stream;
        let (stream, stderr) = Stream::capture();
        shell.env.stderr = stream;
        register_test_builtins(&mut shell.env);
        (shell, stdout, stderr)
    }

    #[test]
    fn echo_hello_world() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute("echo hello world");
        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(*stdout.borrow(), "hello world\n");
    }

    #[test]
    fn redirect_then_cat() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute("echo a > f.txt && cat f.txt");
        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(*stdout.borrow(), "a\n");
        assert_eq!(
            shell.env.fs.read_file("/home/user/f.txt").unwrap(),
            "a\n"
        );
    }

    #[test]
    fn pipeline_into_wc() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute(r#"echo "line1\nline2" | wc -l"#);
        assert_eq!(status, ExitStatus::SUCCESS);
        // The literal backslash-n is not a newline.
        assert_eq!(*stdout.borrow(), "       1\n");
    }

    #[test]
    fn variable_and_if() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute("X=1; if test $X -eq 1; then echo yes; else echo no; fi");
        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(*stdout.borrow(), "yes\n");
    }

    #[test]
    fn for_loop_over_words() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute("for i in a b c; do echo $i; done");
        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(*stdout.borrow(), "a\nb\nc\n");
        assert_eq!(shell.variable("i"), Some("c"));
    }

    #[test]
    fn subshell_cd_is_isolated() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute("mkdir -p a/b && ( cd a/b && pwd ) && pwd");
        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(*stdout.borrow(), "/home/user/a/b\n/home/user\n");
        assert_eq!(shell.cwd(), "/home/user");
    }

    #[test]
    fn parse_error_reports_and_returns_2() {
        let (mut shell, _, stderr) = test_shell();
        let status = shell.execute("if true; then");
        assert_eq!(status, ExitStatus::ERROR);
        assert_eq!(shell.last_exit_status(), ExitStatus::ERROR);
        assert!(stderr.borrow().starts_with("mrsh: syntax error"));
    }

    #[test]
    fn exit_stops_the_shell() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute("echo before; exit 3; echo after");
        assert_eq!(status, ExitStatus(3));
        assert!(!shell.is_running());
        assert_eq!(*stdout.borrow(), "before\n");

        // Further calls do nothing.
        let status = shell.execute("echo zombie");
        assert_eq!(status, ExitStatus(3));
        assert_eq!(*stdout.borrow(), "before\n");
    }

    #[test]
    fn determinism_across_reexecution() {
        let (mut shell, ..) = test_shell();
        let first = shell.execute("X=2; test $X -eq 2 && status 7 || status 9");
        let (mut shell, ..) = test_shell();
        let second = shell.execute("X=2; test $X -eq 2 && status 7 || status 9");
        assert_eq!(first, second);
        assert_eq!(first, ExitStatus(7));
    }

    #[test]
    fn prompt_reflects_the_environment() {
        let (mut shell, ..) = test_shell();
        shell.set_variable("PS1", r"\u@\h:\w\$ ");
        assert_eq!(shell.prompt(), "u@h:~$ ");
        shell.execute("mkdir d; cd d");
        assert_eq!(shell.prompt(), "u@h:~/d$ ");
    }

    #[test]
    fn command_substitution_end_to_end() {
        let (mut shell, stdout, _) = test_shell();
        let status = shell.execute("echo result: $(echo inner | cat)");
        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(*stdout.borrow(), "result: inner\n");
    }

    #[test]
    fn facade_alias_and_function_management() {
        let (mut shell, stdout, _) = test_shell();
        shell.set_alias("hi", "echo hello");
        shell.execute("hi there");
        assert_eq!(*stdout.borrow(), "hello there\n");
        assert!(shell.unset_alias("hi"));
        assert!(!shell.unset_alias("hi"));

        let body = mrsh_syntax::syntax::CompoundCommand::Grouping(
            "echo from host".parse().unwrap(),
        );
        shell.define_function(Function::new("f", Rc::new(body)));
        shell.execute("f");
        assert_eq!(*stdout.borrow(), "hello there\nfrom host\n");
    }

    #[test]
    fn registry_surface() {
        let (shell, ..) = test_shell();
        assert_eq!(shell.get("echo").unwrap().name, "echo");
        assert!(shell.get("no_such").is_none());
        assert_eq!(shell.list().len(), shell.list_visible().len());
    }

    #[test]
    fn host_exit_call() {
        let (mut shell, ..) = test_shell();
        shell.exit(ExitStatus(42));
        assert!(!shell.is_running());
        assert_eq!(shell.execute("echo nothing"), ExitStatus(42));
    }
}
