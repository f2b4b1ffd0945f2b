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

//! Type definitions for command execution
//!
//! The types here describe the observable result of running a command: an
//! [`ExitStatus`], and possibly a [`Divert`] that unwinds the enclosing
//! constructs.

use std::fmt;
use std::ops::ControlFlow;

/// Number that summarizes the result of command execution
///
/// 0 means success; any other value is a failure. The shell reserves a few
/// values for its own errors, provided as associated constants.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    /// Success (0)
    pub const SUCCESS: ExitStatus = ExitStatus(0);
    /// Generic failure (1)
    pub const FAILURE: ExitStatus = ExitStatus(1);
    /// Syntax or usage error (2)
    pub const ERROR: ExitStatus = ExitStatus(2);
    /// Command not found (127)
    pub const NOT_FOUND: ExitStatus = ExitStatus(127);

    /// Returns true if the exit status is zero.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for ExitStatus {
    fn from(value: i32) -> ExitStatus {
        ExitStatus(value)
    }
}

impl From<ExitStatus> for i32 {
    fn from(exit_status: ExitStatus) -> i32 {
        exit_status.0
    }
}

/// Request to deviate from the normal flow of execution
///
/// A divert is propagated as the `Break` value of a
/// [`ControlFlow`](std::ops::ControlFlow), so the `?` operator unwinds every
/// enclosing construct up to the point that consumes it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Divert {
    /// Exit the whole shell
    ///
    /// The optional exit status overrides the current one. The shell facade
    /// consumes this divert, records the exit status, and stops accepting
    /// further commands.
    Exit(Option<ExitStatus>),
}

/// Result of command execution
///
/// `Continue(())` means execution should proceed to the next command;
/// `Break(divert)` unwinds.
pub type Result<T = ()> = ControlFlow<Divert, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successfulness() {
        assert!(ExitStatus::SUCCESS.is_successful());
        assert!(!ExitStatus::FAILURE.is_successful());
        assert!(!ExitStatus(-1).is_successful());
    }

    #[test]
    fn conversions() {
        assert_eq!(ExitStatus::from(42), ExitStatus(42));
        assert_eq!(i32::from(ExitStatus(7)), 7);
        assert_eq!(ExitStatus::NOT_FOUND.to_string(), "127");
    }
}
