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

//! Filesystem capability
//!
//! The shell never touches a real filesystem. The host supplies an
//! implementor of [`FileSystem`]; the evaluator uses it for redirections and
//! command handlers use it for everything else. [`VirtualFileSystem`] is the
//! in-memory implementation used in tests and by fully-sandboxed embedders.
//!
//! All operations are synchronous; suspension points belong to command
//! handlers, not to the capability itself.

pub mod r#virtual;

use std::fmt::Debug;
use thiserror::Error;

#[doc(no_inline)]
pub use r#virtual::VirtualFileSystem;

/// Error code reported by filesystem operations
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum Errno {
    /// `ENOENT`
    #[error("No such file or directory")]
    Enoent,
    /// `EISDIR`
    #[error("Is a directory")]
    Eisdir,
    /// `EACCES`
    #[error("Permission denied")]
    Eacces,
    /// `EEXIST`
    #[error("File exists")]
    Eexist,
    /// `ENOTEMPTY`
    #[error("Directory not empty")]
    Enotempty,
}

/// Result of [`FileSystem::metadata`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Metadata {
    pub is_file: bool,
    pub is_directory: bool,
    /// Content length in bytes; 0 for directories
    pub size: u64,
    /// Modification time, in host-defined ticks
    pub mtime: u64,
}

/// Minimal filesystem surface the shell depends on
///
/// Paths are absolute, slash-separated strings; callers resolve relative
/// paths against the working directory first (see [`crate::path`]).
/// Implementors use interior mutability, as the shell shares one capability
/// across the environment and its subshells.
pub trait FileSystem: Debug {
    /// Reads a regular file into a string.
    fn read_file(&self, path: &str) -> Result<String, Errno>;

    /// Writes a regular file, truncating or creating it.
    fn write_file(&self, path: &str, data: &str) -> Result<(), Errno>;

    /// Appends to a regular file, creating it if missing.
    fn append_file(&self, path: &str, data: &str) -> Result<(), Errno>;

    /// Lists the entry names of a directory, sorted.
    fn read_dir(&self, path: &str) -> Result<Vec<String>, Errno>;

    /// Creates a directory. With `recursive`, missing ancestors are created
    /// and an existing directory is not an error.
    fn create_dir(&self, path: &str, recursive: bool) -> Result<(), Errno>;

    /// Removes an empty directory.
    fn remove_dir(&self, path: &str) -> Result<(), Errno>;

    /// Describes a file or directory.
    fn metadata(&self, path: &str) -> Result<Metadata, Errno>;

    /// Tests whether the path exists.
    fn access(&self, path: &str) -> Result<(), Errno>;

    /// Removes a regular file.
    fn unlink(&self, path: &str) -> Result<(), Errno>;

    /// Moves a file or directory.
    fn rename(&self, from: &str, to: &str) -> Result<(), Errno>;

    /// Copies a regular file.
    fn copy_file(&self, from: &str, to: &str) -> Result<(), Errno>;

    /// Returns the canonical form of an existing path.
    fn real_path(&self, path: &str) -> Result<String, Errno>;
}
