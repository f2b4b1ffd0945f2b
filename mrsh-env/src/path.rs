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

//! Sandboxed path manipulation
//!
//! The shell works with plain slash-separated strings, not host paths. The
//! working directory is always an absolute normalized path: `/` or
//! `/a/b/...` with no empty, `.` or `..` segments.

/// Normalizes an absolute path.
///
/// Repeated slashes and `.` segments are removed, and `..` pops the previous
/// segment without ever escaping the root. The input is interpreted as
/// absolute whether or not it starts with a slash.
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    if segments.is_empty() {
        "/".to_string()
    } else {
        let mut result = String::new();
        for segment in segments {
            result.push('/');
            result.push_str(segment);
        }
        result
    }
}

/// Resolves a possibly relative path against a working directory.
///
/// The result is always absolute and normalized.
#[must_use]
pub fn resolve(cwd: &str, path: &str) -> String {
    if path.starts_with('/') {
        normalize(path)
    } else {
        normalize(&format!("{cwd}/{path}"))
    }
}

/// Returns the last segment of a path, or the path itself for the root.
#[must_use]
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) if index + 1 < path.len() => &path[index + 1..],
        Some(_) => path,
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/a/b"), "/a/b");
        assert_eq!(normalize("/a//b/"), "/a/b");
        assert_eq!(normalize("/a/./b"), "/a/b");
        assert_eq!(normalize("/a/b/.."), "/a");
        assert_eq!(normalize("/../.."), "/");
        assert_eq!(normalize("/a/../../b"), "/b");
    }

    #[test]
    fn resolution() {
        assert_eq!(resolve("/home/user", "docs"), "/home/user/docs");
        assert_eq!(resolve("/home/user", "/etc"), "/etc");
        assert_eq!(resolve("/home/user", ".."), "/home");
        assert_eq!(resolve("/home/user", "./a/../b"), "/home/user/b");
        assert_eq!(resolve("/", "a"), "/a");
    }

    #[test]
    fn file_names() {
        assert_eq!(file_name("/home/user"), "user");
        assert_eq!(file_name("/"), "/");
        assert_eq!(file_name("/a"), "a");
    }
}
