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

//! In-memory filesystem
//!
//! [`VirtualFileSystem`] implements the [`FileSystem`] capability with a
//! tree of nodes held in memory. Clones share the same state, so a test can
//! keep a handle and inspect files the shell wrote.

use super::{Errno, FileSystem, Metadata};
use crate::path::normalize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Node of the file tree
#[derive(Clone, Debug)]
enum INode {
    Regular { content: String, mtime: u64 },
    Directory(Directory),
}

/// Directory node: a sorted name-to-node mapping
#[derive(Clone, Debug, Default)]
struct Directory {
    entries: BTreeMap<String, INode>,
}

#[derive(Debug, Default)]
struct State {
    root: Directory,
    clock: u64,
}

impl State {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

/// In-memory implementation of the [`FileSystem`] capability
#[derive(Clone, Debug, Default)]
pub struct VirtualFileSystem {
    state: Rc<RefCell<State>>,
}

/// Splits a path into normalized components. The root yields no components.
fn components(path: &str) -> Vec<String> {
    let normalized = normalize(path);
    normalized
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Follows components from a directory to a node.
fn find_node<'a>(mut dir: &'a Directory, components: &[String]) -> Result<&'a INode, Errno> {
    let (last, ancestors) = components.split_last().ok_or(Errno::Eisdir)?;
    for name in ancestors {
        match dir.entries.get(name) {
            Some(INode::Directory(next)) => dir = next,
            _ => return Err(Errno::Enoent),
        }
    }
    dir.entries.get(last).ok_or(Errno::Enoent)
}

/// Follows components to the directory they name.
fn find_dir<'a>(mut dir: &'a Directory, components: &[String]) -> Result<&'a Directory, Errno> {
    for name in components {
        match dir.entries.get(name) {
            Some(INode::Directory(next)) => dir = next,
            Some(_) => return Err(Errno::Enoent),
            None => return Err(Errno::Enoent),
        }
    }
    Ok(dir)
}

/// Mutable variant of [`find_dir`].
fn find_dir_mut<'a>(
    mut dir: &'a mut Directory,
    components: &[String],
) -> Result<&'a mut Directory, Errno> {
    for name in components {
        match dir.entries.get_mut(name) {
            Some(INode::Directory(next)) => dir = next,
            _ => return Err(Errno::Enoent),
        }
    }
    Ok(dir)
}

impl VirtualFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> VirtualFileSystem {
        VirtualFileSystem::default()
    }

    /// Removes a named entry, returning the node.
    fn take(&self, path: &str) -> Result<INode, Errno> {
        let components = components(path);
        let (name, parent) = components.split_last().ok_or(Errno::Eacces)?;
        let mut state = self.state.borrow_mut();
        let dir = find_dir_mut(&mut state.root, parent)?;
        dir.entries.remove(name).ok_or(Errno::Enoent)
    }

    /// Inserts a node, replacing any existing entry of the same name.
    fn put(&self, path: &str, node: INode) -> Result<(), Errno> {
        let components = components(path);
        let (name, parent) = components.split_last().ok_or(Errno::Eisdir)?;
        let mut state = self.state.borrow_mut();
        let dir = find_dir_mut(&mut state.root, parent)?;
        dir.entries.insert(name.clone(), node);
        Ok(())
    }
}

impl FileSystem for VirtualFileSystem {
    fn read_file(&self, path: &str) -> Result<String, Errno> {
        let components = components(path);
        let state = self.state.borrow();
        match find_node(&state.root, &components)? {
            INode::Regular { content, .. } => Ok(content.clone()),
            INode::Directory(_) => Err(Errno::Eisdir),
        }
    }

    fn write_file(&self, path: &str, data: &str) -> Result<(), Errno> {
        let components = components(path);
        let (name, parent) = components.split_last().ok_or(Errno::Eisdir)?;
        let mut state = self.state.borrow_mut();
        let mtime = state.tick();
        let dir = find_dir_mut(&mut state.root, parent)?;
        match dir.entries.get_mut(name) {
            Some(INode::Directory(_)) => Err(Errno::Eisdir),
            Some(INode::Regular { content, mtime: t }) => {
                *content = data.to_string();
                *t = mtime;
                Ok(())
            }
            None => {
                dir.entries.insert(
                    name.clone(),
                    INode::Regular {
                        content: data.to_string(),
                        mtime,
                    },
                );
                Ok(())
            }
        }
    }

    fn append_file(&self, path: &str, data: &str) -> Result<(), Errno> {
        let components = components(path);
        let (name, parent) = components.split_last().ok_or(Errno::Eisdir)?;
        let mut state = self.state.borrow_mut();
        let mtime = state.tick();
        let dir = find_dir_mut(&mut state.root, parent)?;
        match dir.entries.get_mut(name) {
            Some(INode::Directory(_)) => Err(Errno::Eisdir),
            Some(INode::Regular { content, mtime: t }) => {
                content.push_str(data);
                *t = mtime;
                Ok(())
            }
            None => {
                dir.entries.insert(
                    name.clone(),
                    INode::Regular {
                        content: data.to_string(),
                        mtime,
                    },
                );
                Ok(())
            }
        }
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>, Errno> {
        let components = components(path);
        let state = self.state.borrow();
        let dir = if components.is_empty() {
            &state.root
        } else {
            match find_node(&state.root, &components)? {
                INode::Directory(_) => find_dir(&state.root, &components)?,
                INode::Regular { .. } => return Err(Errno::Enoent),
            }
        };
        Ok(dir.entries.keys().cloned().collect())
    }

    fn create_dir(&self, path: &str, recursive: bool) -> Result<(), Errno> {
        let components = components(path);
        let mut state = self.state.borrow_mut();
        let mut dir = &mut state.root;

        if recursive {
            for name in &components {
                dir = match dir
                    .entries
                    .entry(name.clone())
                    .or_insert_with(|| INode::Directory(Directory::default()))
                {
                    INode::Directory(next) => next,
                    INode::Regular { .. } => return Err(Errno::Eexist),
                };
            }
            Ok(())
        } else {
            let (name, parent) = components.split_last().ok_or(Errno::Eexist)?;
            let dir = find_dir_mut(dir, parent)?;
            if dir.entries.contains_key(name) {
                return Err(Errno::Eexist);
            }
            dir.entries
                .insert(name.clone(), INode::Directory(Directory::default()));
            Ok(())
        }
    }

    fn remove_dir(&self, path: &str) -> Result<(), Errno> {
        let components = components(path);
        let (name, parent) = components.split_last().ok_or(Errno::Eacces)?;
        let mut state = self.state.borrow_mut();
        let dir = find_dir_mut(&mut state.root, parent)?;
        match dir.entries.get(name) {
            Some(INode::Directory(target)) if target.entries.is_empty() => {
                dir.entries.remove(name);
                Ok(())
            }
            Some(INode::Directory(_)) => Err(Errno::Enotempty),
            Some(INode::Regular { .. }) => Err(Errno::Enoent),
            None => Err(Errno::Enoent),
        }
    }

    fn metadata(&self, path: &str) -> Result<Metadata, Errno> {
        let components = components(path);
        let state = self.state.borrow();
        if components.is_empty() {
            return Ok(Metadata {
                is_file: false,
                is_directory: true,
                size: 0,
                mtime: 0,
            });
        }
        match find_node(&state.root, &components)? {
            INode::Regular { content, mtime } => Ok(Metadata {
                is_file: true,
                is_directory: false,
                size: content.len() as u64,
                mtime: *mtime,
            }),
            INode::Directory(_) => Ok(Metadata {
                is_file: false,
                is_directory: true,
                size: 0,
                mtime: 0,
            }),
        }
    }

    fn access(&self, path: &str) -> Result<(), Errno> {
        self.metadata(path).map(drop)
    }

    fn unlink(&self, path: &str) -> Result<(), Errno> {
        let components = components(path);
        let (name, parent) = components.split_last().ok_or(Errno::Eisdir)?;
        let mut state = self.state.borrow_mut();
        let dir = find_dir_mut(&mut state.root, parent)?;
        match dir.entries.get(name) {
            Some(INode::Regular { .. }) => {
                dir.entries.remove(name);
                Ok(())
            }
            Some(INode::Directory(_)) => Err(Errno::Eisdir),
            None => Err(Errno::Enoent),
        }
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), Errno> {
        let node = self.take(from)?;
        self.put(to, node)
    }

    fn copy_file(&self, from: &str, to: &str) -> Result<(), Errno> {
        let content = self.read_file(from)?;
        self.write_file(to, &content)
    }

    fn real_path(&self, path: &str) -> Result<String, Errno> {
        let normalized = normalize(path);
        self.access(&normalized)?;
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn write_then_read() {
        let fs = VirtualFileSystem::new();
        fs.write_file("/a.txt", "hello").unwrap();
        assert_eq!(fs.read_file("/a.txt").unwrap(), "hello");
        fs.write_file("/a.txt", "replaced").unwrap();
        assert_eq!(fs.read_file("/a.txt").unwrap(), "replaced");
    }

    #[test]
    fn append_creates_and_extends() {
        let fs = VirtualFileSystem::new();
        fs.append_file("/log", "a\n").unwrap();
        fs.append_file("/log", "b\n").unwrap();
        assert_eq!(fs.read_file("/log").unwrap(), "a\nb\n");
    }

    #[test]
    fn missing_file_is_enoent() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.read_file("/nope").unwrap_err(), Errno::Enoent);
        assert_eq!(fs.unlink("/nope").unwrap_err(), Errno::Enoent);
    }

    #[test]
    fn reading_a_directory_is_eisdir() {
        let fs = VirtualFileSystem::new();
        fs.create_dir("/d", false).unwrap();
        assert_eq!(fs.read_file("/d").unwrap_err(), Errno::Eisdir);
    }

    #[test]
    fn writing_into_a_missing_directory_is_enoent() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.write_file("/no/file", "x").unwrap_err(), Errno::Enoent);
    }

    #[test]
    fn recursive_create_dir() {
        let fs = VirtualFileSystem::new();
        fs.create_dir("/a/b/c", true).unwrap();
        assert!(fs.metadata("/a/b/c").unwrap().is_directory);
        // Idempotent when recursive.
        fs.create_dir("/a/b", true).unwrap();
        // Not so otherwise.
        assert_eq!(fs.create_dir("/a/b", false).unwrap_err(), Errno::Eexist);
    }

    #[test]
    fn read_dir_is_sorted() {
        let fs = VirtualFileSystem::new();
        fs.create_dir("/d", false).unwrap();
        fs.write_file("/d/b", "").unwrap();
        fs.write_file("/d/a", "").unwrap();
        fs.create_dir("/d/c", false).unwrap();
        assert_eq!(fs.read_dir("/d").unwrap(), ["a", "b", "c"]);
        assert_eq!(fs.read_dir("/").unwrap(), ["d"]);
    }

    #[test]
    fn remove_dir_requires_empty() {
        let fs = VirtualFileSystem::new();
        fs.create_dir("/d", false).unwrap();
        fs.write_file("/d/f", "").unwrap();
        assert_eq!(fs.remove_dir("/d").unwrap_err(), Errno::Enotempty);
        fs.unlink("/d/f").unwrap();
        fs.remove_dir("/d").unwrap();
        assert_eq!(fs.access("/d").unwrap_err(), Errno::Enoent);
    }

    #[test]
    fn unlinking_a_directory_is_eisdir() {
        let fs = VirtualFileSystem::new();
        fs.create_dir("/d", false).unwrap();
        assert_eq!(fs.unlink("/d").unwrap_err(), Errno::Eisdir);
    }

    #[test]
    fn metadata_of_a_file() {
        let fs = VirtualFileSystem::new();
        fs.write_file("/f", "1234").unwrap();
        let meta = fs.metadata("/f").unwrap();
        assert!(meta.is_file);
        assert!(!meta.is_directory);
        assert_eq!(meta.size, 4);
        assert!(meta.mtime > 0);
    }

    #[test]
    fn rename_moves_nodes() {
        let fs = VirtualFileSystem::new();
        fs.write_file("/a", "data").unwrap();
        fs.create_dir("/d", false).unwrap();
        fs.rename("/a", "/d/b").unwrap();
        assert_eq!(fs.access("/a").unwrap_err(), Errno::Enoent);
        assert_eq!(fs.read_file("/d/b").unwrap(), "data");
    }

    #[test]
    fn copy_file_duplicates_content() {
        let fs = VirtualFileSystem::new();
        fs.write_file("/a", "data").unwrap();
        fs.copy_file("/a", "/b").unwrap();
        fs.write_file("/a", "changed").unwrap();
        assert_eq!(fs.read_file("/b").unwrap(), "data");
    }

    #[test]
    fn real_path_normalizes() {
        let fs = VirtualFileSystem::new();
        fs.create_dir("/a/b", true).unwrap();
        assert_eq!(fs.real_path("/a/./b/../b/").unwrap(), "/a/b");
        assert_matches!(fs.real_path("/a/c"), Err(Errno::Enoent));
    }

    #[test]
    fn clones_share_state() {
        let fs = VirtualFileSystem::new();
        let clone = fs.clone();
        fs.write_file("/f", "shared").unwrap();
        assert_eq!(clone.read_file("/f").unwrap(), "shared");
    }
}
