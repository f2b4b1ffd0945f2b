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

//! Output streams
//!
//! The shell writes standard output and standard error through [`Stream`]
//! values: either a host-supplied callback or an in-memory capture buffer.
//! The evaluator temporarily replaces a stream to capture output for
//! pipelines, command substitution, and file redirections, and restores the
//! previous binding afterwards. Streams are cheaply cloneable handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Destination for shell output
#[derive(Clone, Default)]
pub enum Stream {
    /// Discards everything written to it
    #[default]
    Null,
    /// Forwards each write to a host callback
    Callback(Rc<dyn Fn(&str)>),
    /// Appends each write to a shared buffer
    Capture(Rc<RefCell<String>>),
}

impl Stream {
    /// Creates a stream that forwards writes to the given function.
    pub fn from_fn<F: Fn(&str) + 'static>(f: F) -> Stream {
        Stream::Callback(Rc::new(f))
    }

    /// Creates a capturing stream along with a handle to the captured text.
    #[must_use]
    pub fn capture() -> (Stream, Rc<RefCell<String>>) {
        let buffer = Rc::new(RefCell::new(String::new()));
        (Stream::Capture(Rc::clone(&buffer)), buffer)
    }

    /// Writes text to the stream.
    pub fn write(&self, text: &str) {
        match self {
            Stream::Null => {}
            Stream::Callback(f) => f(text),
            Stream::Capture(buffer) => buffer.borrow_mut().push_str(text),
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Null => f.write_str("Null"),
            Stream::Callback(_) => f.write_str("Callback(_)"),
            Stream::Capture(buffer) => f.debug_tuple("Capture").field(buffer).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_accumulates_writes() {
        let (stream, buffer) = Stream::capture();
        stream.write("one ");
        stream.write("two");
        assert_eq!(*buffer.borrow(), "one two");
    }

    #[test]
    fn callback_receives_writes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = Rc::clone(&seen);
        let stream = Stream::from_fn(move |text| seen2.borrow_mut().push(text.to_string()));
        stream.write("a");
        stream.write("b");
        assert_eq!(*seen.borrow(), ["a", "b"]);
    }

    #[test]
    fn clones_share_the_buffer() {
        let (stream, buffer) = Stream::capture();
        let clone = stream.clone();
        clone.write("via clone");
        assert_eq!(*buffer.borrow(), "via clone");
    }
}
