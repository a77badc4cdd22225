// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! External I/O port
//!
//! The WWD instruction emits a word to the output sink and RWD reads a
//! word from the input source. The port is a seam: the default console
//! port prints to stdout and reads zeroes, while hosts and tests can
//! install their own implementation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// External I/O port of the simulated machine
pub trait IoPort {
    /// Supply one input word (RWD)
    fn read(&mut self) -> u16;

    /// Consume one output word (WWD)
    fn write(&mut self, word: u16);
}

/// Console-backed I/O port
///
/// Output words are printed to stdout as `[I/O] 0x%04x`; the input
/// source always reads 0.
///
/// # Example
/// ```
/// use tsrx::core::io::{ConsoleIo, IoPort};
///
/// let mut io = ConsoleIo;
/// assert_eq!(io.read(), 0);
/// io.write(0x1234); // prints "[I/O] 0x1234"
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleIo;

impl IoPort for ConsoleIo {
    fn read(&mut self) -> u16 {
        0
    }

    fn write(&mut self, word: u16) {
        println!("[I/O] 0x{:04x}", word);
    }
}

/// Capturing I/O port for tests and headless embedding
///
/// Records every output word into a shared buffer that stays readable
/// after the port has been moved into a
/// [`System`](crate::core::system::System), and supplies input words
/// from a queue (falling back to 0 when empty).
///
/// # Example
/// ```
/// use tsrx::core::io::{CaptureIo, IoPort};
///
/// let mut io = CaptureIo::new();
/// let written = io.written();
/// io.push_input(0xBEEF);
/// assert_eq!(io.read(), 0xBEEF);
/// assert_eq!(io.read(), 0);
/// io.write(0x1234);
/// assert_eq!(*written.borrow(), vec![0x1234]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CaptureIo {
    written: Rc<RefCell<Vec<u16>>>,
    source: VecDeque<u16>,
}

impl CaptureIo {
    /// Create a capturing port with an empty input queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared output buffer
    pub fn written(&self) -> Rc<RefCell<Vec<u16>>> {
        Rc::clone(&self.written)
    }

    /// Queue one input word for a future RWD
    pub fn push_input(&mut self, word: u16) {
        self.source.push_back(word);
    }
}

impl IoPort for CaptureIo {
    fn read(&mut self) -> u16 {
        self.source.pop_front().unwrap_or(0)
    }

    fn write(&mut self, word: u16) {
        self.written.borrow_mut().push(word);
    }
}
