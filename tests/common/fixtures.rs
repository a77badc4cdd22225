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

//! Test fixtures for common scenarios

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use tsrx::core::exception::Exception;
use tsrx::core::io::CaptureIo;
use tsrx::core::loader::ProgramImage;
use tsrx::core::system::System;

/// Create a default system with a capturing I/O port
pub fn system_with_capture() -> (System, Rc<RefCell<Vec<u16>>>) {
    let mut system = System::new();
    let io = CaptureIo::new();
    let written = io.written();
    system.set_io_port(Box::new(io));
    (system, written)
}

/// Load `words` at address 0 and run to termination
pub fn run_words(words: &[u16]) -> (System, Exception, Rc<RefCell<Vec<u16>>>) {
    let (mut system, written) = system_with_capture();
    system
        .load_image(&ProgramImage::from_words(0, 0, words))
        .expect("test program must fit memory");
    let status = system.run();
    (system, status, written)
}
