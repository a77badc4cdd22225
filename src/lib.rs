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

//! TSC instruction-set simulator core library
//!
//! This library provides the core components of a simulator for the TSC
//! architecture, a compact 16-bit word-addressed machine with four general
//! purpose registers, including the datapath (register file, ALU, memory),
//! the instruction decoder and control tables, and the run loop.
//!
//! # Example
//!
//! ```
//! use tsrx::core::loader::ProgramImage;
//! use tsrx::core::system::System;
//!
//! let mut system = System::new();
//! let image = ProgramImage::from_words(0, 0, &[0xF01D]); // HLT
//! system.load_image(&image).unwrap();
//! let status = system.run();
//! assert!(status.contains(tsrx::core::exception::Exception::HALT));
//! ```

pub mod core;
