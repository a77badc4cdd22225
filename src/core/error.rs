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

//! Simulator error types
//!
//! These are host-side errors: malformed program files, invalid
//! configuration, out-of-range bulk memory operations. Runtime faults
//! inside the simulated machine never surface here; they travel as the
//! [`Exception`](crate::core::exception::Exception) status bit-vector.

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Simulator error types
#[derive(Debug, Error)]
pub enum SimError {
    /// Bulk memory operation outside the memory window
    #[error("memory range out of bounds: addr=0x{addr:04X}, nbytes={nbytes}")]
    OutOfRange {
        /// First word address of the operation
        addr: u16,
        /// Length of the operation in bytes
        nbytes: usize,
    },

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Program file could not be parsed or does not fit the memory map
    #[error("program load error: {0}")]
    Loader(String),

    /// Invalid simulator configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
