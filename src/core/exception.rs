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

//! Exception status bit-vector
//!
//! Every run-loop iteration yields an [`Exception`] value; a non-empty
//! value terminates execution. The single-cycle machine raises at most
//! one bit per step, but the representation stays a bit-vector so the
//! multi-cycle variants can accumulate several faults in one cycle.

use bitflags::bitflags;

bitflags! {
    /// Terminal conditions of the run loop
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Exception: u16 {
        /// Instruction fetch outside the instruction memory window
        const IMEM_ERROR = 1 << 0;
        /// Data access outside the data memory window
        const DMEM_ERROR = 1 << 1;
        /// No opcode matched the fetched word
        const ILLEGAL_INST = 1 << 2;
        /// HLT instruction executed
        const HALT = 1 << 3;
    }
}

impl Exception {
    /// Human-readable description of the set status bits
    ///
    /// # Example
    /// ```
    /// use tsrx::core::exception::Exception;
    ///
    /// assert_eq!(Exception::HALT.describe(), "halted");
    /// assert_eq!(Exception::empty().describe(), "none");
    /// ```
    pub fn describe(self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }

        let mut parts = Vec::new();
        if self.contains(Exception::IMEM_ERROR) {
            parts.push("instruction fetch out of bounds");
        }
        if self.contains(Exception::DMEM_ERROR) {
            parts.push("data access out of bounds");
        }
        if self.contains(Exception::ILLEGAL_INST) {
            parts.push("illegal instruction");
        }
        if self.contains(Exception::HALT) {
            parts.push("halted");
        }
        parts.join(", ")
    }
}
