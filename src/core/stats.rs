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

//! Execution statistics
//!
//! Counters live on the [`System`](crate::core::system::System) instance
//! rather than in process-wide state, so several simulators can coexist.
//! On a successful run `icount == inst_alu + inst_mem + inst_ctrl`.

use super::cpu::InstrClass;

/// Cycle and instruction counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Elapsed cycles (one per instruction in the single-cycle machine)
    pub cycle: u64,
    /// Retired instructions
    pub icount: u64,
    /// Retired ALU-class instructions
    pub inst_alu: u64,
    /// Retired memory-class instructions
    pub inst_mem: u64,
    /// Retired control-class instructions
    pub inst_ctrl: u64,
}

impl Stats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Account one retired instruction of the given class
    pub(crate) fn record(&mut self, class: InstrClass) {
        self.cycle += 1;
        self.icount += 1;
        match class {
            InstrClass::Alu => self.inst_alu += 1,
            InstrClass::Mem => self.inst_mem += 1,
            InstrClass::Ctrl => self.inst_ctrl += 1,
        }
    }

    /// Print the counters to stdout
    pub fn show(&self) {
        println!("cycles:       {}", self.cycle);
        println!("instructions: {}", self.icount);
        println!("  ALU:  {}", self.inst_alu);
        println!("  MEM:  {}", self.inst_mem);
        println!("  CTRL: {}", self.inst_ctrl);
    }
}
