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

//! Datapath executor
//!
//! One routine per instruction class. Each routine reads the control
//! vector and performs only the steps the selectors enable; there are no
//! per-opcode special cases here. Within one instruction the observable
//! effect order is: operand reads, ALU, memory, PC update, register
//! write-back.

use super::control::{control_signals, DestSel};
use super::isa::{InstrClass, Opcode};
use super::{CPU, LINK_REG};
use crate::core::exception::Exception;
use crate::core::io::IoPort;
use crate::core::memory::Memory;

mod alu;
mod control;
mod memory;

impl CPU {
    /// Execute one decoded instruction
    ///
    /// Dispatches to the class routine selected by the opcode's class.
    ///
    /// # Arguments
    ///
    /// * `word` - The fetched instruction word
    /// * `op` - Its decoded opcode
    /// * `dmem` - Data memory
    /// * `io` - External I/O port
    ///
    /// # Returns
    ///
    /// The exception status of this step; empty means execution
    /// continues.
    pub fn execute(
        &mut self,
        word: u16,
        op: Opcode,
        dmem: &mut Memory,
        io: &mut dyn IoPort,
    ) -> Exception {
        let cs = control_signals(op);
        match op.class() {
            InstrClass::Alu => self.exec_alu(word, &cs),
            InstrClass::Mem => self.exec_mem(word, &cs, dmem),
            InstrClass::Ctrl => self.exec_ctrl(word, &cs, io),
        }
    }
}

/// Resolve the write-back register index from the destination selector
#[inline(always)]
fn dest_index(sel: DestSel, word: u16) -> usize {
    match sel {
        DestSel::Rd => super::decode::rd(word),
        DestSel::Rt => super::decode::rt(word),
        DestSel::Link => LINK_REG,
        DestSel::X => 0,
    }
}
