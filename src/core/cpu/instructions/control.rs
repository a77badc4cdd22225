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

use super::super::alu::alu_op;
use super::super::control::{BrType, ControlSignals, IoSel, WbSel, FLAG_SF, FLAG_ZF};
use super::super::decode::{imm_i, imm_j, rs, rt};
use super::super::CPU;
use super::dest_index;
use crate::core::exception::Exception;
use crate::core::io::IoPort;

impl CPU {
    /// Control-class routine
    ///
    /// Evaluates the branch condition from the ALU flags, selects the
    /// next PC, drives the I/O port, and performs the link write-back
    /// when enabled. HLT short-circuits before any state changes.
    pub(crate) fn exec_ctrl(
        &mut self,
        word: u16,
        cs: &ControlSignals,
        io: &mut dyn IoPort,
    ) -> Exception {
        if cs.halt {
            log::info!("HLT at PC=0x{:04X}", self.pc());
            return Exception::HALT;
        }

        let rs1_data = self.reg(rs(word));
        let rs2_data = self.reg(rt(word));

        // Condition flags from the ALU result
        let alu_out = alu_op(cs.alu_fun, rs1_data, rs2_data);
        let zf = if alu_out == 0 { FLAG_ZF } else { 0 };
        let sf = if alu_out & 0x8000 != 0 { FLAG_SF } else { 0 };
        let taken = ((zf | sf) & cs.br_mask) == cs.br_cond;

        let seq_pc = self.pc().wrapping_add(1);
        let next_pc = match cs.br_type {
            // Absolute within the current 4K page
            BrType::J => (self.pc() & 0xF000) | imm_j(word),
            BrType::B => {
                if taken {
                    seq_pc.wrapping_add(imm_i(word))
                } else {
                    seq_pc
                }
            }
            BrType::I => rs1_data,
            BrType::N => seq_pc,
        };

        let wb_data = match cs.wb_sel {
            WbSel::Pc1 => seq_pc,
            WbSel::Iop => io.read(),
            _ => 0,
        };

        if cs.io_sel == IoSel::Write {
            io.write(rs1_data);
        }

        self.set_pc(next_pc);
        if cs.rf_wen {
            self.set_reg(dest_index(cs.dest_sel, word), wb_data);
        }
        Exception::empty()
    }
}
