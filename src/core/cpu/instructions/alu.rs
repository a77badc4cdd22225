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
use super::super::control::{ControlSignals, Op1Sel, Op2Sel};
use super::super::decode::{imm_h, imm_i, imm_u, rs, rt};
use super::super::CPU;
use super::dest_index;
use crate::core::exception::Exception;

impl CPU {
    /// ALU-class routine
    ///
    /// Forms both operands from the operand selectors, computes the ALU
    /// result and writes it back. Every ALU-class opcode has `rf_wen`
    /// set, so the write is unconditional here. The next PC is always
    /// sequential.
    pub(crate) fn exec_alu(&mut self, word: u16, cs: &ControlSignals) -> Exception {
        let rs1_data = self.reg(rs(word));
        let rs2_data = self.reg(rt(word));

        let alu1 = match cs.op1_sel {
            Op1Sel::Rs => rs1_data,
            Op1Sel::Pc => self.pc(),
            Op1Sel::Zero => 0,
        };
        let alu2 = match cs.op2_sel {
            Op2Sel::Rt => rs2_data,
            Op2Sel::Rs => rs1_data,
            Op2Sel::ImmI => imm_i(word),
            Op2Sel::ImmU => imm_u(word),
            Op2Sel::ImmH => imm_h(word),
            Op2Sel::NegOne => 0xFFFF,
            Op2Sel::One => 1,
            Op2Sel::Zero => 0,
        };

        let alu_out = alu_op(cs.alu_fun, alu1, alu2);
        let next_pc = self.pc().wrapping_add(1);
        self.set_pc(next_pc);
        self.set_reg(dest_index(cs.dest_sel, word), alu_out);
        Exception::empty()
    }
}
