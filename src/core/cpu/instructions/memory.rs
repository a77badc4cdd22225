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

use super::super::control::ControlSignals;
use super::super::decode::{imm_i, rs, rt};
use super::super::CPU;
use crate::core::exception::Exception;
use crate::core::memory::{MemFcn, Memory};

impl CPU {
    /// Memory-class routine
    ///
    /// The effective address is `R[rs] + imm` with wrapping add (the
    /// immediate is already sign-extended). A failed port access turns
    /// into DMEM_ERROR; registers and the PC stay untouched in that
    /// case.
    pub(crate) fn exec_mem(
        &mut self,
        word: u16,
        cs: &ControlSignals,
        dmem: &mut Memory,
    ) -> Exception {
        let rs1_data = self.reg(rs(word));
        let mem_addr = rs1_data.wrapping_add(imm_i(word));

        match cs.mem_fcn {
            MemFcn::Read => {
                let (data, ok) = dmem.access(cs.mem_en, mem_addr, 0, MemFcn::Read);
                if !ok {
                    return Exception::DMEM_ERROR;
                }
                let next_pc = self.pc().wrapping_add(1);
                self.set_pc(next_pc);
                self.set_reg(rt(word), data);
            }
            MemFcn::Write => {
                let data = self.reg(rt(word));
                let (_, ok) = dmem.access(cs.mem_en, mem_addr, data, MemFcn::Write);
                if !ok {
                    return Exception::DMEM_ERROR;
                }
                let next_pc = self.pc().wrapping_add(1);
                self.set_pc(next_pc);
            }
            MemFcn::Nop => {
                let next_pc = self.pc().wrapping_add(1);
                self.set_pc(next_pc);
            }
        }
        Exception::empty()
    }
}
