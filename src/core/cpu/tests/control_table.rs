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

use super::super::control::*;
use super::super::isa::{InstrClass, Opcode};
use crate::core::memory::MemFcn;

#[test]
fn test_every_alu_class_opcode_writes_back() {
    // The ALU routine writes the result unconditionally, which is only
    // sound if the table enables the write for the whole class
    for op in Opcode::ALL {
        if op.class() == InstrClass::Alu {
            let cs = control_signals(op);
            assert!(cs.rf_wen, "{op:?} is ALU-class but rf_wen is off");
        }
    }
}

#[test]
fn test_only_hlt_halts() {
    for op in Opcode::ALL {
        let cs = control_signals(op);
        assert_eq!(cs.halt, op == Opcode::Hlt, "{op:?}");
    }
}

#[test]
fn test_memory_signals_match_class() {
    for op in Opcode::ALL {
        let cs = control_signals(op);
        match op {
            Opcode::Lwd => {
                assert!(cs.mem_en);
                assert_eq!(cs.mem_fcn, MemFcn::Read);
                assert_eq!(cs.wb_sel, WbSel::Mem);
            }
            Opcode::Swd => {
                assert!(cs.mem_en);
                assert_eq!(cs.mem_fcn, MemFcn::Write);
                assert!(cs.rs2_oen, "SWD reads the store data from rt");
            }
            _ => {
                assert!(!cs.mem_en, "{op:?} must not enable the memory port");
                assert_eq!(cs.mem_fcn, MemFcn::Nop);
            }
        }
    }
}

#[test]
fn test_branch_conditions() {
    let bne = control_signals(Opcode::Bne);
    assert_eq!((bne.br_type, bne.br_mask, bne.br_cond), (BrType::B, BR_ZF, 0));

    let beq = control_signals(Opcode::Beq);
    assert_eq!(
        (beq.br_type, beq.br_mask, beq.br_cond),
        (BrType::B, BR_ZF, FLAG_ZF)
    );

    let bgz = control_signals(Opcode::Bgz);
    assert_eq!((bgz.br_type, bgz.br_mask, bgz.br_cond), (BrType::B, BR_SZ, 0));

    let blz = control_signals(Opcode::Blz);
    assert_eq!(
        (blz.br_type, blz.br_mask, blz.br_cond),
        (BrType::B, BR_SZ, FLAG_SF)
    );
}

#[test]
fn test_jump_and_link_targets() {
    assert_eq!(control_signals(Opcode::Jmp).br_type, BrType::J);
    assert_eq!(control_signals(Opcode::Jpr).br_type, BrType::I);

    for op in [Opcode::Jal, Opcode::Jrl] {
        let cs = control_signals(op);
        assert!(cs.rf_wen, "{op:?} writes the link register");
        assert_eq!(cs.dest_sel, DestSel::Link);
        assert_eq!(cs.wb_sel, WbSel::Pc1);
    }
}

#[test]
fn test_io_port_selectors() {
    assert_eq!(control_signals(Opcode::Wwd).io_sel, IoSel::Write);
    let rwd = control_signals(Opcode::Rwd);
    assert_eq!(rwd.io_sel, IoSel::Read);
    assert_eq!(rwd.wb_sel, WbSel::Iop);
    assert!(rwd.rf_wen);
    for op in Opcode::ALL {
        if op != Opcode::Wwd && op != Opcode::Rwd {
            assert_eq!(control_signals(op).io_sel, IoSel::X, "{op:?}");
        }
    }
}

#[test]
fn test_source_enables_track_operand_reads() {
    // Two-source operations read both registers
    for op in [Opcode::Add, Opcode::Sub, Opcode::And, Opcode::Orr] {
        let cs = control_signals(op);
        assert!(cs.rs1_oen && cs.rs2_oen, "{op:?}");
    }
    // LHI reads nothing
    let lhi = control_signals(Opcode::Lhi);
    assert!(!lhi.rs1_oen && !lhi.rs2_oen);
}
