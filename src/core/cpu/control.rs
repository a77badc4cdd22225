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

//! Control-signal table
//!
//! Every defined opcode maps to one immutable [`ControlSignals`] record.
//! The executor routines are selector-driven multiplexers over these
//! fields; they contain no per-opcode special cases beyond what the
//! table expresses. The table is total over [`Opcode`] and carries no
//! row for the reserved ILLEGAL word.

use super::alu::AluFun;
use super::isa::Opcode;
use crate::core::memory::MemFcn;

/// Next-PC selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrType {
    /// Sequential: pc + 1
    N,
    /// Conditional branch: pc + 1 + imm when taken
    B,
    /// Absolute jump within the current 4K page
    J,
    /// Indirect: R[rs]
    I,
}

/// ALU operand-1 source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op1Sel {
    /// R[rs]
    Rs,
    /// Program counter
    Pc,
    /// Constant 0
    Zero,
}

/// ALU operand-2 source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op2Sel {
    /// R[rt]
    Rt,
    /// R[rs]
    Rs,
    /// Sign-extended immediate
    ImmI,
    /// Zero-extended immediate
    ImmU,
    /// High immediate
    ImmH,
    /// Constant -1 (0xFFFF)
    NegOne,
    /// Constant 1
    One,
    /// Constant 0
    Zero,
}

/// Write-back register selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestSel {
    /// No destination (don't care, register 0 with write disabled)
    X,
    /// rd field
    Rd,
    /// rt field
    Rt,
    /// The link register ($2), written by JAL/JRL
    Link,
}

/// External I/O port action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoSel {
    /// No port activity
    X,
    /// Read a word from the input source (RWD)
    Read,
    /// Emit R[rs] to the output sink (WWD)
    Write,
}

/// Write-back data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WbSel {
    /// ALU result
    Alu,
    /// Memory read data
    Mem,
    /// pc + 1 (link address)
    Pc1,
    /// External I/O port data
    Iop,
    /// Don't care
    X,
}

/// Stage selector reserved for the multi-cycle datapath
///
/// Preserved in every table row; the single-cycle executor never reads
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStage {
    /// Straight back to fetch (no write-back stage)
    Fetch,
    /// Continue to the memory stage
    Mem,
    /// Continue to the write-back stage
    Wb,
}

/// No condition bits tested (branch never applies)
pub const BR_NC: u16 = 0b00;
/// Test the zero flag only
pub const BR_ZF: u16 = 0b01;
/// Test sign and zero flags
pub const BR_SZ: u16 = 0b11;

/// Zero-flag bit produced by the condition evaluation
pub const FLAG_ZF: u16 = 0b01;
/// Sign-flag bit produced by the condition evaluation
pub const FLAG_SF: u16 = 0b10;

/// Datapath micro-directives for one opcode
///
/// `rs1_oen`/`rs2_oen` mark which source registers an instruction
/// actually reads; the single-cycle datapath has no hazards, but the
/// pipelined variants use them for interlock tracking, so the table
/// keeps them accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSignals {
    /// Next-PC selector
    pub br_type: BrType,
    /// Condition bits to test
    pub br_mask: u16,
    /// Expected value of the masked condition bits
    pub br_cond: u16,
    /// Instruction reads R[rs]
    pub rs1_oen: bool,
    /// Instruction reads R[rt]
    pub rs2_oen: bool,
    /// Register-file write enable
    pub rf_wen: bool,
    /// ALU operand-1 source
    pub op1_sel: Op1Sel,
    /// ALU operand-2 source
    pub op2_sel: Op2Sel,
    /// Write-back register selector
    pub dest_sel: DestSel,
    /// ALU operation
    pub alu_fun: AluFun,
    /// Memory port enable
    pub mem_en: bool,
    /// Memory port function
    pub mem_fcn: MemFcn,
    /// Terminate after this instruction
    pub halt: bool,
    /// External I/O port action
    pub io_sel: IoSel,
    /// Write-back data source
    pub wb_sel: WbSel,
    /// Reserved multi-cycle stage selector
    pub next_stage: NextStage,
}

impl ControlSignals {
    /// All-inactive baseline; rows override only the fields they drive
    const BASE: ControlSignals = ControlSignals {
        br_type: BrType::N,
        br_mask: BR_NC,
        br_cond: 0,
        rs1_oen: false,
        rs2_oen: false,
        rf_wen: false,
        op1_sel: Op1Sel::Zero,
        op2_sel: Op2Sel::Zero,
        dest_sel: DestSel::X,
        alu_fun: AluFun::X,
        mem_en: false,
        mem_fcn: MemFcn::Nop,
        halt: false,
        io_sel: IoSel::X,
        wb_sel: WbSel::X,
        next_stage: NextStage::Fetch,
    };
}

/// Look up the control vector for a defined opcode
///
/// Total over [`Opcode`]; the match is the static control table.
pub fn control_signals(op: Opcode) -> ControlSignals {
    let base = ControlSignals::BASE;
    match op {
        // --- Conditional branches ---
        Opcode::Bne => ControlSignals {
            br_type: BrType::B,
            br_mask: BR_ZF,
            br_cond: 0,
            rs1_oen: true,
            rs2_oen: true,
            alu_fun: AluFun::Sub,
            ..base
        },
        Opcode::Beq => ControlSignals {
            br_type: BrType::B,
            br_mask: BR_ZF,
            br_cond: FLAG_ZF,
            rs1_oen: true,
            rs2_oen: true,
            alu_fun: AluFun::Sub,
            ..base
        },
        Opcode::Bgz => ControlSignals {
            br_type: BrType::B,
            br_mask: BR_SZ,
            br_cond: 0,
            rs1_oen: true,
            alu_fun: AluFun::IdA,
            ..base
        },
        Opcode::Blz => ControlSignals {
            br_type: BrType::B,
            br_mask: BR_SZ,
            br_cond: FLAG_SF,
            rs1_oen: true,
            alu_fun: AluFun::IdA,
            ..base
        },

        // --- Immediate ALU operations ---
        Opcode::Adi => ControlSignals {
            rs1_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::ImmI,
            dest_sel: DestSel::Rt,
            alu_fun: AluFun::Add,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Ori => ControlSignals {
            rs1_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::ImmU,
            dest_sel: DestSel::Rt,
            alu_fun: AluFun::Or,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Lhi => ControlSignals {
            rf_wen: true,
            op1_sel: Op1Sel::Zero,
            op2_sel: Op2Sel::ImmH,
            dest_sel: DestSel::Rt,
            alu_fun: AluFun::IdB,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },

        // --- Memory ---
        Opcode::Lwd => ControlSignals {
            rs1_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::ImmI,
            dest_sel: DestSel::Rt,
            alu_fun: AluFun::Add,
            mem_en: true,
            mem_fcn: MemFcn::Read,
            wb_sel: WbSel::Mem,
            next_stage: NextStage::Mem,
            ..base
        },
        Opcode::Swd => ControlSignals {
            rs1_oen: true,
            rs2_oen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::ImmI,
            alu_fun: AluFun::Add,
            mem_en: true,
            mem_fcn: MemFcn::Write,
            next_stage: NextStage::Mem,
            ..base
        },

        // --- Jumps ---
        Opcode::Jmp => ControlSignals {
            br_type: BrType::J,
            ..base
        },
        Opcode::Jal => ControlSignals {
            br_type: BrType::J,
            rf_wen: true,
            dest_sel: DestSel::Link,
            wb_sel: WbSel::Pc1,
            next_stage: NextStage::Wb,
            ..base
        },

        // --- Three-register ALU operations ---
        Opcode::Add => ControlSignals {
            rs1_oen: true,
            rs2_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::Rt,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::Add,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Sub => ControlSignals {
            rs1_oen: true,
            rs2_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::Rt,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::Sub,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::And => ControlSignals {
            rs1_oen: true,
            rs2_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::Rt,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::And,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Orr => ControlSignals {
            rs1_oen: true,
            rs2_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::Rt,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::Or,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },

        // --- One-register ALU operations ---
        Opcode::Not => ControlSignals {
            rs1_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::NegOne,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::Xor,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Tcp => ControlSignals {
            rs1_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Zero,
            op2_sel: Op2Sel::Rs,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::Sub,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Shl => ControlSignals {
            rs1_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::One,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::Sll,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Shr => ControlSignals {
            rs1_oen: true,
            rf_wen: true,
            op1_sel: Op1Sel::Rs,
            op2_sel: Op2Sel::One,
            dest_sel: DestSel::Rd,
            alu_fun: AluFun::Sra,
            wb_sel: WbSel::Alu,
            next_stage: NextStage::Wb,
            ..base
        },

        // --- Machine control ---
        Opcode::Nop => base,
        Opcode::Jpr => ControlSignals {
            br_type: BrType::I,
            rs1_oen: true,
            ..base
        },
        Opcode::Jrl => ControlSignals {
            br_type: BrType::I,
            rs1_oen: true,
            rf_wen: true,
            dest_sel: DestSel::Link,
            wb_sel: WbSel::Pc1,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Rwd => ControlSignals {
            rf_wen: true,
            dest_sel: DestSel::Rd,
            io_sel: IoSel::Read,
            wb_sel: WbSel::Iop,
            next_stage: NextStage::Wb,
            ..base
        },
        Opcode::Wwd => ControlSignals {
            rs1_oen: true,
            io_sel: IoSel::Write,
            ..base
        },
        Opcode::Hlt => ControlSignals { halt: true, ..base },
        // Interrupt enable/disable: no interrupt model in the
        // single-cycle machine, sequential next-PC only
        Opcode::Eni => base,
        Opcode::Dsi => base,
    }
}
