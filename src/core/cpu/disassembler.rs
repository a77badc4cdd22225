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

//! TSC instruction disassembler for tracing and diagnostics
//!
//! Converts binary instruction encodings to human-readable assembly
//! mnemonics. Rendering is driven entirely by each opcode's syntactic
//! type.

use super::decode::{imm_i, imm_j, imm_u, rd, rs, rt};
use super::isa::{Opcode, SynType};
use crate::core::word::signed;

/// Instruction disassembler
///
/// # Example
/// ```
/// use tsrx::core::cpu::Disassembler;
///
/// assert_eq!(Disassembler::disassemble(0xF01D, 0), "HLT");
/// assert_eq!(Disassembler::disassemble(0x4534, 0), "ADI $1, $1, 52");
/// assert_eq!(Disassembler::disassemble(0xFFFF, 0), ".word 0xFFFF");
/// ```
pub struct Disassembler;

impl Disassembler {
    /// Disassemble a single instruction
    ///
    /// # Arguments
    ///
    /// * `word` - The 16-bit instruction encoding
    /// * `pc` - Address of the instruction (used for branch targets)
    ///
    /// # Returns
    ///
    /// The rendered assembly text; words that decode to no opcode render
    /// as a `.word` directive.
    pub fn disassemble(word: u16, pc: u16) -> String {
        let Some(op) = Opcode::decode(word) else {
            return format!(".word 0x{:04X}", word);
        };

        let mn = op.mnemonic();
        match op.syn_type() {
            SynType::RType => format!("{} ${}, ${}, ${}", mn, rd(word), rs(word), rt(word)),
            SynType::RJump => format!("{} ${}", mn, rs(word)),
            SynType::RMisc => mn.to_string(),
            SynType::R1osd => format!("{} ${}, ${}", mn, rd(word), rs(word)),
            SynType::R1ops => format!("{} ${}", mn, rs(word)),
            SynType::R1opd => format!("{} ${}", mn, rd(word)),
            SynType::JType => format!("{} 0x{:03X}", mn, imm_j(word)),
            SynType::IZext => format!("{} ${}, ${}, 0x{:02X}", mn, rt(word), rs(word), imm_u(word)),
            SynType::IType => format!("{} ${}, ${}, {}", mn, rt(word), rs(word), signed(imm_i(word))),
            SynType::I1opr => format!("{} ${}, 0x{:02X}", mn, rt(word), imm_u(word)),
            SynType::BType => {
                // Branch targets are relative to the next instruction
                let target = pc.wrapping_add(1).wrapping_add(imm_i(word));
                format!(
                    "{} ${}, ${}, {:+} ; -> 0x{:04X}",
                    mn,
                    rs(word),
                    rt(word),
                    signed(imm_i(word)),
                    target
                )
            }
            SynType::B1opr => {
                let target = pc.wrapping_add(1).wrapping_add(imm_i(word));
                format!(
                    "{} ${}, {:+} ; -> 0x{:04X}",
                    mn,
                    rs(word),
                    signed(imm_i(word)),
                    target
                )
            }
            SynType::XType => format!(".word 0x{:04X}", word),
        }
    }
}
