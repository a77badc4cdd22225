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

use super::super::alu::{alu_op, AluFun};
use proptest::prelude::*;

#[test]
fn test_add_sub_wrap() {
    assert_eq!(alu_op(AluFun::Add, 0xFFFF, 1), 0);
    assert_eq!(alu_op(AluFun::Sub, 0, 1), 0xFFFF);
    assert_eq!(alu_op(AluFun::Add, 0x8000, 0x8000), 0);
}

#[test]
fn test_logical_ops() {
    assert_eq!(alu_op(AluFun::And, 0xFF00, 0x0FF0), 0x0F00);
    assert_eq!(alu_op(AluFun::Or, 0xFF00, 0x0FF0), 0xFFF0);
    assert_eq!(alu_op(AluFun::Xor, 0xFF00, 0x0FF0), 0xF0F0);
}

#[test]
fn test_comparisons() {
    // Signed: 0xFFFF is -1
    assert_eq!(alu_op(AluFun::Slt, 0xFFFF, 0), 1);
    assert_eq!(alu_op(AluFun::Slt, 0, 0xFFFF), 0);
    assert_eq!(alu_op(AluFun::Slt, 5, 5), 0);
    // Unsigned: 0xFFFF is the maximum
    assert_eq!(alu_op(AluFun::Sltu, 0xFFFF, 0), 0);
    assert_eq!(alu_op(AluFun::Sltu, 0, 0xFFFF), 1);
}

#[test]
fn test_shifts() {
    assert_eq!(alu_op(AluFun::Sll, 0x0001, 4), 0x0010);
    assert_eq!(alu_op(AluFun::Srl, 0x8000, 15), 0x0001);
    assert_eq!(alu_op(AluFun::Sra, 0x8000, 15), 0xFFFF);
    assert_eq!(alu_op(AluFun::Sra, 0x4000, 14), 0x0001);
}

#[test]
fn test_shift_count_uses_low_five_bits() {
    // Count 33 & 0x1F == 1
    assert_eq!(alu_op(AluFun::Sll, 0x0001, 33), 0x0002);
    assert_eq!(alu_op(AluFun::Srl, 0x0004, 0x21), 0x0002);
    // Counts 16..=31 shift every data bit out
    assert_eq!(alu_op(AluFun::Sll, 0xFFFF, 16), 0);
    assert_eq!(alu_op(AluFun::Srl, 0xFFFF, 31), 0);
    assert_eq!(alu_op(AluFun::Sra, 0x8000, 16), 0xFFFF);
    assert_eq!(alu_op(AluFun::Sra, 0x7FFF, 31), 0);
}

#[test]
fn test_identity_passes() {
    assert_eq!(alu_op(AluFun::IdA, 0x1234, 0x5678), 0x1234);
    assert_eq!(alu_op(AluFun::IdB, 0x1234, 0x5678), 0x5678);
}

#[test]
fn test_dont_care_yields_zero() {
    assert_eq!(alu_op(AluFun::X, 0x1234, 0x5678), 0);
}

proptest! {
    #[test]
    fn add_then_sub_restores_operand(a: u16, b: u16) {
        let sum = alu_op(AluFun::Add, a, b);
        prop_assert_eq!(alu_op(AluFun::Sub, sum, b), a);
    }

    #[test]
    fn logical_ops_commute(a: u16, b: u16) {
        prop_assert_eq!(alu_op(AluFun::And, a, b), alu_op(AluFun::And, b, a));
        prop_assert_eq!(alu_op(AluFun::Or, a, b), alu_op(AluFun::Or, b, a));
        prop_assert_eq!(alu_op(AluFun::Xor, a, b), alu_op(AluFun::Xor, b, a));
    }

    #[test]
    fn slt_matches_signed_comparison(a: u16, b: u16) {
        let expected = ((a as i16) < (b as i16)) as u16;
        prop_assert_eq!(alu_op(AluFun::Slt, a, b), expected);
    }
}
