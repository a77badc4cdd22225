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

use super::super::{MemFcn, Memory};
use proptest::prelude::*;

#[test]
fn test_write_read_round_trip() {
    let mut mem = Memory::new(0x0000, 0x100);
    assert_eq!(mem.access(true, 0x20, 0x1234, MemFcn::Write), (0, true));
    assert_eq!(mem.access(true, 0x20, 0, MemFcn::Read), (0x1234, true));
}

#[test]
fn test_cells_initialized_to_zero() {
    let mut mem = Memory::new(0x0000, 0x10);
    for addr in 0..0x10 {
        assert_eq!(mem.access(true, addr, 0, MemFcn::Read), (0, true));
    }
}

#[test]
fn test_bubble_is_ignored() {
    let mut mem = Memory::new(0x0000, 0x10);
    // Invalid accesses succeed without touching memory, even out of window
    assert_eq!(mem.access(false, 0x8, 0xDEAD, MemFcn::Write), (0, true));
    assert_eq!(mem.access(true, 0x8, 0, MemFcn::Read), (0, true));
    assert_eq!(mem.access(false, 0xFFFF, 0, MemFcn::Read), (0, true));
}

#[test]
fn test_nop_fcn_reports_failure() {
    let mut mem = Memory::new(0x0000, 0x10);
    assert_eq!(mem.access(true, 0x0, 0, MemFcn::Nop), (0, false));
}

#[test]
fn test_window_boundaries() {
    let mut mem = Memory::new(0x0100, 0x100);
    // One below the window and exactly at the end both fail
    assert_eq!(mem.access(true, 0x00FF, 0, MemFcn::Read), (0, false));
    assert_eq!(mem.access(true, 0x0200, 0, MemFcn::Read), (0, false));
    // First and last cells are valid
    assert_eq!(mem.access(true, 0x0100, 0, MemFcn::Read).1, true);
    assert_eq!(mem.access(true, 0x01FF, 0, MemFcn::Read).1, true);
}

#[test]
fn test_write_out_of_window_fails() {
    let mut mem = Memory::new(0x0000, 0x10);
    assert_eq!(mem.access(true, 0x10, 0xBEEF, MemFcn::Write), (0, false));
}

#[test]
fn test_full_address_space_window() {
    let mut mem = Memory::new(0x0000, 0x10000);
    assert_eq!(mem.access(true, 0xFFFF, 0xABCD, MemFcn::Write), (0, true));
    assert_eq!(mem.access(true, 0xFFFF, 0, MemFcn::Read), (0xABCD, true));
}

#[test]
fn test_clear() {
    let mut mem = Memory::new(0x0000, 0x10);
    mem.access(true, 0x3, 0xFFFF, MemFcn::Write);
    mem.clear();
    assert_eq!(mem.access(true, 0x3, 0, MemFcn::Read), (0, true));
}

proptest! {
    #[test]
    fn write_then_read_yields_written_word(addr in 0u16..0x100, word: u16) {
        let mut mem = Memory::new(0x0000, 0x100);
        mem.access(true, addr, word, MemFcn::Write);
        prop_assert_eq!(mem.access(true, addr, 0, MemFcn::Read), (word, true));
    }

    #[test]
    fn writes_to_distinct_cells_do_not_interfere(
        a in 0u16..0x80, b in 0x80u16..0x100, wa: u16, wb: u16,
    ) {
        let mut mem = Memory::new(0x0000, 0x100);
        mem.access(true, a, wa, MemFcn::Write);
        mem.access(true, b, wb, MemFcn::Write);
        prop_assert_eq!(mem.access(true, a, 0, MemFcn::Read).0, wa);
        prop_assert_eq!(mem.access(true, b, 0, MemFcn::Read).0, wb);
    }
}
