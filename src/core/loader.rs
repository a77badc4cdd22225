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

//! Program loading
//!
//! This module turns program files into a [`ProgramImage`]: an entry
//! point plus a sequence of tagged word writes that
//! [`System::load_image`](crate::core::system::System::load_image)
//! applies to the memories. Two file formats are supported:
//!
//! - **ELF**: 32-bit little-endian ELF with machine type 0x75C (TSC).
//!   Loadable segments are copied word by word; virtual addresses are
//!   byte addresses and are mapped to word addresses. Each write is
//!   tagged with the memory window (imem/dmem) that contains it.
//! - **Raw hex image**: a bare byte stream of little-endian words,
//!   loaded contiguously at word address 0 with entry point 0.
//!
//! Words are read little-endian from file bytes in both formats. How
//! the memory lays cells out internally is irrelevant here; the image
//! is applied through the word-level access port.

use super::config::MemoryLayout;
use super::error::{Result, SimError};
use super::memory::WORD_SIZE;
use std::path::Path;

/// ELF machine type assigned to TSC
pub const ELF_MACHINE_TSC: u16 = 0x75C;

/// ELF magic number
const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// Size of the 32-bit ELF header
const EHDR_SIZE: usize = 52;

/// Size of one 32-bit program header entry
const PHDR_SIZE: usize = 32;

/// PT_LOAD segment type
const PT_LOAD: u32 = 1;

/// Which memory a program word targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemSelect {
    /// Instruction memory
    Imem,
    /// Data memory
    Dmem,
}

/// A loaded program: entry point plus tagged word writes
///
/// # Example
/// ```
/// use tsrx::core::loader::{MemSelect, ProgramImage};
///
/// let image = ProgramImage::from_words(0, 0, &[0xF018, 0xF01D]); // NOP; HLT
/// assert_eq!(image.entry, 0);
/// assert_eq!(image.writes[1], (MemSelect::Imem, 1, 0xF01D));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    /// Initial program counter
    pub entry: u16,
    /// Word writes as (target memory, word address, value)
    pub writes: Vec<(MemSelect, u16, u16)>,
}

impl ProgramImage {
    /// Build an image from a contiguous run of instruction words
    ///
    /// Convenience constructor for tests and embedded hosts; every word
    /// is tagged for instruction memory.
    ///
    /// # Arguments
    ///
    /// * `entry` - Initial program counter
    /// * `base` - Word address of the first word
    /// * `words` - Instruction words
    pub fn from_words(entry: u16, base: u16, words: &[u16]) -> Self {
        let writes = words
            .iter()
            .enumerate()
            .map(|(i, &w)| (MemSelect::Imem, base.wrapping_add(i as u16), w))
            .collect();
        Self { entry, writes }
    }

    /// Parse a raw hex image
    ///
    /// The byte stream is read as little-endian words and loaded
    /// contiguously at word address 0; the entry point is 0. A trailing
    /// odd byte is an error.
    pub fn from_hex(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(SimError::Loader(format!(
                "hex image has odd length {}",
                bytes.len()
            )));
        }
        if bytes.len() / WORD_SIZE > 0x10000 {
            return Err(SimError::Loader(format!(
                "hex image of {} words exceeds the address space",
                bytes.len() / WORD_SIZE
            )));
        }
        let writes = bytes
            .chunks_exact(WORD_SIZE)
            .enumerate()
            .map(|(i, pair)| {
                let word = u16::from_le_bytes([pair[0], pair[1]]);
                (MemSelect::Imem, i as u16, word)
            })
            .collect();
        Ok(Self { entry: 0, writes })
    }

    /// Parse a TSC ELF executable
    ///
    /// Verifies the ELF identification (32-bit, little-endian) and the
    /// TSC machine type, then collects the words of every PT_LOAD
    /// segment with a non-zero file size. Byte virtual addresses are
    /// converted to word addresses; each word is tagged with the memory
    /// window of `layout` that contains it.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Raw file contents
    /// * `layout` - Active memory map, used to tag segment words
    ///
    /// # Returns
    ///
    /// - `Ok(ProgramImage)` on success
    /// - `Err(SimError::Loader)` for malformed files or segments outside
    ///   every memory window
    pub fn from_elf(bytes: &[u8], layout: &MemoryLayout) -> Result<Self> {
        let ehdr = ElfHeader::parse(bytes)?;

        let mut writes = Vec::new();
        for idx in 0..ehdr.phnum {
            let off = ehdr.phoff + idx as usize * ehdr.phentsize;
            let ph = bytes
                .get(off..off + PHDR_SIZE)
                .ok_or_else(|| SimError::Loader(format!("program header {idx} out of file")))?;

            let p_type = read_u32(ph, 0);
            let p_offset = read_u32(ph, 4) as usize;
            let p_vaddr = read_u32(ph, 8);
            let p_filesz = read_u32(ph, 16) as usize;

            if p_type != PT_LOAD || p_filesz == 0 {
                continue;
            }
            if p_vaddr % WORD_SIZE as u32 != 0 || p_filesz % WORD_SIZE != 0 {
                return Err(SimError::Loader(format!(
                    "segment {idx} is not word-aligned (vaddr=0x{p_vaddr:X}, filesz={p_filesz})"
                )));
            }
            let data = bytes.get(p_offset..p_offset + p_filesz).ok_or_else(|| {
                SimError::Loader(format!("segment {idx} data outside the file"))
            })?;

            let word_base = p_vaddr / WORD_SIZE as u32;
            for (i, pair) in data.chunks_exact(WORD_SIZE).enumerate() {
                let addr32 = word_base + i as u32;
                if addr32 > 0xFFFF {
                    return Err(SimError::Loader(format!(
                        "segment {idx} extends past the address space (word 0x{addr32:X})"
                    )));
                }
                let addr = addr32 as u16;
                let target = classify(layout, addr).ok_or_else(|| {
                    SimError::Loader(format!(
                        "segment word at 0x{addr:04X} falls outside every memory window"
                    ))
                })?;
                let word = u16::from_le_bytes([pair[0], pair[1]]);
                writes.push((target, addr, word));
            }
        }

        let entry32 = ehdr.entry / WORD_SIZE as u32;
        if entry32 > 0xFFFF {
            return Err(SimError::Loader(format!(
                "entry point 0x{:X} outside the address space",
                ehdr.entry
            )));
        }

        log::info!(
            "loaded ELF: entry=0x{:04X}, {} words",
            entry32,
            writes.len()
        );
        Ok(Self {
            entry: entry32 as u16,
            writes,
        })
    }
}

/// Load a program file, auto-detecting ELF unless `force_hex` is set
///
/// # Arguments
///
/// * `path` - Program file path
/// * `force_hex` - Treat the file as a raw hex image regardless of
///   content
/// * `layout` - Active memory map (for tagging ELF segments)
pub fn load_program<P: AsRef<Path>>(
    path: P,
    force_hex: bool,
    layout: &MemoryLayout,
) -> Result<ProgramImage> {
    let bytes = std::fs::read(path)?;
    if !force_hex && bytes.starts_with(&ELF_MAGIC) {
        ProgramImage::from_elf(&bytes, layout)
    } else {
        ProgramImage::from_hex(&bytes)
    }
}

/// The fields of the ELF header this loader consumes
struct ElfHeader {
    entry: u32,
    phoff: usize,
    phentsize: usize,
    phnum: u16,
}

impl ElfHeader {
    fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < EHDR_SIZE {
            return Err(SimError::Loader("file too short for an ELF header".into()));
        }
        if bytes[..4] != ELF_MAGIC {
            return Err(SimError::Loader("bad ELF magic".into()));
        }
        // EI_CLASS: 32-bit, EI_DATA: little-endian
        if bytes[4] != 1 {
            return Err(SimError::Loader("not a 32-bit ELF".into()));
        }
        if bytes[5] != 1 {
            return Err(SimError::Loader("not a little-endian ELF".into()));
        }
        let machine = read_u16(bytes, 18);
        if machine != ELF_MACHINE_TSC {
            return Err(SimError::Loader(format!(
                "wrong machine type 0x{machine:X} (expected 0x{ELF_MACHINE_TSC:X})"
            )));
        }
        let phentsize = read_u16(bytes, 42) as usize;
        if phentsize < PHDR_SIZE {
            return Err(SimError::Loader(format!(
                "program header entry size {phentsize} too small"
            )));
        }
        Ok(Self {
            entry: read_u32(bytes, 24),
            phoff: read_u32(bytes, 28) as usize,
            phentsize,
            phnum: read_u16(bytes, 44),
        })
    }
}

/// Which configured window contains `addr`, with imem preferred when
/// the windows coincide (unified mode)
fn classify(layout: &MemoryLayout, addr: u16) -> Option<MemSelect> {
    let (istart, isize) = layout.imem_window();
    if (addr as u32) >= istart as u32 && (addr as u32) < istart as u32 + isize {
        return Some(MemSelect::Imem);
    }
    let (dstart, dsize) = layout.dmem_window();
    if (addr as u32) >= dstart as u32 && (addr as u32) < dstart as u32 + dsize {
        return Some(MemSelect::Dmem);
    }
    None
}

#[inline]
fn read_u16(bytes: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([bytes[off], bytes[off + 1]])
}

#[inline]
fn read_u32(bytes: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]])
}
