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

//! System integration
//!
//! This module ties the CPU, the memories, the I/O port and the
//! counters together and provides the fetch-decode-execute loop. The
//! simulator is single-threaded and synchronous; one [`System::step`]
//! executes exactly one instruction.

#[cfg(test)]
mod tests;

use super::config::{MemoryMode, SimConfig, TraceConfig};
use super::cpu::{Disassembler, Opcode, CPU};
use super::error::{Result, SimError};
use super::exception::Exception;
use super::io::{ConsoleIo, IoPort};
use super::loader::{MemSelect, ProgramImage};
use super::memory::{MemFcn, Memory};
use super::stats::Stats;

/// Trace level at which each executed instruction is disassembled
pub const TRACE_DISASM: u8 = 4;
/// Trace level at which the register file is dumped every cycle
pub const TRACE_REGS: u8 = 5;
/// Trace level at which data memory is dumped every cycle
pub const TRACE_DMEM: u8 = 6;

/// The simulated machine
///
/// Owns all architectural and bookkeeping state: CPU, instruction and
/// data memories (one buffer in unified mode, two disjoint windows in
/// split mode), the external I/O port, counters, and the trace gate.
/// All components are constructed up front and live until the System is
/// dropped; the execution path performs no allocation.
///
/// # Example
/// ```
/// use tsrx::core::loader::ProgramImage;
/// use tsrx::core::system::System;
/// use tsrx::core::exception::Exception;
///
/// let mut system = System::new();
/// // ADI $0, $0, 5; HLT
/// let image = ProgramImage::from_words(0, 0, &[0x4005, 0xF01D]);
/// system.load_image(&image).unwrap();
/// assert_eq!(system.run(), Exception::HALT);
/// assert_eq!(system.cpu().reg(0), 5);
/// assert_eq!(system.stats().icount, 2);
/// ```
pub struct System {
    /// CPU state
    cpu: CPU,
    /// Instruction memory (the only memory in unified mode)
    imem: Memory,
    /// Data memory; `None` aliases data accesses onto `imem`
    dmem: Option<Memory>,
    /// External I/O port
    io: Box<dyn IoPort>,
    /// Execution counters
    stats: Stats,
    /// Trace verbosity gate, fixed at construction
    trace: TraceConfig,
}

impl System {
    /// Create a system with the default configuration
    ///
    /// One unified memory covering the full 16-bit address space, a
    /// console I/O port, and tracing off.
    pub fn new() -> Self {
        Self::with_config(&SimConfig::default()).expect("default configuration is valid")
    }

    /// Create a system from a configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Memory map and trace settings
    ///
    /// # Returns
    ///
    /// - `Ok(System)` when the configuration validates
    /// - `Err(SimError::Config)` otherwise
    pub fn with_config(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let (istart, isize) = config.memory.imem_window();
        let imem = Memory::new(istart, isize);
        let dmem = match config.memory.mode {
            MemoryMode::Unified => None,
            MemoryMode::Split => {
                let (dstart, dsize) = config.memory.dmem_window();
                Some(Memory::new(dstart, dsize))
            }
        };

        log::info!(
            "system: {} memory, trace level {}",
            match config.memory.mode {
                MemoryMode::Unified => "unified",
                MemoryMode::Split => "split",
            },
            config.trace.level
        );

        Ok(Self {
            cpu: CPU::new(),
            imem,
            dmem,
            io: Box::new(ConsoleIo),
            stats: Stats::new(),
            trace: config.trace,
        })
    }

    /// Replace the external I/O port
    ///
    /// Hosts install their own port to capture WWD output or supply RWD
    /// input; the default port prints to stdout and reads 0.
    pub fn set_io_port(&mut self, io: Box<dyn IoPort>) {
        self.io = io;
    }

    /// CPU state (registers and PC)
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Current program counter
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    /// Execution counters
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Instruction memory
    pub fn imem(&self) -> &Memory {
        &self.imem
    }

    /// Data memory (the unified memory when no split is configured)
    pub fn dmem(&self) -> &Memory {
        self.dmem.as_ref().unwrap_or(&self.imem)
    }

    /// Mutable data memory, for bulk pre-loading and snapshots
    pub fn dmem_mut(&mut self) -> &mut Memory {
        self.dmem.as_mut().unwrap_or(&mut self.imem)
    }

    /// Reset CPU, memories and counters to their power-on state
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.imem.clear();
        if let Some(dmem) = &mut self.dmem {
            dmem.clear();
        }
        self.stats.reset();
    }

    /// Apply a program image and set the entry point
    ///
    /// # Arguments
    ///
    /// * `image` - Entry point and tagged word writes
    ///
    /// # Returns
    ///
    /// - `Ok(())` when every write lands inside its target window
    /// - `Err(SimError::Loader)` otherwise
    pub fn load_image(&mut self, image: &ProgramImage) -> Result<()> {
        for &(target, addr, word) in &image.writes {
            let mem = match target {
                MemSelect::Imem => &mut self.imem,
                MemSelect::Dmem => self.dmem.as_mut().unwrap_or(&mut self.imem),
            };
            let (_, ok) = mem.access(true, addr, word, MemFcn::Write);
            if !ok {
                return Err(SimError::Loader(format!(
                    "image word at 0x{addr:04X} falls outside the {} window",
                    match target {
                        MemSelect::Imem => "imem",
                        MemSelect::Dmem => "dmem",
                    }
                )));
            }
        }
        self.cpu.set_pc(image.entry);
        Ok(())
    }

    /// Whether per-cycle output at `level` is currently enabled
    #[inline]
    fn trace_on(&self, level: u8) -> bool {
        self.trace.level >= level && self.stats.cycle >= self.trace.start_cycle
    }

    /// Execute one instruction
    ///
    /// Fetches from instruction memory, decodes, dispatches to the
    /// class routine and updates the counters. Fetch and decode failures
    /// return before any counter is touched; class-routine faults are
    /// counted.
    ///
    /// # Returns
    ///
    /// The exception status of this step; empty means execution may
    /// continue.
    pub fn step(&mut self) -> Exception {
        let pc = self.cpu.pc();

        // Fetch
        let (word, ok) = self.imem.access(true, pc, 0, MemFcn::Read);
        if !ok {
            return Exception::IMEM_ERROR;
        }

        // Decode
        let Some(op) = Opcode::decode(word) else {
            return Exception::ILLEGAL_INST;
        };

        if self.trace_on(TRACE_DISASM) {
            log::debug!(
                "cycle {:>6} | 0x{:04X}: {}",
                self.stats.cycle,
                pc,
                Disassembler::disassemble(word, pc)
            );
        }

        // Dispatch to the class routine
        let dmem = match self.dmem.as_mut() {
            Some(m) => m,
            None => &mut self.imem,
        };
        let status = self.cpu.execute(word, op, dmem, &mut *self.io);

        self.stats.record(op.class());

        if self.trace_on(TRACE_REGS) {
            self.cpu.dump_registers();
        }
        if self.trace_on(TRACE_DMEM) {
            self.dmem().dump(true);
        }

        status
    }

    /// Run until an exception terminates execution
    ///
    /// # Returns
    ///
    /// The terminating exception status (never empty).
    pub fn run(&mut self) -> Exception {
        loop {
            let status = self.step();
            if !status.is_empty() {
                self.report_termination(status);
                return status;
            }
        }
    }

    /// Print the termination diagnostic and final statistics
    fn report_termination(&self, status: Exception) {
        println!(
            "simulation terminated: {} (PC=0x{:04X})",
            status.describe(),
            self.cpu.pc()
        );
        self.stats.show();
        self.cpu.dump_registers();
        if self.trace.level >= TRACE_DMEM {
            self.dmem().dump(true);
        }
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
