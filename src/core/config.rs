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

//! Simulator configuration
//!
//! The configuration selects the memory map (one unified memory, or split
//! instruction/data memories) and the trace verbosity. It can be loaded
//! from a TOML file and is fixed for the lifetime of a [`System`]
//! instance.
//!
//! # Example configuration file
//!
//! ```toml
//! [memory]
//! mode = "split"
//! imem_start = 0x0000
//! imem_size = 0x4000
//! dmem_start = 0x4000
//! dmem_size = 0xC000
//!
//! [trace]
//! level = 4
//! start_cycle = 100
//! ```
//!
//! [`System`]: crate::core::system::System

use super::error::{Result, SimError};
use serde::Deserialize;
use std::path::Path;

/// Memory configuration mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryMode {
    /// A single memory serves both instruction fetch and data access
    Unified,
    /// Separate instruction and data memories with disjoint windows
    Split,
}

/// Memory map configuration
///
/// Sizes are in words. In unified mode only `start`/`size` are used; in
/// split mode the imem/dmem windows are used and must not overlap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryLayout {
    /// Unified or split memories
    pub mode: MemoryMode,
    /// Unified window start (word address)
    pub start: u16,
    /// Unified window size in words
    pub size: u32,
    /// Instruction memory window start (split mode)
    pub imem_start: u16,
    /// Instruction memory size in words (split mode)
    pub imem_size: u32,
    /// Data memory window start (split mode)
    pub dmem_start: u16,
    /// Data memory size in words (split mode)
    pub dmem_size: u32,
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self {
            mode: MemoryMode::Unified,
            start: 0x0000,
            size: 0x10000,
            imem_start: 0x0000,
            imem_size: 0x4000,
            dmem_start: 0x4000,
            dmem_size: 0xC000,
        }
    }
}

impl MemoryLayout {
    /// Instruction memory window as (start, size-in-words)
    pub fn imem_window(&self) -> (u16, u32) {
        match self.mode {
            MemoryMode::Unified => (self.start, self.size),
            MemoryMode::Split => (self.imem_start, self.imem_size),
        }
    }

    /// Data memory window as (start, size-in-words)
    pub fn dmem_window(&self) -> (u16, u32) {
        match self.mode {
            MemoryMode::Unified => (self.start, self.size),
            MemoryMode::Split => (self.dmem_start, self.dmem_size),
        }
    }

    /// Validate window sizes and disjointness
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the layout is usable
    /// - `Err(SimError::Config)` if a window is empty, exceeds the 16-bit
    ///   address space, or the split windows overlap
    pub fn validate(&self) -> Result<()> {
        let check_window = |name: &str, start: u16, size: u32| -> Result<()> {
            if size == 0 {
                return Err(SimError::Config(format!("{name} window is empty")));
            }
            if start as u32 + size > 0x10000 {
                return Err(SimError::Config(format!(
                    "{name} window [0x{start:04X}, +0x{size:X}) exceeds the 16-bit address space"
                )));
            }
            Ok(())
        };

        match self.mode {
            MemoryMode::Unified => check_window("memory", self.start, self.size),
            MemoryMode::Split => {
                check_window("imem", self.imem_start, self.imem_size)?;
                check_window("dmem", self.dmem_start, self.dmem_size)?;

                let i = self.imem_start as u32..self.imem_start as u32 + self.imem_size;
                let d = self.dmem_start as u32..self.dmem_start as u32 + self.dmem_size;
                if i.start < d.end && d.start < i.end {
                    return Err(SimError::Config(format!(
                        "imem window [0x{:04X}, 0x{:X}) overlaps dmem window [0x{:04X}, 0x{:X})",
                        i.start, i.end, d.start, d.end
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Trace verbosity configuration
///
/// `level` is a threshold in `[0, 7]`; higher levels enable more output
/// per cycle. `start_cycle` delays per-cycle output until the given
/// cycle, which keeps long runs tractable when only the tail is of
/// interest.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Verbosity threshold, 0 (quiet) to 7
    pub level: u8,
    /// First cycle at which per-cycle output is emitted
    pub start_cycle: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            level: 0,
            start_cycle: 0,
        }
    }
}

/// Top-level simulator configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Memory map
    pub memory: MemoryLayout,
    /// Trace verbosity
    pub trace: TraceConfig,
}

impl SimConfig {
    /// Maximum trace level
    pub const MAX_TRACE_LEVEL: u8 = 7;

    /// Load a configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    ///
    /// - `Ok(SimConfig)` if the file parses and validates
    /// - `Err(SimError)` on I/O failure, parse failure, or invalid values
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&text)
            .map_err(|e| SimError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<()> {
        if self.trace.level > Self::MAX_TRACE_LEVEL {
            return Err(SimError::Config(format!(
                "trace level {} exceeds maximum {}",
                self.trace.level,
                Self::MAX_TRACE_LEVEL
            )));
        }
        self.memory.validate()
    }
}
