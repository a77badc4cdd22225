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

use clap::Parser;
use log::{error, info};
use std::process::ExitCode;
use tsrx::core::config::SimConfig;
use tsrx::core::error::Result;
use tsrx::core::exception::Exception;
use tsrx::core::loader::load_program;
use tsrx::core::system::System;

/// TSC instruction set simulator
#[derive(Parser)]
#[command(name = "tsrx")]
#[command(about = "TSC instruction set simulator", long_about = None)]
struct Args {
    /// Path to the program image (TSC ELF, or raw hex with --hex)
    program: String,

    /// Treat the program file as a raw hex image loaded at address 0
    #[arg(long)]
    hex: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Per-cycle trace level (0-7), overrides the configuration file
    #[arg(short = 'v', long)]
    trace_level: Option<u8>,

    /// First cycle at which per-cycle tracing starts
    #[arg(long)]
    trace_start: Option<u64>,

    /// File whose bytes are pre-loaded into data memory before the run
    #[arg(long)]
    input: Option<String>,

    /// Word address at which --input bytes are loaded
    #[arg(long, default_value = "0", value_parser = parse_word)]
    input_addr: u16,

    /// File into which a data memory region is dumped after the run
    #[arg(long)]
    output: Option<String>,

    /// Word address of the dumped region
    #[arg(long, default_value = "0", value_parser = parse_word)]
    output_addr: u16,

    /// Size of the dumped region in bytes
    #[arg(long, default_value = "0")]
    output_len: usize,
}

/// Parse a word address, accepting decimal or 0x-prefixed hex
fn parse_word(s: &str) -> std::result::Result<u16, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid word address {s:?}: {e}"))
}

fn main() -> ExitCode {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("tsrx v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    match run(&args) {
        Ok(status) => {
            if status == Exception::HALT {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Exception> {
    // Configuration file first, CLI flags on top
    let mut config = match &args.config {
        Some(path) => SimConfig::from_toml_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(level) = args.trace_level {
        config.trace.level = level;
    }
    if let Some(start) = args.trace_start {
        config.trace.start_cycle = start;
    }
    config.validate()?;

    let mut system = System::with_config(&config)?;

    info!("loading program from: {}", args.program);
    let image = load_program(&args.program, args.hex, &config.memory)?;
    system.load_image(&image)?;
    info!(
        "program loaded: {} words, entry=0x{:04X}",
        image.writes.len(),
        image.entry
    );

    if let Some(path) = &args.input {
        let bytes = std::fs::read(path)?;
        system.dmem_mut().copy_to(args.input_addr, &bytes)?;
        info!(
            "pre-loaded {} bytes at 0x{:04X} from {}",
            bytes.len(),
            args.input_addr,
            path
        );
    }

    let status = system.run();

    if let Some(path) = &args.output {
        let bytes = system.dmem().copy_from(args.output_addr, args.output_len)?;
        std::fs::write(path, &bytes)?;
        info!(
            "dumped {} bytes at 0x{:04X} to {}",
            args.output_len, args.output_addr, path
        );
    }

    Ok(status)
}
