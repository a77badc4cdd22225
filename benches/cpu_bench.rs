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

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tsrx::core::cpu::{alu_op, AluFun, Opcode, RegisterFile};
use tsrx::core::loader::ProgramImage;
use tsrx::core::system::System;

fn step_benchmark(c: &mut Criterion) {
    c.bench_function("system_step", |b| {
        let mut system = System::new();
        // A tight counting loop that never terminates:
        // ADI $0, $0, 1; JMP 0x000
        system
            .load_image(&ProgramImage::from_words(0, 0, &[0x4001, 0x9000]))
            .unwrap();

        b.iter(|| {
            black_box(system.step());
        });
    });
}

fn register_file_benchmark(c: &mut Criterion) {
    c.bench_function("register_read", |b| {
        let regs = RegisterFile::new();
        b.iter(|| {
            for i in 0..4 {
                black_box(regs.read(i));
            }
        });
    });

    c.bench_function("register_write", |b| {
        let mut regs = RegisterFile::new();
        b.iter(|| {
            for i in 0..4 {
                regs.write(i, black_box(i as u16 * 100));
            }
        });
    });
}

fn decode_benchmark(c: &mut Criterion) {
    c.bench_function("opcode_decode", |b| {
        b.iter(|| {
            for word in [0x4534u16, 0xF6C0, 0x9003, 0x7100, 0xF01D, 0xFFFF] {
                black_box(Opcode::decode(black_box(word)));
            }
        });
    });
}

fn alu_benchmark(c: &mut Criterion) {
    c.bench_function("alu_op", |b| {
        b.iter(|| {
            black_box(alu_op(AluFun::Add, black_box(0x1234), black_box(0x5678)));
            black_box(alu_op(AluFun::Slt, black_box(0x8000), black_box(0x7FFF)));
            black_box(alu_op(AluFun::Sra, black_box(0x8000), black_box(3)));
        });
    });
}

criterion_group!(
    benches,
    step_benchmark,
    register_file_benchmark,
    decode_benchmark,
    alu_benchmark
);
criterion_main!(benches);
