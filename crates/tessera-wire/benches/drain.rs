// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tessera-ledger.org

//! Drain throughput over deep dependency chains.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tessera_wire::{NotationBuilder, PrimitiveKind, SynthesisSession, TypeNotation};

fn chain(depth: usize) -> Vec<TypeNotation> {
    let mut notations = Vec::with_capacity(depth);
    notations.push(
        NotationBuilder::new("T0")
            .field("id", PrimitiveKind::U64)
            .build(),
    );
    for i in 1..depth {
        notations.push(
            NotationBuilder::new(format!("T{i}"))
                .named_field("prev", format!("T{}", i - 1))
                .field("id", PrimitiveKind::U64)
                .build(),
        );
    }
    notations
}

fn bench_drain(c: &mut Criterion) {
    for depth in [64usize, 256] {
        c.bench_function(&format!("drain_chain_{depth}"), |b| {
            b.iter_batched(
                || {
                    let mut session = SynthesisSession::new();
                    // Worst-case arrival order: every type blocked on
                    // the not-yet-seen one below it.
                    for notation in chain(depth).into_iter().rev() {
                        session.enqueue(notation);
                    }
                    session
                },
                |mut session| {
                    session.drain().expect("drain");
                    session
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_drain);
criterion_main!(benches);
