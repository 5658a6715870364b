use criterion::{criterion_group, criterion_main, Criterion};
use lucky_draw::core::{advance, pick_index, CandidatePool, DrawSequencer, DrawTiming, ThreadRandom};
use lucky_draw::display::{DisplaySurface, MemoryDisplay};
use std::hint::black_box;
use std::sync::Arc;

fn setup_pool(count: usize) -> CandidatePool {
    CandidatePool::new((0..count).map(|i| format!("candidate-{}", i)))
}

fn bench_pick_index(c: &mut Criterion) {
    c.bench_function("pick_index_1000", |b| {
        b.iter(|| pick_index(black_box(1000), black_box(rand::random::<f64>())))
    });
}

fn bench_advance(c: &mut Criterion) {
    let pool = setup_pool(1000);
    let random = ThreadRandom;

    c.bench_function("advance_1000_candidates", |b| {
        b.iter_batched(
            || {
                let display = MemoryDisplay::new();
                display.set_display_value("???");
                display
            },
            |display| advance(&display, &pool, &random),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_run(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let timing = DrawTiming::default().scaled(0.0001).unwrap();

    c.bench_function("full_run_scaled", |b| {
        b.to_async(&runtime).iter(|| async {
            let display = Arc::new(MemoryDisplay::new());
            let sequencer = DrawSequencer::new(setup_pool(100), display).with_timing(timing);
            sequencer.run().await.unwrap()
        })
    });
}

criterion_group!(benches, bench_pick_index, bench_advance, bench_full_run);
criterion_main!(benches);
