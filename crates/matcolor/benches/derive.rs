use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use matcolor::hct::Hct;
use matcolor::scheme::Variant;
use matcolor::theme::{Contrast, MaterialTheme, ThemeCache};
use matcolor::StandardRgb;

const SEED: u32 = 0xff63a002;

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("theme-derivation");

    group.bench_function("hct-solve", |b| {
        b.iter(|| Hct::new(std::hint::black_box(270.0), 36.0, 40.0))
    });

    group.bench_function("tonal-spot", |b| {
        b.iter(|| {
            MaterialTheme::new(
                StandardRgb::from_argb(std::hint::black_box(SEED)),
                false,
                Contrast::Standard,
                Variant::TonalSpot,
            )
        })
    });

    group.bench_function("cache-hit", |b| {
        let mut cache = ThemeCache::new();
        cache.get(SEED, false, Contrast::Standard);
        b.iter(|| cache.get(SEED, false, Contrast::Standard).primary())
    });

    group.bench_function("cache-high-contrast", |b| {
        b.iter_batched(
            ThemeCache::new,
            |mut cache| cache.get(SEED, true, Contrast::High).primary(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
