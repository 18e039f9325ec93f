use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hd_bodygraph::{ActivationSet, Bodygraph, Source, gate_position, resolve};
use hd_ephem::LongitudeSet;
use hd_time::UtcTime;

fn gate_bench(c: &mut Criterion) {
    c.bench_function("gate_position", |b| b.iter(|| gate_position(black_box(123.456))));
}

fn analysis_bench(c: &mut Criterion) {
    let gates: Vec<u8> = vec![1, 8, 20, 34, 57, 10, 6, 59, 19, 49, 47, 64, 38, 39, 48, 21];

    c.bench_function("bodygraph_from_gates", |b| {
        b.iter(|| {
            let bg = Bodygraph::from_gates(black_box(gates.iter().copied()));
            (bg.hd_type(), bg.authority(), bg.definition())
        })
    });
}

fn resolve_bench(c: &mut Criterion) {
    let planets = [271.9, 241.6, 327.9, 25.2, 40.4, 314.8, 303.2, 251.5];
    let p = LongitudeSet::new(280.372, 123.9, 223.3, planets);
    let d = LongitudeSet::new(192.372, 128.8, 10.0, planets);
    let ps = ActivationSet::from_longitudes(&p, Source::Personality, UtcTime::new(2000, 1, 1, 12, 0, 0.0));
    let ds = ActivationSet::from_longitudes(&d, Source::Design, UtcTime::new(1999, 10, 5, 0, 0, 0.0));

    c.bench_function("resolve", |b| b.iter(|| resolve(black_box(&ps), black_box(&ds))));
}

criterion_group!(benches, gate_bench, analysis_bench, resolve_bench);
criterion_main!(benches);
