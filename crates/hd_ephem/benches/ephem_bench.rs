use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hd_ephem::{AnalyticEphemeris, DesignConfig, Ephemeris, find_design_instant};

fn longitudes_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;
    let ephem = AnalyticEphemeris;

    let mut group = c.benchmark_group("ephemeris");
    group.bench_function("sun_longitude", |b| {
        b.iter(|| ephem.sun_longitude(black_box(jd)))
    });
    group.bench_function("longitudes_at", |b| {
        b.iter(|| ephem.longitudes_at(black_box(jd)))
    });
    group.finish();
}

fn design_bench(c: &mut Criterion) {
    let jd = 2_451_545.0;
    let cfg = DesignConfig::default();

    c.bench_function("find_design_instant", |b| {
        b.iter(|| find_design_instant(&AnalyticEphemeris, black_box(jd), &cfg))
    });
}

criterion_group!(benches, longitudes_bench, design_bench);
criterion_main!(benches);
