use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skirmish::{
    is_in_arc, trace_line, HexDirection, HexPoint, MapConfig, Skirmish,
};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tactics");

    let from = HexPoint::new_qr(-40, 15);
    let to = HexPoint::new_qr(37, -22);
    group.bench_function("trace line", |b| {
        b.iter(|| trace_line(black_box(from), black_box(to)))
    });

    let config = MapConfig {
        seed: 1234.into(),
        radius: 50,
        units: 0,
        ..Default::default()
    };
    let skirmish = Skirmish::generate(config).unwrap();
    let grid = skirmish.grid();
    group.bench_function("firing arc", |b| {
        b.iter(|| {
            is_in_arc(
                black_box(HexPoint::new_qr(-50, 25)),
                HexDirection::E,
                black_box(HexPoint::new_qr(50, -25)),
                grid,
            )
        })
    });
    group.finish();

    let mut group = c.benchmark_group("map-generation");
    group.sample_size(10);
    let config = MapConfig {
        seed: 1234.into(),
        radius: 100,
        units: 20,
        ..Default::default()
    };
    group.bench_function("skirmish gen", |b| {
        b.iter(|| Skirmish::generate(black_box(config.clone())))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
