use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qth_geodesy::{
    Coordinate, ellipsoidal_distance_km, haversine_distance_km, initial_bearing_deg,
};

const NEW_YORK: Coordinate = Coordinate::new(40.7128, -74.0060);
const LONDON: Coordinate = Coordinate::new(51.5074, -0.1278);

fn distance_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    group.bench_function("haversine", |b| {
        b.iter(|| haversine_distance_km(black_box(NEW_YORK), black_box(LONDON)))
    });
    group.bench_function("vincenty", |b| {
        b.iter(|| ellipsoidal_distance_km(black_box(NEW_YORK), black_box(LONDON)))
    });
    group.bench_function("vincenty_near_antipodal", |b| {
        b.iter(|| {
            ellipsoidal_distance_km(
                black_box(Coordinate::new(0.0, 0.0)),
                black_box(Coordinate::new(0.5, 179.5)),
            )
        })
    });
    group.finish();
}

fn bearing_bench(c: &mut Criterion) {
    c.bench_function("initial_bearing", |b| {
        b.iter(|| initial_bearing_deg(black_box(NEW_YORK), black_box(LONDON)))
    });
}

criterion_group!(benches, distance_bench, bearing_bench);
criterion_main!(benches);
