use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spot_plane::{enumerate_lines, point_space, SUPPORTED_ORDERS};

fn bench_enumerate(c: &mut Criterion) {
    for order in SUPPORTED_ORDERS {
        let space = point_space(order);
        c.bench_function(&format!("enumerate_lines_n{}", order.n()), |b| {
            b.iter(|| {
                let _ = enumerate_lines(black_box(&space)).unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_enumerate);
criterion_main!(benches);
