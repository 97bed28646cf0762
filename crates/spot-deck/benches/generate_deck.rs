use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spot_deck::{generate_deck, verify_deck, SymbolPool};

fn bench_generate(c: &mut Criterion) {
    let pool: SymbolPool = (0..57).map(|i| format!("sticker-{i}.png")).collect();
    c.bench_function("generate_deck_n7", |b| {
        b.iter(|| {
            let _ = generate_deck(black_box(&pool)).unwrap();
        })
    });

    let generated = generate_deck(&pool).unwrap();
    c.bench_function("verify_deck_n7", |b| {
        b.iter(|| {
            let _ = verify_deck(black_box(&generated.deck));
        })
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
