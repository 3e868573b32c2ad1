use actix_conneg::{parse_list, preferred_match, MediaTypeList};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

const OFFERED: &str = "application/json, text/plain; q=0.5, text/html; charset=utf-8";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("single", |b| b.iter(|| parse_list(black_box("text/html"))));
    group.bench_function("browser accept", |b| {
        b.iter(|| parse_list(black_box(BROWSER_ACCEPT)))
    });

    group.finish();
}

fn bench_preferred_match(c: &mut Criterion) {
    let accept: MediaTypeList = BROWSER_ACCEPT.parse().unwrap();
    let offered: MediaTypeList = OFFERED.parse().unwrap();

    c.bench_function("preferred match", |b| {
        b.iter(|| preferred_match(black_box(&accept), black_box(&offered)).is_some())
    });
}

criterion_group!(benches, bench_parse, bench_preferred_match);
criterion_main!(benches);
