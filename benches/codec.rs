use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use fox_hounds::codec::{decode, encode, POSITION_COUNT};
use fox_hounds::rules::movegen::successors;

const STRIDE: usize = 97;

fn bench_codec(c: &mut Criterion) {
    let indices: Vec<u32> = (0..POSITION_COUNT).step_by(STRIDE).collect();
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(indices.len() as u64));

    group.bench_function("decode", |b| {
        b.iter(|| {
            for &i in &indices {
                black_box(decode(black_box(i)));
            }
        })
    });

    let positions: Vec<_> = indices.iter().map(|&i| decode(i)).collect();
    group.bench_function("encode", |b| {
        b.iter(|| {
            for p in &positions {
                black_box(encode(black_box(p)));
            }
        })
    });
    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let positions: Vec<_> = (0..POSITION_COUNT).step_by(STRIDE).map(decode).collect();
    let mut group = c.benchmark_group("movegen");
    group.throughput(Throughput::Elements(positions.len() as u64));

    group.bench_function("successors", |b| {
        b.iter(|| {
            let mut n = 0usize;
            for p in &positions {
                n += successors(black_box(p)).len();
            }
            black_box(n)
        })
    });

    group.bench_function("successors_encoded", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for p in &positions {
                for next in successors(p).iter() {
                    acc += encode(next) as u64;
                }
            }
            black_box(acc)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_movegen);
criterion_main!(benches);
