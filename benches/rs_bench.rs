use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rsbits::bitseq::BitSequence;
use rsbits::rank::RankIndex;
use rsbits::select::SelectIndex;
use rsbits::sparse::SparseArray;

fn bench_rank_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_select");
    let words = vec![0xAAAAAAAAAAAAAAAAu64; 1000]; // 64000 bits, 50% density
    let index = RankIndex::new(BitSequence::from_words(&words, 64000)).unwrap();

    group.bench_function("rank", |b| {
        b.iter(|| {
            for i in 1..=64000 {
                black_box(index.rank(i).unwrap());
            }
        })
    });

    group.bench_function("select", |b| {
        let select = SelectIndex::new(&index);
        b.iter(|| {
            for k in 1..=32000 {
                black_box(select.select(k).unwrap());
            }
        })
    });
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_array");
    let mut array = SparseArray::create(100_000);
    for i in 0..1000 {
        array.append(format!("value-{i}"), i * 100);
    }
    array.rebuild_index().unwrap();

    group.bench_function("get_at_index", |b| {
        b.iter(|| {
            for pos in (0..100_000).step_by(97) {
                black_box(array.get_at_index(pos).unwrap());
            }
        })
    });

    group.bench_function("count_up_to", |b| {
        b.iter(|| {
            for pos in (0..100_000).step_by(97) {
                black_box(array.count_up_to(pos).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_rank_select, bench_sparse);
criterion_main!(benches);
