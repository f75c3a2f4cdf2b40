use criterion::async_executor::FuturesExecutor;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use futures_sequence::future::{all, resolve};
use futures_sequence::sequence::map_async;

mod utils;

fn vec_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare vec::all");
    for i in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("futures-sequence all", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let futs = utils::futures_vec(*i as usize);
                let output = all(futs).await.unwrap();
                assert_eq!(output.len(), *i as usize);
            })
        });
        group.bench_with_input(BenchmarkId::new("futures-sequence map_async", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let futs = utils::futures_vec(*i as usize);
                let output = map_async(resolve(futs), resolve).await.unwrap();
                assert_eq!(output.len(), *i as usize);
            })
        });
        group.bench_with_input(BenchmarkId::new("futures-rs", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let futs = utils::futures_vec(*i as usize);
                let output = futures::future::try_join_all(futs).await.unwrap();
                assert_eq!(output.len(), *i as usize);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, vec_all);
criterion_main!(benches);
