use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use flat_tensor::Tensor;

fn ramp(len: usize, scale: f32) -> Tensor<f32> {
    Tensor::new((0..len).map(|i| i as f32 * scale).collect(), &[len]).expect("valid shape")
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    for len in [1_000, 100_000] {
        let a = ramp(len, 1.);
        let b = ramp(len, 2.);
        let mut result = Tensor::<f32>::zeros(&[len]).expect("valid shape");

        group.bench_with_input(BenchmarkId::new("add_raw", len), &len, |bench, _| {
            bench.iter(|| {
                let a = a.data().expect("not borrowed");
                let b = b.data().expect("not borrowed");
                let mut out = result.data_mut().expect("not borrowed");
                for ((out, a), b) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
                    *out = a + b;
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("add_indexed", len), &len, |bench, &len| {
            bench.iter(|| {
                for i in 0..len {
                    let value = a.get(&[i]).expect("in range") + b.get(&[i]).expect("in range");
                    result.set(&[i], value).expect("in range");
                }
            })
        });
    }

    group.finish();
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    let tensor = ramp(1_000, 1.);
    let mut target = Tensor::<f32>::zeros(&[10, 100]).expect("valid shape");

    group.bench_function("clone", |b| b.iter(|| black_box(tensor.clone())));
    group.bench_function("reshape", |b| {
        b.iter(|| black_box(tensor.reshape(black_box(&[500usize, 2][..])).expect("same size")))
    });
    group.bench_function("copy_to", |b| {
        b.iter(|| tensor.copy_to(black_box(&mut target)).expect("same length"))
    });

    group.finish();
}

fn bench_offset(c: &mut Criterion) {
    let tensor = Tensor::<f32>::zeros(&[8, 16, 32, 4]).expect("valid shape");

    c.bench_function("offset_rank4", |b| {
        b.iter(|| tensor.offset(black_box(&[7usize, 15, 31, 3][..])).expect("in range"))
    });
}

criterion_group!(benches, bench_elementwise, bench_derive, bench_offset);
criterion_main!(benches);
