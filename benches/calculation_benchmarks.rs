use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stridecalc::batch::BatchProcessor;
use stridecalc::{read_package, SensorPackage};

/// Benchmarks for package dispatch and batch summaries

fn bench_read_package(c: &mut Criterion) {
    let mut group = c.benchmark_group("Package Dispatch");

    for (code, data) in stridecalc::sample_packages() {
        group.bench_with_input(BenchmarkId::new("summary", code), &data, |b, data| {
            b.iter(|| read_package(black_box(code), black_box(data)).map(|t| t.summary()));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Processing");
    let processor = BatchProcessor::default();

    for &size in &[10, 100, 1000] {
        let packages = create_package_dataset(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("process", size), &packages, |b, packages| {
            b.iter(|| processor.process(black_box(packages)));
        });
    }

    group.finish();
}

fn create_package_dataset(size: usize) -> Vec<SensorPackage> {
    stridecalc::sample_packages()
        .into_iter()
        .cycle()
        .take(size)
        .map(SensorPackage::from)
        .collect()
}

criterion_group!(benches, bench_read_package, bench_batch);
criterion_main!(benches);
