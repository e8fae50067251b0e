//! Feature-building benchmark: records → vectors and batch matrices.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edurisk::features::{FeatureBuilder, FeatureSchema};
use edurisk::record::StudentMetrics;

fn make_records(n: usize) -> Vec<StudentMetrics> {
    (0..n)
        .map(|i| StudentMetrics {
            attendance_percentage: (i % 101) as f64,
            cgpa: (i % 11) as f64,
            fee_delay_days: (i % 120) as u32,
            engagement_score: (i % 11) as f64,
            assignments_completed_pct: ((i * 7) % 101) as f64,
        })
        .collect()
}

fn bench_single_build(c: &mut Criterion) {
    let builder = FeatureBuilder::new(FeatureSchema::FlagsV2);
    let records = make_records(1);
    c.bench_function("build_flags_v2_single", |b| {
        b.iter(|| builder.build(black_box(&records[0])))
    });
}

fn bench_batch_matrix(c: &mut Criterion) {
    let builder = FeatureBuilder::new(FeatureSchema::RawV1);
    let mut g = c.benchmark_group("build_matrix_raw_v1");
    for n in [10, 100, 1000] {
        let records = make_records(n);
        g.bench_function(format!("records_{}", n).as_str(), |b| {
            b.iter(|| builder.build_matrix(black_box(&records)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_single_build, bench_batch_matrix);
criterion_main!(benches);
