//! Service benchmark: batch scoring must beat N single-record calls.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edurisk::error::EngineError;
use edurisk::features::{FeatureBuilder, FeatureSchema};
use edurisk::model::{LoadedModel, ModelHandle, ModelMetadata, Predictor};
use edurisk::record::StudentMetrics;
use edurisk::risk::{ReasonEngine, ReasonPolicy, RiskService, ThresholdTable};
use ndarray::Array2;
use std::sync::Arc;

struct BlendModel;

impl Predictor for BlendModel {
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<f32>, EngineError> {
        Ok(x.rows()
            .into_iter()
            .map(|r| {
                (100.0 - r[0]) * 0.25
                    + (10.0 - r[1]) * 2.5
                    + r[2].clamp(0.0, 100.0) * 0.20
                    + (100.0 - r[3]) * 0.15
                    + (10.0 - r[4]) * 0.75
            })
            .collect())
    }
}

fn make_service() -> RiskService {
    let handle = Arc::new(ModelHandle::new(LoadedModel::new(
        Box::new(BlendModel),
        ModelMetadata {
            version: "bench".to_string(),
            training_date: None,
            feature_schema_id: "raw/v1".to_string(),
        },
    )));
    RiskService::new(
        FeatureBuilder::new(FeatureSchema::RawV1),
        handle,
        ThresholdTable::default(),
        ReasonEngine::new(ReasonPolicy::default()),
    )
}

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

fn bench_single(c: &mut Criterion) {
    let service = make_service();
    let records = make_records(1);
    c.bench_function("score_single", |b| {
        b.iter(|| service.score(black_box(&records[0])).unwrap())
    });
}

fn bench_batch_vs_loop(c: &mut Criterion) {
    let service = make_service();
    let records = make_records(100);
    let mut g = c.benchmark_group("score_100_records");
    g.bench_function("batch", |b| {
        b.iter(|| service.score_batch(black_box(&records)).unwrap())
    });
    g.bench_function("single_loop", |b| {
        b.iter(|| {
            records
                .iter()
                .map(|m| service.score(m).unwrap())
                .collect::<Vec<_>>()
        })
    });
    g.finish();
}

criterion_group!(benches, bench_single, bench_batch_vs_loop);
criterion_main!(benches);
