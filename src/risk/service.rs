//! Orchestration: validate → build features → predict → normalize →
//! classify + explain. Single and batch requests run the same pipeline; the
//! single path is a batch of one, so the two are equivalent by construction.

use super::{ReasonEngine, RiskScore, ThresholdTable};
use crate::error::EngineError;
use crate::features::FeatureBuilder;
use crate::model::{ModelHandle, ModelMetadata};
use crate::record::{RiskAssessment, StudentMetrics};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct RiskService {
    builder: FeatureBuilder,
    model: Arc<ModelHandle>,
    thresholds: ThresholdTable,
    reasons: ReasonEngine,
}

impl RiskService {
    pub fn new(
        builder: FeatureBuilder,
        model: Arc<ModelHandle>,
        thresholds: ThresholdTable,
        reasons: ReasonEngine,
    ) -> Self {
        Self {
            builder,
            model,
            thresholds,
            reasons,
        }
    }

    /// For the external health endpoint.
    pub fn is_ready(&self) -> bool {
        self.model.is_ready()
    }

    pub fn model_metadata(&self) -> Option<ModelMetadata> {
        self.model.metadata()
    }

    pub fn score(&self, metrics: &StudentMetrics) -> Result<RiskAssessment, EngineError> {
        let mut results = self.score_batch(std::slice::from_ref(metrics))?;
        Ok(results.pop().expect("batch of one yields one result"))
    }

    /// Order-preserving, one-to-one with input; empty input is an empty
    /// result, not an error. One feature matrix, one model invocation. If
    /// inference fails the whole batch fails explicitly — no record is ever
    /// given a fabricated default score.
    pub fn score_batch(
        &self,
        records: &[StudentMetrics],
    ) -> Result<Vec<RiskAssessment>, EngineError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        for r in records {
            r.validate()?;
        }

        let model = self.model.current().ok_or(EngineError::ModelUnavailable)?;
        self.builder.expect_schema(&model.metadata.feature_schema_id)?;

        let start = Instant::now();
        let matrix = self.builder.build_matrix(records);
        let raw_scores = model.predictor.predict(&matrix)?;
        if raw_scores.len() != records.len() {
            return Err(EngineError::Inference(format!(
                "model returned {} scores for {} records",
                raw_scores.len(),
                records.len()
            )));
        }

        let scored_at = Utc::now();
        let mut out = Vec::with_capacity(records.len());
        for (m, raw) in records.iter().zip(raw_scores) {
            let raw = f64::from(raw);
            if !raw.is_finite() {
                return Err(EngineError::Inference(format!(
                    "model returned non-finite score {raw}"
                )));
            }
            let score = RiskScore::from_raw(raw);
            out.push(RiskAssessment {
                risk_score: score.rounded(),
                risk_level: self.thresholds.classify(score.value()).to_string(),
                risk_reasons: self.reasons.explain(m, score.value()),
                scored_at,
            });
        }

        debug!(
            count = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            model_version = %model.metadata.version,
            "scored batch"
        );
        Ok(out)
    }
}
