//! Builds model-input rows and batch matrices. Pure: no I/O, no randomness.

use super::flag_cutoffs::*;
use super::{FeatureSchema, FeatureVector};
use crate::error::EngineError;
use crate::record::StudentMetrics;
use ndarray::Array2;

/// The single place that defines feature column order. Bound to one schema at
/// construction; the serving layer checks this against the loaded model's
/// schema id before every inference.
#[derive(Debug, Clone, Copy)]
pub struct FeatureBuilder {
    schema: FeatureSchema,
}

impl FeatureBuilder {
    pub fn new(schema: FeatureSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> FeatureSchema {
        self.schema
    }

    /// Fail unless the given schema id (from model metadata) matches the
    /// schema this builder emits. Misaligned columns must never reach the model.
    pub fn expect_schema(&self, model_schema_id: &str) -> Result<(), EngineError> {
        if self.schema.id() != model_schema_id {
            return Err(EngineError::SchemaMismatch {
                expected: self.schema.id().to_string(),
                found: model_schema_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn build(&self, m: &StudentMetrics) -> FeatureVector {
        FeatureVector {
            schema: self.schema,
            values: self.row(m),
        }
    }

    /// One `[n, dim]` matrix for batch inference; row order follows input order.
    pub fn build_matrix(&self, records: &[StudentMetrics]) -> Array2<f32> {
        let dim = self.schema.dim();
        let mut data = Vec::with_capacity(records.len() * dim);
        for m in records {
            data.extend_from_slice(&self.row(m));
        }
        Array2::from_shape_vec((records.len(), dim), data)
            .expect("row width matches schema dim")
    }

    fn row(&self, m: &StudentMetrics) -> Vec<f32> {
        match self.schema {
            FeatureSchema::RawV1 => vec![
                m.attendance_percentage as f32,
                m.cgpa as f32,
                m.fee_delay_days as f32,
                m.assignments_completed_pct as f32,
                m.engagement_score as f32,
            ],
            FeatureSchema::FlagsV2 => vec![
                m.attendance_percentage as f32,
                m.cgpa as f32,
                m.fee_delay_days as f32,
                m.engagement_score as f32,
                m.assignments_completed_pct as f32,
                flag(m.attendance_percentage < ATTENDANCE_PENALTY_BELOW),
                flag(m.cgpa < CGPA_RISK_BELOW),
                flag(m.fee_delay_days > FEE_DELAY_FLAG_OVER),
                flag(m.fee_delay_days > FEE_DELAY_PENALTY_OVER),
                flag(m.engagement_score < ENGAGEMENT_RISK_BELOW),
                flag(m.assignments_completed_pct < ASSIGNMENT_RISK_BELOW),
            ],
        }
    }
}

fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}
