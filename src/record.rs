//! Student input record and the scored output record.
//!
//! The wire format is camelCase JSON. Historical snapshots of the upstream
//! system used several names for the same field (`classParticipationScore`,
//! `participation`, `engagement`; `assignmentsCompleted`, `assignments`);
//! all variants are accepted on input and normalized to one canonical field.

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five raw signals a risk assessment is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentMetrics {
    /// 0–100
    #[serde(alias = "attendance")]
    pub attendance_percentage: f64,
    /// 0–10
    pub cgpa: f64,
    /// Days the fee payment is overdue, 0 if on time.
    #[serde(alias = "feeDelay", alias = "fee_delay")]
    pub fee_delay_days: u32,
    /// 0–10. Canonical name for what some snapshots called participation.
    #[serde(
        alias = "classParticipationScore",
        alias = "participation",
        alias = "engagement"
    )]
    pub engagement_score: f64,
    /// 0–100
    #[serde(alias = "assignmentsCompleted", alias = "assignments")]
    pub assignments_completed_pct: f64,
}

impl StudentMetrics {
    /// Reject out-of-bounds or non-finite values. Inputs are never clamped
    /// here; a record outside its declared bounds is a caller error.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_range("attendancePercentage", self.attendance_percentage, 0.0, 100.0)?;
        check_range("cgpa", self.cgpa, 0.0, 10.0)?;
        check_range("engagementScore", self.engagement_score, 0.0, 10.0)?;
        check_range(
            "assignmentsCompletedPct",
            self.assignments_completed_pct,
            0.0,
            100.0,
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, lo: f64, hi: f64) -> Result<(), EngineError> {
    if !value.is_finite() {
        return Err(EngineError::validation(field, "must be a finite number"));
    }
    if value < lo || value > hi {
        return Err(EngineError::validation(
            field,
            format!("{value} outside [{lo}, {hi}]"),
        ));
    }
    Ok(())
}

/// Result of scoring one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// 0–100, two-decimal rounding.
    pub risk_score: f64,
    /// Label from the configured threshold table ("Low", "Medium", "High", ...).
    pub risk_level: String,
    /// Priority-ordered, never empty.
    pub risk_reasons: Vec<String>,
    pub scored_at: DateTime<Utc>,
}
