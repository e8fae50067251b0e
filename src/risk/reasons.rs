//! Explanation policy: deterministic, auditable reasons laid on top of the
//! opaque model score. Reproducible from the input metrics alone (plus the
//! score for the combined-moderate fallback), so the model can be retrained
//! or swapped without changing what students are told.

use crate::record::StudentMetrics;
use serde::{Deserialize, Serialize};

pub const CRITICAL_ATTENDANCE: &str = "Critically low attendance";
pub const LOW_ATTENDANCE: &str = "Low attendance";
pub const LOW_ACADEMIC: &str = "Low academic performance";
pub const FINANCIAL_STRESS: &str = "Financial stress due to fee delay";
pub const POOR_ASSIGNMENTS: &str = "Poor assignment completion";
pub const LOW_ENGAGEMENT: &str = "Low engagement or motivation";
pub const MODERATE_COMBINED: &str = "Multiple moderate risk factors";
pub const OVERALL_STABILITY: &str = "Student shows overall stability";

/// Rule cutoffs. Tuned independently of the model across iterations, so they
/// are configuration rather than literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonPolicy {
    /// Strict `<`: attendance below this dominates every other rule.
    pub attendance_critical_below: f64,
    pub attendance_low_below: f64,
    pub cgpa_low_below: f64,
    pub fee_delay_high_over: u32,
    pub assignments_low_below: f64,
    pub engagement_low_below: f64,
    /// Scores at or above this get the combined-moderate reason when no
    /// individual rule fires.
    pub moderate_score_floor: f64,
}

impl Default for ReasonPolicy {
    fn default() -> Self {
        Self {
            attendance_critical_below: 50.0,
            attendance_low_below: 65.0,
            cgpa_low_below: 5.5,
            fee_delay_high_over: 60,
            assignments_low_below: 50.0,
            engagement_low_below: 4.0,
            moderate_score_floor: 40.0,
        }
    }
}

pub struct ReasonEngine {
    policy: ReasonPolicy,
}

impl ReasonEngine {
    pub fn new(policy: ReasonPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReasonPolicy {
        &self.policy
    }

    /// Priority short-circuit evaluation; the result is never empty.
    ///
    /// Critically low attendance dominates: the critical reason comes first,
    /// supporting secondary factors may follow, and no lower-priority branch
    /// (moderate attendance, fallbacks) runs. Otherwise independent rules are
    /// evaluated in fixed priority order and all that fire are collected.
    pub fn explain(&self, m: &StudentMetrics, score: f64) -> Vec<String> {
        let p = &self.policy;

        if m.attendance_percentage < p.attendance_critical_below {
            let mut reasons = vec![CRITICAL_ATTENDANCE.to_string()];
            if m.cgpa < p.cgpa_low_below {
                reasons.push(LOW_ACADEMIC.to_string());
            }
            if m.fee_delay_days > p.fee_delay_high_over {
                reasons.push(FINANCIAL_STRESS.to_string());
            }
            if m.assignments_completed_pct < p.assignments_low_below {
                reasons.push(POOR_ASSIGNMENTS.to_string());
            }
            if m.engagement_score < p.engagement_low_below {
                reasons.push(LOW_ENGAGEMENT.to_string());
            }
            return reasons;
        }

        let mut reasons = Vec::new();
        if m.cgpa < p.cgpa_low_below {
            reasons.push(LOW_ACADEMIC.to_string());
        }
        if m.attendance_percentage < p.attendance_low_below {
            reasons.push(LOW_ATTENDANCE.to_string());
        }
        if m.fee_delay_days > p.fee_delay_high_over {
            reasons.push(FINANCIAL_STRESS.to_string());
        }
        if m.assignments_completed_pct < p.assignments_low_below {
            reasons.push(POOR_ASSIGNMENTS.to_string());
        }
        if m.engagement_score < p.engagement_low_below {
            reasons.push(LOW_ENGAGEMENT.to_string());
        }

        if reasons.is_empty() {
            if score >= p.moderate_score_floor {
                reasons.push(MODERATE_COMBINED.to_string());
            } else {
                reasons.push(OVERALL_STABILITY.to_string());
            }
        }
        reasons
    }
}
