//! Feature engineering: student record → ordered numeric vector.
//!
//! Column names and order are fixed per [`FeatureSchema`] version and are part
//! of the contract with the trained model. A model trained under one schema
//! must never be fed vectors built under another; the schema id carried in the
//! model metadata is checked before inference.

mod builder;

pub use builder::FeatureBuilder;

use serde::{Deserialize, Serialize};

/// Versioned feature-column contract. The variant is fixed at model training
/// time, not a runtime toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureSchema {
    /// The five raw signals, in the order the later training pipeline used.
    #[serde(rename = "raw/v1")]
    RawV1,
    /// Raw signals plus six binary penalty flags, in the order the earlier
    /// training pipeline used. Note engagement and assignments swap positions
    /// relative to `raw/v1` — the exact mismatch the schema id guards against.
    #[serde(rename = "flags/v2")]
    FlagsV2,
}

/// Penalty-flag cutoffs baked into `flags/v2` at training time. Part of the
/// schema, deliberately separate from the runtime reason policy.
pub(crate) mod flag_cutoffs {
    pub const ATTENDANCE_PENALTY_BELOW: f64 = 50.0;
    pub const CGPA_RISK_BELOW: f64 = 6.0;
    pub const FEE_DELAY_FLAG_OVER: u32 = 15;
    pub const FEE_DELAY_PENALTY_OVER: u32 = 60;
    pub const ENGAGEMENT_RISK_BELOW: f64 = 5.0;
    pub const ASSIGNMENT_RISK_BELOW: f64 = 60.0;
}

impl FeatureSchema {
    pub fn id(&self) -> &'static str {
        match self {
            FeatureSchema::RawV1 => "raw/v1",
            FeatureSchema::FlagsV2 => "flags/v2",
        }
    }

    /// Column names in model-input order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            FeatureSchema::RawV1 => {
                &["attendance", "cgpa", "fee_delay", "assignments", "engagement"]
            }
            FeatureSchema::FlagsV2 => &[
                "attendance",
                "cgpa",
                "fee_delay",
                "engagement",
                "assignments",
                "attendance_penalty",
                "cgpa_risk",
                "fee_delay_flag",
                "fee_delay_penalty",
                "engagement_risk",
                "assignment_risk",
            ],
        }
    }

    pub fn dim(&self) -> usize {
        self.columns().len()
    }
}

impl std::fmt::Display for FeatureSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One model-input row, tagged with the schema it was built under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    pub schema: FeatureSchema,
    pub values: Vec<f32>,
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}
