//! Score normalization and category classification.
//!
//! Classification is a deterministic policy layer on top of the opaque model
//! score: thresholds live in configuration so policy can be retuned without
//! retraining, and the category mapping is total over [0, 100].

pub mod reasons;
mod service;

pub use reasons::{ReasonEngine, ReasonPolicy};
pub use service::RiskService;

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Normalized model output, clamped to [0, 100]. Classification always uses
/// the unrounded clamped value; rounding is display-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Clamp a raw (finite) model output into range. Callers must reject
    /// non-finite model output before constructing a score.
    pub fn from_raw(raw: f64) -> Self {
        Self(raw.clamp(0.0, 100.0))
    }

    /// Unrounded clamped value, for classification.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Two-decimal value, for numeric score responses.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    /// Integer value, for percentage-style responses.
    pub fn as_percent(&self) -> u8 {
        self.0.round() as u8
    }
}

/// One classification band: scores at or below `upper_bound` get `label`.
/// The final band has no bound and catches everything above the last cutoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    #[serde(default)]
    pub upper_bound: Option<f64>,
    pub label: String,
}

/// Ordered classification bands, validated so every score maps to exactly one
/// label: bounds strictly increasing, exactly one unbounded terminal band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Band>", into = "Vec<Band>")]
pub struct ThresholdTable {
    bands: Vec<Band>,
}

impl ThresholdTable {
    pub fn new(bands: Vec<Band>) -> Result<Self, EngineError> {
        if bands.len() < 2 {
            return Err(EngineError::Config(
                "threshold table needs at least two bands".to_string(),
            ));
        }
        let (last, bounded) = bands.split_last().expect("non-empty");
        if last.upper_bound.is_some() {
            return Err(EngineError::Config(
                "final threshold band must be unbounded".to_string(),
            ));
        }
        let mut prev = f64::NEG_INFINITY;
        for band in bounded {
            match band.upper_bound {
                Some(b) if b.is_finite() && b > prev => prev = b,
                Some(_) => {
                    return Err(EngineError::Config(format!(
                        "threshold bounds must be finite and strictly increasing (band '{}')",
                        band.label
                    )));
                }
                None => {
                    return Err(EngineError::Config(format!(
                        "only the final band may be unbounded (band '{}')",
                        band.label
                    )));
                }
            }
        }
        Ok(Self { bands })
    }

    /// Policy used by the later iterations: Low ≤ 30 < Medium ≤ 60 < High.
    pub fn default_policy() -> Self {
        Self::new(vec![
            Band { upper_bound: Some(30.0), label: "Low".to_string() },
            Band { upper_bound: Some(60.0), label: "Medium".to_string() },
            Band { upper_bound: None, label: "High".to_string() },
        ])
        .expect("default table is valid")
    }

    /// Upper bounds are inclusive: the first band whose bound is ≥ score wins.
    pub fn classify(&self, score: f64) -> &str {
        for band in &self.bands {
            match band.upper_bound {
                Some(b) if score <= b => return &band.label,
                Some(_) => continue,
                None => return &band.label,
            }
        }
        unreachable!("validated table always terminates in an unbounded band")
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::default_policy()
    }
}

impl TryFrom<Vec<Band>> for ThresholdTable {
    type Error = EngineError;

    fn try_from(bands: Vec<Band>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<ThresholdTable> for Vec<Band> {
    fn from(table: ThresholdTable) -> Self {
        table.bands
    }
}
