//! edurisk — student dropout-risk scoring engine.
//!
//! Modular structure:
//! - [`record`] — Student input record, normalization, validation
//! - [`features`] — Versioned feature schemas and vector/matrix building
//! - [`model`] — Opaque predictor boundary and ONNX inference
//! - [`risk`] — Score normalization, threshold classification, reason policy
//! - [`config`] — Engine configuration
//! - [`logging`] — Structured JSON logging
//!
//! The pipeline is: raw record → feature vector → model → normalized score →
//! category + reasons. Categories and reasons are a deterministic policy layer
//! on top of the model, auditable independently of model internals.

pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod record;
pub mod risk;

pub use config::EngineConfig;
pub use error::EngineError;
pub use features::{FeatureBuilder, FeatureSchema, FeatureVector};
pub use model::{LoadedModel, ModelHandle, ModelMetadata, OnnxModel, Predictor};
pub use record::{RiskAssessment, StudentMetrics};
pub use risk::{Band, ReasonEngine, ReasonPolicy, RiskScore, RiskService, ThresholdTable};
