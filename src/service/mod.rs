//! The boundary consumed by the presentation layer.
//!
//! A presentation shell (route handlers, form rendering) calls exactly
//! three things here: [`PredictionService::validate_and_cache`] with a
//! raw form mapping, [`PredictionService::last_inputs`] to pre-populate
//! the next form, and [`feature_names`] to render one input field per
//! contract name without hardcoding the set elsewhere.

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::artifacts::ModelArtifacts;
use crate::cache::{LastInputCache, RawInput};
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::schema::FEATURE_NAMES;
use crate::validate::parse_features;

/// Storage locations for the two artifacts and the cache slot.
///
/// Locations are configuration inputs, not logic: the core only needs
/// a readable location for two named artifacts and a durable
/// single-record slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path of the fitted scaler artifact.
    pub scaler_path: PathBuf,
    /// Path of the fitted estimator artifact.
    pub model_path: PathBuf,
    /// Path of the last-input cache slot.
    pub cache_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("standard_scaler.json"),
            model_path: PathBuf::from("ridge.json"),
            cache_path: PathBuf::from("last_inputs.json"),
        }
    }
}

/// Prediction service: validation, write-through recall, inference.
///
/// Artifacts are loaded once at construction and shared read-only
/// across concurrent callers; the cache slot is the only mutable
/// resource and serializes its own writes.
pub struct PredictionService {
    pipeline: Pipeline,
    cache: LastInputCache,
}

impl PredictionService {
    /// Builds a service over already-loaded artifacts.
    #[must_use]
    pub fn new(artifacts: ModelArtifacts, cache: LastInputCache) -> Self {
        Self {
            pipeline: Pipeline::new(artifacts),
            cache,
        }
    }

    /// Loads artifacts from the configured locations and builds the
    /// service. Invoked once at process start.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PredecirError::ArtifactLoad`] if either
    /// artifact is missing, corrupt, or fitted against a different
    /// schema width. Fatal: without artifacts no request can succeed.
    pub fn open(config: &ServiceConfig) -> Result<Self> {
        let artifacts = ModelArtifacts::load(&config.scaler_path, &config.model_path)?;
        let cache = LastInputCache::new(config.cache_path.clone());
        Ok(Self::new(artifacts, cache))
    }

    /// The single request entry point: validate, remember, predict.
    ///
    /// On successful validation the raw input is written through to the
    /// cache slot before inference runs; a cache write failure is
    /// logged and skipped, never surfaced as a request failure. A
    /// failed validation leaves the cache untouched.
    ///
    /// # Errors
    ///
    /// - [`crate::PredecirError::MissingField`] /
    ///   [`crate::PredecirError::InvalidNumber`] for user-correctable
    ///   input problems, naming the offending field.
    /// - [`crate::PredecirError::ShapeMismatch`] for artifact/schema
    ///   drift, which is a server fault, not a user one.
    pub fn validate_and_cache(&self, raw: &RawInput) -> Result<f32> {
        let features = parse_features(raw)?;

        if let Err(e) = self.cache.store(raw) {
            warn!("last-input cache write skipped: {e}");
        }

        self.pipeline.predict(&features)
    }

    /// Returns the cached raw input for form pre-population, or an
    /// empty mapping when none exists.
    #[must_use]
    pub fn last_inputs(&self) -> RawInput {
        self.cache.load()
    }

    /// Returns the pipeline this service predicts with.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

/// The feature contract as a read-only ordered list.
#[must_use]
pub fn feature_names() -> &'static [&'static str] {
    &FEATURE_NAMES
}

/// Formats a prediction for display with two decimal places.
///
/// Rounding is a presentation concern: the prediction value itself is
/// returned raw by [`PredictionService::validate_and_cache`].
#[must_use]
pub fn format_prediction(prediction: f32) -> String {
    format!("{prediction:.2}")
}
