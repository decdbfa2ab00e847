//! Two-stage inference: scale, then estimate.
//!
//! The pipeline composes the two fitted artifacts into one call,
//! exactly the composition the training side used. It owns the
//! artifacts for the process lifetime and holds no other state, so a
//! fixed input always produces a bit-for-bit identical prediction.

use log::debug;

use crate::artifacts::ModelArtifacts;
use crate::error::Result;
use crate::schema::FeatureVector;

/// Deterministic scale-then-predict composition over fitted artifacts.
///
/// # Examples
///
/// ```
/// use predecir::prelude::*;
///
/// let scaler = StandardScaler::new(vec![0.0; 9], vec![1.0; 9]).unwrap();
/// let ridge = Ridge::new(Vector::from_vec(vec![1.0; 9]), 0.0, 1.0);
/// let pipeline = Pipeline::new(ModelArtifacts::new(scaler, ridge).unwrap());
///
/// let v = FeatureVector::from_slots([2.0; 9]);
/// assert!((pipeline.predict(&v).unwrap() - 18.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    artifacts: ModelArtifacts,
}

impl Pipeline {
    /// Takes exclusive ownership of the loaded artifacts.
    #[must_use]
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self { artifacts }
    }

    /// Returns the artifacts this pipeline serves with.
    #[must_use]
    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    /// Runs the two-stage transform on one row of input.
    ///
    /// Stage 1 standardizes with the fitted scaler parameters; stage 2
    /// applies the estimator to the scaled row. Pure computation, no
    /// retries.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PredecirError::ShapeMismatch`] if either stage
    /// disagrees with the vector width. Unreachable for vectors built
    /// by the validator, but checked rather than assumed: drift between
    /// training and serving schemas must surface as an error, never as
    /// a silently wrong prediction.
    pub fn predict(&self, v: &FeatureVector) -> Result<f32> {
        let scaled = self.artifacts.scaler().transform(v)?;
        let prediction = self.artifacts.ridge().predict(&scaled)?;
        debug!("prediction computed: {prediction}");
        Ok(prediction)
    }
}
