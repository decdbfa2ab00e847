//! Fitted model artifacts and their durable storage.
//!
//! Two pre-fitted transforms are loaded once at process start and never
//! mutated, re-fitted, or reloaded afterwards: a [`StandardScaler`]
//! holding per-feature mean/std, and a [`Ridge`] estimator holding a
//! coefficient vector and intercept. Both serialize as plain JSON
//! documents, one file per artifact.
//!
//! Training lives elsewhere; this module only carries the parameters a
//! training pipeline baked in, which is why neither type has a `fit`.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PredecirError, Result};
use crate::primitives::Vector;
use crate::schema::{FeatureVector, FEATURE_COUNT};

/// Guard against division by a degenerate standard deviation.
const MIN_STD: f32 = 1e-10;

/// Standardizes features using fitted mean and standard deviation.
///
/// The standard score of a sample x is: z = (x - mean) / std, with the
/// population std convention (divide by n) the training side uses. A
/// feature whose fitted std is effectively zero is centered but left
/// unscaled.
///
/// # Examples
///
/// ```
/// use predecir::artifacts::StandardScaler;
/// use predecir::schema::FeatureVector;
///
/// let scaler = StandardScaler::new(vec![1.0; 9], vec![2.0; 9]).unwrap();
/// let v = FeatureVector::from_slots([3.0; 9]);
/// let scaled = scaler.transform(&v).unwrap();
/// assert!((scaled[0] - 1.0).abs() < 1e-6); // (3 - 1) / 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Fitted mean of each feature, in contract order.
    mean: Vec<f32>,
    /// Fitted standard deviation of each feature, in contract order.
    std: Vec<f32>,
}

impl StandardScaler {
    /// Creates a scaler from fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::ShapeMismatch`] if the mean and std
    /// vectors have different lengths.
    pub fn new(mean: Vec<f32>, std: Vec<f32>) -> Result<Self> {
        if mean.len() != std.len() {
            return Err(PredecirError::ShapeMismatch {
                expected: mean.len(),
                actual: std.len(),
            });
        }
        Ok(Self { mean, std })
    }

    /// Returns the fitted mean of each feature.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    /// Returns the fitted standard deviation of each feature.
    #[must_use]
    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Width the scaler was fitted with.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardizes a single row using the fitted parameters.
    ///
    /// Never re-estimates statistics from the input; the parameters are
    /// baked in at fit time.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::ShapeMismatch`] if the fitted width
    /// disagrees with the vector length.
    pub fn transform(&self, v: &FeatureVector) -> Result<FeatureVector> {
        if self.mean.len() != v.len() {
            return Err(PredecirError::ShapeMismatch {
                expected: self.mean.len(),
                actual: v.len(),
            });
        }

        let mut scaled = [0.0_f32; FEATURE_COUNT];
        for (j, slot) in scaled.iter_mut().enumerate() {
            let centered = v[j] - self.mean[j];
            *slot = if self.std[j] > MIN_STD {
                centered / self.std[j]
            } else {
                centered
            };
        }

        Ok(FeatureVector::from_slots(scaled))
    }

    /// Saves the fitted parameters as a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads fitted parameters from a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::ArtifactLoad`] if the file is missing,
    /// unreadable, or does not deserialize into a scaler.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| artifact_error(path, &e.to_string()))?;
        let scaler: Self =
            serde_json::from_slice(&bytes).map_err(|e| artifact_error(path, &e.to_string()))?;
        if scaler.mean.len() != scaler.std.len() {
            return Err(artifact_error(path, "mean and std widths differ"));
        }
        Ok(scaler)
    }
}

/// Ridge regression estimator with fitted coefficients.
///
/// Prediction is `coefficients · x + intercept`. The regularization
/// strength `alpha` only matters at fit time; it is retained in the
/// artifact for provenance.
///
/// # Examples
///
/// ```
/// use predecir::artifacts::Ridge;
/// use predecir::primitives::Vector;
/// use predecir::schema::FeatureVector;
///
/// let ridge = Ridge::new(Vector::from_vec(vec![1.0; 9]), 0.5, 1.0);
/// let v = FeatureVector::from_slots([2.0; 9]);
/// let y = ridge.predict(&v).unwrap();
/// assert!((y - 18.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ridge {
    /// Fitted coefficients, one per feature in contract order.
    coefficients: Vector,
    /// Fitted intercept (bias) term.
    intercept: f32,
    /// Regularization strength used at fit time.
    alpha: f32,
}

impl Ridge {
    /// Creates an estimator from fitted parameters.
    #[must_use]
    pub fn new(coefficients: Vector, intercept: f32, alpha: f32) -> Self {
        Self {
            coefficients,
            intercept,
            alpha,
        }
    }

    /// Returns the fitted coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &Vector {
        &self.coefficients
    }

    /// Returns the fitted intercept term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Returns the regularization strength used at fit time.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Width the estimator was fitted with.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predicts the target for a single (already scaled) row.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::ShapeMismatch`] if the fitted width
    /// disagrees with the vector length.
    pub fn predict(&self, v: &FeatureVector) -> Result<f32> {
        if self.coefficients.len() != v.len() {
            return Err(PredecirError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: v.len(),
            });
        }

        let x = Vector::from_slice(v.as_slice());
        Ok(self.coefficients.dot(&x) + self.intercept)
    }

    /// Saves the fitted parameters as a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads fitted parameters from a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::ArtifactLoad`] if the file is missing,
    /// unreadable, or does not deserialize into an estimator.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| artifact_error(path, &e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| artifact_error(path, &e.to_string()))
    }
}

/// The two immutable artifacts the pipeline serves with.
///
/// Loaded exactly once at process start and owned by the pipeline for
/// the process lifetime. Construction audits both fitted widths against
/// the feature contract, so artifact/schema drift fails the process
/// start instead of the first request.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    scaler: StandardScaler,
    ridge: Ridge,
}

impl ModelArtifacts {
    /// Combines two fitted transforms, auditing their widths against
    /// the feature contract.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::ShapeMismatch`] if either transform was
    /// fitted with a width other than [`FEATURE_COUNT`].
    pub fn new(scaler: StandardScaler, ridge: Ridge) -> Result<Self> {
        if scaler.n_features() != FEATURE_COUNT {
            return Err(PredecirError::ShapeMismatch {
                expected: FEATURE_COUNT,
                actual: scaler.n_features(),
            });
        }
        if ridge.n_features() != FEATURE_COUNT {
            return Err(PredecirError::ShapeMismatch {
                expected: FEATURE_COUNT,
                actual: ridge.n_features(),
            });
        }
        Ok(Self { scaler, ridge })
    }

    /// Loads both artifacts from durable storage.
    ///
    /// Invoked once at process start. A missing or corrupt artifact is
    /// an operational misconfiguration, not a transient fault: the
    /// error is fatal and there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`PredecirError::ArtifactLoad`] if either file is
    /// missing, corrupt, or fails the width audit.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(scaler_path: P, model_path: Q) -> Result<Self> {
        let scaler_path = scaler_path.as_ref();
        let model_path = model_path.as_ref();

        let scaler = StandardScaler::load(scaler_path)?;
        if scaler.n_features() != FEATURE_COUNT {
            return Err(artifact_error(
                scaler_path,
                &format!(
                    "fitted for {} features, serving contract has {FEATURE_COUNT}",
                    scaler.n_features()
                ),
            ));
        }

        let ridge = Ridge::load(model_path)?;
        if ridge.n_features() != FEATURE_COUNT {
            return Err(artifact_error(
                model_path,
                &format!(
                    "fitted for {} features, serving contract has {FEATURE_COUNT}",
                    ridge.n_features()
                ),
            ));
        }

        info!(
            "loaded model artifacts: scaler={}, model={}",
            scaler_path.display(),
            model_path.display()
        );

        Ok(Self { scaler, ridge })
    }

    /// Returns the fitted scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Returns the fitted estimator.
    #[must_use]
    pub fn ridge(&self) -> &Ridge {
        &self.ridge
    }
}

fn artifact_error(path: &Path, message: &str) -> PredecirError {
    PredecirError::ArtifactLoad {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_scaler() -> StandardScaler {
        StandardScaler::new(vec![0.0; FEATURE_COUNT], vec![1.0; FEATURE_COUNT]).expect("valid")
    }

    fn sum_ridge() -> Ridge {
        Ridge::new(Vector::from_vec(vec![1.0; FEATURE_COUNT]), 0.0, 1.0)
    }

    #[test]
    fn test_scaler_new_rejects_mismatched_params() {
        let result = StandardScaler::new(vec![0.0; 9], vec![1.0; 3]);
        assert!(matches!(
            result,
            Err(PredecirError::ShapeMismatch {
                expected: 9,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_scaler_transform_standardizes() {
        let scaler =
            StandardScaler::new(vec![10.0; FEATURE_COUNT], vec![2.0; FEATURE_COUNT]).expect("valid");
        let v = FeatureVector::from_slots([14.0; FEATURE_COUNT]);

        let scaled = scaler.transform(&v).expect("transform");
        for j in 0..FEATURE_COUNT {
            assert!((scaled[j] - 2.0).abs() < 1e-6); // (14 - 10) / 2
        }
    }

    #[test]
    fn test_scaler_zero_std_centers_without_scaling() {
        let mut std = vec![1.0; FEATURE_COUNT];
        std[3] = 0.0; // constant feature in training data
        let scaler = StandardScaler::new(vec![5.0; FEATURE_COUNT], std).expect("valid");

        let v = FeatureVector::from_slots([8.0; FEATURE_COUNT]);
        let scaled = scaler.transform(&v).expect("transform");

        assert!((scaled[3] - 3.0).abs() < 1e-6); // centered only
        assert!((scaled[0] - 3.0).abs() < 1e-6); // std 1.0 divides through
    }

    #[test]
    fn test_scaler_shape_mismatch() {
        let scaler = StandardScaler::new(vec![0.0; 4], vec![1.0; 4]).expect("valid");
        let v = FeatureVector::from_slots([1.0; FEATURE_COUNT]);

        let err = scaler.transform(&v).expect_err("width disagrees");
        assert!(matches!(
            err,
            PredecirError::ShapeMismatch {
                expected: 4,
                actual: 9
            }
        ));
    }

    #[test]
    fn test_ridge_predict_dot_plus_intercept() {
        let ridge = Ridge::new(
            Vector::from_vec(vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            10.0,
            1.0,
        );
        let v = FeatureVector::from_slots([1.0; FEATURE_COUNT]);

        let y = ridge.predict(&v).expect("predict");
        assert!((y - 16.0).abs() < 1e-6);
    }

    #[test]
    fn test_ridge_shape_mismatch() {
        let ridge = Ridge::new(Vector::from_vec(vec![1.0; 5]), 0.0, 1.0);
        let v = FeatureVector::from_slots([1.0; FEATURE_COUNT]);

        let err = ridge.predict(&v).expect_err("width disagrees");
        assert!(matches!(err, PredecirError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_ridge_predict_is_deterministic() {
        let ridge = Ridge::new(
            Vector::from_vec(vec![0.3, -1.2, 4.5, 0.0, 2.25, -0.5, 1.0, 0.125, 9.0]),
            -3.5,
            0.7,
        );
        let v = FeatureVector::from_slots([1.5, 2.0, -0.25, 4.0, 0.0, 3.0, -1.0, 2.5, 0.5]);

        let a = ridge.predict(&v).expect("predict");
        let b = ridge.predict(&v).expect("predict");
        assert_eq!(a.to_bits(), b.to_bits()); // bit-for-bit reproducible
    }

    #[test]
    fn test_artifacts_new_audits_width() {
        let narrow = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).expect("valid");
        let result = ModelArtifacts::new(narrow, sum_ridge());
        assert!(matches!(
            result,
            Err(PredecirError::ShapeMismatch {
                expected: 9,
                actual: 3
            })
        ));

        let narrow_ridge = Ridge::new(Vector::from_vec(vec![1.0; 3]), 0.0, 1.0);
        let result = ModelArtifacts::new(identity_scaler(), narrow_ridge);
        assert!(matches!(result, Err(PredecirError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_scaler_save_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("standard_scaler.json");

        let scaler =
            StandardScaler::new(vec![1.5; FEATURE_COUNT], vec![0.5; FEATURE_COUNT]).expect("valid");
        scaler.save(&path).expect("save");

        let loaded = StandardScaler::load(&path).expect("load");
        assert_eq!(loaded.mean(), scaler.mean());
        assert_eq!(loaded.std(), scaler.std());
    }

    #[test]
    fn test_ridge_save_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ridge.json");

        let ridge = Ridge::new(
            Vector::from_vec(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]),
            2.5,
            1.0,
        );
        ridge.save(&path).expect("save");

        let loaded = Ridge::load(&path).expect("load");
        assert_eq!(loaded.coefficients(), ridge.coefficients());
        assert_eq!(loaded.intercept(), ridge.intercept());
        assert_eq!(loaded.alpha(), ridge.alpha());
    }

    #[test]
    fn test_load_missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Ridge::load(dir.path().join("nope.json"));

        let err = result.expect_err("missing file");
        assert!(matches!(err, PredecirError::ArtifactLoad { .. }));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_load_corrupt_artifact_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ridge.json");
        std::fs::write(&path, b"{ not json").expect("write");

        let err = Ridge::load(&path).expect_err("corrupt file");
        assert!(matches!(err, PredecirError::ArtifactLoad { .. }));
    }

    #[test]
    fn test_artifacts_load_rejects_width_drift() {
        let dir = tempfile::tempdir().expect("tempdir");
        let scaler_path = dir.path().join("standard_scaler.json");
        let model_path = dir.path().join("ridge.json");

        // Scaler fitted against a 4-wide schema; serving contract is 9.
        StandardScaler::new(vec![0.0; 4], vec![1.0; 4])
            .expect("valid")
            .save(&scaler_path)
            .expect("save");
        sum_ridge().save(&model_path).expect("save");

        let err = ModelArtifacts::load(&scaler_path, &model_path).expect_err("drift");
        match err {
            PredecirError::ArtifactLoad { message, .. } => {
                assert!(message.contains("fitted for 4 features"));
            }
            other => panic!("expected ArtifactLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_artifacts_load_happy_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let scaler_path = dir.path().join("standard_scaler.json");
        let model_path = dir.path().join("ridge.json");

        identity_scaler().save(&scaler_path).expect("save");
        sum_ridge().save(&model_path).expect("save");

        let artifacts = ModelArtifacts::load(&scaler_path, &model_path).expect("load");
        assert_eq!(artifacts.scaler().n_features(), FEATURE_COUNT);
        assert_eq!(artifacts.ridge().n_features(), FEATURE_COUNT);
    }
}
