//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use predecir::prelude::*;
//! ```

pub use crate::artifacts::{ModelArtifacts, Ridge, StandardScaler};
pub use crate::cache::LastInputCache;
pub use crate::error::{PredecirError, Result};
pub use crate::pipeline::Pipeline;
pub use crate::primitives::Vector;
pub use crate::schema::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use crate::service::{feature_names, format_prediction, PredictionService, ServiceConfig};
pub use crate::validate::parse_features;
