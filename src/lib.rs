//! Predecir: serving core for a pretrained regression pipeline.
//!
//! Predecir wraps two immutable, pre-fitted artifacts — a standardizing
//! feature scaler and a ridge regression estimator — behind a single
//! deterministic inference call, and remembers the most recently
//! validated raw input so a caller can pre-populate its next request.
//!
//! The crate enforces an exact, order-sensitive feature contract: the
//! underlying transforms are positional, not name-aware, so every input
//! is converted at the boundary into a [`FeatureVector`] whose slot
//! order is fixed by [`schema::FEATURE_NAMES`]. Page rendering, route
//! wiring, and form layout are the caller's concern; this crate only
//! accepts a mapping of field name to raw text and returns either a
//! prediction or a typed error.
//!
//! # Quick Start
//!
//! ```
//! use predecir::prelude::*;
//! use std::collections::BTreeMap;
//!
//! // Stub artifacts: identity scaler, estimator = sum of inputs.
//! let scaler = StandardScaler::new(vec![0.0; 9], vec![1.0; 9]).unwrap();
//! let ridge = Ridge::new(Vector::from_vec(vec![1.0; 9]), 0.0, 1.0);
//! let artifacts = ModelArtifacts::new(scaler, ridge).unwrap();
//! let pipeline = Pipeline::new(artifacts);
//!
//! let mut raw = BTreeMap::new();
//! for name in feature_names() {
//!     raw.insert((*name).to_string(), "1.0".to_string());
//! }
//!
//! let features = parse_features(&raw).unwrap();
//! let prediction = pipeline.predict(&features).unwrap();
//! assert!((prediction - 9.0).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`schema`]: The fixed, ordered feature contract and [`FeatureVector`]
//! - [`validate`]: Raw text mapping to contract-ordered numeric vector
//! - [`artifacts`]: Fitted scaler/estimator artifacts and their storage
//! - [`pipeline`]: Two-stage scale-then-predict inference composition
//! - [`cache`]: Single-slot persisted record of the last valid raw input
//! - [`service`]: The boundary consumed by the presentation layer
//! - [`primitives`]: Minimal numeric vector underlying the estimator
//! - [`error`]: Typed error taxonomy shared by every fallible operation

pub mod artifacts;
pub mod cache;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod schema;
pub mod service;
pub mod validate;

pub use crate::error::{PredecirError, Result};
pub use crate::schema::FeatureVector;
