//! Converts an untyped name-to-text mapping into a contract-ordered
//! [`FeatureVector`].
//!
//! This is the only place a raw mapping is allowed to cross into the
//! pipeline. Validation is pure: it never touches the last-input cache,
//! so a failed request cannot corrupt the cached slot.

use std::collections::BTreeMap;

use crate::error::{PredecirError, Result};
use crate::schema::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// Parses raw form text into a [`FeatureVector`].
///
/// Iterates the feature contract in order, never the mapping's own key
/// order. Extra keys in `raw` are ignored. Leading/trailing whitespace
/// is tolerated; the decimal separator is a dot. `NaN` and infinities
/// parse but are rejected as non-finite.
///
/// # Errors
///
/// - [`PredecirError::MissingField`] when a contract name is absent.
/// - [`PredecirError::InvalidNumber`] when a value is present but does
///   not parse as a finite number. An empty string is an invalid
///   number, not a missing field, so the two failure kinds stay
///   distinguishable for the caller.
///
/// # Examples
///
/// ```
/// use predecir::prelude::*;
/// use std::collections::BTreeMap;
///
/// let mut raw = BTreeMap::new();
/// for name in feature_names() {
///     raw.insert((*name).to_string(), "1.5".to_string());
/// }
///
/// let features = parse_features(&raw).unwrap();
/// assert_eq!(features.get("DMC"), Some(1.5));
/// ```
pub fn parse_features(raw: &BTreeMap<String, String>) -> Result<FeatureVector> {
    let mut slots = [0.0_f32; FEATURE_COUNT];

    for (slot, name) in slots.iter_mut().zip(FEATURE_NAMES.iter()) {
        let text = raw.get(*name).ok_or_else(|| PredecirError::MissingField {
            field: (*name).to_string(),
        })?;

        let value = text
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PredecirError::InvalidNumber {
                field: (*name).to_string(),
                value: text.clone(),
            })?;

        *slot = value;
    }

    Ok(FeatureVector::from_slots(slots))
}
