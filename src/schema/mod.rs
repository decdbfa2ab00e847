//! The fixed, ordered feature contract the model artifacts were trained
//! against.
//!
//! The scaler and estimator are positional transforms: they know nothing
//! about feature names, only column order. Any component that builds a
//! [`FeatureVector`] must iterate [`FEATURE_NAMES`] in order, never an
//! externally supplied key ordering — reordering silently produces a
//! wrong-but-not-erroring prediction.

/// Number of features in the contract.
pub const FEATURE_COUNT: usize = 9;

/// Exact feature order from training.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Temperature",
    "RH",
    "Ws",
    "Rain",
    "FFMC",
    "DMC",
    "ISI",
    "Classes",
    "region",
];

/// One row of model input, slot order fixed by [`FEATURE_NAMES`].
///
/// Constructed either by the validator (the checked path) or directly
/// from an array already laid out in contract order. There is no
/// constructor that accepts a name-keyed mapping; that conversion lives
/// in [`crate::validate`] so the ordering invariant has a single owner.
///
/// # Examples
///
/// ```
/// use predecir::schema::{FeatureVector, FEATURE_COUNT};
///
/// let v = FeatureVector::from_slots([1.0; FEATURE_COUNT]);
/// assert_eq!(v.len(), FEATURE_COUNT);
/// assert_eq!(v.get("Temperature"), Some(1.0));
/// assert_eq!(v.get("Humidity"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    slots: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Creates a vector from slots already in contract order.
    #[must_use]
    pub fn from_slots(slots: [f32; FEATURE_COUNT]) -> Self {
        Self { slots }
    }

    /// Returns the slots in contract order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.slots
    }

    /// Number of slots. Always [`FEATURE_COUNT`]; provided so shape
    /// checks read symmetrically against artifact widths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; present for slice-like API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Looks up a value by contract name.
    ///
    /// Returns `None` for names outside the contract. Intended for
    /// display and debugging; the pipeline itself is positional.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f32> {
        FEATURE_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| self.slots[i])
    }

    /// Returns `(name, value)` pairs in contract order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, f32)> {
        FEATURE_NAMES
            .iter()
            .zip(self.slots.iter())
            .map(|(&name, &value)| (name, value))
            .collect()
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_width() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_contract_order_is_training_order() {
        // The exact column order the artifacts were fitted with.
        assert_eq!(
            FEATURE_NAMES,
            ["Temperature", "RH", "Ws", "Rain", "FFMC", "DMC", "ISI", "Classes", "region"]
        );
    }

    #[test]
    fn test_contract_names_unique() {
        for (i, a) in FEATURE_NAMES.iter().enumerate() {
            for b in FEATURE_NAMES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_from_slots_preserves_order() {
        let v = FeatureVector::from_slots([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[8], 9.0);
    }

    #[test]
    fn test_get_by_name() {
        let v = FeatureVector::from_slots([10.0, 50.0, 5.0, 0.0, 80.0, 10.0, 5.0, 1.0, 0.0]);
        assert_eq!(v.get("Temperature"), Some(10.0));
        assert_eq!(v.get("FFMC"), Some(80.0));
        assert_eq!(v.get("region"), Some(0.0));
        assert_eq!(v.get("temperature"), None); // case-sensitive contract
    }

    #[test]
    fn test_to_pairs_round_trip() {
        let v = FeatureVector::from_slots([10.0, 50.0, 5.0, 0.0, 80.0, 10.0, 5.0, 1.0, 0.0]);
        let pairs = v.to_pairs();
        assert_eq!(pairs.len(), FEATURE_COUNT);
        assert_eq!(pairs[0], ("Temperature", 10.0));
        assert_eq!(pairs[8], ("region", 0.0));
    }

    #[test]
    fn test_len_and_is_empty() {
        let v = FeatureVector::from_slots([0.0; FEATURE_COUNT]);
        assert_eq!(v.len(), FEATURE_COUNT);
        assert!(!v.is_empty());
    }
}
