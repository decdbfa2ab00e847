//! Core compute primitives.
//!
//! A single dense [`Vector`] is all the serving pipeline needs: the
//! estimator is one dot product wide.

mod vector;

pub use vector::Vector;
