//! Frame-set synthesis.

/// Builds frame sets from two source images.
pub mod builder;
/// Content keys for build tuples.
pub mod fingerprint;
/// Immutable, ordered frame sequences.
pub mod frame_set;
