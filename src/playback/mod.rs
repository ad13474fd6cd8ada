//! Tick-driven playback over a built frame set.

/// Maps host time onto frame indices.
pub mod scheduler;
/// Play/pause, forward/back and loop policy enums.
pub mod state;
