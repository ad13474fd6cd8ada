//! Pixel-level effects applied while synthesizing transition frames.

/// Straight-alpha linear crossfade.
pub mod blend;
