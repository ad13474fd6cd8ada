//! Renderer-facing compilation of frames and the last-drawing cache.

/// Memoizes the most recent compiled drawing.
pub mod cache;
/// Compiled draw representation of a frame.
pub mod drawing;
