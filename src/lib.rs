//! fadeframe is a crossfade transition engine for interactive image viewers.
//!
//! It turns two equally-sized raster images into an ordered set of blended frames once, then
//! maps host time onto the visible frame on every redraw tick.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `Image + Image -> FrameSet` via [`FrameSetBuilder`] (straight-alpha linear
//!    crossfade, optionally on a rayon pool)
//! 2. **Schedule**: `FrameSet + Instant -> &Frame` via [`PlaybackScheduler`]
//! 3. **Compile**: `Frame + Viewport -> CompiledDrawing` via [`RenderCache`] (premultiplied
//!    surface plus placement ops, reused while the visible frame is unchanged)
//!
//! [`TransitionSession`] bundles steps 2 and 3 for a host redraw loop.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No clocks, no IO**: time is always supplied by the host; nothing touches the filesystem.
//! - **Deterministic**: a build tuple always yields byte-identical frames, whatever the threading.
//! - **Total playback**: only construction fails; scheduling and rendering never return errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod effects;
mod foundation;
mod frames;
mod playback;
mod raster;
mod render;
mod session;

pub use config::TransitionConfig;
pub use effects::blend::{
    Rgba8, blend, blend_channel, blend_channel_ratio, blend_into, blend_into_ratio, blend_px,
};
pub use foundation::core::{Affine, FrameIndex, Point, Rect, Rgba8Premul, Size, Vec2};
pub use foundation::error::{FadeError, FadeResult};
pub use frames::builder::{BuildStats, BuildThreading, FrameSetBuilder, FrameSetOpts};
pub use frames::fingerprint::FrameSetKey;
pub use frames::frame_set::{Frame, FrameSet, progress_at};
pub use playback::scheduler::{PlaybackOpts, PlaybackScheduler};
pub use playback::state::{AvState, LoopMode, NavState};
pub use raster::image::Image;
pub use render::cache::{RenderCache, RenderCacheStats};
pub use render::drawing::{CompiledDrawing, DrawOp, DrawingKey, Surface, Viewport, compile_frame};
pub use session::transition_session::TransitionSession;
