use std::time::Duration;

use crate::foundation::core::{FrameIndex, Size};
use crate::frames::fingerprint::FrameSetKey;
use crate::raster::image::Image;

/// One blended image at a fixed interpolation progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    index: FrameIndex,
    progress: f32,
    image: Image,
}

impl Frame {
    pub(crate) fn new(index: FrameIndex, progress: f32, image: Image) -> Self {
        Self {
            index,
            progress,
            image,
        }
    }

    /// Storage index inside the owning [`FrameSet`].
    pub fn index(&self) -> FrameIndex {
        self.index
    }

    /// Interpolation progress in `[0, 1]`; 0 is pure source A, 1 is pure source B.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Blended pixels.
    pub fn image(&self) -> &Image {
        &self.image
    }
}

/// Progress of storage index `index` in a set of `frame_count` frames.
///
/// A single-frame set is degenerate and always yields 0.
pub fn progress_at(index: u32, frame_count: u32) -> f32 {
    if frame_count <= 1 {
        return 0.0;
    }
    let t = f64::from(index) / f64::from(frame_count - 1);
    t.clamp(0.0, 1.0) as f32
}

/// Ordered, immutable sequence of blended frames for one transition.
///
/// Storage order always runs from source A (index 0) to source B (last index). The `reversed`
/// flag only changes presentation order; see [`FrameSet::storage_index`].
#[derive(Debug)]
pub struct FrameSet {
    key: FrameSetKey,
    frames: Vec<Frame>,
    per_frame_duration: Duration,
    reversed: bool,
}

impl FrameSet {
    pub(crate) fn new(
        key: FrameSetKey,
        frames: Vec<Frame>,
        per_frame_duration: Duration,
        reversed: bool,
    ) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            key,
            frames,
            per_frame_duration,
            reversed,
        }
    }

    /// Identity of the build tuple this set was synthesized from.
    pub fn key(&self) -> FrameSetKey {
        self.key
    }

    /// Number of frames (always at least 1).
    pub fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }

    /// How long each frame stays on screen during playback.
    pub fn per_frame_duration(&self) -> Duration {
        self.per_frame_duration
    }

    /// Time needed to step from the first presented frame to the last one.
    pub fn transition_duration(&self) -> Duration {
        self.per_frame_duration
            .saturating_mul(self.frame_count().saturating_sub(1))
    }

    /// Whether presentation runs from the last stored frame back to the first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Dimensions shared by every frame.
    pub fn size(&self) -> Size {
        self.frames[0].image().size()
    }

    /// Frames in storage order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame at a storage index.
    pub fn frame(&self, index: FrameIndex) -> Option<&Frame> {
        self.frames.get(index.as_usize())
    }

    /// Storage index shown at presentation `position` (clamped to the last position).
    pub fn storage_index(&self, position: u32) -> FrameIndex {
        let last = self.frame_count() - 1;
        let position = position.min(last);
        if self.reversed {
            FrameIndex(last - position)
        } else {
            FrameIndex(position)
        }
    }

    /// Frame shown at presentation `position`.
    pub fn presented(&self, position: u32) -> &Frame {
        &self.frames[self.storage_index(position).as_usize()]
    }

    /// Iterate frames in presentation order.
    pub fn presentation_order(&self) -> impl Iterator<Item = &Frame> + '_ {
        (0..self.frame_count()).map(|p| self.presented(p))
    }

    /// Same frame storage, presented in the opposite direction.
    pub fn into_reversed(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/frame_set.rs"]
mod tests;
