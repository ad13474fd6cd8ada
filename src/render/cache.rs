use crate::frames::fingerprint::FrameSetKey;
use crate::frames::frame_set::Frame;
use crate::render::drawing::{CompiledDrawing, DrawingKey, Viewport, compile_frame};

/// Reuse counters for [`RenderCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderCacheStats {
    /// Calls answered from the cached drawing.
    pub hits: u64,
    /// Calls that compiled a new drawing.
    pub misses: u64,
}

/// Memoizes the compiled drawing of the most recently rendered frame.
///
/// While playback is paused, or several render calls land in one tick, the same drawing is
/// replayed instead of recompiled. Any change of frame set, frame index or viewport recompiles.
/// Output is always equal to [`compile_frame`]; only the cost differs.
#[derive(Debug, Default)]
pub struct RenderCache {
    last: Option<CompiledDrawing>,
    stats: RenderCacheStats,
}

impl RenderCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled drawing for `frame`, reusing the cached one when the key is unchanged.
    pub fn render(
        &mut self,
        frame_set: FrameSetKey,
        frame: &Frame,
        viewport: Viewport,
    ) -> &CompiledDrawing {
        let key = DrawingKey {
            frame_set,
            index: frame.index(),
            viewport,
        };
        if self.last.as_ref().is_some_and(|d| *d.key() == key) {
            self.stats.hits = self.stats.hits.saturating_add(1);
            tracing::trace!(index = frame.index().0, "render cache hit");
        } else {
            self.last = None;
            self.stats.misses = self.stats.misses.saturating_add(1);
            tracing::trace!(index = frame.index().0, "render cache miss");
        }
        self.last
            .get_or_insert_with(|| compile_frame(frame_set, frame, viewport))
    }

    /// The cached drawing, if any.
    pub fn cached(&self) -> Option<&CompiledDrawing> {
        self.last.as_ref()
    }

    /// Drop the cached drawing.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Hit/miss counters since construction.
    pub fn stats(&self) -> RenderCacheStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
