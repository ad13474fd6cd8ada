use std::time::Instant;

use crate::frames::frame_set::{Frame, FrameSet};
use crate::playback::scheduler::{PlaybackOpts, PlaybackScheduler};
use crate::playback::state::{AvState, NavState};
use crate::render::cache::{RenderCache, RenderCacheStats};
use crate::render::drawing::{CompiledDrawing, Viewport};

/// Per-pair playback session driven by a host redraw loop.
///
/// Holds the active [`FrameSet`] (through its scheduler), the render cache and the host's
/// forward/back pane state. Call [`TransitionSession::render`] once per tick.
#[derive(Debug)]
pub struct TransitionSession {
    scheduler: PlaybackScheduler,
    cache: RenderCache,
    nav: NavState,
}

impl TransitionSession {
    /// Paused session on the still-image pane.
    pub fn new(frames: FrameSet, opts: PlaybackOpts) -> Self {
        Self {
            scheduler: PlaybackScheduler::with_opts(frames, opts),
            cache: RenderCache::new(),
            nav: NavState::Forward,
        }
    }

    /// Underlying scheduler.
    pub fn scheduler(&self) -> &PlaybackScheduler {
        &self.scheduler
    }

    /// Current play/pause state.
    pub fn av_state(&self) -> AvState {
        self.scheduler.av_state()
    }

    /// Current pane.
    pub fn nav(&self) -> NavState {
        self.nav
    }

    /// Render cache counters.
    pub fn cache_stats(&self) -> RenderCacheStats {
        self.cache.stats()
    }

    /// Flip between paused and playing.
    pub fn toggle_play(&mut self, now: Instant) {
        self.scheduler.toggle_play(now);
    }

    /// Flip between the still pane and the transition pane.
    pub fn toggle_nav(&mut self, now: Instant) {
        self.set_nav(self.nav.toggled(), now);
    }

    /// Switch panes. Entering [`NavState::Back`] starts playback if it is paused.
    pub fn set_nav(&mut self, nav: NavState, now: Instant) {
        if nav == self.nav {
            return;
        }
        self.nav = nav;
        tracing::debug!(?nav, "pane switched");
        if nav == NavState::Back {
            self.scheduler.play(now);
        }
    }

    /// Frame to display at `now`.
    pub fn current_frame(&mut self, now: Instant) -> &Frame {
        self.scheduler.current_frame(now)
    }

    /// Per-tick render hook.
    ///
    /// Repeated calls within one tick, and every call while paused, replay the cached drawing.
    pub fn render(&mut self, now: Instant, viewport: Viewport) -> &CompiledDrawing {
        let key = self.scheduler.frame_set().key();
        let frame = self.scheduler.current_frame(now);
        self.cache.render(key, frame, viewport)
    }

    /// Swap in the frame set of a newly selected pair and return the previous one.
    ///
    /// Playback restarts paused on the first presented frame; pane and options are kept.
    pub fn replace_frame_set(&mut self, frames: FrameSet) -> FrameSet {
        let opts = self.scheduler.opts();
        let old = std::mem::replace(
            &mut self.scheduler,
            PlaybackScheduler::with_opts(frames, opts),
        );
        self.cache.invalidate();
        tracing::debug!("frame set replaced");
        old.into_frame_set()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/transition_session.rs"]
mod tests;
