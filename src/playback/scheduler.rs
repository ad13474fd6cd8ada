use std::time::Instant;

use crate::foundation::core::FrameIndex;
use crate::frames::frame_set::{Frame, FrameSet};
use crate::playback::state::{AvState, LoopMode};

/// Options for [`PlaybackScheduler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackOpts {
    /// End-of-sequence policy. Defaults to [`LoopMode::Hold`].
    pub loop_mode: LoopMode,
}

/// Maps host-supplied timestamps onto the visible frame of one [`FrameSet`].
///
/// The scheduler never reads a clock and never fails: every intent is a toggle, and redundant
/// intents are absorbed. Positions are counted in presentation order; for a reversed set,
/// position 0 is the last stored frame.
#[derive(Debug)]
pub struct PlaybackScheduler {
    frames: FrameSet,
    opts: PlaybackOpts,
    av: AvState,
    start_time: Option<Instant>,
    start_step: u64,
    step: u64,
    position: u32,
}

impl PlaybackScheduler {
    /// Paused scheduler showing the first presented frame, holding at the end.
    pub fn new(frames: FrameSet) -> Self {
        Self::with_opts(frames, PlaybackOpts::default())
    }

    /// Paused scheduler showing the first presented frame.
    pub fn with_opts(frames: FrameSet, opts: PlaybackOpts) -> Self {
        Self {
            frames,
            opts,
            av: AvState::Paused,
            start_time: None,
            start_step: 0,
            step: 0,
            position: 0,
        }
    }

    /// The frame set being played.
    pub fn frame_set(&self) -> &FrameSet {
        &self.frames
    }

    /// Give the frame set back, discarding playback state.
    pub fn into_frame_set(self) -> FrameSet {
        self.frames
    }

    /// Options in effect.
    pub fn opts(&self) -> PlaybackOpts {
        self.opts
    }

    /// Current play/pause state.
    pub fn av_state(&self) -> AvState {
        self.av
    }

    /// Presentation position of the last rendered frame.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Storage index of the last rendered frame.
    pub fn last_rendered_index(&self) -> FrameIndex {
        self.frames.storage_index(self.position)
    }

    /// The last rendered frame, without consulting time.
    pub fn last_rendered(&self) -> &Frame {
        self.frames.presented(self.position)
    }

    /// Flip between paused and playing.
    ///
    /// Resuming records `now` as the new start time and continues from the last rendered
    /// position. Pausing freezes the last computed position and ignores `now`.
    pub fn toggle_play(&mut self, now: Instant) {
        match self.av {
            AvState::Paused => self.play(now),
            AvState::Playing => self.pause(),
        }
    }

    /// Start playing from the last rendered position. No-op when already playing.
    pub fn play(&mut self, now: Instant) {
        if self.av.is_playing() {
            return;
        }
        self.av = AvState::Playing;
        self.start_time = Some(now);
        self.start_step = self.step;
        tracing::debug!(position = self.position, "playback started");
    }

    /// Freeze on the last rendered frame. No-op when already paused.
    pub fn pause(&mut self) {
        if !self.av.is_playing() {
            return;
        }
        self.av = AvState::Paused;
        self.start_time = None;
        tracing::debug!(position = self.position, "playback paused");
    }

    /// Rewind to the first presented frame. A playing scheduler keeps playing from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.step = 0;
        self.start_step = 0;
        self.position = 0;
        if self.av.is_playing() {
            self.start_time = Some(now);
        }
        tracing::debug!("playback restarted");
    }

    /// Whether a one-shot transition has reached its final presented frame.
    ///
    /// Always `false` for looping modes.
    pub fn is_finished(&self) -> bool {
        self.opts.loop_mode == LoopMode::Hold
            && self.position + 1 >= self.frames.frame_count()
    }

    /// Presentation position that would be visible at `now`, without changing any state.
    pub fn position_at(&self, now: Instant) -> u32 {
        self.step_at(now)
            .map(|step| self.opts.loop_mode.map_position(step, self.frames.frame_count()))
            .unwrap_or(self.position)
    }

    /// Frame to display at `now`.
    ///
    /// While paused this returns the last rendered frame and does not read `now`. While playing
    /// the position advances by one for every elapsed `per_frame_duration` since the last resume.
    pub fn current_frame(&mut self, now: Instant) -> &Frame {
        if let Some(step) = self.step_at(now) {
            let count = self.frames.frame_count();
            self.step = match self.opts.loop_mode {
                LoopMode::Hold => step.min(u64::from(count - 1)),
                LoopMode::Repeat | LoopMode::PingPong => step,
            };
            self.position = self.opts.loop_mode.map_position(self.step, count);
        }
        self.frames.presented(self.position)
    }

    fn step_at(&self, now: Instant) -> Option<u64> {
        if !self.av.is_playing() {
            return None;
        }
        let start = self.start_time?;
        let count = self.frames.frame_count();
        if count <= 1 {
            return None;
        }

        let per_frame = self.frames.per_frame_duration();
        let advanced = if per_frame.is_zero() {
            match self.opts.loop_mode {
                LoopMode::Hold => u64::from(count - 1),
                LoopMode::Repeat | LoopMode::PingPong => 0,
            }
        } else {
            let elapsed = now.saturating_duration_since(start);
            u64::try_from(elapsed.as_nanos() / per_frame.as_nanos()).unwrap_or(u64::MAX)
        };
        Some(self.start_step.saturating_add(advanced))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
