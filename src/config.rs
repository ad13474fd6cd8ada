use std::time::Duration;

use crate::foundation::error::{FadeError, FadeResult};
use crate::frames::builder::{BuildThreading, FrameSetOpts};
use crate::playback::scheduler::PlaybackOpts;
use crate::playback::state::LoopMode;

/// Serializable transition settings.
///
/// Every field is optional in JSON; missing fields take the defaults of a 25-frame, 100 ms per
/// frame one-shot crossfade.
///
/// ```json
/// { "frame_count": 25, "per_frame_ms": 100, "reverse": false, "loop_mode": "hold" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Frames to synthesize per transition.
    pub frame_count: u32,
    /// On-screen time of each frame, in milliseconds.
    pub per_frame_ms: u64,
    /// Present frames from the second image back to the first.
    pub reverse: bool,
    /// End-of-sequence policy.
    pub loop_mode: LoopMode,
    /// Synthesize frames in parallel.
    pub parallel: bool,
    /// Worker thread count for parallel synthesis.
    pub threads: Option<usize>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            frame_count: 25,
            per_frame_ms: 100,
            reverse: false,
            loop_mode: LoopMode::Hold,
            parallel: false,
            threads: None,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> FadeResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| FadeError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> FadeResult<()> {
        if self.frame_count < 1 {
            return Err(FadeError::config("frame_count must be >= 1"));
        }
        if self.threads == Some(0) {
            return Err(FadeError::config("threads must be >= 1 when set"));
        }
        Ok(())
    }

    /// Builder options described by this config, after [`TransitionConfig::validate`].
    pub fn frame_set_opts(&self) -> FadeResult<FrameSetOpts> {
        self.validate()?;
        Ok(FrameSetOpts {
            frame_count: self.frame_count,
            per_frame_duration: Duration::from_millis(self.per_frame_ms),
            reverse: self.reverse,
            threading: BuildThreading {
                parallel: self.parallel,
                threads: self.threads,
            },
        })
    }

    /// Scheduler options described by this config, after [`TransitionConfig::validate`].
    pub fn playback_opts(&self) -> FadeResult<PlaybackOpts> {
        self.validate()?;
        Ok(PlaybackOpts {
            loop_mode: self.loop_mode,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
