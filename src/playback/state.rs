/// Play/pause state of a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AvState {
    /// The visible frame is frozen.
    #[default]
    Paused,
    /// The visible frame follows host time.
    Playing,
}

impl AvState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Playing,
            Self::Playing => Self::Paused,
        }
    }

    /// `true` for [`AvState::Playing`].
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// Which pane the host presents: the still source (`Forward`) or the transition (`Back`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavState {
    /// The still source image.
    #[default]
    Forward,
    /// The animated transition.
    Back,
}

impl NavState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Back,
            Self::Back => Self::Forward,
        }
    }
}

/// What playback does after the last presented frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Hold on the last presented frame (one-shot transition).
    #[default]
    Hold,
    /// Wrap back to the first presented frame.
    Repeat,
    /// Bounce between the first and last presented frames.
    PingPong,
}

impl LoopMode {
    /// Map an unbounded presentation step onto `0..frame_count`.
    pub fn map_position(self, step: u64, frame_count: u32) -> u32 {
        let count = u64::from(frame_count.max(1));
        let last = count - 1;
        let pos = match self {
            Self::Hold => step.min(last),
            Self::Repeat => step % count,
            Self::PingPong => {
                if last == 0 {
                    0
                } else {
                    let cycle = 2 * last;
                    let p = step % cycle;
                    if p <= last { p } else { cycle - p }
                }
            }
        };
        pos as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/state.rs"]
mod tests;
