use std::time::Duration;

use rayon::prelude::*;

use crate::effects::blend::blend_into_ratio;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FadeError, FadeResult};
use crate::frames::fingerprint::fingerprint_sources;
use crate::frames::frame_set::{Frame, FrameSet, progress_at};
use crate::raster::image::Image;

/// Threading controls for frame synthesis.
///
/// Per-frame blends are independent, so the parallel path only changes wall time, never output.
#[derive(Clone, Debug, Default)]
pub struct BuildThreading {
    /// Blend frames on a dedicated rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count, used in parallel mode. `Some(0)` is always rejected.
    pub threads: Option<usize>,
}

/// Options for [`FrameSetBuilder`].
#[derive(Clone, Debug)]
pub struct FrameSetOpts {
    /// Number of frames to synthesize, at least 1.
    pub frame_count: u32,
    /// On-screen time of each frame during playback.
    pub per_frame_duration: Duration,
    /// Present frames from B back to A. Storage order is unaffected.
    pub reverse: bool,
    /// Threading controls.
    pub threading: BuildThreading,
}

impl Default for FrameSetOpts {
    fn default() -> Self {
        Self {
            frame_count: 25,
            per_frame_duration: Duration::from_millis(100),
            reverse: false,
            threading: BuildThreading::default(),
        }
    }
}

/// Counters reported by [`FrameSetBuilder::build_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Frames materialized.
    pub frames_built: u64,
    /// Pixels produced across all frames.
    pub pixels_blended: u64,
}

/// Synthesizes [`FrameSet`]s from pairs of source images.
///
/// Building is synchronous and costs `O(frame_count * width * height)`. Hosts should build when a
/// pair is selected (or eagerly for every pair, see [`FrameSetBuilder::build_all`]), never per
/// tick.
#[derive(Clone, Debug, Default)]
pub struct FrameSetBuilder {
    opts: FrameSetOpts,
}

impl FrameSetBuilder {
    /// Builder with explicit options.
    pub fn new(opts: FrameSetOpts) -> Self {
        Self { opts }
    }

    /// Options used by this builder.
    pub fn opts(&self) -> &FrameSetOpts {
        &self.opts
    }

    /// One-shot build with sequential synthesis.
    ///
    /// Fails with [`FadeError::DimensionMismatch`] when `a` and `b` differ in size and with
    /// [`FadeError::InvalidParameter`] when `frame_count < 1`.
    ///
    /// Channel `c` of frame `i` is `round((a.c * (n - 1 - i) + b.c * i) / (n - 1))`, evaluated
    /// exactly.
    pub fn build(
        a: &Image,
        b: &Image,
        frame_count: u32,
        per_frame_duration: Duration,
        reverse: bool,
    ) -> FadeResult<FrameSet> {
        Self::new(FrameSetOpts {
            frame_count,
            per_frame_duration,
            reverse,
            threading: BuildThreading::default(),
        })
        .build_pair(a, b)
    }

    /// Build one frame set using this builder's options.
    pub fn build_pair(&self, a: &Image, b: &Image) -> FadeResult<FrameSet> {
        self.build_with_stats(a, b).map(|(set, _)| set)
    }

    /// Build one frame set and report synthesis counters.
    ///
    /// Every parameter is validated before frame storage is allocated, so a failed build leaves
    /// nothing behind.
    #[tracing::instrument(
        skip(self, a, b),
        fields(frame_count = self.opts.frame_count, size = %a.size(), parallel = self.opts.threading.parallel)
    )]
    pub fn build_with_stats(&self, a: &Image, b: &Image) -> FadeResult<(FrameSet, BuildStats)> {
        let frame_count = self.opts.frame_count;
        validate_sources(a, b, &self.opts)?;

        let frames = if self.opts.threading.parallel {
            let pool = build_thread_pool(self.opts.threading.threads)?;
            pool.install(|| {
                (0..frame_count)
                    .into_par_iter()
                    .map(|i| blend_frame(a, b, i, frame_count))
                    .collect::<FadeResult<Vec<_>>>()
            })?
        } else {
            (0..frame_count)
                .map(|i| blend_frame(a, b, i, frame_count))
                .collect::<FadeResult<Vec<_>>>()?
        };

        let stats = BuildStats {
            frames_built: frames.len() as u64,
            pixels_blended: (frames.len() as u64).saturating_mul(a.size().pixel_count() as u64),
        };
        let key = fingerprint_sources(a, b, frame_count, self.opts.per_frame_duration);
        tracing::debug!(
            frames = stats.frames_built,
            pixels = stats.pixels_blended,
            "frame set built"
        );
        Ok((
            FrameSet::new(key, frames, self.opts.per_frame_duration, self.opts.reverse),
            stats,
        ))
    }

    /// Build one frame set per source pair, in order.
    ///
    /// All pairs are validated before any frame is synthesized; the first invalid pair fails the
    /// whole call.
    #[tracing::instrument(skip(self, pairs), fields(pairs = pairs.len()))]
    pub fn build_all(&self, pairs: &[(&Image, &Image)]) -> FadeResult<Vec<FrameSet>> {
        for (a, b) in pairs {
            validate_sources(a, b, &self.opts)?;
        }
        pairs.iter().map(|(a, b)| self.build_pair(a, b)).collect()
    }
}

fn validate_sources(a: &Image, b: &Image, opts: &FrameSetOpts) -> FadeResult<()> {
    let frame_count = opts.frame_count;
    if frame_count < 1 {
        return Err(FadeError::invalid_parameter(format!(
            "frame_count must be >= 1, got {frame_count}"
        )));
    }
    if opts.threading.threads == Some(0) {
        return Err(FadeError::invalid_parameter(
            "build threading 'threads' must be >= 1 when set",
        ));
    }
    if a.size() != b.size() {
        return Err(FadeError::dimension_mismatch(a.size(), b.size()));
    }
    let frame_bytes = a.as_bytes().len();
    if frame_bytes.checked_mul(frame_count as usize).is_none() {
        return Err(FadeError::invalid_parameter(format!(
            "{frame_count} frames of {} overflow addressable memory",
            a.size()
        )));
    }
    Ok(())
}

fn blend_frame(a: &Image, b: &Image, index: u32, frame_count: u32) -> FadeResult<Frame> {
    let mut buf = vec![0u8; a.as_bytes().len()];
    blend_into_ratio(
        &mut buf,
        a.as_bytes(),
        b.as_bytes(),
        index,
        frame_count.saturating_sub(1),
    )?;
    Ok(Frame::new(
        FrameIndex(index),
        progress_at(index, frame_count),
        Image::from_parts_unchecked(a.size(), buf),
    ))
}

fn build_thread_pool(threads: Option<usize>) -> FadeResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        FadeError::Other(anyhow::Error::new(e).context("failed to build rayon thread pool"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/frames/builder.rs"]
mod tests;
