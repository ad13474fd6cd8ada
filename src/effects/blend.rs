use crate::foundation::error::{FadeError, FadeResult};
use crate::foundation::math::clamp_unit;
use crate::raster::image::Image;

/// Straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Interpolate one channel: `round(a * (1 - t) + b * t)`.
///
/// Evaluated as `a + (b - a) * t` so the result is monotone in `t` and exact at both ends.
pub fn blend_channel(a: u8, b: u8, t: f32) -> u8 {
    let t = clamp_unit(t);
    let a = f32::from(a);
    let v = a + (f32::from(b) - a) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Interpolate all four channels independently (alpha is not premultiplied).
pub fn blend_px(a: Rgba8, b: Rgba8, t: f32) -> Rgba8 {
    [
        blend_channel(a[0], b[0], t),
        blend_channel(a[1], b[1], t),
        blend_channel(a[2], b[2], t),
        blend_channel(a[3], b[3], t),
    ]
}

/// Interpolate one channel at the rational progress `num / den`.
///
/// Integer evaluation of `round(a * (den - num) / den + b * num / den)`, rounding exact halves
/// away from zero. `num` is clamped to `den`; `den == 0` yields `a`.
pub fn blend_channel_ratio(a: u8, b: u8, num: u32, den: u32) -> u8 {
    if den == 0 {
        return a;
    }
    let den = u64::from(den);
    let num = u64::from(num).min(den);
    let sum = u64::from(a) * (den - num) + u64::from(b) * num;
    ((2 * sum + den) / (2 * den)) as u8
}

/// Crossfade two equally-sized images at progress `t`.
///
/// `t` is clamped into `[0, 1]`. Fails with [`FadeError::DimensionMismatch`] when the sizes
/// differ. The result is a fresh allocation.
pub fn blend(a: &Image, b: &Image, t: f32) -> FadeResult<Image> {
    if a.size() != b.size() {
        return Err(FadeError::dimension_mismatch(a.size(), b.size()));
    }
    let mut out = vec![0u8; a.as_bytes().len()];
    blend_into(&mut out, a.as_bytes(), b.as_bytes(), t)?;
    Ok(Image::from_parts_unchecked(a.size(), out))
}

/// Crossfade two RGBA8 byte buffers into `dst`.
pub fn blend_into(dst: &mut [u8], a: &[u8], b: &[u8], t: f32) -> FadeResult<()> {
    if dst.len() != a.len() || dst.len() != b.len() || !dst.len().is_multiple_of(4) {
        return Err(FadeError::invalid_parameter(
            "blend_into expects equal-length rgba8 buffers",
        ));
    }
    let t = clamp_unit(t);
    if t == 0.0 {
        dst.copy_from_slice(a);
        return Ok(());
    }
    if t == 1.0 {
        dst.copy_from_slice(b);
        return Ok(());
    }
    for ((d, a), b) in dst.iter_mut().zip(a).zip(b) {
        *d = blend_channel(*a, *b, t);
    }
    Ok(())
}

/// Crossfade two RGBA8 byte buffers into `dst` at the rational progress `num / den`.
///
/// Frame synthesis uses this form so that `i / (n - 1)` never passes through a float.
pub fn blend_into_ratio(dst: &mut [u8], a: &[u8], b: &[u8], num: u32, den: u32) -> FadeResult<()> {
    if dst.len() != a.len() || dst.len() != b.len() || !dst.len().is_multiple_of(4) {
        return Err(FadeError::invalid_parameter(
            "blend_into_ratio expects equal-length rgba8 buffers",
        ));
    }
    if den == 0 || num == 0 {
        dst.copy_from_slice(a);
        return Ok(());
    }
    if num >= den {
        dst.copy_from_slice(b);
        return Ok(());
    }
    for ((d, a), b) in dst.iter_mut().zip(a).zip(b) {
        *d = blend_channel_ratio(*a, *b, num, den);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
