use std::fmt;

use crate::foundation::core::Size;
use crate::foundation::error::{FadeError, FadeResult};

/// Immutable straight-alpha RGBA8 raster.
///
/// Pixels are tightly packed, row-major, 4 bytes per pixel. Both dimensions are at least 1.
/// Source images and every synthesized frame use this type.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    size: Size,
    data: Vec<u8>,
}

impl Image {
    /// Wrap an RGBA8 byte buffer.
    ///
    /// Fails with [`FadeError::InvalidParameter`] when a dimension is zero or `data.len()` is not
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> FadeResult<Self> {
        let size = Size::new(width, height);
        let expected = checked_len(size)?;
        if data.len() != expected {
            return Err(FadeError::invalid_parameter(format!(
                "rgba8 buffer for {size} must be {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// An image with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> FadeResult<Self> {
        let size = Size::new(width, height);
        let len = checked_len(size)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..size.pixel_count() {
            data.extend_from_slice(&rgba);
        }
        Ok(Self { size, data })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> [u8; 4],
    ) -> FadeResult<Self> {
        let size = Size::new(width, height);
        let len = checked_len(size)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self { size, data })
    }

    /// Convert any `image` crate buffer into straight RGBA8.
    pub fn from_dynamic(img: &::image::DynamicImage) -> FadeResult<Self> {
        Self::try_from(img.to_rgba8())
    }

    /// Copy into an `image` crate RGBA buffer.
    pub fn to_rgba_image(&self) -> ::image::RgbaImage {
        ::image::RgbaImage::from_fn(self.size.width, self.size.height, |x, y| {
            ::image::Rgba(self.pixel_unchecked(x, y))
        })
    }

    pub(crate) fn from_parts_unchecked(size: Size, data: Vec<u8>) -> Self {
        debug_assert_eq!(size.rgba8_len(), Some(data.len()));
        Self { size, data }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixel_unchecked(x, y))
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    fn pixel_unchecked(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.size.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

impl TryFrom<::image::RgbaImage> for Image {
    type Error = FadeError;

    fn try_from(img: ::image::RgbaImage) -> FadeResult<Self> {
        let (w, h) = img.dimensions();
        Self::from_rgba8(w, h, img.into_raw())
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn checked_len(size: Size) -> FadeResult<usize> {
    if size.is_empty() {
        return Err(FadeError::invalid_parameter(format!(
            "image dimensions must be non-zero, got {size}"
        )));
    }
    size.rgba8_len()
        .ok_or_else(|| FadeError::invalid_parameter(format!("image size {size} overflows")))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/image.rs"]
mod tests;
