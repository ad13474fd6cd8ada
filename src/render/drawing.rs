use std::fmt;
use std::sync::Arc;

use smallvec::{SmallVec, smallvec};

use crate::foundation::core::{Affine, FrameIndex, Rect, Rgba8Premul, Size, Vec2};
use crate::frames::fingerprint::FrameSetKey;
use crate::frames::frame_set::Frame;

/// Target area the host draws the transition into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Straight-alpha color cleared under the frame, if any.
    pub background: Option<[u8; 4]>,
}

impl Viewport {
    /// Viewport without a background clear.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
        }
    }

    /// Clear to `rgba` (straight alpha) before drawing the frame.
    pub fn with_background(mut self, rgba: [u8; 4]) -> Self {
        self.background = Some(rgba);
        self
    }

    /// Dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Premultiplied RGBA8 pixels, tightly packed and row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    size: Size,
    data: Vec<u8>,
}

impl Surface {
    /// Dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// One renderer instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole viewport.
    Clear {
        /// Fill color.
        color: Rgba8Premul,
    },
    /// Draw the drawing's surface; `transform` maps surface pixels into the viewport.
    Blit {
        /// Destination rectangle in viewport pixels.
        dest: Rect,
        /// Surface-to-viewport transform.
        transform: Affine,
    },
}

/// Identity of a compiled drawing. A different key means a different drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawingKey {
    /// Frame set the frame belongs to.
    pub frame_set: FrameSetKey,
    /// Storage index of the frame.
    pub index: FrameIndex,
    /// Target viewport.
    pub viewport: Viewport,
}

/// Renderer-ready form of one frame: a premultiplied surface plus the ops that place it.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledDrawing {
    key: DrawingKey,
    surface: Arc<Surface>,
    ops: SmallVec<[DrawOp; 2]>,
}

impl CompiledDrawing {
    /// What this drawing was compiled from.
    pub fn key(&self) -> &DrawingKey {
        &self.key
    }

    /// Premultiplied pixels of the frame.
    pub fn surface(&self) -> &Arc<Surface> {
        &self.surface
    }

    /// Ops in execution order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

/// Compile `frame` for drawing into `viewport`.
///
/// The frame is centered. Frames larger than the viewport are scaled down uniformly to fit;
/// smaller frames keep their pixel size.
pub fn compile_frame(frame_set: FrameSetKey, frame: &Frame, viewport: Viewport) -> CompiledDrawing {
    let image = frame.image();
    let mut data = Vec::with_capacity(image.as_bytes().len());
    for [r, g, b, a] in image.pixels() {
        data.extend_from_slice(&Rgba8Premul::from_straight_rgba(r, g, b, a).to_array());
    }
    let surface = Surface {
        size: image.size(),
        data,
    };

    let transform = fit_centered(surface.size, viewport.size());
    let dest = transform.transform_rect_bbox(Rect::new(
        0.0,
        0.0,
        f64::from(surface.size.width),
        f64::from(surface.size.height),
    ));

    let mut ops: SmallVec<[DrawOp; 2]> = smallvec![];
    if let Some([r, g, b, a]) = viewport.background {
        ops.push(DrawOp::Clear {
            color: Rgba8Premul::from_straight_rgba(r, g, b, a),
        });
    }
    ops.push(DrawOp::Blit { dest, transform });

    CompiledDrawing {
        key: DrawingKey {
            frame_set,
            index: frame.index(),
            viewport,
        },
        surface: Arc::new(surface),
        ops,
    }
}

fn fit_centered(content: Size, viewport: Size) -> Affine {
    let (cw, ch) = (f64::from(content.width), f64::from(content.height));
    let (vw, vh) = (f64::from(viewport.width), f64::from(viewport.height));
    let scale = (vw / cw).min(vh / ch).min(1.0);
    let offset = Vec2::new((vw - cw * scale) / 2.0, (vh - ch * scale) / 2.0);
    Affine::translate(offset) * Affine::scale(scale)
}

#[cfg(test)]
#[path = "../../tests/unit/render/drawing.rs"]
mod tests;
