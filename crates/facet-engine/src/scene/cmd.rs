use crate::coords::Rect;
use crate::paint::Blend;

/// Per-blit transform and blend options.
///
/// `rotate` is in degrees, clockwise, about the destination rectangle's
/// center. It is not wrapped here; the blit primitive normalizes it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BlitOptions {
    pub rotate: f32,
    /// Horizontal mirror, applied in the destination's local frame.
    pub flip: bool,
    pub blend: Option<Blend>,
    /// Block size in destination pixels. `None` or `Some(0 | 1)` disables it.
    pub pixelate: Option<u32>,
}

impl BlitOptions {
    #[inline]
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotate = degrees;
        self
    }

    #[inline]
    pub fn flipped(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    #[inline]
    pub fn with_blend(mut self, blend: Blend) -> Self {
        self.blend = Some(blend);
        self
    }

    #[inline]
    pub fn pixelated(mut self, block: u32) -> Self {
        self.pixelate = Some(block);
        self
    }
}

/// One textured-rectangle draw: sample `source` (atlas space) of texture
/// `texture_id` into `destination` (surface space).
#[derive(Debug, Clone, PartialEq)]
pub struct BlitCmd {
    pub texture_id: String,
    pub source: Rect,
    pub destination: Rect,
    pub options: BlitOptions,
}

impl BlitCmd {
    #[inline]
    pub fn new(texture_id: impl Into<String>, source: Rect, destination: Rect, options: BlitOptions) -> Self {
        Self { texture_id: texture_id.into(), source, destination, options }
    }
}
