use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Rgba8};
use crate::scene::{BlitCmd, BlitSink, DrawList};
use crate::texture::TextureCatalog;

/// CPU canvas that executes blits with nearest-neighbour sampling.
///
/// Transform order for one blit, forward direction:
/// 1. the source rectangle is stretched over the destination rectangle
/// 2. pixelation snaps destination-local positions to a block grid
/// 3. `flip` mirrors horizontally in the destination's local frame
/// 4. the result is rotated clockwise by `rotate` degrees about the
///    destination rectangle's center
///
/// Each covered canvas pixel is mapped back through these steps, sampled,
/// blended, and composited source-over.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    canvas: RgbaImage,
}

impl RasterSurface {
    /// Transparent canvas of `width × height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { canvas: RgbaImage::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn fill(&mut self, color: Rgba8) {
        for px in self.canvas.pixels_mut() {
            *px = Rgba([color.r, color.g, color.b, color.a]);
        }
    }

    /// Writes the canvas; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        self.canvas.save(path)
    }

    /// Draws one command sampling from `texture`.
    ///
    /// Degenerate rectangles draw nothing. Samples that fall outside the
    /// texture are skipped rather than clamped.
    pub fn blit(&mut self, texture: &RgbaImage, cmd: &BlitCmd) {
        let dst = cmd.destination;
        let src = cmd.source;
        if dst.is_empty() || src.is_empty() || !dst.is_finite() || !src.is_finite() {
            return;
        }

        let opts = cmd.options;
        let (sin, cos) = sin_cos_degrees(opts.rotate);
        let center = dst.center();
        let half = dst.size * 0.5;
        let local_bounds = Rect::from_origin_size(Vec2::zero(), dst.size);
        let block = opts.pixelate.filter(|&b| b > 1).map(|b| b as f32);

        // Axis-aligned bounds of the rotated destination, clipped to the canvas.
        let ext = Vec2::new(
            (half.x * cos).abs() + (half.y * sin).abs(),
            (half.x * sin).abs() + (half.y * cos).abs(),
        );
        let canvas = Rect::new(0.0, 0.0, self.canvas.width() as f32, self.canvas.height() as f32);
        let Some(covered) = Rect::from_origin_size(center - ext, ext * 2.0).intersect(canvas) else {
            return;
        };
        let [cx, cy, cw, ch] = covered.to_array();
        let (x0, y0) = (cx.floor() as u32, cy.floor() as u32);
        let (x1, y1) = ((cx + cw).ceil() as u32, (cy + ch).ceil() as u32);

        let texels = Rect::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                let mut local = p.rotated(-sin, cos) + half;
                if opts.flip {
                    local.x = dst.size.x - local.x;
                }
                if !local_bounds.contains(local) {
                    continue;
                }
                if let Some(b) = block {
                    local = Vec2::new((local.x / b).floor() * b, (local.y / b).floor() * b);
                }

                let u = (src.origin.x + local.x / dst.size.x * src.size.x).floor();
                let v = (src.origin.y + local.y / dst.size.y * src.size.y).floor();
                if !texels.contains(Vec2::new(u, v)) {
                    continue;
                }

                let t = texture.get_pixel(u as u32, v as u32).0;
                let mut texel = Color::from_srgb_u8(t[0], t[1], t[2], t[3]);
                if let Some(blend) = opts.blend {
                    texel = blend.apply(texel);
                }

                let px = self.canvas.get_pixel_mut(x, y);
                let under = Color::from_srgb_u8(px[0], px[1], px[2], px[3]);
                *px = Rgba(texel.over(under).to_srgb_u8());
            }
        }
    }

    /// Executes every recorded blit in paint order.
    ///
    /// Returns the number of blits drawn; commands naming an unknown texture
    /// are skipped with a warning.
    pub fn replay(&mut self, list: &DrawList, catalog: &TextureCatalog) -> usize {
        let mut target = RasterTarget::new(self, catalog);
        for cmd in list.commands() {
            target.blit(cmd.clone());
        }
        target.drawn()
    }
}

/// A [`RasterSurface`] bound to a catalog, usable as a [`BlitSink`].
#[derive(Debug)]
pub struct RasterTarget<'a> {
    surface: &'a mut RasterSurface,
    catalog: &'a TextureCatalog,
    drawn: usize,
}

impl<'a> RasterTarget<'a> {
    pub fn new(surface: &'a mut RasterSurface, catalog: &'a TextureCatalog) -> Self {
        Self { surface, catalog, drawn: 0 }
    }

    #[inline]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl BlitSink for RasterTarget<'_> {
    fn blit(&mut self, cmd: BlitCmd) {
        match self.catalog.get(&cmd.texture_id) {
            Some(texture) => {
                self.surface.blit(texture.image(), &cmd);
                self.drawn += 1;
            }
            None => log::warn!("blit skipped: texture {:?} is not in the catalog", cmd.texture_id),
        }
    }
}

/// Normalizes to `[0, 360)` and returns `(sin, cos)`, exact at right angles.
fn sin_cos_degrees(degrees: f32) -> (f32, f32) {
    let d = degrees.rem_euclid(360.0);
    if d == 0.0 {
        (0.0, 1.0)
    } else if d == 90.0 {
        (1.0, 0.0)
    } else if d == 180.0 {
        (0.0, -1.0)
    } else if d == 270.0 {
        (-1.0, 0.0)
    } else {
        d.to_radians().sin_cos()
    }
}
