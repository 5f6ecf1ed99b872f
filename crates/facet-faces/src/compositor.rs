//! Oriented compositing of face layers.
//!
//! A face layer stores its atlas frame in storage orientation. To paint a
//! sub-rectangle of the *logical* (oriented) texture, the sub-rectangle is
//! read back out of the rotated storage ([`map_source`]) and, for quarter
//! turns, the destination is swapped and re-centered ([`map_destination`])
//! so the blit primitive's rotation about the destination center lands the
//! pixels on the requested footprint.

use facet_engine::coords::Rect;
use facet_engine::paint::Blend;
use facet_engine::scene::{BlitCmd, BlitOptions, BlitSink};
use facet_engine::texture::TextureCatalog;

use crate::error::{DecodeError, LayerError};
use crate::reference::{Rotation, SelectedTexture, TextureRef};
use crate::resolver::FaceResolver;
use crate::store::ValueStore;

/// Absolute atlas rectangle for `source`, given relative to the frame's
/// local origin, when the frame is stored with `rotation`.
pub fn map_source(rotation: Rotation, frame: Rect, source: Rect) -> Rect {
    let [sx, sy, sw, sh] = source.to_array();
    let [fx, fy, fw, fh] = frame.to_array();

    match rotation {
        Rotation::Rot0 => Rect::new(fx + sx, fy + sy, sw, sh),
        Rotation::Rot90 => Rect::new(fx + sy, fy + fw - (sw + sx), sh, sw),
        Rotation::Rot180 => Rect::new(fx + fw - (sw + sx), fy + fh - (sh + sy), sw, sh),
        Rotation::Rot270 => Rect::new(fx + fh - (sh + sy), fy + sx, sh, sw),
    }
}

/// Destination rectangle to hand the blit primitive for `rotation`.
pub fn map_destination(rotation: Rotation, destination: Rect) -> Rect {
    let [dx, dy, dw, dh] = destination.to_array();

    match rotation {
        Rotation::Rot0 | Rotation::Rot180 => destination,
        Rotation::Rot90 | Rotation::Rot270 => {
            let shift = (dw - dh) / 2.0;
            Rect::new(dx + shift, dy - shift, dh, dw)
        }
    }
}

/// Derives the blit for one layer, or `None` if nothing is selected.
///
/// `base` carries caller-wide options. The layer's rotation is added to
/// `base.rotate` (not wrapped), its flip replaces `base.flip`, and a tint
/// replaces `base.blend`. `base.pixelate` passes through.
pub fn composite_one(layer: &TextureRef, source: Rect, destination: Rect, base: &BlitOptions) -> Option<BlitCmd> {
    let selected = layer.selected.as_ref()?;
    let rotation = selected.rotation;

    let options = BlitOptions {
        rotate: base.rotate + rotation.degrees(),
        flip: selected.flip,
        blend: layer.tint.map(Blend::multiply).or(base.blend),
        pixelate: base.pixelate,
    };

    Some(BlitCmd::new(
        selected.texture_id.clone(),
        map_source(rotation, selected.frame.rectangle, source),
        map_destination(rotation, destination),
        options,
    ))
}

/// Outcome of a [`draw_face`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawReport {
    /// Blits handed to the sink.
    pub drawn: usize,
    /// Layers dropped because the catalog could not resolve them.
    pub skipped: Vec<LayerError>,
}

/// Checks that a layer's texture (and named frame, if any) exist.
pub fn check_layer(catalog: &TextureCatalog, selected: &SelectedTexture) -> Result<(), LayerError> {
    let texture = catalog.get(&selected.texture_id).ok_or_else(|| LayerError::MissingTexture {
        texture_id: selected.texture_id.clone(),
    })?;

    if let Some(frame_id) = &selected.frame.id {
        if texture.frame(frame_id).is_none() {
            return Err(LayerError::MissingFrame {
                texture_id: selected.texture_id.clone(),
                frame_id: frame_id.clone(),
            });
        }
    }
    Ok(())
}

/// Draws every layer of `face_id`, back to front, into `sink`.
///
/// An empty face draws nothing. Layers the catalog cannot resolve are
/// logged, reported, and skipped; the remaining layers still draw.
pub fn draw_face<S, K>(
    resolver: &FaceResolver<S>,
    catalog: &TextureCatalog,
    sink: &mut K,
    face_id: &str,
    source: Rect,
    destination: Rect,
    base: &BlitOptions,
) -> Result<DrawReport, DecodeError>
where
    S: ValueStore,
    K: BlitSink + ?Sized,
{
    let stack = resolver.resolve(face_id)?;
    let mut report = DrawReport::default();

    for (index, layer) in stack.iter().enumerate() {
        let Some(selected) = layer.selected.as_ref() else {
            continue;
        };
        if let Err(err) = check_layer(catalog, selected) {
            log::warn!("face {face_id:?} layer {index} skipped: {err}");
            report.skipped.push(err);
            continue;
        }
        if let Some(cmd) = composite_one(layer, source, destination, base) {
            sink.blit(cmd);
            report.drawn += 1;
        }
    }

    Ok(report)
}
