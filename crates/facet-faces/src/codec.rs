//! Flat-text encoding of texture references.
//!
//! Wire format (JSON), optional keys omitted when empty:
//!
//! ```json
//! {
//!   "selectedTexture": {
//!     "textureDefId": "blocks",
//!     "frame": { "id": "grass_side", "rectangle": [0, 16, 16, 16] },
//!     "rotation": "Rot90",
//!     "flip": true
//!   },
//!   "blend": "#ff0000ff"
//! }
//! ```
//!
//! A face stack is a JSON array of these objects. `rectangle` is also
//! accepted in the legacy object form `{ "x", "y", "w", "h" }`; it is always
//! written back as a 4-tuple.
//!
//! Coordinates are read as JSON doubles and narrowed to `f32` in
//! [`narrow`]. Both rectangle forms go through the same narrowing, so the
//! tuple and legacy spellings of a region always decode identically.

use serde::{Deserialize, Serialize};

use facet_engine::coords::{LegacyRect, Rect};
use facet_engine::paint::Rgba8;

use crate::error::DecodeError;
use crate::reference::{Frame, Rotation, SelectedTexture, TextureRef};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_texture: Option<WireSelected>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blend: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSelected {
    texture_def_id: String,
    frame: WireFrame,
    #[serde(default)]
    rotation: Rotation,
    #[serde(default, skip_serializing_if = "is_false")]
    flip: bool,
}

#[derive(Serialize, Deserialize)]
struct WireFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    rectangle: WireRegion,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireRegion {
    Tuple([f64; 4]),
    Legacy { x: f64, y: f64, w: f64, h: f64 },
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// The single point where persisted doubles become region coordinates.
///
/// Values past `f32` precision (above 2^24, or with more than ~7 significant
/// digits) round to the nearest `f32`.
fn narrow(v: f64) -> f32 {
    v as f32
}

/// Inverse of [`narrow`] for encoding: the shortest decimal that reads back
/// as the same `f32`, so `0.1` is written as `0.1`.
fn widen(v: f32) -> f64 {
    v.to_string().parse().unwrap_or(f64::from(v))
}

impl From<WireRegion> for Rect {
    fn from(region: WireRegion) -> Self {
        match region {
            WireRegion::Tuple(t) => Rect::from(t.map(narrow)),
            WireRegion::Legacy { x, y, w, h } => Rect::from(LegacyRect {
                x: narrow(x),
                y: narrow(y),
                w: narrow(w),
                h: narrow(h),
            }),
        }
    }
}

impl From<&TextureRef> for WireRef {
    fn from(r: &TextureRef) -> Self {
        WireRef {
            selected_texture: r.selected.as_ref().map(|s| WireSelected {
                texture_def_id: s.texture_id.clone(),
                frame: WireFrame {
                    id: s.frame.id.clone(),
                    rectangle: WireRegion::Tuple(s.frame.rectangle.to_array().map(widen)),
                },
                rotation: s.rotation,
                flip: s.flip,
            }),
            blend: r.tint.map(Rgba8::to_hex),
        }
    }
}

impl TryFrom<WireRef> for TextureRef {
    type Error = DecodeError;

    fn try_from(w: WireRef) -> Result<Self, Self::Error> {
        let tint = w.blend.as_deref().map(Rgba8::parse_hex).transpose()?;
        let selected = w.selected_texture.map(|s| SelectedTexture {
            texture_id: s.texture_def_id,
            frame: Frame { id: s.frame.id, rectangle: s.frame.rectangle.into() },
            rotation: s.rotation,
            flip: s.flip,
        });
        Ok(TextureRef { selected, tint })
    }
}

/// Decodes a face stack.
pub fn decode_reference_list(s: &str) -> Result<Vec<TextureRef>, DecodeError> {
    let wire: Vec<WireRef> = serde_json::from_str(s)?;
    wire.into_iter().map(TextureRef::try_from).collect()
}

/// Encodes a face stack.
pub fn encode_reference_list(list: &[TextureRef]) -> String {
    let wire: Vec<WireRef> = list.iter().map(WireRef::from).collect();
    // Only strings, bools and fixed-size float arrays: serialization cannot fail.
    serde_json::to_string(&wire).expect("texture references always serialize")
}

/// Decodes a single picker selection. JSON `null` decodes to `None`.
pub fn decode_single_reference(s: &str) -> Result<Option<TextureRef>, DecodeError> {
    let wire: Option<WireRef> = serde_json::from_str(s)?;
    wire.map(TextureRef::try_from).transpose()
}

pub fn encode_single_reference(reference: &TextureRef) -> String {
    serde_json::to_string(&WireRef::from(reference)).expect("texture references always serialize")
}
