use serde::{Deserialize, Serialize};

use facet_engine::coords::Rect;
use facet_engine::paint::Rgba8;

// ── Rotation ──────────────────────────────────────────────────────────────

/// Clockwise quarter-turn describing how a stored atlas frame is oriented
/// relative to the face it paints.
///
/// Serialized by variant name (`"Rot0"` … `"Rot270"`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Rot0,
    Rot90,
    Rot180,
    Rot270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::Rot0, Rotation::Rot90, Rotation::Rot180, Rotation::Rot270];

    #[inline]
    pub const fn degrees(self) -> f32 {
        match self {
            Rotation::Rot0 => 0.0,
            Rotation::Rot90 => 90.0,
            Rotation::Rot180 => 180.0,
            Rotation::Rot270 => 270.0,
        }
    }

    /// `true` for 90° and 270°, where width and height trade places.
    #[inline]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Rot90 | Rotation::Rot270)
    }
}

// ── Frame / SelectedTexture ───────────────────────────────────────────────

/// Where a logical texture sits inside its atlas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Catalog name of the frame, when the atlas publishes one.
    pub id: Option<String>,
    pub rectangle: Rect,
}

impl Frame {
    pub fn new(rectangle: Rect) -> Self {
        Self { id: None, rectangle }
    }

    pub fn named(id: impl Into<String>, rectangle: Rect) -> Self {
        Self { id: Some(id.into()), rectangle }
    }
}

/// A frame of a texture, plus the orientation it is painted with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedTexture {
    /// Empty string marks a removal selection.
    pub texture_id: String,
    pub frame: Frame,
    pub rotation: Rotation,
    pub flip: bool,
}

impl SelectedTexture {
    pub fn new(texture_id: impl Into<String>, frame: Frame) -> Self {
        Self { texture_id: texture_id.into(), frame, rotation: Rotation::Rot0, flip: false }
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn flipped(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }
}

// ── TextureRef ────────────────────────────────────────────────────────────

/// One layer of a face: an optional selected texture plus an optional tint.
///
/// `selected == None` means nothing is selected; such layers draw nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureRef {
    pub selected: Option<SelectedTexture>,
    pub tint: Option<Rgba8>,
}

impl TextureRef {
    pub fn new(selected: SelectedTexture) -> Self {
        Self { selected: Some(selected), tint: None }
    }

    /// The "undo last layer" selection: a texture with an empty id.
    pub fn removal_marker() -> Self {
        Self::new(SelectedTexture::default())
    }

    pub fn tinted(mut self, tint: Rgba8) -> Self {
        self.tint = Some(tint);
        self
    }

    #[inline]
    pub fn is_removal_marker(&self) -> bool {
        self.selected.as_ref().is_some_and(|s| s.texture_id.is_empty())
    }
}

// ── SelectionAction ───────────────────────────────────────────────────────

/// What a picker selection does to a face stack.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    Append(TextureRef),
    RemoveLast,
}

impl From<TextureRef> for SelectionAction {
    fn from(reference: TextureRef) -> Self {
        if reference.is_removal_marker() {
            SelectionAction::RemoveLast
        } else {
            SelectionAction::Append(reference)
        }
    }
}

// ── FaceStack ─────────────────────────────────────────────────────────────

/// Ordered layers of one face, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceStack {
    layers: Vec<TextureRef>,
}

impl FaceStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn layers(&self) -> &[TextureRef] {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TextureRef> {
        self.layers.iter()
    }

    #[inline]
    pub fn push(&mut self, layer: TextureRef) {
        self.layers.push(layer);
    }

    /// Pops the top layer. Popping an empty stack is a no-op.
    #[inline]
    pub fn pop(&mut self) -> Option<TextureRef> {
        self.layers.pop()
    }

    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::Append(layer) => self.push(layer),
            SelectionAction::RemoveLast => {
                self.pop();
            }
        }
    }
}

impl From<Vec<TextureRef>> for FaceStack {
    fn from(layers: Vec<TextureRef>) -> Self {
        Self { layers }
    }
}

impl From<FaceStack> for Vec<TextureRef> {
    fn from(stack: FaceStack) -> Self {
        stack.layers
    }
}

impl<'a> IntoIterator for &'a FaceStack {
    type Item = &'a TextureRef;
    type IntoIter = std::slice::Iter<'a, TextureRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
