/// Object-form region `{ x, y, w, h }` accepted by older drawing calls.
///
/// Converts to and from [`Rect`](super::Rect) without loss; see the `From`
/// impls next to `Rect`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LegacyRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}
