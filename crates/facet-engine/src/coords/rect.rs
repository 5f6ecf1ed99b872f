use super::{LegacyRect, Vec2};

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// The same type serves atlas space (blit sources) and surface space (blit
/// destinations). At API boundaries it converts to and from the flat
/// `[x, y, w, h]` tuple and the legacy `{ x, y, w, h }` object form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Returns `[x, y, w, h]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.origin.x, self.origin.y, self.size.x, self.size.y]
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

impl From<[f32; 4]> for Rect {
    #[inline]
    fn from([x, y, w, h]: [f32; 4]) -> Self {
        Rect::new(x, y, w, h)
    }
}

impl From<Rect> for [f32; 4] {
    #[inline]
    fn from(rect: Rect) -> Self {
        rect.to_array()
    }
}

impl From<LegacyRect> for Rect {
    #[inline]
    fn from(r: LegacyRect) -> Self {
        Rect::new(r.x, r.y, r.w, r.h)
    }
}

impl From<Rect> for LegacyRect {
    #[inline]
    fn from(r: Rect) -> Self {
        LegacyRect { x: r.origin.x, y: r.origin.y, w: r.size.x, h: r.size.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn array_round_trip() {
        let rect = Rect::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rect, r(1.0, 2.0, 3.0, 4.0));
        assert_eq!(<[f32; 4]>::from(rect), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn legacy_converts_to_array() {
        let legacy = LegacyRect { x: 1.0, y: 2.0, w: 3.0, h: 4.0 };
        let rect = Rect::from(legacy);
        assert_eq!(rect.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(LegacyRect::from(rect), legacy);
    }

    #[test]
    fn legacy_keeps_fractional_values() {
        let legacy = LegacyRect { x: 0.125, y: -7.5, w: 1e-3, h: 12345.678 };
        assert_eq!(LegacyRect::from(Rect::from(legacy)), legacy);
    }

    #[test]
    fn center_of_rect() {
        assert_eq!(r(10.0, 20.0, 40.0, 20.0).center(), Vec2::new(30.0, 30.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let rect = r(10.0, 0.0, -4.0, 5.0);
        let n = rect.normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        let i = a.intersect(b).unwrap();
        assert_eq!(i, r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }
}
