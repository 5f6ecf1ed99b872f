use super::Color;

/// Color-blend directive applied to every sampled texel of a blit.
///
/// Only multiplicative tinting exists today. Renderers dispatch on the enum,
/// so a new mode is a new variant plus one match arm in the raster blit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Blend {
    /// Component-wise multiply of the texel by the color.
    Multiply(Color),
}

impl Blend {
    #[inline]
    pub fn multiply(color: impl Into<Color>) -> Self {
        Blend::Multiply(color.into())
    }

    /// Applies the directive to one premultiplied texel.
    #[inline]
    pub fn apply(self, texel: Color) -> Color {
        match self {
            Blend::Multiply(c) => texel.multiply(c),
        }
    }
}
