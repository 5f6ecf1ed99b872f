//! Coordinate and geometry types shared by the compositor and blit primitive.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rotations are expressed in degrees, clockwise on screen.

mod legacy;
mod rect;
mod vec2;

pub use legacy::LegacyRect;
pub use rect::Rect;
pub use vec2::Vec2;
