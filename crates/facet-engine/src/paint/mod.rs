//! Paint model shared between the compositor and the blit primitive.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - hex tints as persisted by callers
//! - blend directives
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod hex;

pub use blend::Blend;
pub use color::Color;
pub use hex::{HexError, Rgba8};
