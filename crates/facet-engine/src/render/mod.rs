//! Blit execution.
//!
//! Renderers consume `scene` blit streams and write pixels.
//!
//! Convention:
//! - Geometry is in logical pixels (top-left origin, +Y down), one logical
//!   pixel per canvas pixel.
//! - Texel lookup is nearest-neighbour at pixel centers.

mod raster;

pub use raster::{RasterSurface, RasterTarget};
