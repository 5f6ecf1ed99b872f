//! Facet engine crate.
//!
//! Geometry, paint, the blit stream, and a CPU blit primitive used by the
//! face compositor in `facet-faces`.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod texture;
