//! Atlas textures and their named frames.

mod catalog;

pub use catalog::{Texture, TextureCatalog, TextureLoadError};
