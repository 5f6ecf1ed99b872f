use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use image::RgbaImage;

use crate::coords::Rect;

/// Error returned by [`TextureCatalog::load`].
#[derive(Debug)]
pub struct TextureLoadError {
    pub id: String,
    pub source: image::ImageError,
}

impl fmt::Display for TextureLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture load error for {:?}: {}", self.id, self.source)
    }
}

impl std::error::Error for TextureLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// An atlas image plus the named frames packed into it.
#[derive(Debug, Clone)]
pub struct Texture {
    image: RgbaImage,
    frames: HashMap<String, Rect>,
}

impl Texture {
    pub fn new(image: RgbaImage) -> Self {
        Self { image, frames: HashMap::new() }
    }

    /// Registers a named frame (atlas-space rectangle).
    pub fn with_frame(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.frames.insert(id.into(), rect);
        self
    }

    /// Adds a frame to an already registered texture.
    pub fn add_frame(&mut self, id: impl Into<String>, rect: Rect) {
        self.frames.insert(id.into(), rect);
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn frame(&self, id: &str) -> Option<Rect> {
        self.frames.get(id).copied()
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Texture id → atlas registry.
///
/// Textures are immutable once inserted; re-inserting an id replaces it.
#[derive(Debug, Default)]
pub struct TextureCatalog {
    textures: HashMap<String, Texture>,
}

impl TextureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, texture: Texture) {
        let id = id.into();
        log::debug!(
            "texture {:?} registered ({}x{}, {} frames)",
            id,
            texture.image.width(),
            texture.image.height(),
            texture.frames.len()
        );
        self.textures.insert(id, texture);
    }

    /// Decodes an image file and registers it without frames.
    pub fn load(&mut self, id: impl Into<String>, path: impl AsRef<Path>) -> Result<(), TextureLoadError> {
        let id = id.into();
        let image = image::open(path.as_ref())
            .map_err(|source| TextureLoadError { id: id.clone(), source })?
            .to_rgba8();
        self.insert(id, Texture::new(image));
        Ok(())
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Texture> {
        self.textures.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Texture> {
        self.textures.get_mut(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.textures.contains_key(id)
    }

    /// Looks up a named frame of a texture.
    pub fn frame(&self, texture_id: &str, frame_id: &str) -> Option<Rect> {
        self.get(texture_id)?.frame(frame_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
