//! Facet faces: layered, oriented atlas textures on named faces.
//!
//! A *face* is a named slot (one side of a modeled block, say) holding a
//! stack of texture layers. Layers are appended by picker selections and
//! drawn back to front, each rotated, mirrored and tinted on its own.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`reference`] | `Rotation`, `Frame`, `SelectedTexture`, `TextureRef`, `FaceStack`, `SelectionAction` |
//! | [`codec`] | JSON encode/decode of references and stacks |
//! | [`store`] | `ValueStore` seam and the in-memory `Model` |
//! | [`resolver`] | `FaceResolver`: read stacks, apply selections |
//! | [`compositor`] | source/destination mapping, `composite_one`, `draw_face` |
//! | [`generator`] | `Generator` drawing facade |
//!
//! # Quick start
//!
//! ```rust
//! use facet_engine::coords::Rect;
//! use facet_engine::scene::{BlitOptions, DrawList};
//! use facet_engine::texture::{Texture, TextureCatalog};
//! use facet_faces::prelude::*;
//!
//! let mut catalog = TextureCatalog::new();
//! catalog.insert("blocks", Texture::new(image::RgbaImage::new(64, 64)));
//!
//! let mut resolver = FaceResolver::new(Model::new());
//! let grass = SelectedTexture::new("blocks", Frame::new(Rect::new(0.0, 0.0, 16.0, 16.0)))
//!     .rotated(Rotation::Rot90);
//! resolver.select(&TextureRef::new(grass));
//! resolver.on_select("top").unwrap();
//!
//! let mut list = DrawList::new();
//! let full = Rect::new(0.0, 0.0, 16.0, 16.0);
//! let report = draw_face(&resolver, &catalog, &mut list, "top", full, full, &BlitOptions::default()).unwrap();
//! assert_eq!(report.drawn, 1);
//! assert_eq!(list.items()[0].cmd.options.rotate, 90.0);
//! ```

pub mod codec;
pub mod compositor;
pub mod error;
pub mod generator;
pub mod reference;
pub mod resolver;
pub mod store;

pub use error::{DecodeError, LayerError};
pub use generator::Generator;

/// The types most callers need.
pub mod prelude {
    pub use crate::compositor::{composite_one, draw_face, map_destination, map_source, DrawReport};
    pub use crate::error::{DecodeError, LayerError};
    pub use crate::generator::Generator;
    pub use crate::reference::{FaceStack, Frame, Rotation, SelectedTexture, SelectionAction, TextureRef};
    pub use crate::resolver::{FaceResolver, SELECTED_TEXTURE_SLOT};
    pub use crate::store::{Model, Value, ValueStore};
}
