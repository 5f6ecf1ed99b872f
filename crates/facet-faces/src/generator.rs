use facet_engine::coords::{LegacyRect, Rect};
use facet_engine::render::RasterSurface;
use facet_engine::scene::{BlitCmd, BlitOptions, DrawList};
use facet_engine::texture::TextureCatalog;

use crate::compositor::{self, DrawReport};
use crate::error::DecodeError;
use crate::reference::{FaceStack, SelectionAction, TextureRef};
use crate::resolver::FaceResolver;
use crate::store::{Model, ValueStore};

/// Drawing facade over a value store, a texture catalog and a recorded
/// blit stream.
///
/// Draw calls only record; [`render`](Self::render) replays the stream onto
/// a raster surface.
#[derive(Debug)]
pub struct Generator<S = Model> {
    resolver: FaceResolver<S>,
    catalog: TextureCatalog,
    draw_list: DrawList,
}

impl<S: ValueStore> Generator<S> {
    pub fn new(store: S, catalog: TextureCatalog) -> Self {
        Self {
            resolver: FaceResolver::new(store),
            catalog,
            draw_list: DrawList::new(),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn store(&self) -> &S {
        self.resolver.store()
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut S {
        self.resolver.store_mut()
    }

    #[inline]
    pub fn catalog(&self) -> &TextureCatalog {
        &self.catalog
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Hands over the recorded stream and starts a fresh one.
    pub fn take_draw_list(&mut self) -> DrawList {
        std::mem::take(&mut self.draw_list)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Records a single blit. Returns `false` (and records nothing) if the
    /// texture is unknown.
    pub fn draw_texture(&mut self, id: &str, source: Rect, destination: Rect, options: BlitOptions) -> bool {
        if !self.catalog.contains(id) {
            log::warn!("draw_texture: texture {id:?} is not in the catalog");
            return false;
        }
        self.draw_list.push(BlitCmd::new(id, source, destination, options));
        true
    }

    /// [`draw_texture`](Self::draw_texture) taking object-form regions.
    pub fn draw_texture_legacy(
        &mut self,
        id: &str,
        source: LegacyRect,
        destination: LegacyRect,
        options: BlitOptions,
    ) -> bool {
        self.draw_texture(id, source.into(), destination.into(), options)
    }

    /// Records every layer of `face_id`; see [`compositor::draw_face`].
    pub fn draw_face(
        &mut self,
        face_id: &str,
        source: Rect,
        destination: Rect,
        options: &BlitOptions,
    ) -> Result<DrawReport, DecodeError> {
        compositor::draw_face(
            &self.resolver,
            &self.catalog,
            &mut self.draw_list,
            face_id,
            source,
            destination,
            options,
        )
    }

    /// Replays the recorded stream onto `surface`. Returns blits drawn.
    pub fn render(&self, surface: &mut RasterSurface) -> usize {
        surface.replay(&self.draw_list, &self.catalog)
    }

    // ── faces ─────────────────────────────────────────────────────────────

    pub fn face(&self, face_id: &str) -> Result<FaceStack, DecodeError> {
        self.resolver.resolve(face_id)
    }

    /// Sets the picker selection.
    pub fn select(&mut self, reference: &TextureRef) {
        self.resolver.select(reference);
    }

    /// Applies the picker selection to `face_id` (a click on that face).
    pub fn on_select(&mut self, face_id: &str) -> Result<Option<SelectionAction>, DecodeError> {
        self.resolver.on_select(face_id)
    }
}

#[cfg(test)]
mod tests {
    use facet_engine::paint::Rgba8;
    use facet_engine::texture::Texture;
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::reference::{Frame, Rotation, SelectedTexture};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    /// 4x2 atlas: a 2x2 frame "quad" (R G / B W) at x=0, solid white at x=2.
    fn generator() -> Generator {
        let atlas = RgbaImage::from_fn(4, 2, |x, y| {
            Rgba(match (x, y) {
                (0, 0) => RED,
                (1, 0) => GREEN,
                (0, 1) => BLUE,
                _ => WHITE,
            })
        });
        let mut catalog = TextureCatalog::new();
        catalog.insert(
            "atlas",
            Texture::new(atlas)
                .with_frame("quad", Rect::new(0.0, 0.0, 2.0, 2.0))
                .with_frame("white", Rect::new(2.0, 0.0, 2.0, 2.0)),
        );
        Generator::new(Model::new(), catalog)
    }

    fn quad(rotation: Rotation) -> TextureRef {
        TextureRef::new(
            SelectedTexture::new("atlas", Frame::named("quad", Rect::new(0.0, 0.0, 2.0, 2.0))).rotated(rotation),
        )
    }

    fn pixels(surface: &RasterSurface) -> Vec<[u8; 4]> {
        surface.image().pixels().map(|p| p.0).collect()
    }

    #[test]
    fn unknown_texture_records_nothing() {
        let mut g = generator();
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(!g.draw_texture("nope", unit, unit, BlitOptions::default()));
        assert!(g.draw_list().is_empty());
    }

    #[test]
    fn legacy_regions_match_tuple_regions() {
        let mut g = generator();
        let src = LegacyRect { x: 0.0, y: 0.0, w: 2.0, h: 2.0 };
        let dst = LegacyRect { x: 1.0, y: 2.0, w: 3.0, h: 4.0 };
        assert!(g.draw_texture_legacy("atlas", src, dst, BlitOptions::default()));

        let cmd = &g.draw_list().items()[0].cmd;
        assert_eq!(cmd.source.to_array(), [0.0, 0.0, 2.0, 2.0]);
        assert_eq!(cmd.destination.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn clicks_build_face_and_render() {
        let mut g = generator();
        g.select(&quad(Rotation::Rot0));
        g.on_select("front").unwrap();

        let full = Rect::new(0.0, 0.0, 2.0, 2.0);
        let report = g.draw_face("front", full, full, &BlitOptions::default()).unwrap();
        assert_eq!(report.drawn, 1);

        let mut surface = RasterSurface::new(2, 2);
        assert_eq!(g.render(&mut surface), 1);
        assert_eq!(pixels(&surface), [RED, GREEN, BLUE, WHITE]);
    }

    #[test]
    fn rotated_layers_paint_the_oriented_texture() {
        let full = Rect::new(0.0, 0.0, 2.0, 2.0);
        let mut outputs = Vec::new();
        for rotation in Rotation::ALL {
            let mut g = generator();
            g.select(&quad(rotation));
            g.on_select("front").unwrap();
            g.draw_face("front", full, full, &BlitOptions::default()).unwrap();

            let mut surface = RasterSurface::new(2, 2);
            g.render(&mut surface);
            outputs.push(pixels(&surface));
        }

        assert_eq!(outputs[0], [RED, GREEN, BLUE, WHITE]);
        assert_eq!(outputs[1], [BLUE, RED, WHITE, GREEN]);
        assert_eq!(outputs[2], [WHITE, BLUE, GREEN, RED]);
        assert_eq!(outputs[3], [GREEN, WHITE, RED, BLUE]);
    }

    #[test]
    fn later_layers_paint_on_top() {
        let mut g = generator();
        g.select(&quad(Rotation::Rot0));
        g.on_select("front").unwrap();
        let white = TextureRef::new(SelectedTexture::new("atlas", Frame::named("white", Rect::new(2.0, 0.0, 2.0, 2.0))))
            .tinted(Rgba8::opaque(0, 0, 255));
        g.select(&white);
        g.on_select("front").unwrap();

        let full = Rect::new(0.0, 0.0, 2.0, 2.0);
        g.draw_face("front", full, full, &BlitOptions::default()).unwrap();
        let mut surface = RasterSurface::new(2, 2);
        assert_eq!(g.render(&mut surface), 2);
        assert_eq!(pixels(&surface), [BLUE; 4]);
    }

    #[test]
    fn removal_click_undoes_layer() {
        let mut g = generator();
        g.select(&quad(Rotation::Rot90));
        g.on_select("front").unwrap();
        g.select(&TextureRef::removal_marker());
        g.on_select("front").unwrap();
        assert!(g.face("front").unwrap().is_empty());
    }

    #[test]
    fn take_draw_list_resets() {
        let mut g = generator();
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
        g.draw_texture("atlas", unit, unit, BlitOptions::default());
        assert_eq!(g.take_draw_list().len(), 1);
        assert!(g.draw_list().is_empty());
    }
}
