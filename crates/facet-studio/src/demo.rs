use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use facet_engine::coords::Rect;
use facet_engine::paint::Rgba8;
use facet_engine::render::RasterSurface;
use facet_engine::scene::BlitOptions;
use facet_engine::texture::{Texture, TextureCatalog};
use facet_faces::prelude::*;

use crate::config::StudioConfig;

pub const ATLAS_ID: &str = "atlas";
pub const TILE: u32 = 16;

const GRASS_TOP: &str = "tile_0_0";
const DIRT: &str = "tile_1_0";
const GRASS_SIDE: &str = "tile_2_0";
const ARROW: &str = "tile_3_0";

/// Faces of an unfolded cube and their cell in a 4×3 net.
const NET: [(&str, u32, u32); 6] = [
    ("top", 1, 0),
    ("west", 0, 1),
    ("north", 1, 1),
    ("east", 2, 1),
    ("south", 3, 1),
    ("bottom", 1, 2),
];

// ── atlas ─────────────────────────────────────────────────────────────────

/// Four 16px tiles: grass top, dirt, grass side, and an up-pointing arrow.
pub fn generate_atlas() -> RgbaImage {
    let grass = |x: u32, y: u32| if (x * 7 + y * 13) % 5 == 0 { [58, 125, 40, 255] } else { [86, 160, 58, 255] };
    let dirt = |x: u32, y: u32| if (x * 11 + y * 5) % 7 == 0 { [102, 72, 48, 255] } else { [134, 96, 67, 255] };

    RgbaImage::from_fn(TILE * 4, TILE, |x, y| {
        let (tile, lx) = (x / TILE, x % TILE);
        Rgba(match tile {
            0 => grass(lx, y),
            1 => dirt(lx, y),
            2 if y < 4 + lx % 3 => grass(lx, y),
            2 => dirt(lx, y),
            _ => {
                let shaft = (7..9).contains(&lx) && (5..14).contains(&y);
                let head = y >= 2 && y < 7 && lx.abs_diff(7) + lx.abs_diff(8) <= 2 * (y - 2) + 1;
                if shaft || head { [255, 255, 255, 255] } else { [0, 0, 0, 0] }
            }
        })
    })
}

/// Registers every whole 16px tile as frame `tile_<col>_<row>`.
pub fn register_tiles(texture: &mut Texture) {
    let (w, h) = (texture.image().width() / TILE, texture.image().height() / TILE);
    for row in 0..h {
        for col in 0..w {
            let rect = Rect::new((col * TILE) as f32, (row * TILE) as f32, TILE as f32, TILE as f32);
            texture.add_frame(format!("tile_{col}_{row}"), rect);
        }
    }
}

fn tile(name: &str) -> Frame {
    // Names are produced by `register_tiles`, so parsing them back is total.
    let mut parts = name.trim_start_matches("tile_").split('_').map(|p| p.parse::<u32>().unwrap_or(0));
    let (col, row) = (parts.next().unwrap_or(0), parts.next().unwrap_or(0));
    Frame::named(name, Rect::new((col * TILE) as f32, (row * TILE) as f32, TILE as f32, TILE as f32))
}

fn layer(name: &str, rotation: Rotation) -> TextureRef {
    TextureRef::new(SelectedTexture::new(ATLAS_ID, tile(name)).rotated(rotation))
}

// ── scene ─────────────────────────────────────────────────────────────────

fn catalog(config: &StudioConfig) -> Result<TextureCatalog> {
    let mut catalog = TextureCatalog::new();
    match &config.atlas {
        Some(path) => catalog
            .load(ATLAS_ID, path)
            .with_context(|| format!("loading atlas {}", path.display()))?,
        None => catalog.insert(ATLAS_ID, Texture::new(generate_atlas())),
    }
    if let Some(texture) = catalog.get_mut(ATLAS_ID) {
        register_tiles(texture);
    }
    Ok(catalog)
}

/// Clicks each face the way a user would in the picker.
fn paint_faces(g: &mut Generator) -> Result<()> {
    let clicks: [(&str, TextureRef); 10] = [
        ("top", layer(GRASS_TOP, Rotation::Rot0)),
        ("top", layer(ARROW, Rotation::Rot90).tinted(Rgba8::opaque(255, 220, 0))),
        ("north", layer(GRASS_SIDE, Rotation::Rot0)),
        ("east", layer(GRASS_SIDE, Rotation::Rot0)),
        ("east", layer(ARROW, Rotation::Rot180)),
        ("south", layer(GRASS_SIDE, Rotation::Rot0)),
        ("south", layer(ARROW, Rotation::Rot270)),
        ("south", TextureRef::removal_marker()),
        ("west", TextureRef::new(SelectedTexture::new(ATLAS_ID, tile(GRASS_SIDE)).flipped(true))),
        ("bottom", layer(DIRT, Rotation::Rot0).tinted(Rgba8::opaque(128, 128, 128))),
    ];

    for (face, reference) in clicks {
        g.select(&reference);
        g.on_select(face)?;
    }
    Ok(())
}

/// Builds the demo scene and rasterizes it.
pub fn render(config: &StudioConfig) -> Result<RasterSurface> {
    let mut g = Generator::new(Model::new(), catalog(config)?);
    paint_faces(&mut g)?;

    let cell = (config.width / 4).min(config.height / 3) as f32;
    let source = Rect::new(0.0, 0.0, TILE as f32, TILE as f32);
    let options = BlitOptions::default();

    for (face, col, row) in NET {
        let destination = Rect::new(col as f32 * cell, row as f32 * cell, cell, cell);
        let report = g
            .draw_face(face, source, destination, &options)
            .with_context(|| format!("drawing face {face:?}"))?;
        log::info!("face {face:<6} {} layer(s), {} skipped", report.drawn, report.skipped.len());
    }

    let mut surface = RasterSurface::new(config.width, config.height);
    surface.fill(Rgba8::opaque(24, 24, 32));
    let drawn = g.render(&mut surface);
    log::info!("rendered {drawn} blit(s) into {}x{}", config.width, config.height);
    Ok(surface)
}

pub fn run(config: &StudioConfig) -> Result<()> {
    let surface = render(config)?;
    surface
        .save(&config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;
    log::info!("wrote {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atlas_tiles_are_registered() {
        let mut texture = Texture::new(generate_atlas());
        register_tiles(&mut texture);
        assert_eq!(texture.frame_count(), 4);
        assert_eq!(texture.frame(ARROW), Some(Rect::new(48.0, 0.0, 16.0, 16.0)));
    }

    #[test]
    fn tile_names_map_to_rects() {
        assert_eq!(tile("tile_2_0").rectangle, Rect::new(32.0, 0.0, 16.0, 16.0));
        assert_eq!(tile("tile_1_3").rectangle, Rect::new(16.0, 48.0, 16.0, 16.0));
    }

    #[test]
    fn renders_every_face() {
        let surface = render(&StudioConfig::default()).unwrap();
        let background = Rgba([24, 24, 32, 255]);
        // cell = 64; sample the middle of each net cell.
        for (face, col, row) in NET {
            let px = surface.image().get_pixel(col * 64 + 32, row * 64 + 40);
            assert_ne!(*px, background, "face {face} was not drawn");
        }
        // Bottom-right cell of the net is empty.
        assert_eq!(*surface.image().get_pixel(3 * 64 + 32, 2 * 64 + 32), background);
    }

    #[test]
    fn missing_atlas_file_is_error() {
        let config = StudioConfig { atlas: Some("/no/such/atlas.png".into()), ..StudioConfig::default() };
        assert!(render(&config).is_err());
    }
}
