//! Scene rasterization and PNG output

use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tiny_skia::{FillRule, Paint, Pixmap, Transform};

use super::{IconScene, Rgba};
use crate::error::RenderError;

/// Paint every layer, in order, onto a fresh transparent canvas
pub fn rasterize(scene: &IconScene) -> Result<Pixmap, RenderError> {
    let size = scene.size();
    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::InvalidSize(size))?;

    for layer in scene.layers() {
        tracing::trace!("Filling {:?} layer", layer.kind);
        let Rgba(r, g, b, a) = layer.color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        pixmap.fill_path(
            &layer.path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    Ok(pixmap)
}

/// Encode as an RGBA PNG with the strongest compression settings
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    // Pixmap data is premultiplied; PNG wants straight alpha.
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let Rgba(r, g, b, a) = Rgba::from(p.demultiply());
            [r, g, b, a]
        })
        .collect();

    let mut png = Vec::new();
    PngEncoder::new_with_quality(&mut png, CompressionType::Best, FilterType::Adaptive)
        .write_image(&rgba, pixmap.width(), pixmap.height(), ExtendedColorType::Rgba8)?;

    Ok(png)
}

/// Rasterize, encode and write `scene` to `path`, replacing any existing file
pub fn render_to_file(scene: &IconScene, path: &Path) -> Result<(), RenderError> {
    let pixmap = rasterize(scene)?;
    let png = encode_png(&pixmap)?;

    std::fs::write(path, &png).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {} bytes to {}", png.len(), path.display());
    println!("Created {} ({}x{})", path.display(), scene.size(), scene.size());
    Ok(())
}

/// Straight-alpha color of the pixel at (x, y)
///
/// `Pixmap::pixel` only checks the flat index, so an `x` past the row end
/// would read from the next row.
#[cfg(test)]
pub fn pixel_at(pixmap: &Pixmap, x: u32, y: u32) -> Option<Rgba> {
    if x >= pixmap.width() || y >= pixmap.height() {
        return None;
    }

    pixmap.pixel(x, y).map(|p| Rgba::from(p.demultiply()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{LayerKind, BRAND_BLUE, TRANSPARENT};
    use tiny_skia::{PathBuilder, Rect};

    fn square_scene(size: u32) -> IconScene {
        let mut scene = IconScene::new(size).unwrap();
        let rect = Rect::from_ltrb(2.0, 2.0, size as f32 - 2.0, size as f32 - 2.0).unwrap();
        scene.push(LayerKind::Polygon, PathBuilder::from_rect(rect), BRAND_BLUE);
        scene
    }

    #[test]
    fn test_rasterize_starts_transparent() {
        let scene = IconScene::new(8).unwrap();
        let pixmap = rasterize(&scene).unwrap();

        assert_eq!(pixmap.width(), 8);
        assert_eq!(pixmap.height(), 8);
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn test_rasterize_fills_layers() {
        let pixmap = rasterize(&square_scene(16)).unwrap();

        assert_eq!(pixel_at(&pixmap, 8, 8), Some(BRAND_BLUE));
        assert_eq!(pixel_at(&pixmap, 2, 2), Some(BRAND_BLUE));
        assert_eq!(pixel_at(&pixmap, 1, 1), Some(TRANSPARENT));
        assert_eq!(pixel_at(&pixmap, 14, 14), Some(TRANSPARENT));
        assert_eq!(pixel_at(&pixmap, 16, 0), None);
    }

    #[test]
    fn test_pixel_at_out_of_bounds() {
        let pixmap = rasterize(&square_scene(16)).unwrap();

        // (16, 2) would alias (0, 3) without the column check.
        assert_eq!(pixel_at(&pixmap, 0, 3), Some(TRANSPARENT));
        assert_eq!(pixel_at(&pixmap, 16, 2), None);
        assert_eq!(pixel_at(&pixmap, 20, 5), None);
        assert_eq!(pixel_at(&pixmap, 3, 16), None);
        assert_eq!(pixel_at(&pixmap, 15, 15), Some(TRANSPARENT));
    }

    #[test]
    fn test_later_layers_paint_on_top() {
        let mut scene = square_scene(16);
        let inner = Rect::from_ltrb(6.0, 6.0, 10.0, 10.0).unwrap();
        scene.push(LayerKind::Polygon, PathBuilder::from_rect(inner), crate::icon::WHITE);

        let pixmap = rasterize(&scene).unwrap();
        assert_eq!(pixel_at(&pixmap, 7, 7), Some(crate::icon::WHITE));
        assert_eq!(pixel_at(&pixmap, 3, 3), Some(BRAND_BLUE));
    }

    #[test]
    fn test_encode_png_roundtrip_keeps_alpha() {
        let pixmap = rasterize(&square_scene(32)).unwrap();
        let png = encode_png(&pixmap).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);

        let decoded = decoded.to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.get_pixel(16, 16).0, [5, 40, 242, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_render_to_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"stale").unwrap();

        render_to_file(&square_scene(16), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_render_to_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");

        let err = render_to_file(&square_scene(16), &path).unwrap_err();
        match err {
            RenderError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
