//! Logo icon: brand diamond with accents, or a blue disc with an "E"
//!
//! The diamond does not survive at favicon scale below 32px, so the small
//! sizes fall back to the disc badge.

use tiny_skia::Rect;

use super::{shape, IconScene, LayerKind, BRAND_BLUE, BRAND_GREEN, LETTER, WHITE};
use crate::error::RenderError;
use crate::font::FontResolver;

/// Smallest size that gets the full diamond
const DIAMOND_MIN_SIZE: u32 = 32;

/// Distance of the outer diamond tips from the canvas edge, relative to size
const OUTER_INSET: f32 = 0.1;
/// Inner diamond diagonal, relative to size
const INNER_SCALE: f32 = 0.3;
/// Accent dot diameter, relative to size
const ACCENT_SCALE: f32 = 0.1;

/// Inset of the badge disc from every edge
const BADGE_PADDING: f32 = 1.0;
/// Badge font size is the icon size minus this
const BADGE_FONT_SHRINK: u32 = 6;

pub fn scene(size: u32, fonts: &FontResolver) -> Result<IconScene, RenderError> {
    let mut scene = IconScene::new(size)?;

    if size >= DIAMOND_MIN_SIZE {
        push_diamond(&mut scene);
    } else {
        push_badge(&mut scene, fonts);
    }

    Ok(scene)
}

fn push_diamond(scene: &mut IconScene) {
    let s = scene.size() as f32;
    let c = (scene.size() / 2) as f32;

    let near = s * OUTER_INSET;
    let far = s * (1.0 - OUTER_INSET);
    if let Some(outer) = shape::polygon(&[(c, near), (far, c), (c, far), (near, c)]) {
        scene.push(LayerKind::Polygon, outer, BRAND_BLUE);
    }

    // Accent offsets are whole pixels.
    let half = (s * INNER_SCALE / 2.0).floor();
    if let Some(inner) = shape::polygon(&[(c, c - half), (c + half, c), (c, c + half), (c - half, c)])
    {
        scene.push(LayerKind::Polygon, inner, WHITE);
    }

    let r = (s * ACCENT_SCALE / 2.0).floor();
    if let Some(accent) = Rect::from_ltrb(c - r, c - r, c + r, c + r).and_then(shape::ellipse) {
        scene.push(LayerKind::Ellipse, accent, BRAND_GREEN);
    }
}

fn push_badge(scene: &mut IconScene, fonts: &FontResolver) {
    let size = scene.size();
    let s = size as f32;

    if let Some(disc) = Rect::from_ltrb(BADGE_PADDING, BADGE_PADDING, s - BADGE_PADDING, s - BADGE_PADDING)
        .and_then(shape::ellipse)
    {
        scene.push(LayerKind::Ellipse, disc, BRAND_BLUE);
    }

    let font = fonts.resolve(size.saturating_sub(BADGE_FONT_SHRINK));
    if let Some(glyph) = font.glyph(LETTER).and_then(|g| g.centered(size)) {
        scene.push(LayerKind::Glyph, glyph, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::raster::{pixel_at, rasterize};
    use crate::icon::TRANSPARENT;
    use tiny_skia::Pixmap;

    fn render(size: u32) -> Pixmap {
        let scene = scene(size, &FontResolver::builtin_only()).unwrap();
        rasterize(&scene).unwrap()
    }

    fn kinds_and_colors(size: u32) -> (Vec<LayerKind>, Vec<crate::icon::Rgba>) {
        let scene = scene(size, &FontResolver::builtin_only()).unwrap();
        (
            scene.layers().iter().map(|l| l.kind).collect(),
            scene.layers().iter().map(|l| l.color).collect(),
        )
    }

    #[test]
    fn test_large_sizes_draw_diamond_layers() {
        for size in [32, 48, 64] {
            let (kinds, colors) = kinds_and_colors(size);
            assert_eq!(
                kinds,
                vec![LayerKind::Polygon, LayerKind::Polygon, LayerKind::Ellipse]
            );
            assert_eq!(colors, vec![BRAND_BLUE, WHITE, BRAND_GREEN]);
        }
    }

    #[test]
    fn test_small_sizes_draw_badge_layers() {
        for size in [16, 24, 31] {
            let (kinds, colors) = kinds_and_colors(size);
            assert_eq!(kinds, vec![LayerKind::Ellipse, LayerKind::Glyph]);
            assert_eq!(colors, vec![BRAND_BLUE, WHITE]);
        }
    }

    #[test]
    fn test_diamond_pixels_48() {
        let pixmap = render(48);
        assert_eq!((pixmap.width(), pixmap.height()), (48, 48));

        assert_eq!(pixel_at(&pixmap, 24, 24), Some(BRAND_GREEN));
        assert_eq!(pixel_at(&pixmap, 24, 20), Some(WHITE));
        assert_eq!(pixel_at(&pixmap, 24, 12), Some(BRAND_BLUE));
        assert_eq!(pixel_at(&pixmap, 0, 0), Some(TRANSPARENT));
        assert_eq!(pixel_at(&pixmap, 2, 2), Some(TRANSPARENT));
        assert_eq!(pixel_at(&pixmap, 47, 47), Some(TRANSPARENT));
    }

    #[test]
    fn test_diamond_pixels_32() {
        let pixmap = render(32);

        // The 2px dot only partly covers the center pixel.
        let center = pixel_at(&pixmap, 16, 16).unwrap();
        assert!(center.1 > center.0 && center.1 > center.2, "{:?}", center);
        assert_ne!(center, WHITE);

        assert_eq!(pixel_at(&pixmap, 16, 13), Some(WHITE));
        assert_eq!(pixel_at(&pixmap, 16, 6), Some(BRAND_BLUE));
        assert_eq!(pixel_at(&pixmap, 1, 1), Some(TRANSPARENT));
    }

    #[test]
    fn test_accent_bounds_are_whole_pixels() {
        // (size, inner half-diagonal, accent left/right)
        for (size, half, accent) in [(32, 4.0, (15.0, 17.0)), (48, 7.0, (22.0, 26.0))] {
            let scene = scene(size, &FontResolver::builtin_only()).unwrap();
            let c = (size / 2) as f32;

            let inner = scene.layers()[1].path.bounds();
            assert_eq!(inner.top(), c - half, "size {}", size);
            assert_eq!(inner.bottom(), c + half, "size {}", size);
            assert_eq!(inner.left(), c - half, "size {}", size);

            let dot = scene.layers()[2].path.bounds();
            assert!((dot.left() - accent.0).abs() < 1e-4, "size {}: {:?}", size, dot);
            assert!((dot.right() - accent.1).abs() < 1e-4, "size {}: {:?}", size, dot);
            assert!((dot.top() - accent.0).abs() < 1e-4, "size {}: {:?}", size, dot);
        }
    }

    #[test]
    fn test_badge_pixels_16() {
        let pixmap = render(16);
        assert_eq!((pixmap.width(), pixmap.height()), (16, 16));

        assert_eq!(pixel_at(&pixmap, 3, 8), Some(BRAND_BLUE));
        assert_eq!(pixel_at(&pixmap, 0, 0), Some(TRANSPARENT));
        assert_eq!(pixel_at(&pixmap, 15, 15), Some(TRANSPARENT));

        // Built-in 'E' sits at (5, 3) on a 16px canvas.
        assert_eq!(pixel_at(&pixmap, 5, 3), Some(WHITE));
        assert_eq!(pixel_at(&pixmap, 9, 3), Some(WHITE));
        assert_eq!(pixel_at(&pixmap, 5, 9), Some(WHITE));
        assert_eq!(pixel_at(&pixmap, 6, 4), Some(BRAND_BLUE));
    }

    #[test]
    fn test_badge_font_size_never_underflows() {
        let scene = scene(4, &FontResolver::builtin_only()).unwrap();
        assert_eq!(scene.size(), 4);
    }
}
