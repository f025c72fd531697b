//! Letter icon: rounded brand-blue square with a centered white "E"

use tiny_skia::Rect;

use super::{shape, IconScene, LayerKind, BRAND_BLUE, LETTER, WHITE};
use crate::error::RenderError;
use crate::font::FontResolver;

/// Inset of the background square from every edge
const PADDING: f32 = 2.0;

/// Font size relative to the icon size
const FONT_SCALE: f32 = 0.6;

pub fn scene(size: u32, fonts: &FontResolver) -> Result<IconScene, RenderError> {
    let mut scene = IconScene::new(size)?;
    let s = size as f32;

    let radius = (size / 8) as f32;
    if let Some(background) = Rect::from_ltrb(PADDING, PADDING, s - PADDING, s - PADDING)
        .and_then(|rect| shape::rounded_rect(rect, radius))
    {
        scene.push(LayerKind::RoundedRect, background, BRAND_BLUE);
    }

    let font = fonts.resolve((s * FONT_SCALE) as u32);
    if let Some(glyph) = font.glyph(LETTER).and_then(|g| g.centered(size)) {
        scene.push(LayerKind::Glyph, glyph, WHITE);
    }

    Ok(scene)
}
