//! Icon scene types
//!
//! An icon is an ordered list of filled layers painted onto a transparent
//! square canvas. The variant modules build scenes; `raster` paints and
//! encodes them.

pub mod letter;
pub mod logo;
pub mod raster;
mod shape;

use std::path::Path;

use crate::error::RenderError;
use crate::font::FontSet;

/// Straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }
}

impl From<tiny_skia::ColorU8> for Rgba {
    fn from(c: tiny_skia::ColorU8) -> Self {
        Rgba(c.red(), c.green(), c.blue(), c.alpha())
    }
}

/// Brand blue, #0528F2
pub const BRAND_BLUE: Rgba = Rgba::opaque(5, 40, 242);
/// Brand green, #1AD937
pub const BRAND_GREEN: Rgba = Rgba::opaque(26, 217, 55);
pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
#[cfg(test)]
pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

/// Character drawn on the letter icons
pub const LETTER: char = 'E';

/// Which icon design to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    /// Rounded blue square with a white letter
    Letter,
    /// Diamond logo, or a blue disc with a letter below 32px
    Logo,
}

impl IconVariant {
    /// Build the scene for this variant at `size`
    pub fn scene(&self, size: u32, fonts: &FontSet) -> Result<IconScene, RenderError> {
        match self {
            IconVariant::Letter => letter::scene(size, &fonts.letter),
            IconVariant::Logo => logo::scene(size, &fonts.logo),
        }
    }

    /// Render at `size` and save as PNG to `path`
    pub fn render_to_file(
        &self,
        size: u32,
        path: &Path,
        fonts: &FontSet,
    ) -> Result<(), RenderError> {
        let scene = self.scene(size, fonts)?;
        raster::render_to_file(&scene, path)
    }
}

/// Kind of shape a layer was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    RoundedRect,
    Polygon,
    Ellipse,
    Glyph,
}

/// One filled shape, in canvas pixel coordinates
#[derive(Debug, Clone)]
pub struct Layer {
    pub kind: LayerKind,
    pub path: tiny_skia::Path,
    pub color: Rgba,
}

/// Ordered layers for a square canvas
#[derive(Debug, Clone)]
pub struct IconScene {
    size: u32,
    layers: Vec<Layer>,
}

impl IconScene {
    pub fn new(size: u32) -> Result<Self, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }

        Ok(Self {
            size,
            layers: Vec::new(),
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Add a layer on top of the existing ones
    pub fn push(&mut self, kind: LayerKind, path: tiny_skia::Path, color: Rgba) {
        self.layers.push(Layer { kind, path, color });
    }
}
