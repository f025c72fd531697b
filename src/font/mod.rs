//! Font probing and glyph outlines
//!
//! A font is either a scalable face read from disk or the built-in bitmap
//! font. Both produce a [`GlyphOutline`]: a filled path in pixel units whose
//! bounding box starts at the origin, ready to be placed on the canvas.

mod builtin;

pub use builtin::BitmapFont;

use std::path::{Path, PathBuf};

use tiny_skia::{PathBuilder, Transform};

use crate::error::FontError;

/// Font files tried, in order, for the letter icons
pub const LETTER_FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/arial.ttf",
    "C:/Windows/Fonts/calibri.ttf",
    "arial.ttf",
    "/System/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// The only font file tried for the small logo icons
pub const LOGO_FONT_PATH: &str = "C:/Windows/Fonts/arial.ttf";

/// A glyph path in pixel units, y-down, with its bounding box at the origin
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    path: tiny_skia::Path,
    width: u32,
    height: u32,
}

impl GlyphOutline {
    fn new(path: tiny_skia::Path) -> Option<Self> {
        let bounds = path.bounds();
        let path = path.transform(Transform::from_translate(-bounds.left(), -bounds.top()))?;

        Some(Self {
            path,
            width: bounds.width().ceil() as u32,
            height: bounds.height().ceil() as u32,
        })
    }

    /// Rendered width in whole pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rendered height in whole pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Position the glyph centered on a `size` square canvas
    ///
    /// The bounding box lands at `((size - w) / 2, (size - h) / 2 - 1)` using
    /// floor division; the extra pixel lifts the glyph slightly.
    pub fn centered(self, size: u32) -> Option<tiny_skia::Path> {
        let (x, y) = self.centered_origin(size);
        tracing::debug!(
            "Placing {}x{} glyph at ({}, {}) on {}px canvas",
            self.width(),
            self.height(),
            x,
            y,
            size
        );
        self.path.transform(Transform::from_translate(x as f32, y as f32))
    }

    fn centered_origin(&self, size: u32) -> (i32, i32) {
        let x = (size as i32 - self.width() as i32).div_euclid(2);
        let y = (size as i32 - self.height() as i32).div_euclid(2) - 1;
        (x, y)
    }
}

/// A scalable font face loaded from a file
#[derive(Debug, Clone)]
pub struct OutlineFont {
    path: PathBuf,
    data: Vec<u8>,
    px: f32,
}

impl OutlineFont {
    /// Read and validate a font file, to be rendered at `px` pixels per em
    pub fn load(path: &Path, px: f32) -> Result<Self, FontError> {
        if !path.exists() {
            return Err(FontError::NotFound);
        }

        let data = std::fs::read(path)?;
        ttf_parser::Face::parse(&data, 0)?;

        Ok(Self {
            path: path.to_path_buf(),
            data,
            px,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        let face = ttf_parser::Face::parse(&self.data, 0).ok()?;
        let glyph_id = face.glyph_index(ch)?;

        let mut builder = OutlinePathBuilder {
            builder: PathBuilder::new(),
        };
        face.outline_glyph(glyph_id, &mut builder)?;
        let path = builder.builder.finish()?;

        // Font units are y-up.
        let scale = self.px / f32::from(face.units_per_em());
        let path = path.transform(Transform::from_scale(scale, -scale))?;

        GlyphOutline::new(path)
    }
}

struct OutlinePathBuilder {
    builder: PathBuilder,
}

impl ttf_parser::OutlineBuilder for OutlinePathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// A resolved font
#[derive(Debug, Clone)]
pub enum Font {
    Outline(OutlineFont),
    Builtin(BitmapFont),
}

impl Font {
    /// Outline for `ch`
    ///
    /// A character missing from a loaded face is drawn with the built-in font.
    pub fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        match self {
            Font::Outline(font) => font.glyph(ch).or_else(|| {
                tracing::warn!(
                    "No outline for {:?} in {}, using built-in glyph",
                    ch,
                    font.path().display()
                );
                BitmapFont.glyph(ch)
            }),
            Font::Builtin(font) => font.glyph(ch),
        }
    }

    #[cfg(test)]
    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }
}

/// Ordered list of font files to probe
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolver that always yields the built-in font
    #[cfg(test)]
    pub fn builtin_only() -> Self {
        Self::default()
    }

    /// First candidate that exists and parses, else the built-in font
    pub fn resolve(&self, px: u32) -> Font {
        for path in &self.candidates {
            match OutlineFont::load(path, px as f32) {
                Ok(font) => {
                    tracing::debug!("Using font {} at {}px", path.display(), px);
                    return Font::Outline(font);
                }
                Err(e) => tracing::debug!("Skipping font {}: {}", path.display(), e),
            }
        }

        tracing::debug!("No font candidate resolved, using built-in font");
        Font::Builtin(BitmapFont)
    }
}

/// Font resolvers for both icon variants
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    pub letter: FontResolver,
    pub logo: FontResolver,
}

impl FontSet {
    /// The hard-coded platform font locations
    pub fn system() -> Self {
        Self {
            letter: FontResolver::new(LETTER_FONT_CANDIDATES.iter().copied()),
            logo: FontResolver::new([LOGO_FONT_PATH]),
        }
    }

    /// Skip probing entirely; every glyph comes from the built-in font
    #[cfg(test)]
    pub fn builtin_only() -> Self {
        Self::default()
    }
}
