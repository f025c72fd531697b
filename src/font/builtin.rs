//! Built-in fixed-size bitmap font
//!
//! Uppercase Latin letters on a 5x7 grid, one row per byte with the leftmost
//! column in bit 4. Each set cell becomes a 1px square, so the glyph size does
//! not depend on the requested font size.

use tiny_skia::{PathBuilder, Rect};

use super::GlyphOutline;

const GLYPH_COLS: u32 = 5;

#[rustfmt::skip]
const UPPERCASE: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// The fallback font used when no font file resolves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        let rows = bitmap(ch)?;

        let mut builder = PathBuilder::new();
        for (y, &row) in rows.iter().enumerate() {
            // One rectangle per horizontal run of set cells.
            let mut col = 0;
            while col < GLYPH_COLS {
                if !is_set(row, col) {
                    col += 1;
                    continue;
                }

                let start = col;
                while col < GLYPH_COLS && is_set(row, col) {
                    col += 1;
                }

                let run = Rect::from_xywh(start as f32, y as f32, (col - start) as f32, 1.0)?;
                builder.push_rect(run);
            }
        }

        GlyphOutline::new(builder.finish()?)
    }
}

fn bitmap(ch: char) -> Option<&'static [u8; 7]> {
    if ch.is_ascii_uppercase() {
        UPPERCASE.get((ch as u8 - b'A') as usize)
    } else {
        None
    }
}

fn is_set(row: u8, col: u32) -> bool {
    row & (1 << (GLYPH_COLS - 1 - col)) != 0
}
