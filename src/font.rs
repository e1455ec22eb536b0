/// Glyph source selection for the badge letter
///
/// The renderer prefers a scalable system TrueType font sized to the icon,
/// but must never fail for lack of one: when no candidate font file loads,
/// a minimal built-in bitmap "E" of fixed size is used instead. The bitmap
/// ignores the requested point size; that degradation is accepted.
use std::fs;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::constants::font::{CANDIDATE_PATHS, GLYPH_CHAR};

/// Fixed dimensions of the built-in bitmap glyph
const BUILTIN_GLYPH_WIDTH: u32 = 8;
const BUILTIN_GLYPH_HEIGHT: u32 = 12;
const BUILTIN_STROKE: u32 = 2;

/// A resolved way to measure and draw the single badge character
pub enum GlyphSource {
    /// TrueType font rendered at the requested pixel scale
    Scalable { font: FontVec, scale: PxScale },
    /// Built-in fixed-size bitmap "E"
    Builtin,
}

impl GlyphSource {
    /// Bounding box of the badge character in this source
    pub fn glyph_size(&self) -> (u32, u32) {
        match self {
            GlyphSource::Scalable { font, scale } => text_size(*scale, font, GLYPH_CHAR),
            GlyphSource::Builtin => (BUILTIN_GLYPH_WIDTH, BUILTIN_GLYPH_HEIGHT),
        }
    }

    /// Draw the badge character with its bounding box top-left at (x, y).
    /// Coordinates may be negative at tiny sizes; drawing clips to the canvas.
    pub fn draw_glyph(&self, img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
        match self {
            GlyphSource::Scalable { font, scale } => {
                draw_text_mut(img, color, x, y, *scale, font, GLYPH_CHAR);
            }
            GlyphSource::Builtin => draw_builtin_glyph(img, x, y, color),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, GlyphSource::Builtin)
    }
}

/// Pick a glyph source for the given point size: first loadable candidate
/// font wins, otherwise the built-in bitmap.
pub fn select_glyph_source(point_size: f32) -> GlyphSource {
    select_from(CANDIDATE_PATHS, point_size)
}

/// Candidate-list variant of [`select_glyph_source`], split out so tests can
/// force the fallback path.
pub fn select_from(paths: &[&str], point_size: f32) -> GlyphSource {
    for path in paths {
        if let Some(font) = load_scalable(Path::new(path)) {
            return GlyphSource::Scalable {
                font,
                scale: PxScale::from(point_size),
            };
        }
    }
    GlyphSource::Builtin
}

fn load_scalable(path: &Path) -> Option<FontVec> {
    let data = fs::read(path).ok()?;
    FontVec::try_from_vec(data).ok()
}

fn draw_rect(img: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: Rgba<u8>) {
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// The bitmap "E": a full-height spine plus three horizontal bars
fn draw_builtin_glyph(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    let w = BUILTIN_GLYPH_WIDTH;
    let h = BUILTIN_GLYPH_HEIGHT;
    let s = BUILTIN_STROKE;

    // Spine
    draw_rect(img, x, y, s, h, color);
    // Top bar
    draw_rect(img, x, y, w, s, color);
    // Middle bar, one stroke shorter than the others
    draw_rect(img, x, y + (h / 2 - s / 2) as i32, w - s, s, color);
    // Bottom bar
    draw_rect(img, x, y + (h - s) as i32, w, s, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::colors;

    #[test]
    fn test_missing_candidates_fall_back_to_builtin() {
        let source = select_from(&["/nonexistent/font.ttf", "/also/missing.ttf"], 64.0);
        assert!(source.is_builtin());
    }

    #[test]
    fn test_empty_candidate_list_falls_back_to_builtin() {
        let source = select_from(&[], 12.0);
        assert!(source.is_builtin());
    }

    #[test]
    fn test_builtin_glyph_size_is_fixed() {
        assert_eq!(GlyphSource::Builtin.glyph_size(), (8, 12));
        // The bitmap ignores the requested point size
        let source = select_from(&[], 200.0);
        assert_eq!(source.glyph_size(), (8, 12));
    }

    #[test]
    fn test_builtin_glyph_draws_pixels() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
        GlyphSource::Builtin.draw_glyph(&mut img, 12, 10, colors::GLYPH);

        let painted = img.pixels().filter(|p| p.0[3] != 0).count();
        assert!(painted > 0, "builtin glyph painted no pixels");
        // Spine top-left corner lands exactly at the draw origin
        assert_eq!(*img.get_pixel(12, 10), colors::GLYPH);
    }

    #[test]
    fn test_builtin_glyph_clips_at_canvas_edge() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        // Mostly off-canvas; must not panic
        GlyphSource::Builtin.draw_glyph(&mut img, -6, -6, colors::GLYPH);
        GlyphSource::Builtin.draw_glyph(&mut img, 2, 2, colors::GLYPH);
        assert_eq!(*img.get_pixel(2, 2), colors::GLYPH);
    }
}
