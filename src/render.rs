/// Icon rendering: a two-tone circular badge with a centered letter glyph
///
/// Each icon is drawn fresh on a transparent square canvas - an outer disk
/// inset 10px from every edge, a smaller inner disk on top of it, and a
/// white "E" centered over both. The 10px margin is intentionally not
/// scaled down for small icons; below a 22px edge the disks degenerate
/// and are skipped, leaving just the glyph.
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::constants::{colors, geometry};
use crate::font::{select_glyph_source, GlyphSource};

/// One entry of the fixed icon set: edge length in pixels and the file
/// name it is saved under
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub edge_length: u32,
    pub output_name: &'static str,
}

/// The seven icons every run produces, in generation order
pub const ICON_SET: [IconSpec; 7] = [
    IconSpec { edge_length: 192, output_name: "pwa-192x192.png" },
    IconSpec { edge_length: 512, output_name: "pwa-512x512.png" },
    IconSpec { edge_length: 192, output_name: "icon-192x192.png" },
    IconSpec { edge_length: 512, output_name: "icon-512x512.png" },
    IconSpec { edge_length: 180, output_name: "apple-touch-icon.png" },
    IconSpec { edge_length: 32, output_name: "favicon-32x32.png" },
    IconSpec { edge_length: 16, output_name: "favicon-16x16.png" },
];

/// Render one badge icon at the given edge length.
///
/// Picks a glyph source per call so a missing system font degrades to the
/// built-in bitmap without affecting other renders.
pub fn render_icon(edge_length: u32) -> RgbaImage {
    let point_size = geometry::GLYPH_SIZE_RATIO * edge_length as f32;
    render_icon_with(edge_length, &select_glyph_source(point_size))
}

/// [`render_icon`] with a caller-supplied glyph source
pub fn render_icon_with(edge_length: u32, glyph: &GlyphSource) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(edge_length, edge_length, Rgba([0, 0, 0, 0]));

    let center = (edge_length / 2) as i32;
    let outer_radius = center - geometry::DISK_MARGIN_PX;

    // Degenerate at 16px (and anything 20px and under): the fixed margin
    // leaves no positive radius, so no disk is drawn at all.
    if outer_radius > 0 {
        draw_filled_circle_mut(&mut img, (center, center), outer_radius, colors::OUTER_DISK);

        let inner_radius = (outer_radius as f32 * geometry::INNER_DISK_RATIO) as i32;
        if inner_radius > 0 {
            draw_filled_circle_mut(&mut img, (center, center), inner_radius, colors::INNER_DISK);
        }
    }

    let (text_width, text_height) = glyph.glyph_size();
    let x = (edge_length as i32 - text_width as i32) / 2;
    let y = (edge_length as i32 - text_height as i32) / 2;
    glyph.draw_glyph(&mut img, x, y, colors::GLYPH);

    img
}

/// Render the icon described by `spec` and save it as PNG under `out_dir`,
/// overwriting any existing file of the same name.
pub fn write_icon(spec: &IconSpec, out_dir: &Path) -> Result<()> {
    let img = render_icon(spec.edge_length);
    let path = out_dir.join(spec.output_name);
    img.save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_has_seven_entries_in_order() {
        assert_eq!(ICON_SET.len(), 7);
        assert_eq!(ICON_SET[0].output_name, "pwa-192x192.png");
        assert_eq!(ICON_SET[6].output_name, "favicon-16x16.png");
        assert_eq!(ICON_SET[6].edge_length, 16);
    }

    #[test]
    fn test_degenerate_size_skips_disks() {
        // 16px: center 8, radius 8 - 10 = -2, so nothing but the glyph
        let img = render_icon_with(16, &GlyphSource::Builtin);
        assert!(img
            .pixels()
            .all(|p| *p != crate::constants::colors::OUTER_DISK));
        assert!(img
            .pixels()
            .all(|p| *p != crate::constants::colors::INNER_DISK));
    }

    #[test]
    fn test_disk_layering_at_32px() {
        // 32px: center 16, outer radius 6, inner radius 4. The builtin
        // glyph spans x 12..20, y 10..22, so probe to the right of it.
        let img = render_icon_with(32, &GlyphSource::Builtin);
        // Between inner and outer radius: outer disk shows through
        assert_eq!(*img.get_pixel(21, 16), crate::constants::colors::OUTER_DISK);
        // Inside the inner radius, clear of any glyph stroke
        assert_eq!(*img.get_pixel(19, 16), crate::constants::colors::INNER_DISK);
    }
}
