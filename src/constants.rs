/// Application-wide constants for icon geometry, colors, and output layout

pub mod geometry {
    /// Inset of the outer disk from each canvas edge, in pixels.
    /// Fixed regardless of icon size; at 16px and 20px-and-below edges
    /// the disk degenerates and is skipped rather than clamped.
    pub const DISK_MARGIN_PX: i32 = 10;

    /// Inner disk radius as a fraction of the outer disk radius
    pub const INNER_DISK_RATIO: f32 = 0.7;

    /// Glyph point size as a fraction of the icon edge length
    pub const GLYPH_SIZE_RATIO: f32 = 0.4;
}

pub mod colors {
    use image::Rgba;

    /// Outer disk fill (#667EEA)
    pub const OUTER_DISK: Rgba<u8> = Rgba([102, 126, 234, 255]);

    /// Inner disk fill (#764BA2)
    pub const INNER_DISK: Rgba<u8> = Rgba([118, 75, 162, 255]);

    /// Letter glyph fill
    pub const GLYPH: Rgba<u8> = Rgba([255, 255, 255, 255]);
}

pub mod output {
    /// Directory all icons are written into, created if absent
    pub const DIR: &str = "public";
}

pub mod font {
    /// The single character rendered in the badge center
    pub const GLYPH_CHAR: &str = "E";

    /// System TrueType fonts tried in order before falling back to the
    /// built-in bitmap glyph
    pub const CANDIDATE_PATHS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ];
}
