/// Fixed sizes, coordinates, and colors for the placeholder icons
///
/// Everything here is a compile-time constant: the generators take no input
/// and have no configuration surface, so these values are the single source
/// of truth for the output geometry.

pub mod canvas {
    /// Canvas edge length in pixels (both icons are square)
    pub const SIZE: u32 = 1024;
}

pub mod badge {
    use image::Rgb;

    /// Background fill
    pub const BACKGROUND: Rgb<u8> = Rgb([0x3b, 0x82, 0xf6]); // #3b82f6 blue

    /// Glyph and fallback-circle fill
    pub const FOREGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]); // white

    /// Letter rendered in the center of the badge
    pub const GLYPH: &str = "A";

    /// Glyph height in pixels
    pub const GLYPH_SCALE: f32 = 400.0;

    /// System font the glyph is rendered with
    pub const FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

    /// Radius of the fallback circle, centered on the canvas
    /// Bounding box [262, 262]..[762, 762], inset ~25% from each edge
    pub const FALLBACK_RADIUS: i32 = 250;

    /// Output file, relative to the invocation directory
    pub const OUTPUT_PATH: &str = "icon.png";
}

pub mod tree {
    use image::Rgb;

    /// Background fill
    pub const BACKGROUND: Rgb<u8> = Rgb([0xf0, 0xf9, 0xff]); // #f0f9ff light blue

    /// Trunk fill
    pub const TRUNK_COLOR: Rgb<u8> = Rgb([0x8b, 0x45, 0x13]); // #8b4513 brown

    pub const TRUNK_WIDTH: u32 = 80;
    pub const TRUNK_HEIGHT: u32 = 300;

    /// Gap between the trunk's bottom edge and the canvas bottom edge
    pub const TRUNK_BOTTOM_MARGIN: u32 = 100;

    /// Gap between the trunk's top edge and the canopy center
    pub const CANOPY_RISE: u32 = 100;

    /// Canopy layers, drawn in order (largest first, so later layers occlude
    /// earlier ones). Offsets are relative to the canopy center:
    /// (left, top, right, bottom, fill).
    pub const CANOPY_LAYERS: [(i32, i32, i32, i32, Rgb<u8>); 3] = [
        (-250, -50, 250, 450, Rgb([0x22, 0xc5, 0x5e])), // #22c55e green
        (-220, -150, 220, 300, Rgb([0x16, 0xa3, 0x4a])), // #16a34a darker green
        (-180, -220, 180, 180, Rgb([0x15, 0x80, 0x3d])), // #15803d darkest green
    ];

    /// Output file, relative to the invocation directory.
    /// The parent directories must already exist.
    pub const OUTPUT_PATH: &str = "apps/desktop/src-tauri/icons/icon.png";

    /// Follow-up command that expands the single icon into the full size set
    pub const RESIZE_HINT: &str =
        "pnpm tauri icon apps/desktop/src-tauri/icons/icon.png";
}
