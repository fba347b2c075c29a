/// Badge icon rendering
///
/// Draws the square placeholder badge: a solid blue field with a large white
/// "A" centered on it. Font loading is the only fallible step; when the
/// system font cannot be read or parsed, a centered white circle stands in
/// for the glyph so the generator always produces an icon.

use crate::constants::{badge::*, canvas};
use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::RgbImage;
use imageproc::drawing::{draw_filled_ellipse_mut, draw_text_mut, text_size};
use std::fs;
use std::path::Path;

/// Render the badge canvas.
///
/// Tries the font-based glyph first. Any failure on that path is reported
/// once and replaced by the fallback circle; the fallback itself uses only
/// primitive shape drawing and cannot fail.
pub fn render() -> RgbImage {
    let mut img = RgbImage::from_pixel(canvas::SIZE, canvas::SIZE, BACKGROUND);

    match load_font() {
        Ok(font) => draw_centered_glyph(&mut img, &font),
        Err(e) => {
            eprintln!("⚠️  Could not load font: {:#}", e);
            draw_fallback_circle(&mut img);
        }
    }

    img
}

/// Render the badge as if the font were unavailable (fallback path only)
pub fn render_fallback() -> RgbImage {
    let mut img = RgbImage::from_pixel(canvas::SIZE, canvas::SIZE, BACKGROUND);
    draw_fallback_circle(&mut img);
    img
}

/// Render the badge and write it to `path`, overwriting any existing file
pub fn generate(path: &Path) -> Result<()> {
    let img = render();
    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Icon created: {}", path.display());
    Ok(())
}

fn load_font() -> Result<FontVec> {
    let data = fs::read(FONT_PATH)
        .with_context(|| format!("Failed to read font file {}", FONT_PATH))?;

    // Helvetica.ttc is a collection; take the first face
    FontVec::try_from_vec_and_index(data, 0)
        .with_context(|| format!("Failed to parse font {}", FONT_PATH))
}

fn draw_centered_glyph(img: &mut RgbImage, font: &FontVec) {
    let scale = PxScale::from(GLYPH_SCALE);
    let (w, h) = text_size(scale, font, GLYPH);

    let x = canvas::SIZE.saturating_sub(w) / 2;
    let y = canvas::SIZE.saturating_sub(h) / 2;
    draw_text_mut(img, FOREGROUND, x as i32, y as i32, scale, font, GLYPH);
}

fn draw_fallback_circle(img: &mut RgbImage) {
    let center = (canvas::SIZE / 2) as i32;
    draw_filled_ellipse_mut(
        img,
        (center, center),
        FALLBACK_RADIUS,
        FALLBACK_RADIUS,
        FOREGROUND,
    );
}
