/// Tree icon rendering
///
/// Draws the layered tree used as the Arbor app icon: a brown trunk rectangle
/// and three overlapping green ellipses over a light blue field. All geometry
/// is derived from fixed constants, so rendering has no failure path.

use crate::constants::{canvas, tree::*};
use anyhow::{Context, Result};
use image::RgbImage;
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use std::path::Path;

/// Render the tree canvas
pub fn render() -> RgbImage {
    let mut img = RgbImage::from_pixel(canvas::SIZE, canvas::SIZE, BACKGROUND);

    // Trunk first; the canopy layers draw over it
    let trunk_x = (canvas::SIZE - TRUNK_WIDTH) / 2;
    let trunk_y = trunk_top();
    draw_filled_rect_mut(
        &mut img,
        Rect::at(trunk_x as i32, trunk_y as i32).of_size(TRUNK_WIDTH, TRUNK_HEIGHT),
        TRUNK_COLOR,
    );

    // Canopy: three ellipses around the point above the trunk, largest
    // first so each later layer occludes part of the one beneath it
    let (cx, cy) = canopy_center();
    for (left, top, right, bottom, color) in CANOPY_LAYERS {
        let center = (cx + (left + right) / 2, cy + (top + bottom) / 2);
        let rx = (right - left) / 2;
        let ry = (bottom - top) / 2;
        draw_filled_ellipse_mut(&mut img, center, rx, ry, color);
    }

    img
}

/// Render the tree and write it to `path`, overwriting any existing file.
///
/// The parent directories are not created here; a missing parent surfaces
/// as a write error.
pub fn generate(path: &Path) -> Result<()> {
    let img = render();
    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Tree icon created: {}", path.display());
    println!("  Run \"{}\" to generate all sizes", RESIZE_HINT);
    Ok(())
}

/// Canopy center: directly above the trunk's top edge
pub fn canopy_center() -> (i32, i32) {
    let cx = canvas::SIZE / 2;
    let cy = trunk_top() - CANOPY_RISE;
    (cx as i32, cy as i32)
}

/// Top edge of the trunk rectangle
fn trunk_top() -> u32 {
    canvas::SIZE - TRUNK_HEIGHT - TRUNK_BOTTOM_MARGIN
}
