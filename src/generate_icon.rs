/// Generate the placeholder "A" badge icon
///
/// Writes `icon.png` into the current directory. Takes no arguments.

use anyhow::Result;
use arbor_icons::badge;
use arbor_icons::constants::badge::OUTPUT_PATH;
use std::path::Path;

fn main() -> Result<()> {
    badge::generate(Path::new(OUTPUT_PATH))
}
