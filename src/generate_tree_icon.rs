/// Generate the Arbor tree icon
///
/// Writes `apps/desktop/src-tauri/icons/icon.png` relative to the current
/// directory. The icons directory must already exist. Takes no arguments.

use anyhow::Result;
use arbor_icons::constants::tree::OUTPUT_PATH;
use arbor_icons::tree;
use std::path::Path;

fn main() -> Result<()> {
    tree::generate(Path::new(OUTPUT_PATH))
}
