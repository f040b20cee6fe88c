//! Static export of the page as HTML plus its image asset

use crate::app::page::page;
use crate::assets;
use crate::constants::{HOUSE_ASSET, PAGE_TITLE};
use crate::error::{Error, Result};
use crate::theme::Theme;
use crate::ui::html;
use std::path::{Path, PathBuf};
use tracing::info;

pub const INDEX_FILE: &str = "index.html";

/// Pixel width of the exported house image
pub const EXPORT_IMAGE_WIDTH: u32 = 1200;

/// Write `index.html` and the house image into `dir`. Returns the index path.
pub fn write_site(dir: &Path, theme: &Theme) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let tree = page(theme);
    let index = dir.join(INDEX_FILE);
    std::fs::write(&index, html::document(PAGE_TITLE, &tree, theme)).map_err(|e| Error::io(&index, e))?;

    let png = assets::encode_png(HOUSE_ASSET, EXPORT_IMAGE_WIDTH)?;
    let image_path = dir.join(HOUSE_ASSET);
    std::fs::write(&image_path, &png).map_err(|e| Error::io(&image_path, e))?;

    info!(dir = %dir.display(), bytes = png.len(), "Static page exported");
    Ok(index)
}
