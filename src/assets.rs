//! Bundled image assets
//!
//! Assets ship inside the binary as SVG and are looked up by the file name the
//! page refers to. Rasterizing produces straight-alpha RGBA for egui textures
//! and PNG files for static export.

use crate::constants::HOUSE_ASSET;
use crate::error::{Error, Result};
use crate::utils::premul_to_straight;
use std::io::Cursor;
use tracing::debug;

pub const ICON_ASSET: &str = "icon.png";

// Flat-roofed two-storey house with glazing and a pair of trees
const HOUSE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 600 420"><rect x="0" y="360" width="600" height="60" fill="#d9e4d2"/><rect x="40" y="352" width="520" height="10" fill="#b7c4b0"/><rect x="90" y="200" width="300" height="152" fill="#f4f1ea"/><rect x="190" y="110" width="280" height="100" fill="#e6e1d6"/><rect x="180" y="100" width="300" height="12" fill="#3b3f45"/><rect x="80" y="190" width="120" height="12" fill="#3b3f45"/><rect x="210" y="128" width="160" height="64" fill="#9cc3d5"/><rect x="210" y="128" width="160" height="64" fill="none" stroke="#3b3f45" stroke-width="4"/><line x1="290" y1="128" x2="290" y2="192" stroke="#3b3f45" stroke-width="4"/><rect x="390" y="128" width="60" height="64" fill="#7b5e45"/><rect x="110" y="230" width="150" height="122" fill="#9cc3d5"/><rect x="110" y="230" width="150" height="122" fill="none" stroke="#3b3f45" stroke-width="4"/><line x1="185" y1="230" x2="185" y2="352" stroke="#3b3f45" stroke-width="4"/><rect x="290" y="250" width="56" height="102" fill="#3b3f45"/><circle cx="336" cy="304" r="3" fill="#e6e1d6"/><rect x="390" y="210" width="80" height="142" fill="#cfc8b9"/><rect x="402" y="240" width="56" height="40" fill="#9cc3d5"/><rect x="505" y="300" width="8" height="55" fill="#6b4f3a"/><circle cx="509" cy="280" r="34" fill="#6fa86a"/><circle cx="52" cy="298" r="26" fill="#7fb878"/><rect x="48" y="316" width="8" height="40" fill="#6b4f3a"/></svg>"##;

// Square icon: simplified house on an accent tile
const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#0366d6"/><rect x="12" y="30" width="40" height="22" fill="#ffffff"/><rect x="20" y="18" width="30" height="14" fill="#e6e1d6"/><rect x="17" y="16" width="36" height="4" fill="#1b1f23"/><rect x="16" y="36" width="14" height="10" fill="#9cc3d5"/><rect x="36" y="38" width="8" height="14" fill="#1b1f23"/></svg>"##;

/// Map an asset file name to its bundled source.
pub fn resolve(name: &str) -> Option<&'static str> {
    match name {
        HOUSE_ASSET => Some(HOUSE_SVG),
        ICON_ASSET => Some(ICON_SVG),
        _ => None,
    }
}

fn not_found(name: &str) -> Error {
    Error::Svg {
        name: name.to_string(),
        message: "asset not bundled".to_string(),
    }
}

/// Rasterize an asset at `width` pixels, preserving aspect ratio.
/// Returns straight-alpha RGBA pixels with the resulting size.
pub fn rasterize(name: &str, width: u32) -> Result<(Vec<u8>, u32, u32)> {
    let svg = resolve(name).ok_or_else(|| not_found(name))?;
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default()).map_err(|e| {
        Error::Svg {
            name: name.to_string(),
            message: e.to_string(),
        }
    })?;
    let svg_size = tree.size();
    let width = width.max(1);
    let scale = width as f32 / svg_size.width();
    let height = ((svg_size.height() * scale).ceil() as u32).max(1);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| Error::Svg {
        name: name.to_string(),
        message: format!("cannot allocate {}x{} pixmap", width, height),
    })?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    debug!(asset = name, width, height, "Asset rasterized");
    Ok((premul_to_straight(&pixmap), width, height))
}

/// Rasterize an asset and encode it as PNG.
pub fn encode_png(name: &str, width: u32) -> Result<Vec<u8>> {
    let (pixels, w, h) = rasterize(name, width)?;
    let img = image::RgbaImage::from_raw(w, h, pixels).ok_or_else(|| Error::Svg {
        name: name.to_string(),
        message: "pixel buffer does not match image size".to_string(),
    })?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}
