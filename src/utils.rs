//! Utility functions

use std::path::PathBuf;

/// Per-user data directory (settings, theme file, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Build Cost Estimator")
}

/// Convert a premultiplied pixmap to straight-alpha RGBA bytes.
pub fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Format a layout fraction as a CSS percentage, e.g. `2/3` -> `66.67%`.
pub fn percent(fraction: f32) -> String {
    format!("{}%", (fraction * 10000.0).round() / 100.0)
}
