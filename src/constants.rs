//! Application constants and configuration

pub const APP_NAME: &str = "Build Cost Estimator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PAGE_TITLE: &str = "Build cost estimator";

/// Bundled image shown next to the form
pub const HOUSE_ASSET: &str = "modern-architecture.png";

pub const SETTINGS_FILE: &str = "settings.json";
pub const THEME_FILE: &str = "theme.json";
pub const LOG_FILE: &str = "build-cost-estimator.log";

pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (960.0, 600.0);
pub const MIN_WINDOW_SIZE: (f32, f32) = (640.0, 420.0);
