//! App module - window state for the estimator page

pub mod page;

use crate::settings::Settings;
use crate::theme::{self, Theme};
use crate::types::FormState;
use crate::ui::render::TextureCache;
use crate::ui::tree::Node;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) theme: Theme,
    /// Built once on mount; the page never changes afterwards
    pub(crate) page: Node,
    pub(crate) form: FormState,
    pub(crate) textures: TextureCache,
    pub(crate) theme_preset: String,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, theme: Theme, settings: Settings, data_dir: PathBuf) -> Self {
        theme::apply_visuals(&cc.egui_ctx, &theme);

        let page = page::page(&theme);
        info!(preset = %settings.theme, dark = theme.is_dark(), "Page mounted");

        Self {
            theme,
            page,
            form: FormState::default(),
            textures: TextureCache::new(),
            theme_preset: settings.theme,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            theme: self.theme_preset.clone(),
        };
        settings.save(&self.data_dir);
    }
}
