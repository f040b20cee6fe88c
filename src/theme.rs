//! Design tokens for the estimator page
//! Components never hard-code colors or font sizes; they look them up here by name

use crate::constants::THEME_FILE;
use crate::error::{Error, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

pub const PRESETS: &[&str] = &["light", "dark"];

// =============================================================================
// TOKENS
// =============================================================================

/// Named theme values. Serialized camelCase so a `theme.json` reads like the
/// token paths components ask for (`fontSizes.1`, `colors.borderGray`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub font_sizes: Vec<f32>,
    pub space: Vec<f32>,
    pub radius: f32,
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Colors {
    pub text: String,
    pub background: String,
    pub border_gray: String,
    pub gray: String,
    pub blue: String,
}

/// A resolved token value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Number(f32),
    Color(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Color(c) => f.write_str(c),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Default for Colors {
    fn default() -> Self {
        Theme::light().colors
    }
}

// =============================================================================
// PRESETS
// =============================================================================

impl Theme {
    pub fn light() -> Self {
        Self {
            font_sizes: vec![12.0, 14.0, 16.0, 20.0, 24.0, 32.0, 48.0, 64.0],
            space: vec![0.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0],
            radius: 4.0,
            colors: Colors {
                text: "#1b1f23".into(),
                background: "#ffffff".into(),
                border_gray: "#d1d5da".into(),
                gray: "#8a939d".into(),
                blue: "#0366d6".into(),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            colors: Colors {
                text: "#e4e4e7".into(),      // zinc-200
                background: "#09090b".into(), // zinc-950
                border_gray: "#3f3f46".into(), // zinc-700
                gray: "#71717a".into(),      // zinc-500
                blue: "#2dd4bf".into(),      // teal-400
            },
            ..Self::light()
        }
    }

    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "light" => Ok(Self::light()),
            "dark" => Ok(Self::dark()),
            other => Err(Error::UnknownPreset(other.to_string())),
        }
    }

    /// Resolve the theme for this run: the named preset, overlaid with
    /// `theme.json` from the data directory (or `override_file`) when present.
    pub fn load(data_dir: &Path, preset: &str, override_file: Option<&Path>) -> Self {
        let base = Self::preset(preset).unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to light theme");
            Self::light()
        });

        let default_path = data_dir.join(THEME_FILE);
        let path = override_file.unwrap_or(default_path.as_path());
        if !path.exists() {
            if override_file.is_some() {
                warn!(path = %path.display(), "Theme file not found, using preset");
            } else {
                debug!(preset, "No theme file found, using preset");
            }
            return base;
        }

        match std::fs::read_to_string(path)
            .map_err(|e| Error::io(path, e))
            .and_then(|s| base.overlay(&s))
        {
            Ok(theme) => {
                debug!(path = %path.display(), preset, "Theme file applied");
                theme
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to apply theme file, using preset");
                base
            }
        }
    }

    /// Merge a (possibly partial) JSON theme onto `self`.
    pub fn overlay(&self, json: &str) -> Result<Self> {
        let mut merged = serde_json::to_value(self)?;
        let patch: serde_json::Value = serde_json::from_str(json)?;
        merge_json(&mut merged, patch);
        let theme: Theme = serde_json::from_value(merged)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Every color token must parse.
    pub fn validate(&self) -> Result<()> {
        for name in Colors::NAMES {
            self.color(name)?;
        }
        Ok(())
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Look up a token by dotted path, e.g. `fontSizes.1`, `radius`, `colors.blue`.
    pub fn get(&self, path: &str) -> Option<Token<'_>> {
        let mut parts = path.split('.');
        let head = parts.next()?;
        let tail = parts.next();
        if parts.next().is_some() {
            return None;
        }
        match (head, tail) {
            ("fontSizes", Some(i)) => self.font_size(i.parse().ok()?).map(Token::Number),
            ("space", Some(i)) => self.space.get(i.parse::<usize>().ok()?).copied().map(Token::Number),
            ("radius", None) => Some(Token::Number(self.radius)),
            ("colors", Some(name)) => self.colors.get(name).map(Token::Color),
            _ => None,
        }
    }

    pub fn font_size(&self, step: usize) -> Option<f32> {
        self.font_sizes.get(step).copied()
    }

    /// Space scale lookup. Negative steps mirror the positive value.
    pub fn space_step(&self, step: i32) -> Option<f32> {
        let value = *self.space.get(step.unsigned_abs() as usize)?;
        Some(if step < 0 { -value } else { value })
    }

    pub fn color(&self, name: &str) -> Result<Color32> {
        let value = self.colors.get(name).ok_or_else(|| Error::InvalidColor {
            token: name.to_string(),
            value: String::new(),
        })?;
        parse_color(value).ok_or_else(|| Error::InvalidColor {
            token: name.to_string(),
            value: value.to_string(),
        })
    }

    pub fn is_dark(&self) -> bool {
        self.color("background")
            .map(|c| {
                let luma = 0.2126 * c.r() as f32 + 0.7152 * c.g() as f32 + 0.0722 * c.b() as f32;
                luma < 128.0
            })
            .unwrap_or(false)
    }
}

impl Colors {
    pub const NAMES: [&'static str; 5] = ["text", "background", "borderGray", "gray", "blue"];

    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "text" => Some(&self.text),
            "background" => Some(&self.background),
            "borderGray" => Some(&self.border_gray),
            "gray" => Some(&self.gray),
            "blue" => Some(&self.blue),
            _ => None,
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color32> {
    Color32::from_hex(value.trim()).ok()
}

fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

pub fn apply_visuals(ctx: &egui::Context, theme: &Theme) {
    let text = theme.color("text").unwrap_or(Color32::BLACK);
    let background = theme.color("background").unwrap_or(Color32::WHITE);
    let border = theme.color("borderGray").unwrap_or(Color32::GRAY);
    let accent = theme.color("blue").unwrap_or(Color32::LIGHT_BLUE);

    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = background;
    visuals.window_fill = background;
    visuals.extreme_bg_color = background;
    visuals.override_text_color = Some(text);
    visuals.hyperlink_color = accent;
    visuals.selection.bg_fill = accent.gamma_multiply(0.3);
    visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, border);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, accent);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, accent);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn get_resolves_dotted_paths() {
        let theme = Theme::light();
        assert_eq!(theme.get("fontSizes.1"), Some(Token::Number(14.0)));
        assert_eq!(theme.get("radius"), Some(Token::Number(4.0)));
        assert_eq!(theme.get("colors.borderGray"), Some(Token::Color("#d1d5da")));
        assert_eq!(theme.get("space.3"), Some(Token::Number(16.0)));
    }

    #[test]
    fn get_rejects_unknown_paths() {
        let theme = Theme::light();
        assert_eq!(theme.get("colors.purple"), None);
        assert_eq!(theme.get("fontSizes.99"), None);
        assert_eq!(theme.get("fontSizes"), None);
        assert_eq!(theme.get("radius.0"), None);
        assert_eq!(theme.get("colors.blue.dark"), None);
        assert_eq!(theme.get(""), None);
    }

    #[test]
    fn token_display_drops_trailing_zero() {
        assert_eq!(Token::Number(14.0).to_string(), "14");
        assert_eq!(Token::Number(1.5).to_string(), "1.5");
        assert_eq!(Token::Color("#fff").to_string(), "#fff");
    }

    #[test]
    fn negative_space_steps_mirror() {
        let theme = Theme::light();
        assert_eq!(theme.space_step(2), Some(8.0));
        assert_eq!(theme.space_step(-2), Some(-8.0));
        assert_eq!(theme.space_step(42), None);
    }

    #[test]
    fn presets_parse_and_differ() {
        for name in PRESETS {
            let theme = Theme::preset(name).expect("preset");
            theme.validate().expect("valid colors");
        }
        assert!(!Theme::light().is_dark());
        assert!(Theme::dark().is_dark());
        assert!(matches!(Theme::preset("neon"), Err(Error::UnknownPreset(_))));
    }

    #[test]
    fn overlay_merges_partial_theme() {
        let theme = Theme::dark()
            .overlay(r##"{ "colors": { "blue": "#ff0000" }, "radius": 8 }"##)
            .expect("overlay");
        assert_eq!(theme.colors.blue, "#ff0000");
        assert_eq!(theme.radius, 8.0);
        // untouched keys keep the preset value
        assert_eq!(theme.colors.background, Theme::dark().colors.background);
        assert_eq!(theme.font_sizes, Theme::dark().font_sizes);
    }

    #[test]
    fn overlay_rejects_bad_color() {
        let err = Theme::light()
            .overlay(r#"{ "colors": { "gray": "not-a-color" } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColor { ref token, .. } if token == "gray"));
    }

    #[test]
    fn load_without_file_uses_preset() {
        let dir = std::env::temp_dir().join("bce-theme-missing");
        let theme = Theme::load(&dir, "dark", None);
        assert_eq!(theme, Theme::dark());
    }

    #[test]
    fn load_unknown_preset_falls_back_to_light() {
        let dir = std::env::temp_dir().join("bce-theme-missing");
        assert_eq!(Theme::load(&dir, "sepia", None), Theme::light());
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("bce-theme-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn load_applies_theme_file_from_data_dir() {
        let dir = scratch_dir("data-dir");
        std::fs::write(dir.join(THEME_FILE), r##"{ "colors": { "blue": "#ff0000" } }"##).expect("write");
        let theme = Theme::load(&dir, "light", None);
        assert_eq!(theme.colors.blue, "#ff0000");
        assert_eq!(theme.colors.text, Theme::light().colors.text);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn override_file_takes_precedence() {
        let dir = scratch_dir("override");
        std::fs::write(dir.join(THEME_FILE), r##"{ "colors": { "blue": "#ff0000" } }"##).expect("write");
        let custom = dir.join("custom.json");
        std::fs::write(&custom, r##"{ "colors": { "blue": "#00ff00" }, "radius": 6 }"##).expect("write");

        let theme = Theme::load(&dir, "dark", Some(&custom));
        assert_eq!(theme.colors.blue, "#00ff00");
        assert_eq!(theme.radius, 6.0);
        assert_eq!(theme.colors.background, Theme::dark().colors.background);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_override_file_uses_plain_preset() {
        let dir = scratch_dir("override-missing");
        std::fs::write(dir.join(THEME_FILE), r##"{ "colors": { "blue": "#ff0000" } }"##).expect("write");
        let theme = Theme::load(&dir, "light", Some(&dir.join("nope.json")));
        assert_eq!(theme, Theme::light());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_theme_file_falls_back_to_preset() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join(THEME_FILE), "{ not json").expect("write");
        assert_eq!(Theme::load(&dir, "dark", None), Theme::dark());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_color_in_theme_file_falls_back_to_preset() {
        let dir = scratch_dir("bad-color");
        std::fs::write(dir.join(THEME_FILE), r#"{ "colors": { "blue": "teal-ish" } }"#).expect("write");
        assert_eq!(Theme::load(&dir, "light", None), Theme::light());
        std::fs::remove_dir_all(&dir).ok();
    }

    proptest! {
        #[test]
        fn font_size_paths_match_scale(step in 0usize..16) {
            let theme = Theme::light();
            let expected = theme.font_sizes.get(step).copied().map(Token::Number);
            prop_assert_eq!(theme.get(&format!("fontSizes.{}", step)), expected);
        }
    }
}
