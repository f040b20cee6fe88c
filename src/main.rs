#![windows_subsystem = "windows"]
//! Build Cost Estimator - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod assets;
mod constants;
mod error;
mod export;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use clap::Parser;
use constants::*;
use eframe::egui;
use settings::Settings;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use theme::Theme;
use tracing::{error, info, warn};
use utils::get_data_dir;

#[derive(Parser, Debug)]
#[command(name = "build-cost-estimator", version, about = "Build cost estimator form page")]
struct Cli {
    /// Write the page as static HTML (plus its image) into DIR and exit
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Theme preset for this run
    #[arg(long, value_name = "NAME", value_parser = clap::builder::PossibleValuesParser::new(theme::PRESETS))]
    theme: Option<String>,

    /// JSON theme overlaid on the preset, instead of theme.json in the data directory
    #[arg(long, value_name = "PATH")]
    theme_file: Option<PathBuf>,
}

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,build_cost_estimator=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn window_icon() -> Option<egui::IconData> {
    match assets::rasterize(assets::ICON_ASSET, 64) {
        Ok((rgba, width, height)) => Some(egui::IconData { rgba, width, height }),
        Err(e) => {
            warn!(error = %e, "Failed to render window icon");
            None
        }
    }
}

/// Write the static site for `--export`. Failures are logged and echoed to
/// stderr, since the log file is the only other sink.
fn export_site(dir: &Path, theme: &Theme) -> error::Result<PathBuf> {
    match export::write_site(dir, theme) {
        Ok(index) => {
            info!(path = %index.display(), "Export finished");
            Ok(index)
        }
        Err(e) => {
            error!(error = %e, dir = %dir.display(), "Export failed");
            eprintln!("export failed: {}", e);
            Err(e)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Build Cost Estimator starting");

    let settings = Settings::load(&data_dir);
    let preset = cli.theme.as_deref().unwrap_or(&settings.theme);
    let theme = Theme::load(&data_dir, preset, cli.theme_file.as_deref());

    // Return instead of exiting so the log guard drops and flushes
    if let Some(dir) = cli.export {
        return match export_site(&dir, &theme) {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    // Restore saved window position/size
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let (default_w, default_h) = DEFAULT_WINDOW_SIZE;
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(default_w, default_h)))
        .with_min_inner_size([MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1])
        .with_title(APP_NAME);

    if let Some(icon) = window_icon() {
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, theme, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Window failed");
            eprintln!("{}: {}", APP_NAME, e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        let side = self.theme.space_step(4).unwrap_or(32.0) as i8;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(side, 0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut cx = ui::render::RenderContext {
                            theme: &self.theme,
                            form: &mut self.form,
                            textures: &mut self.textures,
                        };
                        ui::render::show(ui, &self.page, &mut cx);
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down");
        self.save_settings();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_accepts_known_presets() {
        let cli = Cli::try_parse_from(["build-cost-estimator", "--theme", "dark", "--export", "out"])
            .expect("parse");
        assert_eq!(cli.theme.as_deref(), Some("dark"));
        assert_eq!(cli.export, Some(PathBuf::from("out")));
        assert_eq!(cli.theme_file, None);
    }

    #[test]
    fn cli_rejects_unknown_theme() {
        let err = Cli::try_parse_from(["build-cost-estimator", "--theme", "sepia"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn failed_export_is_reported_as_error() {
        let file = std::env::temp_dir().join(format!("bce-main-export-{}", std::process::id()));
        std::fs::write(&file, "x").expect("write");
        let result = export_site(&file, &Theme::light());
        assert!(matches!(result, Err(error::Error::Io { .. })));
        std::fs::remove_file(&file).ok();
    }

    #[test]
    fn export_returns_index_path() {
        let dir = std::env::temp_dir().join(format!("bce-main-export-dir-{}", std::process::id()));
        let index = export_site(&dir, &Theme::light()).expect("export");
        assert!(index.ends_with(export::INDEX_FILE));
        std::fs::remove_dir_all(&dir).ok();
    }
}
