use anyhow::{Context, Result};
use config::AppPaths;
use serde_json::Value;
use shellpack_core::manifest;
use std::path::PathBuf;
use tauri::{AppHandle, Icon, WindowBuilder, WindowUrl};

pub const MAIN_WINDOW: &str = "main";
const DEFAULT_TITLE: &str = "shellpack";
const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

/// Ctrl+P / Cmd+P prints the page with the webview's own dialog.
pub const PRINT_SHORTCUT_SCRIPT: &str = r#"
(function () {
  window.addEventListener('keydown', function (event) {
    var key = (event.key || '').toLowerCase();
    if (!(event.ctrlKey || event.metaKey) || key !== 'p') {
      return;
    }
    event.preventDefault();
    try {
      window.print();
    } catch (err) {
      if (window.__TAURI__) {
        window.__TAURI__.invoke('report_print_failure', { reason: String(err) });
      }
    }
  }, true);
})();
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub icon: Option<PathBuf>,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            icon: None,
        }
    }
}

/// Title and icon from `package.json`. The icon is only used if the file
/// named by `build.win.icon` exists.
pub fn read_window_settings(paths: &AppPaths) -> WindowSettings {
    let pkg: Value = match config::read_json(&paths.package) {
        Ok(pkg) => pkg,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "failed to read icon from package.json");
            return WindowSettings::default();
        }
    };

    let icon = manifest::win_icon(&pkg)
        .map(|relative| paths.resolve(relative))
        .filter(|path| path.exists());
    let title = manifest::product_name(&pkg)
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    WindowSettings { title, icon }
}

pub fn create_main_window(app: &AppHandle, paths: &AppPaths) -> Result<()> {
    let settings = read_window_settings(paths);

    let window = WindowBuilder::new(app, MAIN_WINDOW, WindowUrl::App("index.html".into()))
        .title(settings.title.as_str())
        .inner_size(WIDTH, HEIGHT)
        .initialization_script(PRINT_SHORTCUT_SCRIPT)
        .build()
        .context("Failed to create main window")?;

    if let Some(icon) = settings.icon {
        match window.set_icon(Icon::File(icon.clone())) {
            Ok(()) => tracing::info!(path = %icon.display(), "window icon set"),
            Err(err) => tracing::warn!(path = %icon.display(), error = %err, "failed to set window icon"),
        }
    }

    Ok(())
}
