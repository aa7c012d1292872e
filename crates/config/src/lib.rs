use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use shellpack_core::SetupConfig;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const PACKAGE_FILE: &str = "package.json";
const PACKAGE_LOCK_FILE: &str = "package-lock.json";
const PUBLIC_DIR: &str = "public";
const INDEX_HTML: &str = "index.html";
const ICON_FILE: &str = "icon.png";

/// File layout of an application root.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub root: PathBuf,
    pub config: PathBuf,
    pub package: PathBuf,
    pub package_lock: PathBuf,
    pub public_dir: PathBuf,
    pub index_html: PathBuf,
    pub icon: PathBuf,
}

impl AppPaths {
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let public_dir = root.join(PUBLIC_DIR);
        Self {
            config: root.join(CONFIG_FILE),
            package: root.join(PACKAGE_FILE),
            package_lock: root.join(PACKAGE_LOCK_FILE),
            index_html: public_dir.join(INDEX_HTML),
            icon: public_dir.join(ICON_FILE),
            public_dir,
            root,
        }
    }

    /// Resolve a manifest-relative path such as `build.win.icon`.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(value)
}

/// Pretty-print with two-space indentation and no trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    std::fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn load(paths: &AppPaths) -> Result<SetupConfig> {
    read_json(&paths.config).context("Failed to load setup config")
}
