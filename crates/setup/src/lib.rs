mod report;

pub use report::{ApplyReport, HtmlOutcome, IconOutcome, LockOutcome};

use anyhow::{anyhow, Context, Result};
use config::AppPaths;
use icon_source::IconSource;
use serde_json::Value;
use shellpack_core::{
    digest::compute_sha256_hex,
    manifest,
    sanitize_name,
    templating::{self, TemplateValues},
    SetupConfig,
};
use std::fs;

/// Rewrite `package.json`, the lock manifest and `public/index.html` under
/// `paths.root` from `config.json`, downloading the icon first if it is
/// missing.
///
/// Nothing is written until the icon step has succeeded. Files already
/// written are not rolled back if a later step fails.
pub async fn apply_config(paths: &AppPaths, icons: &dyn IconSource) -> Result<ApplyReport> {
    let cfg = config::load(paths)?;
    let mut pkg: Value =
        config::read_json(&paths.package).context("Failed to load package manifest")?;

    let sanitized_name = sanitize_name(&cfg.name);
    tracing::info!(name = %cfg.name, sanitized = %sanitized_name, "updating package.json from config.json");

    let pkg_fields = manifest::as_object_mut(&mut pkg, "package.json")?;
    let update = manifest::apply_metadata(pkg_fields, &cfg, &sanitized_name);
    if update.build_reset {
        tracing::warn!("package.json build section was not an object; replaced it");
    }

    let icon = ensure_icon(paths, &cfg, icons).await?;

    manifest::apply_packaging_targets(pkg_fields);
    config::write_json(&paths.package, &pkg)?;
    tracing::info!(path = %paths.package.display(), "package.json updated");

    let lock = sync_lock_manifest(paths, &sanitized_name)?;
    let html = update_index_html(paths, &cfg)?;

    Ok(ApplyReport {
        sanitized_name,
        icon,
        lock,
        html,
    })
}

async fn ensure_icon(
    paths: &AppPaths,
    cfg: &SetupConfig,
    icons: &dyn IconSource,
) -> Result<IconOutcome> {
    if paths.icon.exists() {
        tracing::info!(path = %paths.icon.display(), "icon already present, skipping download");
        return Ok(IconOutcome::Present);
    }

    let url = cfg
        .windowsicon
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            anyhow!(
                "windowsicon is not configured and {} does not exist",
                paths.icon.display()
            )
        })?;

    let bytes = icons
        .fetch(url)
        .await
        .with_context(|| format!("Failed to download icon from {url}"))?;

    fs::create_dir_all(&paths.public_dir)
        .with_context(|| format!("Failed to create {}", paths.public_dir.display()))?;
    fs::write(&paths.icon, &bytes)
        .with_context(|| format!("Failed to write {}", paths.icon.display()))?;

    let sha256 = compute_sha256_hex(&bytes);
    tracing::info!(
        path = %paths.icon.display(),
        bytes = bytes.len(),
        %sha256,
        "icon downloaded"
    );
    Ok(IconOutcome::Downloaded {
        bytes: bytes.len(),
        sha256,
    })
}

fn sync_lock_manifest(paths: &AppPaths, sanitized_name: &str) -> Result<LockOutcome> {
    if !paths.package_lock.exists() {
        tracing::debug!("no package-lock.json, skipping");
        return Ok(LockOutcome::Missing);
    }

    let mut lock: Value =
        config::read_json(&paths.package_lock).context("Failed to load lock manifest")?;
    if !manifest::sync_lock_name(&mut lock, sanitized_name) {
        tracing::debug!("package-lock.json has no name, skipping");
        return Ok(LockOutcome::NoName);
    }

    config::write_json(&paths.package_lock, &lock)?;
    tracing::info!(name = %sanitized_name, "package-lock.json updated with sanitized name");
    Ok(LockOutcome::Updated)
}

fn update_index_html(paths: &AppPaths, cfg: &SetupConfig) -> Result<HtmlOutcome> {
    if !paths.index_html.exists() {
        tracing::warn!(path = %paths.index_html.display(), "index.html not found, skipping HTML updates");
        return Ok(HtmlOutcome::Missing);
    }

    let html = fs::read_to_string(&paths.index_html)
        .with_context(|| format!("Failed to read {}", paths.index_html.display()))?;
    let rendered = templating::render(&html, &TemplateValues::from_config(cfg));
    fs::write(&paths.index_html, &rendered.html)
        .with_context(|| format!("Failed to write {}", paths.index_html.display()))?;

    let applied = rendered.substitutions;
    tracing::info!(
        title = applied.title,
        background = applied.background,
        stored_name = applied.stored_name,
        "index.html updated"
    );
    Ok(HtmlOutcome::Updated(applied))
}
