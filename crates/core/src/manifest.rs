use crate::models::{is_truthy, SetupConfig, ICON_PATH, OUTPUT_DIR, PLATFORM_TARGETS};
use anyhow::{bail, Result};
use serde_json::{json, Map, Value};

/// Whitespace as a browser regex `\s` sees it: Unicode White_Space minus
/// NEL, plus the byte-order mark.
fn is_script_whitespace(ch: char) -> bool {
    ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// Package-safe form of a display name: lowercase, whitespace runs become a
/// single `-`, anything outside `[a-z0-9-]` is dropped.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if is_script_whitespace(ch) {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        out.extend(
            ch.to_lowercase()
                .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')),
        );
    }
    out
}

/// Borrow a parsed document as a JSON object, failing for arrays and scalars.
pub fn as_object_mut<'a>(doc: &'a mut Value, what: &str) -> Result<&'a mut Map<String, Value>> {
    match doc {
        Value::Object(map) => Ok(map),
        other => bail!("{what} must be a JSON object, found {}", kind_of(other)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetadataUpdate {
    /// `build` existed but was not an object and has been replaced.
    pub build_reset: bool,
}

/// Copy name/version/description into the manifest and fill in the
/// identity part of the `build` section.
pub fn apply_metadata(
    pkg: &mut Map<String, Value>,
    config: &SetupConfig,
    sanitized_name: &str,
) -> MetadataUpdate {
    pkg.insert("name".to_string(), Value::String(sanitized_name.to_string()));
    if let Some(version) = &config.version {
        pkg.insert("version".to_string(), version.clone());
    }
    if let Some(description) = &config.description {
        pkg.insert("description".to_string(), description.clone());
    }

    let build_reset = with_build_section(pkg, |build| {
        if let Some(app_id) = config.app_id() {
            build.insert("appId".to_string(), Value::String(app_id.to_string()));
        }
        build.insert(
            "productName".to_string(),
            Value::String(config.display_name().to_string()),
        );
    });

    MetadataUpdate { build_reset }
}

/// Overwrite the per-platform icon/target entries and the output directory.
pub fn apply_packaging_targets(pkg: &mut Map<String, Value>) {
    with_build_section(pkg, |build| {
        for platform in PLATFORM_TARGETS {
            build.insert(
                platform.platform.to_string(),
                json!({ "icon": ICON_PATH, "target": platform.target }),
            );
        }
        build.insert("directories".to_string(), json!({ "output": OUTPUT_DIR }));
    });
}

/// Run `edit` on the `build` object, creating it if missing. A non-object
/// `build` is replaced in place and `true` is returned.
fn with_build_section<F>(pkg: &mut Map<String, Value>, edit: F) -> bool
where
    F: FnOnce(&mut Map<String, Value>),
{
    let slot = pkg
        .entry("build")
        .or_insert_with(|| Value::Object(Map::new()));
    let (mut section, reset) = match slot.take() {
        Value::Object(map) => (map, false),
        _ => (Map::new(), true),
    };
    edit(&mut section);
    *slot = Value::Object(section);
    reset
}

/// Rewrite the lock manifest's top-level `name`. Returns false when the
/// document has no truthy `name` and was left alone.
pub fn sync_lock_name(lock: &mut Value, sanitized_name: &str) -> bool {
    let Some(name) = lock.get_mut("name") else {
        return false;
    };
    if !is_truthy(name) {
        return false;
    }
    *name = Value::String(sanitized_name.to_string());
    true
}

/// `build.win.icon`, the path the window shell uses for its icon.
pub fn win_icon(pkg: &Value) -> Option<&str> {
    pkg.pointer("/build/win/icon").and_then(Value::as_str)
}

pub fn product_name(pkg: &Value) -> Option<&str> {
    pkg.pointer("/build/productName").and_then(Value::as_str)
}
