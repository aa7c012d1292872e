use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Contents of `config.json`.
///
/// `version` and `description` are copied into the manifest as written.
/// The other optional keys accept any scalar and are stringified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    pub name: String,
    #[serde(default, deserialize_with = "present_value")]
    pub version: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub description: Option<Value>,
    #[serde(rename = "appId", default, deserialize_with = "stringified_if_truthy")]
    pub app_id: Option<String>,
    #[serde(rename = "productName", default, deserialize_with = "stringified_if_truthy")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "stringified")]
    pub color: Option<String>,
    #[serde(rename = "ID", default, deserialize_with = "stringified")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "stringified")]
    pub windowsicon: Option<String>,
}

// An explicit `null` still counts as present.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn stringified<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(to_display_string(&other)),
    })
}

// `false`, `0` and `""` count as unset.
fn stringified_if_truthy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value).then(|| to_display_string(&value)))
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a JSON value as a browser script would interpolate it.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl SetupConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            description: None,
            app_id: None,
            product_name: None,
            color: None,
            id: None,
            windowsicon: None,
        }
    }

    /// Explicit product name if set, otherwise the raw configured name.
    pub fn display_name(&self) -> &str {
        non_empty(self.product_name.as_deref()).unwrap_or(&self.name)
    }

    pub fn app_id(&self) -> Option<&str> {
        non_empty(self.app_id.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// One platform entry of the `build` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformTarget {
    pub platform: &'static str,
    pub target: &'static str,
}

pub const ICON_PATH: &str = "public/icon.png";
pub const OUTPUT_DIR: &str = "dist";

pub const PLATFORM_TARGETS: [PlatformTarget; 3] = [
    PlatformTarget {
        platform: "win",
        target: "nsis",
    },
    PlatformTarget {
        platform: "mac",
        target: "dmg",
    },
    PlatformTarget {
        platform: "linux",
        target: "AppImage",
    },
];
