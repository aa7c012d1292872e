use serde::Serialize;
use shellpack_core::templating::Substitutions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IconOutcome {
    /// `public/icon.png` was already there; no fetch was made.
    Present,
    Downloaded { bytes: usize, sha256: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockOutcome {
    Missing,
    NoName,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HtmlOutcome {
    Missing,
    Updated(Substitutions),
}

/// What a single `apply_config` run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub sanitized_name: String,
    pub icon: IconOutcome,
    pub lock: LockOutcome,
    pub html: HtmlOutcome,
}

impl ApplyReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
