mod rules;

use crate::models::SetupConfig;
use serde::Serialize;

/// Values written into `public/index.html`. A `None` value skips its
/// substitution.
#[derive(Debug, Clone, Copy)]
pub struct TemplateValues<'a> {
    pub title: &'a str,
    pub background: Option<&'a str>,
    pub stored_name: Option<&'a str>,
}

impl<'a> TemplateValues<'a> {
    pub fn from_config(config: &'a SetupConfig) -> Self {
        Self {
            title: &config.name,
            background: config.color.as_deref(),
            stored_name: config.id.as_deref(),
        }
    }
}

/// Which patterns matched during a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Substitutions {
    pub title: bool,
    pub background: bool,
    pub stored_name: bool,
}

#[derive(Debug, Clone)]
pub struct Rendered {
    pub html: String,
    pub substitutions: Substitutions,
}

pub fn render(html: &str, values: &TemplateValues<'_>) -> Rendered {
    let mut out = html.to_string();
    let mut substitutions = Substitutions::default();

    if let Some(next) = rules::set_title(&out, values.title) {
        out = next;
        substitutions.title = true;
    }
    if let Some(next) = values
        .background
        .and_then(|color| rules::set_background(&out, color))
    {
        out = next;
        substitutions.background = true;
    }
    if let Some(next) = values
        .stored_name
        .and_then(|id| rules::set_stored_name(&out, id))
    {
        out = next;
        substitutions.stored_name = true;
    }

    Rendered {
        html: out,
        substitutions,
    }
}
