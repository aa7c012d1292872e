use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title>.*?</title>").expect("title pattern"));

// Group 1 is everything from the selector up to the value; the value stops
// before `;` or the closing brace so the rest of the rule survives.
static HTML_BODY_BACKGROUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(html,\s*body\s*\{[^}]*background:\s*)[^;}]+")
        .expect("background pattern")
});

static STORED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"localStorage\.setItem\(['"]NAME['"],\s*['"][^'"]*['"]\);"#)
        .expect("stored name pattern")
});

/// Splice `render(captures)` in place of the first match. `None` when the
/// pattern does not occur.
fn replace_first<F>(html: &str, pattern: &Regex, render: F) -> Option<String>
where
    F: FnOnce(&Captures) -> String,
{
    let caps = pattern.captures(html)?;
    let whole = caps.get(0)?;
    let replacement = render(&caps);

    let mut out = String::with_capacity(html.len() + replacement.len());
    out.push_str(&html[..whole.start()]);
    out.push_str(&replacement);
    out.push_str(&html[whole.end()..]);
    Some(out)
}

pub(super) fn set_title(html: &str, title: &str) -> Option<String> {
    replace_first(html, &TITLE, |_| format!("<title>{title}</title>"))
}

pub(super) fn set_background(html: &str, color: &str) -> Option<String> {
    replace_first(html, &HTML_BODY_BACKGROUND, |caps| format!("{}{color}", &caps[1]))
}

pub(super) fn set_stored_name(html: &str, id: &str) -> Option<String> {
    replace_first(html, &STORED_NAME, |_| {
        format!("localStorage.setItem('NAME', '{id}');")
    })
}
