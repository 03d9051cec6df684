//! Entry page rendering
//!
//! Builds the Markdown page for one entry: TOML front matter between `+++`
//! fences, then one body paragraph per populated field group, in fixed
//! order. Rendering is pure; file writing lives in [`crate::emit`].

use crate::entry::Entry;
use crate::months;

/// Render the full page document for one entry.
pub fn render_page(entry: &Entry) -> String {
    let mut page = String::new();

    page.push_str("+++\n");
    page.push_str("draft = false\n");
    let title = entry.title.as_deref().unwrap_or("");
    page.push_str(&format!("title = \"{}\"\n", escape_quoted(title)));
    page.push_str(&format!("tags = {}\n", toml_string_array(&entry.tags)));
    page.push_str("+++\n");

    page.push_str(&body_paragraphs(entry).join("\n\n"));
    page.push('\n');
    page
}

/// Body paragraphs in presentation order; absent source data contributes
/// nothing.
fn body_paragraphs(entry: &Entry) -> Vec<String> {
    let mut paragraphs = Vec::new();

    if !entry.authors.is_empty() {
        paragraphs.push(format!("**Authors**: {}", entry.authors.join(", ")));
    }

    match (entry.year, entry.month.and_then(months::month_name)) {
        (Some(year), Some(month)) => {
            paragraphs.push(format!("**Published**: {} {}", month, year));
        }
        (Some(year), None) => {
            paragraphs.push(format!("**Published**: {}", year));
        }
        (None, _) => {}
    }

    if let Some(url) = &entry.url {
        paragraphs.push(format!("**URL**: [{}]({})", url, url));
    }

    if !entry.tags.is_empty() {
        let shortcodes: Vec<String> = entry
            .tags
            .iter()
            .map(|tag| format!("{{{{< tag tagname=\"{}\" >}}}}", tag))
            .collect();
        paragraphs.push(format!("**Tags**: {}", shortcodes.join(" ")));
    }

    if let Some(abstract_text) = &entry.abstract_text {
        paragraphs.push(format!("**Abstract**: {}", abstract_text));
    }

    paragraphs
}

/// Escape for interpolation into a TOML quoted string.
///
/// Backslashes double before quotes are escaped; the other order would
/// re-escape the backslashes it just inserted.
fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn toml_string_array(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", escape_quoted(item)))
        .collect();
    format!("[{}]", quoted.join(", "))
}
