//! List grouping pass.
//!
//! Scans the document line by line and wraps runs of consecutive list
//! items in a single `<ul>`. Runs on text that has already been through
//! the heading and inline passes, so item content may carry `<strong>`
//! and `<em>` tags.

/// Whether the fold is currently inside an open `<ul>`.
enum ListState {
    Outside,
    Inside,
}

/// Group consecutive `* ` / `- ` lines into unordered lists.
///
/// Non-item lines pass through unchanged, closing any open list first;
/// a list still open at end of input is closed. Lines are rejoined with
/// `\n`.
pub(super) fn group_list_items(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut state = ListState::Outside;

    for line in text.split('\n') {
        if is_list_item(line) {
            if matches!(state, ListState::Outside) {
                lines.push("<ul>".to_string());
                state = ListState::Inside;
            }
            lines.push(format!("<li>{}</li>", item_content(line)));
        } else {
            if matches!(state, ListState::Inside) {
                lines.push("</ul>".to_string());
                state = ListState::Outside;
            }
            lines.push(line.to_string());
        }
    }

    if matches!(state, ListState::Inside) {
        lines.push("</ul>".to_string());
    }

    lines.join("\n")
}

fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("* ") || trimmed.starts_with("- ")
}

/// Item content is the raw line minus its first two characters, trimmed.
fn item_content(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.next();
    chars.as_str().trim()
}
