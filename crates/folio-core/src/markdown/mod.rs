//! Markdown to HTML conversion for model-generated review text.
//!
//! The review models are prompted to answer with a constrained Markdown
//! subset: headings levels 1-3, bold, italic, unordered lists, and
//! blank-line separated paragraphs. This module converts that subset with
//! a fixed sequence of substitution passes. It is not a CommonMark
//! parser: nested lists, tables, code blocks, links, images, blockquotes,
//! and escaping are all out of scope, and malformed markers degrade to
//! literal text instead of failing.
//!
//! The pass order is load-bearing. Headings run before inline styles so
//! heading text can carry bold markers, and bold runs before italic so
//! `**` pairs are consumed before the single-asterisk rule sees them.
//! Reordering the passes changes the output.
//!
//! Known limitations: underscore emphasis fires inside snake_case
//! identifiers (`snake_case_word` gains an `<em>`), and rendering is not
//! idempotent - feeding produced HTML back in may double-wrap it.

mod lists;

use once_cell::sync::Lazy;
use regex::Regex;

use lists::group_list_items;

static H3_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^###\s*(.*)$").unwrap());
static H2_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##\s*(.*)$").unwrap());
static H1_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s*(.*)$").unwrap());

static BOLD_ASTERISKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static ITALIC_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").unwrap());

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

static EMPTY_PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p>\s*</p>").unwrap());
static OPEN_BEFORE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p>\s*<h").unwrap());
static CLOSE_AFTER_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"</h(\d)>\s*</p>").unwrap());
static OPEN_BEFORE_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p>\s*<ul>").unwrap());
static CLOSE_AFTER_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"</ul>\s*</p>").unwrap());

/// Convert review Markdown to an HTML fragment.
///
/// Total function: any input produces output, and whitespace-only input
/// produces an empty string.
pub fn render(markdown: &str) -> String {
    let html = replace_headings(markdown);
    let html = replace_bold(&html);
    let html = replace_italic(&html);
    let html = group_list_items(&html);
    let html = wrap_paragraphs(&html);
    cleanup_block_tags(&html)
}

/// Heading passes, longest marker first so `###` is never split by the
/// `#` rule.
fn replace_headings(text: &str) -> String {
    let text = H3_RULE.replace_all(text, "<h3>$1</h3>");
    let text = H2_RULE.replace_all(&text, "<h2>$1</h2>");
    H1_RULE.replace_all(&text, "<h1>$1</h1>").into_owned()
}

fn replace_bold(text: &str) -> String {
    let text = BOLD_ASTERISKS.replace_all(text, "<strong>$1</strong>");
    BOLD_UNDERSCORES
        .replace_all(&text, "<strong>$1</strong>")
        .into_owned()
}

fn replace_italic(text: &str) -> String {
    let text = ITALIC_ASTERISK.replace_all(text, "<em>$1</em>");
    ITALIC_UNDERSCORE.replace_all(&text, "<em>$1</em>").into_owned()
}

/// A blank line separates paragraphs; the whole document is wrapped so
/// leading and trailing prose is inside a paragraph too.
fn wrap_paragraphs(text: &str) -> String {
    let body = PARAGRAPH_BREAK.replace_all(text, "</p><p>");
    format!("<p>{}</p>", body)
}

/// Paragraph wrapping is oblivious to block elements, so it leaves
/// headings and lists nested inside `<p>` tags. Strip those wrappers,
/// empties first.
fn cleanup_block_tags(html: &str) -> String {
    let html = EMPTY_PARAGRAPH.replace_all(html, "");
    let html = OPEN_BEFORE_HEADING.replace_all(&html, "<h");
    let html = CLOSE_AFTER_HEADING.replace_all(&html, "</h$1>");
    let html = OPEN_BEFORE_LIST.replace_all(&html, "<ul>");
    CLOSE_AFTER_LIST.replace_all(&html, "</ul>").into_owned()
}
