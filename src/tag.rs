//! Custom element naming rules.

use lazy_static::lazy_static;
use regex::Regex;

/// Names the HTML standard reserves and never allows for custom elements.
const RESERVED_TAGS: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

lazy_static! {
    static ref VALID_TAG_CHARS_RE: Regex = Regex::new(r"[A-Za-z0-9_-]").unwrap();
}

/// Checks `tag` against the custom element naming rules.
/// Returns the first rule violated, or `None` for a valid name.
pub fn validate_component_tag(tag: &str) -> Option<String> {
    if tag != tag.trim() {
        return Some("Tag can not contain white spaces".to_string());
    }
    if tag != tag.to_lowercase() {
        return Some("Tag can not contain upper case characters".to_string());
    }
    if tag.is_empty() {
        return Some("Received empty tag value".to_string());
    }
    if tag.contains(' ') {
        return Some(format!("\"{}\" tag cannot contain a space", tag));
    }
    if tag.contains(',') {
        return Some(format!("\"{}\" tag cannot be used for multiple tags", tag));
    }

    let invalid_chars = VALID_TAG_CHARS_RE.replace_all(tag, "");
    if !invalid_chars.is_empty() {
        return Some(format!(
            "\"{}\" tag contains invalid characters: {}",
            tag, invalid_chars
        ));
    }

    if !tag.contains('-') {
        return Some(format!(
            "\"{}\" tag must contain a dash (-) to work as a valid web component",
            tag
        ));
    }
    if tag.contains("--") {
        return Some(format!(
            "\"{}\" tag cannot contain multiple dashes (--) next to each other",
            tag
        ));
    }
    if tag.starts_with('-') {
        return Some(format!("\"{}\" tag cannot start with a dash (-)", tag));
    }
    if tag.ends_with('-') {
        return Some(format!("\"{}\" tag cannot end with a dash (-)", tag));
    }
    if RESERVED_TAGS.contains(&tag) {
        return Some(format!(
            "\"{}\" tag is a reserved name and cannot be used for a custom element",
            tag
        ));
    }

    None
}
