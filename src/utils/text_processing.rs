//! Text processing utilities.
//!
//! This module contains utilities for turning feed item markup into plain
//! text a terminal can show: tag stripping, entity decoding, and
//! single-line clamping.

use log::*;
use regex::Regex;

/// Entities worth decoding in feed snippets. `&amp;` is handled last so
/// double-escaped text decodes exactly once.
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&hellip;", "…"),
    ("&amp;", "&"),
];

/// Strip HTML markup from feed item content.
///
/// Tags are replaced with spaces (so `<br>` and block boundaries don't fuse
/// words), a small set of common entities is decoded, and whitespace is
/// collapsed to single spaces.
///
/// # Arguments
/// * `text` - The markup to flatten
///
/// # Returns
/// Plain text with no tags and normalized whitespace.
pub fn strip_html(text: &str) -> String {
    let re = match Regex::new(r"<[^>]*>") {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to compile tag-stripping regex: {}", e);
            return text.to_string();
        }
    };

    let mut result = re.replace_all(text, " ").to_string();
    for (entity, replacement) in ENTITIES {
        result = result.replace(entity, replacement);
    }
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clamp text to a character budget, appending an ellipsis when truncated.
/// Operates on characters, not bytes, so multi-byte content is safe.
///
pub fn clamp_line(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        let text = "<p>Hello <strong>world</strong></p>";
        assert_eq!(strip_html(text), "Hello world");
    }

    #[test]
    fn test_strip_html_handles_attributes() {
        let text = r#"<a href="https://example.com" target="_blank">a link</a> trailing"#;
        assert_eq!(strip_html(text), "a link trailing");
    }

    #[test]
    fn test_strip_html_breaks_do_not_fuse_words() {
        let text = "line one<br/>line two<br />line three";
        assert_eq!(strip_html(text), "line one line two line three");
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        let text = "Fish &amp; chips &lt;for two&gt; &quot;tonight&quot;";
        assert_eq!(strip_html(text), "Fish & chips <for two> \"tonight\"");
    }

    #[test]
    fn test_strip_html_double_escaped_decodes_once() {
        // "&amp;lt;" is the literal text "&lt;", not a tag
        let text = "use &amp;lt; in markup";
        assert_eq!(strip_html(text), "use &lt; in markup");
    }

    #[test]
    fn test_strip_html_collapses_whitespace() {
        let text = "<div>\n  spaced\t\tout\n\n content </div>";
        assert_eq!(strip_html(text), "spaced out content");
    }

    #[test]
    fn test_strip_html_plain_text_untouched() {
        let text = "no markup here";
        assert_eq!(strip_html(text), text);
    }

    #[test]
    fn test_clamp_line_short_text_unchanged() {
        assert_eq!(clamp_line("short", 10), "short");
        assert_eq!(clamp_line("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_clamp_line_truncates_with_ellipsis() {
        assert_eq!(clamp_line("0123456789abc", 10), "012345678…");
    }

    #[test]
    fn test_clamp_line_is_char_safe() {
        // Multi-byte characters must not be split
        let text = "héllo wörld again";
        let clamped = clamp_line(text, 8);
        assert_eq!(clamped, "héllo w…");
        assert_eq!(clamped.chars().count(), 8);
    }
}
