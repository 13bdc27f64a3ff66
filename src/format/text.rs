//! Text formatting functions for `shortcut_grid`.
//!
//! Plain text (non-ANSI) rendering of bookmark cards for the terminal.

use shortcut_lib::Bookmark;
use unicode_width::UnicodeWidthStr;

/// Width of the title column in list output.
pub const TITLE_WIDTH: usize = 24;

/// Format a color tag as a bracketed badge.
#[must_use]
pub fn format_color_badge(color: &str) -> String {
    format!("[{color}]")
}

/// Pad or truncate `text` to exactly `width` terminal columns.
///
/// Truncated text ends with `…`.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current <= width {
        return format!("{text}{}", " ".repeat(width - current));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Format a single-line bookmark summary.
///
/// Format: `{position:>3}  {id}  {title padded}  {url} {[color]}`
#[must_use]
pub fn format_bookmark_line(position: usize, bookmark: &Bookmark) -> String {
    format!(
        "{:>3}  {}  {}  {} {}",
        position,
        bookmark.id,
        pad_to_width(&bookmark.title, TITLE_WIDTH),
        bookmark.url,
        format_color_badge(&bookmark.color),
    )
}

/// Format the multi-line detail view used by `show`.
#[must_use]
pub fn format_bookmark_details(position: usize, bookmark: &Bookmark) -> String {
    let mut out = format!(
        "{} {}\n  position: {}\n  url:      {}\n  color:    {}",
        bookmark.id, bookmark.title, position, bookmark.url, bookmark.color
    );
    if let Some(description) = &bookmark.description {
        out.push_str(&format!("\n\n{description}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_bookmark() -> Bookmark {
        Bookmark::new("bm-abc", "Rust", "https://rust-lang.org", "orange")
    }

    #[test]
    fn test_color_badge() {
        assert_eq!(format_color_badge("blue"), "[blue]");
    }

    #[test]
    fn test_pad_short() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_pad_exact() {
        assert_eq!(pad_to_width("abcd", 4), "abcd");
    }

    #[test]
    fn test_truncate_long() {
        let out = pad_to_width("abcdefgh", 5);
        assert_eq!(out, "abcd…");
        assert_eq!(out.width(), 5);
    }

    #[test]
    fn test_truncate_wide_chars() {
        let out = pad_to_width("日本語のタイトル", 6);
        assert_eq!(out.width(), 6);
        assert!(out.starts_with("日本"));
        assert!(out.contains('…'));
    }

    #[test]
    fn test_format_bookmark_line() {
        let line = format_bookmark_line(0, &make_test_bookmark());
        assert!(line.starts_with("  0  bm-abc  Rust"));
        assert!(line.ends_with("https://rust-lang.org [orange]"));
    }

    #[test]
    fn test_format_details_with_description() {
        let b = make_test_bookmark().with_description("The language");
        let out = format_bookmark_details(3, &b);
        assert!(out.starts_with("bm-abc Rust"));
        assert!(out.contains("position: 3"));
        assert!(out.ends_with("\n\nThe language"));
    }

    #[test]
    fn test_format_details_without_description() {
        let out = format_bookmark_details(0, &make_test_bookmark());
        assert!(out.ends_with("color:    orange"));
    }
}
