//! Whitespace and attribute helpers shared by the rules and the mapper.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Collapse every run of two or more spaces into a single space.
///
/// Only the space character is affected; newlines and tabs are left alone.
pub fn collapse_spaces(s: &str) -> String {
    SPACE_RUN.replace_all(s, " ").into_owned()
}

/// Normalize whitespace in ordinary text.
///
/// Newlines and tabs become spaces, runs of spaces are squeezed to one, and
/// a text that ends up as a lone space is dropped entirely.
pub fn squeeze_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        let c = if c == '\n' || c == '\t' { ' ' } else { c };
        if c == ' ' {
            if !prev_was_space {
                result.push(' ');
            }
            prev_was_space = true;
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    if result == " " {
        result.clear();
    }
    result
}

/// Text of a `<code>` inside an indented code block: trimmed, with every line
/// after the first pushed in by four spaces.
pub fn indent_code(s: &str) -> String {
    s.trim().replace('\n', "\n    ")
}

/// Render the optional ` "title"` part of a link or image target
pub fn title_suffix(title: Option<&str>) -> String {
    match title {
        Some(title) if !title.is_empty() => format!(" \"{}\"", title),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("a    b"), "a b");
        assert_eq!(collapse_spaces(" [x]  "), " [x] ");
        assert_eq!(collapse_spaces("a\n    b"), "a\n b");
        assert_eq!(collapse_spaces("a\t\tb"), "a\t\tb");
    }

    #[test]
    fn test_squeeze_whitespace() {
        assert_eq!(squeeze_whitespace("hello\n\tworld"), "hello world");
        assert_eq!(squeeze_whitespace("  lots   of   space  "), " lots of space ");
        assert_eq!(squeeze_whitespace(" "), "");
        assert_eq!(squeeze_whitespace("\n  \t"), "");
        assert_eq!(squeeze_whitespace(""), "");
    }

    #[test]
    fn test_indent_code() {
        assert_eq!(indent_code("\nfn main() {\n}\n"), "fn main() {\n    }");
    }

    #[test]
    fn test_title_suffix() {
        assert_eq!(title_suffix(Some("Home")), " \"Home\"");
        assert_eq!(title_suffix(Some("")), "");
        assert_eq!(title_suffix(None), "");
    }
}
