//! Rich text - `**bold**` span parsing for project copy

use std::sync::OnceLock;

use regex::Regex;

static RE_BOLD: OnceLock<Regex> = OnceLock::new();

/// 文本片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl<'a> Span<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, emphasized: false }
    }

    pub fn bold(text: &'a str) -> Self {
        Self { text, emphasized: true }
    }
}

/// Split `text` into alternating plain / emphasized spans.
///
/// A span is `**` + anything on one line (non-greedy) + `**`; the delimiters
/// are dropped. A `**` without a partner stays in the plain text as-is.
/// Empty pieces are not emitted.
pub fn parse(text: &str) -> Vec<Span<'_>> {
    let re = RE_BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in re.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::plain(&text[last..whole.start()]));
        }
        if !inner.as_str().is_empty() {
            spans.push(Span::bold(inner.as_str()));
        }
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bold_in_middle() {
        assert_eq!(
            parse("a **b** c"),
            vec![Span::plain("a "), Span::bold("b"), Span::plain(" c")]
        );
    }

    #[test]
    fn test_unterminated_is_literal() {
        assert_eq!(parse("a **b c"), vec![Span::plain("a **b c")]);
    }

    #[test]
    fn test_no_markup() {
        assert_eq!(parse("plain"), vec![Span::plain("plain")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_multiple_and_adjacent() {
        assert_eq!(
            parse("**x****y** z"),
            vec![Span::bold("x"), Span::bold("y"), Span::plain(" z")]
        );
    }

    #[test]
    fn test_span_does_not_cross_lines() {
        assert_eq!(
            parse("**The Problem\nrest** tail"),
            vec![Span::plain("**The Problem\nrest** tail")]
        );
        assert_eq!(
            parse("**The Problem**\nThe page"),
            vec![Span::bold("The Problem"), Span::plain("\nThe page")]
        );
    }
}
