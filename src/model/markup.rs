use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"))
}

/// Removes tag-like substrings (`<...>`) from display text.
///
/// Only applied at presentation time. Searching matches the raw text.
pub fn strip_markup(text: &str) -> String {
    tag_pattern().replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("plain text"), "plain text");
        assert_eq!(
            strip_markup("A <b>bold</b> and <a href=\"x\">linked</a> dish"),
            "A bold and linked dish"
        );
        assert_eq!(strip_markup("<p></p>"), "");
    }

    #[test]
    fn test_unclosed_tag_is_kept() {
        assert_eq!(strip_markup("5 < 6 apples"), "5 < 6 apples");
    }
}
