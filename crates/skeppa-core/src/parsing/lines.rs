use regex::Regex;
use std::sync::LazyLock;

/// Everything outside ASCII word characters, whitespace, and the fixed
/// punctuation allowlist is deleted before line splitting. The allowlist
/// covers the punctuation the source documents legitimately carry
/// (slashes in dates, colons in headers, periods in grouped numbers).
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^A-Za-z0-9_\s!@#$%^&*()_+\-={}:;'",.<>?/\\|`~]"#).unwrap()
});

/// Sanitize raw document text and split it into non-blank lines.
pub fn sanitize_lines(text: &str) -> Vec<String> {
    DISALLOWED
        .replace_all(text, "")
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_discarded() {
        let lines = sanitize_lines("a\n\n   \nb\n");
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_allowlisted_punctuation_kept() {
        let lines = sanitize_lines("Part Number:\n01/02/24\n1.000\n");
        assert_eq!(lines, vec!["Part Number:", "01/02/24", "1.000"]);
    }

    #[test]
    fn test_stray_symbols_removed() {
        let lines = sanitize_lines("\u{2022} Part Number:\u{00ae}\n12345\u{2192}67\n");
        assert_eq!(lines, vec![" Part Number:", "1234567"]);
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        // The allowlist is ASCII; accented letters do not survive.
        assert_eq!(sanitize_lines("Kötid 5\n"), vec!["Ktid 5"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sanitize_lines("").is_empty());
    }
}
