//! Slug normalization for human-readable card URLs.
//!
//! Every slug accepted into the store goes through [`normalize_slug`] first,
//! so stored slugs always satisfy [`is_valid_slug`]: lowercase ASCII letters,
//! digits, and single interior hyphens.

/// Normalizes free-form user input into a URL slug.
///
/// Trims surrounding whitespace, lowercases ASCII letters, turns runs of
/// whitespace (or existing hyphens) into a single `-`, and drops every
/// other character. `"My Card!"` becomes `"my-card"`.
///
/// The result can be empty (for example when the input is all punctuation);
/// callers reject empty slugs during validation.
pub fn normalize_slug(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for ch in input.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_whitespace() || ch == '-' {
            // Collapse separator runs and never start with one.
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Returns true if `slug` is in normalized form: non-empty, only
/// `[a-z0-9-]`, and no leading, trailing, or doubled hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(normalize_slug("Ada Lovelace"), "ada-lovelace");
        assert_eq!(normalize_slug("my card"), "my-card");
    }

    #[test]
    fn test_drops_punctuation() {
        assert_eq!(normalize_slug("My Card!"), "my-card");
        assert_eq!(normalize_slug("ada@lovelace.example"), "adalovelaceexample");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(normalize_slug("a   b"), "a-b");
        assert_eq!(normalize_slug("a--b"), "a-b");
        assert_eq!(normalize_slug("a - b"), "a-b");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize_slug("  spaced  "), "spaced");
        assert_eq!(normalize_slug("-leading-and-trailing-"), "leading-and-trailing");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(normalize_slug("Agent 007"), "agent-007");
    }

    #[test]
    fn test_drops_non_ascii() {
        assert_eq!(normalize_slug("Café"), "caf");
    }

    #[test]
    fn test_can_produce_empty() {
        assert_eq!(normalize_slug(""), "");
        assert_eq!(normalize_slug("!!!"), "");
        assert_eq!(normalize_slug("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["My Card!", "Ada Lovelace", "a--b", "  x  ", "Agent 007"] {
            let once = normalize_slug(input);
            assert_eq!(normalize_slug(&once), once);
        }
    }

    #[test]
    fn test_normalized_output_is_valid() {
        for input in ["My Card!", "Ada Lovelace", "a--b", "Agent 007", "x"] {
            assert!(is_valid_slug(&normalize_slug(input)));
        }
    }

    #[test]
    fn test_is_valid_slug_rejections() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-x"));
        assert!(!is_valid_slug("x-"));
        assert!(!is_valid_slug("a--b"));
        assert!(!is_valid_slug("My-Card"));
        assert!(!is_valid_slug("my card"));
        assert!(is_valid_slug("my-card"));
        assert!(is_valid_slug("agent-007"));
    }
}
