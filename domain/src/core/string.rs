//! String utilities for the domain layer.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Base letters of a name: NFD decomposition without combining marks, lowercased
fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-like ordering for display names.
///
/// Names compare by base letters first, ignoring case and accents, so
/// `Ésophagus` sorts between `Duodenum` and `Heart`. Ties are broken by
/// accents (unaccented first), then by case (lowercase first), then by
/// code point.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                })
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes: "Fémur" = 6 bytes
        assert_eq!(truncate("Fémur", 10), "Fémur");
        // max_len=5 -> target=2 -> inside 'é' -> back to 1
        assert_eq!(truncate("Fémur", 5), "F...");
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("bladder", "Brainstem"), Ordering::Less);
        assert_eq!(locale_cmp("Heart", "esophagus"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("lung", "Lung"), Ordering::Less);
        assert_eq!(locale_cmp("Lung", "Lung"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_sorts_names() {
        let mut names = vec!["Parotid R", "brainstem", "Parotid L", "Bladder"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["Bladder", "brainstem", "Parotid L", "Parotid R"]);
    }

    #[test]
    fn test_locale_cmp_folds_accents() {
        let mut names = vec!["Heart", "Ésophagus", "Duodenum", "Zygoma", "esophagus"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(
            names,
            vec!["Duodenum", "esophagus", "Ésophagus", "Heart", "Zygoma"]
        );
    }
}
