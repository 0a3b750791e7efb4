//! Character-level helpers for kana readings and mixed-script surfaces.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana characters and the prolonged sound mark ー (U+30FC),
/// which shows up in loanword-derived verbs.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

/// Split off the final character: `"かく"` → `Some(("か", 'く'))`.
pub fn split_last(s: &str) -> Option<(&str, char)> {
    let c = s.chars().next_back()?;
    Some((&s[..s.len() - c.len_utf8()], c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("かく"));
        assert!(is_hiragana_reading("さぼる"));
        assert!(is_hiragana_reading("ばーべきゅーする"));
        assert!(!is_hiragana_reading("カク"));
        assert!(!is_hiragana_reading("書く"));
        assert!(!is_hiragana_reading("kaku"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('く'));
        assert!(!is_hiragana('ク'));
    }

    #[test]
    fn test_split_last() {
        assert_eq!(split_last("書く"), Some(("書", 'く')));
        assert_eq!(split_last("く"), Some(("", 'く')));
        assert_eq!(split_last(""), None);
    }
}
