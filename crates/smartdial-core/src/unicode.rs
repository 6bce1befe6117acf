//! Character-level script classification for contact names.

/// Check the CJK ideograph blocks that carry Pinyin readings: the unified
/// block, Extension A, Extension B and the compatibility ideographs.
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
}

/// Length in characters. All spans in this crate index characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `index`-th character, or `s.len()` past the end.
pub fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_han('李'));
        assert!(is_han('雷'));
        assert!(is_han('㐀'));
        assert!(!is_han('あ'));
        assert!(!is_han('a'));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("李雷"), 2);
        assert_eq!(char_len("Tom 李"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("李雷", 0), 0);
        assert_eq!(byte_offset("李雷", 1), 3);
        assert_eq!(byte_offset("李雷", 2), 6);
        assert_eq!(byte_offset("李雷", 9), 6);
        assert_eq!(byte_offset("ab", 1), 1);
    }
}
