/// Splits `text` on ASCII whitespace (space, tab, `\n`, `\r`). No other
/// punctuation is stripped and no Unicode whitespace beyond these four
/// bytes is recognized.
pub fn split_ascii_whitespace(text: &str) -> Vec<&str> {
    text.split(is_ascii_whitespace_byte)
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_ascii_whitespace_byte(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A word is valid iff none of its bytes is a control character (`< 0x20`).
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < 0x20)
}
