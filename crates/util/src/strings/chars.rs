/// Check if a character is a letter or digit.
///
/// # Examples
///
/// ```
/// use unique_words_util::strings::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(is_letter('5'));
/// assert!(!is_letter('-'));
/// ```
pub fn is_letter(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Check if a character is a straight or typographic apostrophe.
pub fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

/// Check if a character may appear inside a word.
///
/// # Examples
///
/// ```
/// use unique_words_util::strings::is_word_char;
///
/// assert!(is_word_char('x'));
/// assert!(is_word_char('\''));
/// assert!(!is_word_char(' '));
/// assert!(!is_word_char(','));
/// ```
pub fn is_word_char(ch: char) -> bool {
    is_letter(ch) || is_apostrophe(ch)
}
