use super::chars::{is_apostrophe, is_word_char};

/// Iterator over the words of a text; see [`words`].
#[derive(Clone, Debug)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let start = self.rest.find(is_word_char)?;
            let tail = &self.rest[start..];
            let len = tail.find(|ch: char| !is_word_char(ch)).unwrap_or(tail.len());
            let (run, rest) = tail.split_at(len);
            self.rest = rest;

            let word = run.trim_matches(is_apostrophe);
            if !word.is_empty() {
                return Some(word);
            }
        }
    }
}

/// Splits `text` into words.
///
/// A word is a maximal run of letters, digits and apostrophes, with leading
/// and trailing apostrophes trimmed. Case is preserved.
///
/// # Examples
///
/// ```
/// use unique_words_util::strings::words;
///
/// let w: Vec<&str> = words("'Well, Prince,' said she -- don't.").collect();
/// assert_eq!(w, vec!["Well", "Prince", "said", "she", "don't"]);
/// ```
pub fn words(text: &str) -> Words<'_> {
    Words { rest: text }
}
