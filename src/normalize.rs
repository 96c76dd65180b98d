//! Token normalization: lowercase, then strip a fixed punctuation set and
//! ASCII digits. Tokens that end up empty are dropped.

/// Characters removed from every token.
pub const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '?', '$', '@', '^', '<', '>', '#', '%', '`', '!', '*', '-', '=', '(', ')',
    '[', ']', '{', '}', '/', '"', '\'', '_',
];

#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// ASCII `0`-`9` only; other Unicode digits are kept.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Normalize one raw word. Returns `None` when nothing survives.
///
/// ```text
/// "Hello!" -> Some("hello")
/// "Hi2"    -> Some("hi")
/// "--42--" -> None
/// ```
pub fn normalize(raw: &str) -> Option<String> {
    let token: String = raw
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| !is_punctuation(c) && !is_digit(c))
        .collect();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Normalize a stream of raw words, skipping the ones that vanish.
pub fn tokens<I, S>(words: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().filter_map(|w| normalize(w.as_ref()))
}
