//! Banned-word filter applied to comment text.
//!
//! The match is a case-sensitive substring scan: a banned word embedded in
//! surrounding text still trips the filter, while a recased variant does not.

/// Words disallowed in comment text.
pub const BAD_WORDS: [&str; 2] = ["редиска", "негодяй"];

/// Field error attached to `text` when the filter trips.
pub const MODERATION_WARNING: &str = "Не ругайтесь!";

/// Return the first banned word found in `text`, if any.
pub fn find_banned_word(text: &str) -> Option<&'static str> {
    BAD_WORDS.iter().copied().find(|word| text.contains(word))
}
