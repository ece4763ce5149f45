//! Per-character numeric codes.

use std::iter::FusedIterator;
use std::str::Chars;

/// Iterator over the Unicode scalar values of a string, in order.
///
/// Created by [`code_points`].
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    chars: Chars<'a>,
}

impl Iterator for CodePoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.chars.next().map(u32::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl DoubleEndedIterator for CodePoints<'_> {
    fn next_back(&mut self) -> Option<u32> {
        self.chars.next_back().map(u32::from)
    }
}

impl FusedIterator for CodePoints<'_> {}

/// Yield the code of every character of `text`.
///
/// For ASCII text these are the ASCII codes; other characters yield their
/// Unicode scalar value.
///
/// ```
/// use myutils_text::code_points;
///
/// let codes: Vec<u32> = code_points("Hi!").collect();
/// assert_eq!(codes, vec![72, 105, 33]);
/// ```
#[must_use]
pub fn code_points(text: &str) -> CodePoints<'_> {
    CodePoints { chars: text.chars() }
}

/// A character outside the ASCII range was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonAsciiError {
    /// Character index (not byte offset) of the offending character.
    pub index: usize,
    /// The offending character.
    pub ch: char,
}

impl std::fmt::Display for NonAsciiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "non-ASCII character {:?} (U+{:04X}) at index {}",
            self.ch,
            u32::from(self.ch),
            self.index
        )
    }
}

impl std::error::Error for NonAsciiError {}

/// Collect the ASCII code of every character of `text`.
///
/// # Errors
///
/// Returns [`NonAsciiError`] for the first character that is not ASCII.
pub fn ascii_codes(text: &str) -> Result<Vec<u8>, NonAsciiError> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            u8::try_from(ch)
                .ok()
                .filter(u8::is_ascii)
                .ok_or(NonAsciiError { index, ch })
        })
        .collect()
}
