//! Cell width of characters and strings.
//!
//! Every printable code point occupies exactly one cell. Control characters
//! occupy none and are stripped before wrapping.

/// Display width of a single code point in terminal cells.
///
/// - `0` for control characters
/// - `1` for everything else
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_control() { 0 } else { 1 }
}

/// Display width of a string in terminal cells.
///
/// ```
/// use spark_flow::text::string_width;
///
/// assert_eq!(string_width("hello"), 5);
/// assert_eq!(string_width("a\tb"), 2);
/// assert_eq!(string_width("…"), 1);
/// ```
pub fn string_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Widest line of a multi-line string.
pub fn max_line_width(s: &str) -> usize {
    s.split('\n').map(string_width).max().unwrap_or(0)
}

/// Normalize text before wrapping: tabs become spaces, other control
/// characters (except `\n`) are dropped.
pub(crate) fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if char_width(c) == 0 => None,
            c => Some(c),
        })
        .collect()
}
