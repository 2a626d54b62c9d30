//! Fit text into a box of terminal cells.
//!
//! Three modes, selected by [`TextWrap`]:
//! - **Word**: greedy filling at whitespace, splitting a word with a hyphen
//!   only when it cannot fit a line on its own
//! - **Character**: the same line filler, splitting whenever a line has room
//!   for a partial word
//! - **None**: explicit newlines only, long lines clipped
//!
//! Runs of whitespace collapse to a single space in the wrapping modes.
//! Explicit `\n` always starts a new line.

use bitflags::bitflags;

use super::width::{sanitize, string_width};
use crate::types::{Size, TextWrap};

/// Glyph placed where content was cut off.
pub const ELLIPSIS: char = '…';

const HYPHEN: char = '-';

/// Shortest piece a word may be split into in word mode.
const MIN_PARTIAL_WORD: usize = 3;

/// Shortest piece a word may be split into in character mode.
const MIN_PARTIAL_CHAR: usize = 2;

// =============================================================================
// Result
// =============================================================================

bitflags! {
    /// What the wrapper had to give up to fit the box.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Truncation: u8 {
        /// A line was clipped horizontally.
        const WIDTH = 1 << 0;
        /// Lines were dropped or the last line was cut short.
        const HEIGHT = 1 << 1;
        /// An ellipsis glyph was inserted.
        const ELLIPSIS = 1 << 2;
    }
}

/// Wrapped text plus its rendered size.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wrapped {
    /// Lines joined with `\n`.
    pub text: String,
    /// Widest line, line count.
    pub size: Size,
    pub truncation: Truncation,
}

impl Wrapped {
    /// True if any content was dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncation
            .intersects(Truncation::WIDTH | Truncation::HEIGHT)
    }

    /// Number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.size.height.max(0) as usize
    }

    fn from_lines(lines: Vec<String>, truncation: Truncation) -> Self {
        let width = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
        Self {
            size: Size::new(to_cells(width), to_cells(lines.len())),
            text: lines.join("\n"),
            truncation,
        }
    }
}

#[inline]
fn to_cells(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

// =============================================================================
// Entry Points
// =============================================================================

/// Wrap `text` into `bounds` using `mode`.
///
/// A box with no width or height, or empty text, yields an empty result
/// that is not truncated.
///
/// ```
/// use spark_flow::text::wrap;
/// use spark_flow::types::{Size, TextWrap};
///
/// let out = wrap("Hello, World!", TextWrap::Word, false, Size::new(8, 5));
/// assert_eq!(out.text, "Hello,\nWorld!");
/// assert_eq!(out.size, Size::new(6, 2));
///
/// let out = wrap("Hello, World!", TextWrap::None, true, Size::new(5, 5));
/// assert_eq!(out.text, "Hell…");
/// assert!(out.is_truncated());
/// ```
pub fn wrap(text: &str, mode: TextWrap, use_ellipsis: bool, bounds: Size) -> Wrapped {
    if bounds.width <= 0 || bounds.height <= 0 || text.is_empty() {
        return Wrapped::default();
    }

    let text = sanitize(text);
    if text.is_empty() {
        return Wrapped::default();
    }

    let width = bounds.width as usize;
    let height = bounds.height as usize;

    match mode {
        TextWrap::None => clip_lines(&text, use_ellipsis, width, height),
        TextWrap::Word => {
            LineFiller::new(width, height, use_ellipsis, MIN_PARTIAL_WORD, true).fill(&text)
        }
        TextWrap::Character => {
            LineFiller::new(width, height, use_ellipsis, MIN_PARTIAL_CHAR, false).fill(&text)
        }
    }
}

/// Natural size of `text` in `mode` with no box constraint.
pub fn measure(text: &str, mode: TextWrap) -> Size {
    wrap(text, mode, false, Size::UNBOUNDED).size
}

// =============================================================================
// No Wrap
// =============================================================================

fn clip_lines(text: &str, use_ellipsis: bool, width: usize, height: usize) -> Wrapped {
    let mut lines: Vec<String> = Vec::new();
    let mut truncation = Truncation::empty();

    for raw_line in text.split('\n') {
        if lines.len() == height {
            truncation |= Truncation::HEIGHT;
            break;
        }

        if string_width(raw_line) > width {
            let mut line: String = raw_line.chars().take(width).collect();
            truncation |= Truncation::WIDTH;
            if use_ellipsis {
                line.pop();
                line.push(ELLIPSIS);
                truncation |= Truncation::ELLIPSIS;
            }
            lines.push(line);
        } else {
            lines.push(raw_line.to_string());
        }
    }

    if use_ellipsis && truncation.contains(Truncation::HEIGHT) {
        if let Some(last) = lines.last_mut() {
            end_with_ellipsis(last, width);
            truncation |= Truncation::ELLIPSIS;
        }
    }

    Wrapped::from_lines(lines, truncation)
}

/// Mark a line as cut off without letting it grow past `width`.
fn end_with_ellipsis(line: &mut String, width: usize) {
    if line.ends_with(ELLIPSIS) {
        return;
    }
    if string_width(line) >= width {
        line.pop();
    }
    line.push(ELLIPSIS);
}

// =============================================================================
// Word / Character Wrap
// =============================================================================

/// Greedy line filler shared by word and character wrapping.
struct LineFiller {
    width: usize,
    height: usize,
    min_partial: usize,
    hyphenate: bool,
    ellipsis: bool,
    /// Move a word that fits on a line of its own to the next line instead
    /// of splitting it.
    keep_whole_words: bool,

    lines: Vec<String>,
    line: String,
    line_width: usize,
    truncation: Truncation,
}

impl LineFiller {
    fn new(
        width: usize,
        height: usize,
        use_ellipsis: bool,
        min_partial: usize,
        keep_whole_words: bool,
    ) -> Self {
        // A single column has no room for a hyphen or an ellipsis next to text.
        let narrow = width < 2;
        Self {
            width,
            height,
            min_partial: min_partial.min(width),
            hyphenate: !narrow,
            ellipsis: use_ellipsis && !narrow,
            keep_whole_words,
            lines: Vec::new(),
            line: String::new(),
            line_width: 0,
            truncation: Truncation::empty(),
        }
    }

    fn fill(mut self, text: &str) -> Wrapped {
        for paragraph in text.split('\n') {
            if self.lines.len() == self.height {
                self.truncation |= Truncation::HEIGHT;
                self.mark_last_line();
                break;
            }
            if !self.fill_paragraph(paragraph) {
                break;
            }
            self.push_line();
        }

        Wrapped::from_lines(self.lines, self.truncation)
    }

    /// Returns false once the box is full and the rest of the text is dropped.
    fn fill_paragraph(&mut self, paragraph: &str) -> bool {
        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            let mut rest: &[char] = &chars;

            loop {
                let sep = usize::from(self.line_width > 0);

                if self.line_width + sep + rest.len() <= self.width {
                    self.append(sep, rest);
                    break;
                }

                if self.on_last_line() {
                    self.cut_last_line(sep, rest);
                    return false;
                }

                if self.keep_whole_words && self.line_width > 0 && rest.len() <= self.width {
                    self.push_line();
                    continue;
                }

                let hyphen = usize::from(self.hyphenate);
                let room = self.width as isize
                    - self.line_width as isize
                    - hyphen as isize
                    - sep as isize;

                if self.line_width > 0 && room < self.min_partial as isize {
                    self.push_line();
                    continue;
                }

                let mut partial = room.max(1) as usize;
                if rest.len() > 2 * self.min_partial {
                    while rest.len() - partial < self.min_partial {
                        partial -= 1;
                    }
                }

                self.append(sep, &rest[..partial]);
                if self.hyphenate {
                    self.line.push(HYPHEN);
                    self.line_width += 1;
                }
                self.push_line();
                rest = &rest[partial..];
            }
        }

        true
    }

    #[inline]
    fn on_last_line(&self) -> bool {
        self.lines.len() + 1 >= self.height
    }

    /// Fill what is left of the final line with a piece of `rest` and stop.
    fn cut_last_line(&mut self, sep: usize, rest: &[char]) {
        let reserve = usize::from(self.ellipsis);
        let room = self.width as isize
            - self.line_width as isize
            - sep as isize
            - reserve as isize;

        if room > 0 {
            let take = (room as usize).min(rest.len());
            self.append(sep, &rest[..take]);
        }

        self.truncation |= Truncation::HEIGHT;
        if self.ellipsis {
            end_with_ellipsis(&mut self.line, self.width);
            self.truncation |= Truncation::ELLIPSIS;
        }
        self.push_line();
    }

    /// More text remains but every line is used.
    fn mark_last_line(&mut self) {
        if !self.ellipsis {
            return;
        }
        if let Some(last) = self.lines.last_mut() {
            end_with_ellipsis(last, self.width);
            self.truncation |= Truncation::ELLIPSIS;
        }
    }

    fn append(&mut self, sep: usize, chars: &[char]) {
        if sep > 0 {
            self.line.push(' ');
        }
        self.line.extend(chars.iter());
        self.line_width += sep + chars.len();
    }

    fn push_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.line));
        self.line_width = 0;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, mode: TextWrap, ellipsis: bool, w: i32, h: i32) -> Wrapped {
        wrap(text, mode, ellipsis, Size::new(w, h))
    }

    // ── degenerate boxes ──

    #[test]
    fn test_empty_box_yields_nothing() {
        for (w, h) in [(0, 5), (5, 0), (-1, 3), (3, -7), (0, 0)] {
            for mode in [TextWrap::Word, TextWrap::Character, TextWrap::None] {
                let out = run("Hello", mode, true, w, h);
                assert_eq!(out, Wrapped::default());
                assert!(!out.is_truncated());
            }
        }
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let out = run("", TextWrap::Word, true, 10, 10);
        assert_eq!(out.text, "");
        assert_eq!(out.size, Size::ZERO);
        assert!(!out.is_truncated());
    }

    // ── no wrap ──

    #[test]
    fn test_nowrap_clips_long_line() {
        let out = run("Hello, World!", TextWrap::None, false, 5, 5);
        assert_eq!(out.text, "Hello");
        assert_eq!(out.size, Size::new(5, 1));
        assert!(out.truncation.contains(Truncation::WIDTH));
    }

    #[test]
    fn test_nowrap_clip_with_ellipsis() {
        let out = run("Hello, World!", TextWrap::None, true, 5, 5);
        assert_eq!(out.text, "Hell…");
        assert_eq!(out.size, Size::new(5, 1));
        assert!(out.truncation.contains(Truncation::ELLIPSIS));
    }

    #[test]
    fn test_nowrap_clips_each_line() {
        let out = run("Hello,\nWorld!", TextWrap::None, true, 5, 5);
        assert_eq!(out.text, "Hell…\nWorl…");
        assert_eq!(out.size, Size::new(5, 2));
    }

    #[test]
    fn test_nowrap_drops_extra_lines() {
        let out = run("Hello,\nWorld!", TextWrap::None, false, 10, 1);
        assert_eq!(out.text, "Hello,");
        assert_eq!(out.size, Size::new(6, 1));
        assert!(out.truncation.contains(Truncation::HEIGHT));
    }

    #[test]
    fn test_nowrap_drops_extra_lines_with_ellipsis() {
        let out = run("Hello,\nWorld!", TextWrap::None, true, 10, 1);
        assert_eq!(out.text, "Hello,…");
        assert_eq!(out.size, Size::new(7, 1));
    }

    #[test]
    fn test_nowrap_ellipsis_on_full_last_line_replaces() {
        let out = run("abcde\nfg", TextWrap::None, true, 5, 1);
        assert_eq!(out.text, "abcd…");
        assert_eq!(out.size, Size::new(5, 1));
    }

    #[test]
    fn test_nowrap_keeps_blank_lines() {
        let out = run("a\n\nb", TextWrap::None, false, 5, 5);
        assert_eq!(out.text, "a\n\nb");
        assert_eq!(out.size, Size::new(1, 3));
        assert!(!out.is_truncated());
    }

    // ── word wrap ──

    #[test]
    fn test_word_wrap_basic() {
        let out = run("Hello, World!", TextWrap::Word, false, 8, 5);
        assert_eq!(out.text, "Hello,\nWorld!");
        assert_eq!(out.size, Size::new(6, 2));
        assert!(!out.is_truncated());
    }

    #[test]
    fn test_word_wrap_fills_exact_width() {
        let out = run(
            "I'm a little amazed everyday with the things people create in computer science.",
            TextWrap::Word,
            false,
            20,
            10,
        );
        assert_eq!(
            out.text,
            "I'm a little amazed\neveryday with the\nthings people create\nin computer science."
        );
        assert_eq!(out.size, Size::new(20, 4));
    }

    #[test]
    fn test_word_wrap_hyphenates_long_word() {
        let out = run(
            "This was totally Supercalifragilisticexpialidocious and I'm not sure how to handle it.",
            TextWrap::Word,
            false,
            10,
            20,
        );
        assert_eq!(
            out.text,
            "This was\ntotally\nSupercali-\nfragilist-\nicexpiali-\ndocious\nand I'm\nnot sure\nhow to\nhandle it."
        );
        assert_eq!(out.size, Size::new(10, 10));
    }

    #[test]
    fn test_word_wrap_collapses_whitespace() {
        let out = run("  a   b \t c  ", TextWrap::Word, false, 20, 5);
        assert_eq!(out.text, "a b c");
        assert_eq!(out.size, Size::new(5, 1));
    }

    #[test]
    fn test_word_wrap_honors_newlines() {
        let out = run("ab\ncd", TextWrap::Word, false, 20, 5);
        assert_eq!(out.text, "ab\ncd");
        assert_eq!(out.size, Size::new(2, 2));
    }

    #[test]
    fn test_word_wrap_last_line_ellipsis() {
        let out = run("Hello, World!", TextWrap::Word, true, 8, 1);
        assert_eq!(out.text, "Hello,…");
        assert_eq!(out.size, Size::new(7, 1));
        assert!(out.truncation.contains(Truncation::HEIGHT | Truncation::ELLIPSIS));
    }

    #[test]
    fn test_word_wrap_last_line_cut_without_ellipsis() {
        let out = run("aaa bbbbbb", TextWrap::Word, false, 6, 1);
        assert_eq!(out.text, "aaa bb");
        assert!(out.is_truncated());
    }

    #[test]
    fn test_word_wrap_extra_paragraph_sets_ellipsis() {
        let out = run("one\ntwo", TextWrap::Word, true, 10, 1);
        assert_eq!(out.text, "one…");
        assert!(out.truncation.contains(Truncation::HEIGHT));
    }

    #[test]
    fn test_single_column_disables_marks() {
        let out = run("H", TextWrap::Word, false, 1, 1);
        assert_eq!(out.text, "H");
        assert_eq!(out.size, Size::new(1, 1));

        let out = run("H", TextWrap::Word, true, 1, 1);
        assert_eq!(out.text, "H");
        assert_eq!(out.size, Size::new(1, 1));

        let out = run("Hello", TextWrap::Word, true, 1, 1);
        assert_eq!(out.text, "H");
        assert!(out.is_truncated());
    }

    #[test]
    fn test_single_column_word_splits_without_hyphen() {
        let out = run("abc", TextWrap::Word, false, 1, 5);
        assert_eq!(out.text, "a\nb\nc");
        assert_eq!(out.size, Size::new(1, 3));
    }

    // ── character wrap ──

    #[test]
    fn test_character_wrap() {
        let out = run(
            "It's not as common to use character wrap, but it's still useful.",
            TextWrap::Character,
            false,
            10,
            15,
        );
        assert_eq!(
            out.text,
            "It's not\nas common\nto use ch-\naracter\nwrap, but\nit's still\nuseful."
        );
        assert_eq!(out.size, Size::new(10, 7));
    }

    // ── measure ──

    #[test]
    fn test_measure_unbounded() {
        assert_eq!(measure("Hello, World!", TextWrap::Word), Size::new(13, 1));
        assert_eq!(measure("ab\nabcd", TextWrap::None), Size::new(4, 2));
        assert_eq!(measure("", TextWrap::Word), Size::ZERO);
    }
}
