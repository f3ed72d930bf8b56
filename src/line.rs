//! Lines and line normalization
//!
//! A [`Line`] keeps its original content for display. Comparison goes
//! through [`normalize`], and [`LineKeys`] interns normalized lines so both
//! diff phases compare the exact same keys.

use std::borrow::Cow;

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::options::CompareOptions;

// =============================================================================
// Line
// =============================================================================

/// A single `\n`-delimited segment of an input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    /// Original, unmodified content
    pub content: CompactString,
    /// 1-based position within its own side
    pub number: usize,
}

impl Line {
    /// Create a line with a 1-based number.
    pub fn new(content: impl Into<CompactString>, number: usize) -> Self {
        Self {
            content: content.into(),
            number,
        }
    }

    /// Original content.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Comparison key under `options`.
    #[inline]
    pub fn normalized(&self, options: &CompareOptions) -> Cow<'_, str> {
        normalize(&self.content, options)
    }
}

/// Split text on `\n` and number the lines from 1.
///
/// A trailing newline yields a trailing empty line, and an empty text is a
/// single empty line.
pub fn split_lines(text: &str) -> Vec<Line> {
    text.split('\n')
        .enumerate()
        .map(|(i, s)| Line::new(s, i + 1))
        .collect()
}

// =============================================================================
// Normalizer
// =============================================================================

/// Canonical form of `line` used only for equality testing.
///
/// Borrows when no option is set.
pub fn normalize<'a>(line: &'a str, options: &CompareOptions) -> Cow<'a, str> {
    let mut out = Cow::Borrowed(line);

    if options.ignore_whitespace {
        let mut collapsed = String::with_capacity(out.len());
        for word in out.split_whitespace() {
            if !collapsed.is_empty() {
                collapsed.push(' ');
            }
            collapsed.push_str(word);
        }
        out = Cow::Owned(collapsed);
    }

    if options.ignore_case {
        out = Cow::Owned(out.to_lowercase());
    }

    out
}

// =============================================================================
// LineKeys
// =============================================================================

/// Interned comparison keys for both sides of a diff.
///
/// Each distinct normalized line gets one `u32` id. Equal ids mean equal
/// lines under the options the keys were built with.
#[derive(Debug, Clone)]
pub struct LineKeys {
    pub original: Vec<u32>,
    pub modified: Vec<u32>,
}

impl LineKeys {
    /// Normalize and intern both sides with the same options.
    pub fn build(original: &[Line], modified: &[Line], options: &CompareOptions) -> Self {
        let mut table: FxHashMap<Cow<'_, str>, u32> = FxHashMap::default();

        let original = original
            .iter()
            .map(|line| intern(&mut table, line, options))
            .collect();
        let modified = modified
            .iter()
            .map(|line| intern(&mut table, line, options))
            .collect();
        Self { original, modified }
    }

    /// Whether original line `i` and modified line `j` (0-based) are equal.
    #[inline]
    pub fn same(&self, i: usize, j: usize) -> bool {
        self.original[i] == self.modified[j]
    }
}

fn intern<'a>(
    table: &mut FxHashMap<Cow<'a, str>, u32>,
    line: &'a Line,
    options: &CompareOptions,
) -> u32 {
    let next = table.len() as u32;
    *table.entry(normalize(&line.content, options)).or_insert(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_numbers_from_one() {
        let lines = split_lines("a\nb\nc");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Line::new("a", 1));
        assert_eq!(lines[2], Line::new("c", 3));
    }

    #[test]
    fn test_split_trailing_newline() {
        let lines = split_lines("a\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].as_str(), "");
        assert_eq!(split_lines("").len(), 1);
    }

    #[test]
    fn test_normalize_whitespace() {
        let opts = CompareOptions::default().with_ignore_whitespace(true);
        assert_eq!(normalize("  a \t b   c  ", &opts), "a b c");
        assert_eq!(normalize("   ", &opts), "");
    }

    #[test]
    fn test_normalize_case() {
        let opts = CompareOptions::default().with_ignore_case(true);
        assert_eq!(normalize("Hello World", &opts), "hello world");
    }

    #[test]
    fn test_normalize_composes() {
        assert_eq!(
            normalize(" Hello   WORLD ", &CompareOptions::LENIENT),
            "hello world"
        );
    }

    #[test]
    fn test_normalize_exact_borrows() {
        let out = normalize("  As Is ", &CompareOptions::EXACT);
        assert!(matches!(out, Cow::Borrowed("  As Is ")));
    }

    #[test]
    fn test_normalize_keeps_display_content() {
        let line = Line::new("Hello   World", 1);
        assert_eq!(line.normalized(&CompareOptions::LENIENT), "hello world");
        assert_eq!(line.as_str(), "Hello   World");
    }

    #[test]
    fn test_keys_shared_between_sides() {
        let a = split_lines("x\nY\nz");
        let b = split_lines("y\nx");
        let keys = LineKeys::build(&a, &b, &CompareOptions::default().with_ignore_case(true));
        assert!(keys.same(0, 1));
        assert!(keys.same(1, 0));
        assert!(!keys.same(2, 0));
    }
}
