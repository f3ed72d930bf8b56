//! Comparison and display options.
//!
//! Comparison options decide when two lines are equal. Display options only
//! affect rendering and never change the operation list.

// =============================================================================
// CompareOptions
// =============================================================================

/// How two lines are judged equal.
///
/// Neither flag alters the displayed content of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CompareOptions {
    /// Trim and collapse internal whitespace runs before comparing.
    pub ignore_whitespace: bool,
    /// Fold to lower case before comparing.
    pub ignore_case: bool,
}

impl CompareOptions {
    /// Byte-exact comparison.
    pub const EXACT: Self = Self {
        ignore_whitespace: false,
        ignore_case: false,
    };

    /// Ignore both whitespace and case differences.
    pub const LENIENT: Self = Self {
        ignore_whitespace: true,
        ignore_case: true,
    };

    /// Create options from both flags.
    pub fn new(ignore_whitespace: bool, ignore_case: bool) -> Self {
        Self {
            ignore_whitespace,
            ignore_case,
        }
    }

    /// Set whitespace insensitivity.
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Set case insensitivity.
    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// True when lines are compared byte for byte.
    #[inline]
    pub fn is_exact(&self) -> bool {
        !self.ignore_whitespace && !self.ignore_case
    }
}

// =============================================================================
// ContextLines
// =============================================================================

/// Number of unchanged lines kept around each change in the unified view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextLines {
    /// Show every line, never collapse.
    All,
    /// Keep this many unchanged lines on each side of a change cluster.
    Lines(usize),
}

impl ContextLines {
    /// Build from a possibly negative count; negatives clamp to zero.
    pub fn from_signed(n: i64) -> Self {
        if n < 0 {
            Self::Lines(0)
        } else {
            Self::from(usize::try_from(n).unwrap_or(usize::MAX))
        }
    }

    /// Finite context radius, `None` for [`ContextLines::All`].
    #[inline]
    pub fn radius(&self) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Lines(n) => Some(*n),
        }
    }
}

impl Default for ContextLines {
    fn default() -> Self {
        Self::Lines(3)
    }
}

impl From<usize> for ContextLines {
    /// `usize::MAX` is the "show all" sentinel.
    fn from(n: usize) -> Self {
        if n == usize::MAX {
            Self::All
        } else {
            Self::Lines(n)
        }
    }
}

// =============================================================================
// DisplayOptions
// =============================================================================

/// Rendering configuration for diff views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Prefix each row with its line number(s).
    pub show_line_numbers: bool,
    /// Context trimming for the unified view.
    pub context: ContextLines,
    /// Render side-by-side panes instead of one unified column.
    pub split_view: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            context: ContextLines::default(),
            split_view: false,
        }
    }
}

impl DisplayOptions {
    /// Unified view showing every line.
    pub fn full() -> Self {
        Self {
            context: ContextLines::All,
            ..Self::default()
        }
    }

    /// Side-by-side view.
    pub fn split() -> Self {
        Self {
            split_view: true,
            ..Self::default()
        }
    }

    /// Show or hide the line-number gutters.
    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Set how many unchanged lines the unified view keeps around changes.
    pub fn with_context(mut self, context: impl Into<ContextLines>) -> Self {
        self.context = context.into();
        self
    }

    /// Choose the side-by-side view over the unified one.
    pub fn with_split_view(mut self, split: bool) -> Self {
        self.split_view = split;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_presets() {
        assert!(CompareOptions::EXACT.is_exact());
        assert!(!CompareOptions::LENIENT.is_exact());
        assert_eq!(CompareOptions::default(), CompareOptions::EXACT);

        let opts = CompareOptions::default().with_ignore_case(true);
        assert!(opts.ignore_case);
        assert!(!opts.ignore_whitespace);
    }

    #[test]
    fn test_context_from_signed_clamps() {
        assert_eq!(ContextLines::from_signed(-5), ContextLines::Lines(0));
        assert_eq!(ContextLines::from_signed(0), ContextLines::Lines(0));
        assert_eq!(ContextLines::from_signed(7), ContextLines::Lines(7));
    }

    #[test]
    fn test_context_sentinel() {
        assert_eq!(ContextLines::from(usize::MAX), ContextLines::All);
        assert_eq!(ContextLines::from(3), ContextLines::Lines(3));
        assert_eq!(ContextLines::All.radius(), None);
        assert_eq!(ContextLines::Lines(2).radius(), Some(2));
    }

    #[test]
    fn test_display_defaults() {
        let opts = DisplayOptions::default();
        assert!(opts.show_line_numbers);
        assert_eq!(opts.context, ContextLines::Lines(3));
        assert!(!opts.split_view);

        assert!(DisplayOptions::split().split_view);
        assert_eq!(DisplayOptions::full().context, ContextLines::All);
        assert_eq!(
            DisplayOptions::default().with_context(5usize).context,
            ContextLines::Lines(5)
        );
    }
}
