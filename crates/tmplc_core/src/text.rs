//! Source position and location types.
//!
//! Template nodes carry line/column locations rather than byte offsets, since
//! diagnostics are reported as `L<line>:C<column>`.

use std::fmt;

/// A position in template source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SourcePosition {
    /// 1-based line number.
    pub line: u32,
    /// 0-based column.
    pub column: u32,
}

impl SourcePosition {
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Debug for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}:C{}", self.line, self.column)
    }
}

/// The start and end of a node in template source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    /// Where the node starts (inclusive).
    pub start: SourcePosition,
    /// Where the node ends (exclusive).
    pub end: SourcePosition,
}

impl SourceLocation {
    /// Line 0 never occurs in real source, so it marks nodes built without a
    /// location.
    const SYNTHETIC_LINE: u32 = 0;

    #[inline]
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        debug_assert!(end >= start);
        Self { start, end }
    }

    /// Create a location from raw line/column pairs.
    #[inline]
    pub fn from_coords(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self::new(
            SourcePosition::new(start_line, start_column),
            SourcePosition::new(end_line, end_column),
        )
    }

    /// A location for nodes that do not come from source text.
    #[inline]
    pub fn synthetic() -> Self {
        let pos = SourcePosition::new(Self::SYNTHETIC_LINE, 0);
        Self { start: pos, end: pos }
    }

    /// Whether this location was produced by [`SourceLocation::synthetic`].
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.start.line == Self::SYNTHETIC_LINE
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::synthetic()
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location() {
        let loc = SourceLocation::from_coords(1, 4, 1, 12);
        assert_eq!(loc.start, SourcePosition::new(1, 4));
        assert_eq!(loc.end, SourcePosition::new(1, 12));
        assert_eq!(loc.to_string(), "L1:C4");
    }

    #[test]
    fn test_position_ordering_spans_lines() {
        assert!(SourcePosition::new(1, 40) < SourcePosition::new(2, 0));
    }

    #[test]
    fn test_synthetic_location() {
        let loc = SourceLocation::synthetic();
        assert!(loc.is_synthetic());
        assert!(!SourceLocation::from_coords(3, 0, 3, 5).is_synthetic());
        assert_eq!(SourceLocation::default(), loc);
    }
}
