use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Line number used when the source position is not available.
pub const UNKNOWN_LINE: i64 = -1;

/// Position of an element's declaration in its source file.
///
/// Lines and columns are 1-based. A line of [`UNKNOWN_LINE`] means "not available".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct Location {
    line: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
}

impl Location {
    pub const fn new(line: i64) -> Self {
        Self { line, column: None }
    }

    pub const fn with_column(line: i64, column: u32) -> Self {
        Self {
            line,
            column: Some(column),
        }
    }

    pub const fn unknown() -> Self {
        Self::new(UNKNOWN_LINE)
    }

    pub fn line(&self) -> i64 {
        self.line
    }

    pub fn column(&self) -> Option<u32> {
        self.column
    }

    /// Negative lines other than the sentinel are accepted but never treated as real positions.
    pub fn is_known(&self) -> bool {
        self.line >= 0
    }

    /// Orders two positions in the same file. Returns `None` when either side is unknown.
    pub fn cmp_position(&self, other: &Location) -> Option<Ordering> {
        if !self.is_known() || !other.is_known() {
            return None;
        }
        Some(
            self.line
                .cmp(&other.line)
                .then_with(|| self.column.unwrap_or(0).cmp(&other.column.unwrap_or(0))),
        )
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Location {
    /// 1-based location from a 0-based row and column. Values out of range saturate.
    pub fn from_zero_based(row: usize, column: usize) -> Self {
        let line = i64::try_from(row).unwrap_or(i64::MAX).saturating_add(1);
        let column = u32::try_from(column).unwrap_or(u32::MAX).saturating_add(1);
        Self::with_column(line, column)
    }
}

impl From<tree_sitter::Point> for Location {
    /// Tree-sitter points are 0-based.
    fn from(point: tree_sitter::Point) -> Self {
        Self::from_zero_based(point.row, point.column)
    }
}
