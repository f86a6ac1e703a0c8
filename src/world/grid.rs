//! Occupancy grid: the whole map is a rectangle of unit cells.
//!
//! Each cell carries a small label: `0` is walkable, anything else is a
//! solid wall and doubles as the material id for that wall.  The grid is
//! built once, before the first frame, and never mutated afterwards – the
//! caster only ever reads it.

use thiserror::Error;

/// Errors raised while building or querying a [`Grid`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The cell buffer does not match the stated dimensions.
    #[error("cell buffer holds {got} labels, expected {expected}")]
    SizeMismatch { expected: usize, got: usize },

    /// A strict cell query landed outside `[0,width) × [0,height)`.
    #[error("cell ({x}, {y}) out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    /// Map text contained no cells at all.
    #[error("map text is empty")]
    EmptyMap,

    /// One map row is shorter or longer than the first.
    #[error("map row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A glyph in the map text is not ' ', or '0'–'9'.
    #[error("unknown map glyph {glyph:?} in row {row}")]
    BadGlyph { row: usize, glyph: char },
}

/// Immutable 2-D wall map, row-major flat buffer.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Take ownership of a fully populated label buffer.
    ///
    /// Dimension mismatch is a construction-time fatal error, never a
    /// per-frame one.
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, GridError> {
        if width == 0 || height == 0 || cells.len() != width * height {
            return Err(GridError::SizeMismatch {
                expected: width * height,
                got: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Decode an ASCII map: one text row per grid row.
    ///
    /// `' '` and `'0'` are empty, `'1'`–`'9'` are wall labels.  Rows must
    /// all share the first row's length.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;

        // enumerate before skipping blanks so error rows match the
        // source text's line numbers
        for (row, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let mut row_len = 0usize;
            for glyph in line.chars() {
                cells.push(match glyph {
                    ' ' | '0' => 0,
                    '1'..='9' => glyph as u8 - b'0',
                    _ => return Err(GridError::BadGlyph { row, glyph }),
                });
                row_len += 1;
            }
            if width == 0 {
                width = row_len;
            } else if row_len != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    got: row_len,
                });
            }
            height += 1;
        }

        if cells.is_empty() {
            return Err(GridError::EmptyMap);
        }
        Self::from_cells(width, height, cells)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Strict accessor: out-of-bounds is an error.
    pub fn cell(&self, x: i32, y: i32) -> Result<u8, GridError> {
        self.get(x, y).ok_or(GridError::OutOfBounds { x, y })
    }

    /// Traversal accessor: out-of-bounds is `None`, the normal way a ray
    /// leaves the map.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// `true` iff `label` blocks rays (anything but 0).
    #[inline(always)]
    pub fn is_opaque(label: u8) -> bool {
        label != 0
    }

    /// `true` iff the cell containing the continuous point `(x, y)` is a
    /// wall.  Points outside the map count as solid.
    #[inline]
    pub fn blocks(&self, x: f32, y: f32) -> bool {
        self.get(x.floor() as i32, y.floor() as i32)
            .map_or(true, Self::is_opaque)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_validates_dimensions() {
        let err = Grid::from_cells(3, 2, vec![0; 5]).unwrap_err();
        assert_eq!(err, GridError::SizeMismatch { expected: 6, got: 5 });
        assert!(Grid::from_cells(0, 2, vec![]).is_err());
        assert!(Grid::from_cells(3, 2, vec![0; 6]).is_ok());
    }

    #[test]
    fn cell_is_strict_get_is_not() {
        let g = Grid::from_cells(2, 2, vec![0, 1, 2, 0]).unwrap();
        assert_eq!(g.cell(1, 0), Ok(1));
        assert_eq!(g.cell(0, 1), Ok(2));
        assert_eq!(g.cell(2, 0), Err(GridError::OutOfBounds { x: 2, y: 0 }));
        assert_eq!(g.cell(0, -1), Err(GridError::OutOfBounds { x: 0, y: -1 }));
        assert_eq!(g.get(-1, 0), None);
        assert_eq!(g.get(1, 1), Some(0));
    }

    #[test]
    fn parse_ascii_map() {
        let g = Grid::parse("111\n1 1\n121\n").unwrap();
        assert_eq!((g.width(), g.height()), (3, 3));
        assert_eq!(g.cell(1, 1), Ok(0));
        assert_eq!(g.cell(1, 2), Ok(2));
        assert_eq!(g.cell(0, 0), Ok(1));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(Grid::parse(""), Err(GridError::EmptyMap)));
        assert!(matches!(
            Grid::parse("11\n111\n"),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            Grid::parse("1x\n"),
            Err(GridError::BadGlyph { glyph: 'x', .. })
        ));
    }

    #[test]
    fn error_rows_count_blank_lines() {
        // blank separator line: the bad rows still sit at source lines 2 and 3
        assert!(matches!(
            Grid::parse("11\n\n1x\n"),
            Err(GridError::BadGlyph { row: 2, glyph: 'x' })
        ));
        assert!(matches!(
            Grid::parse("11\n\n11\n111\n"),
            Err(GridError::RaggedRow { row: 3, .. })
        ));
    }

    #[test]
    fn opacity_and_blocks() {
        let g = Grid::parse("11\n1 \n").unwrap();
        assert!(Grid::is_opaque(3));
        assert!(!Grid::is_opaque(0));
        assert!(g.blocks(0.5, 0.5));
        assert!(!g.blocks(1.5, 1.5));
        // outside the map counts as solid
        assert!(g.blocks(-0.5, 0.5));
        assert!(g.blocks(0.5, 7.0));
    }
}
