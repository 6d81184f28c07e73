/// Values shared by the row indicators of a symbol.
///
/// Row indicators repeat, every three rows, the row count, the correction
/// level and the column count so a reader can size the symbol from any row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowIndicators {
    rows_val: u16,
    level_val: u16,
    cols_val: u16,
}

impl RowIndicators {
    pub const fn new(rows: usize, cols: usize, level: u8) -> Self {
        assert!(rows >= 1 && cols >= 1, "a symbol has at least one row and one column");
        Self {
            rows_val: ((rows - 1) / 3) as u16,
            level_val: (level as usize * 3 + (rows - 1) % 3) as u16,
            cols_val: (cols - 1) as u16,
        }
    }

    /// Left and right indicator codewords of `row`.
    pub const fn markers(&self, row: usize) -> (u16, u16) {
        let row_id = (row / 3) as u16 * 30;
        let (left, right) = match row % 3 {
            0 => (self.rows_val, self.cols_val),
            1 => (self.level_val, self.rows_val),
            _ => (self.cols_val, self.level_val),
        };
        (row_id + left, row_id + right)
    }
}

#[cfg(test)]
mod tests {
    use super::RowIndicators;

    #[test]
    fn test_markers() {
        // 8 rows, 2 columns, level 2: x1 = 2, x2 = 2 * 3 + 1 = 7, x3 = 1
        let ind = RowIndicators::new(8, 2, 2);
        assert_eq!(ind.markers(0), (2, 1));
        assert_eq!(ind.markers(1), (7, 2));
        assert_eq!(ind.markers(2), (1, 7));
        assert_eq!(ind.markers(3), (32, 31));
        assert_eq!(ind.markers(4), (37, 32));
        assert_eq!(ind.markers(7), (67, 62));
    }

    #[test]
    fn test_markers_stay_codewords() {
        let ind = RowIndicators::new(90, 30, 8);
        for row in 0..90 {
            let (left, right) = ind.markers(row);
            assert!(left < 900 && right < 900, "row {row}");
        }
    }
}
