//! Symbol sizing: number of rows and data columns, and the automatic
//! correction level.

use log::debug;

use crate::error::{Error, Result};
use crate::settings::ResolvedSettings;
use crate::tables::PATTERN_LEN;

/// Minimum number of rows in a PDF417 barcode.
pub const MIN_ROWS: usize = 3;
/// Maximum number of rows in a PDF417 barcode.
pub const MAX_ROWS: usize = 90;
/// Minimum number of data columns in a PDF417 barcode.
pub const MIN_COLS: usize = 1;
/// Maximum number of data columns in a PDF417 barcode.
pub const MAX_COLS: usize = 30;

/// Maximum number of significant codewords (length descriptor, data and
/// correction) a symbol can carry.
pub const MAX_CODEWORDS: usize = 925;
/// Maximum number of codeword slots in a symbol, padding included.
pub const MAX_SYMBOL_CODEWORDS: usize = 928;

/// Correction level chosen when the caller leaves it automatic. `data_len`
/// counts the compacted codewords, length descriptor included.
pub const fn auto_level(data_len: usize) -> u8 {
    match data_len {
        0..=40 | 912..=919 => 2,
        41..=160 | 896..=911 => 3,
        161..=320 | 864..=895 => 4,
        321..=863 => 5,
        920..=923 => 1,
        _ => 0,
    }
}

/// Codeword grid of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    columns: usize,
}

impl Layout {
    /// Number of non-data columns around the data: start pattern, left
    /// indicator, right indicator and stop pattern (the last two are absent
    /// from compact symbols).
    pub const fn overhead_columns(compact: bool) -> usize {
        if compact { 2 } else { 4 }
    }

    /// Sizes a symbol holding `cw_count` significant codewords.
    ///
    /// With `x` data columns the symbol is `17x + o` modules wide (`o` being
    /// the start/stop and indicator overhead plus the trailing bar) and about
    /// `h * cw_count / x` modules high, `h` being the row height. Asking for
    /// `width = a * height` gives `17x^2 + o*x - a*h*cw_count = 0`, whose
    /// positive root rounded up is the column count.
    pub fn compute(cw_count: usize, settings: &ResolvedSettings) -> Result<Self> {
        if cw_count > MAX_CODEWORDS {
            return Err(Error::CapacityExceeded { required: cw_count, maximum: MAX_CODEWORDS });
        }

        let o = (Self::overhead_columns(settings.compact) * PATTERN_LEN + 1) as f64;
        let ahc = settings.aspect_ratio * settings.row_height as f64 * cw_count as f64;
        let root = ((o * o + 68.0 * ahc).sqrt() - o) / (2.0 * PATTERN_LEN as f64);

        let mut columns = (root.ceil() as usize).clamp(MIN_COLS, MAX_COLS);
        let mut rows = cw_count.div_ceil(columns);
        if rows * columns > MAX_SYMBOL_CODEWORDS {
            // closest column count whose last row does not overflow the symbol
            let wanted = columns;
            columns = (MIN_COLS..=MAX_COLS)
                .filter(|&cols| cw_count.div_ceil(cols) * cols <= MAX_SYMBOL_CODEWORDS)
                .min_by_key(|&cols| cols.abs_diff(wanted))
                .ok_or(Error::InvalidLayout { rows, columns })?;
            rows = cw_count.div_ceil(columns);
        }
        let rows = rows.max(MIN_ROWS);

        if rows > MAX_ROWS {
            return Err(Error::InvalidLayout { rows, columns });
        }

        debug!("{cw_count} codewords laid out in {rows} rows of {columns} columns");
        Ok(Self { rows, columns })
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of data columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of codeword slots, `rows * columns`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Width of a row in modules, trailing bar included.
    #[inline]
    pub const fn width_modules(&self, compact: bool) -> usize {
        (self.columns + Self::overhead_columns(compact)) * PATTERN_LEN + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{CorrectionLevel, Settings};
    use proptest::prelude::*;

    fn resolved(settings: Settings) -> ResolvedSettings {
        settings.resolve(1).unwrap()
    }

    #[test]
    fn test_auto_level_brackets() {
        assert_eq!(auto_level(0), 2);
        assert_eq!(auto_level(40), 2);
        assert_eq!(auto_level(41), 3);
        assert_eq!(auto_level(160), 3);
        assert_eq!(auto_level(161), 4);
        assert_eq!(auto_level(320), 4);
        assert_eq!(auto_level(321), 5);
        assert_eq!(auto_level(863), 5);
        assert_eq!(auto_level(864), 4);
        assert_eq!(auto_level(895), 4);
        assert_eq!(auto_level(896), 3);
        assert_eq!(auto_level(911), 3);
        assert_eq!(auto_level(912), 2);
        assert_eq!(auto_level(919), 2);
        assert_eq!(auto_level(920), 1);
        assert_eq!(auto_level(923), 1);
        assert_eq!(auto_level(924), 0);
        assert_eq!(auto_level(5000), 0);
    }

    #[test]
    fn test_default_layouts() {
        let settings = resolved(Settings::default());
        // 4 bytes: 6 data codewords, level 2
        let layout = Layout::compute(1 + 6 + 8, &settings).unwrap();
        assert_eq!((layout.rows(), layout.columns()), (8, 2));
        assert_eq!(layout.width_modules(false), 103);
        assert_eq!(layout.width_modules(true), 69);

        // 17 bytes: 17 data codewords, level 2
        let layout = Layout::compute(1 + 17 + 8, &settings).unwrap();
        assert_eq!((layout.rows(), layout.columns()), (13, 2));
    }

    #[test]
    fn test_capacity_exceeded() {
        let settings = resolved(Settings::default());
        assert_eq!(
            Layout::compute(926, &settings),
            Err(Error::CapacityExceeded { required: 926, maximum: 925 })
        );
        // 18 columns would need 936 slots, 16 columns fit exactly
        let layout = Layout::compute(925, &settings).unwrap();
        assert_eq!((layout.rows(), layout.columns()), (58, 16));
    }

    #[test]
    fn test_minimum_rows() {
        let wide = resolved(Settings::default().with_aspect_ratio(50.0));
        let layout = Layout::compute(5, &wide).unwrap();
        assert_eq!(layout.rows(), MIN_ROWS);
        assert!(layout.columns() >= 2);
    }

    #[test]
    fn test_too_many_rows() {
        let tall = resolved(Settings::default().with_aspect_ratio(0.001));
        assert_eq!(Layout::compute(200, &tall), Err(Error::InvalidLayout { rows: 200, columns: 1 }));
    }

    proptest! {
        #[test]
        fn layout_holds_every_codeword(
            data_len in 1usize..=400,
            level in 0u8..=8,
            aspect_ratio in 0.2f64..20.0,
            row_height in 1u32..=6,
            compact in any::<bool>(),
        ) {
            let settings = Settings::default()
                .with_correction_level(CorrectionLevel::Level(level))
                .with_aspect_ratio(aspect_ratio)
                .with_row_height(row_height)
                .with_compact(compact)
                .resolve(data_len)
                .unwrap();
            let cw_count = 1 + data_len + settings.ecc_count();

            match Layout::compute(cw_count, &settings) {
                Ok(layout) => {
                    prop_assert!(layout.columns() >= MIN_COLS && layout.columns() <= MAX_COLS);
                    prop_assert!(layout.rows() >= MIN_ROWS && layout.rows() <= MAX_ROWS);
                    prop_assert!(layout.capacity() >= cw_count);
                    prop_assert!(layout.capacity() <= MAX_SYMBOL_CODEWORDS);
                }
                Err(Error::CapacityExceeded { required, maximum }) => {
                    prop_assert_eq!(required, cw_count);
                    prop_assert!(required > maximum);
                }
                Err(Error::InvalidLayout { rows, .. }) => prop_assert!(rows > MAX_ROWS),
                Err(e) => prop_assert!(false, "unexpected error {}", e),
            }
        }
    }
}
