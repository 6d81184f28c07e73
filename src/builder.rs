use log::debug;

use crate::canvas::PixelGrid;
use crate::ecc;
use crate::error::{Error, Result};
use crate::high_level::{self, CW_PADDING};
use crate::layout::{Layout, MAX_CODEWORDS};
use crate::render;
use crate::settings::Settings;
use crate::tables::PatternTable;

/// A fully encoded and rendered PDF417 symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    layout: Layout,
    level: u8,
    compact: bool,
    codewords: Vec<u16>,
    grid: PixelGrid,
}

impl Symbol {
    /// Get the number of rows of the PDF417.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Width of a row in modules: start pattern, left indicator, data
    /// columns, right indicator, stop pattern and the trailing bar.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.layout.width_modules(self.compact)
    }

    /// Number of data codeword columns.
    #[inline]
    pub const fn data_columns(&self) -> usize {
        self.layout.columns()
    }

    /// Error correction level the symbol was built with (0-8).
    #[inline]
    pub const fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub const fn is_compact(&self) -> bool {
        self.compact
    }

    /// Every codeword of the symbol in row order: length descriptor, data,
    /// padding, then the correction codewords.
    pub fn codewords(&self) -> &[u16] {
        &self.codewords
    }

    /// Number of codewords before the correction codewords, as stored in the
    /// length descriptor.
    pub fn data_len(&self) -> usize {
        self.codewords[0] as usize
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }
}

/// An empty payload does not fit a symbol either: it is reported as a
/// capacity error with no codeword required.
const NOTHING_TO_ENCODE: Error = Error::CapacityExceeded { required: 0, maximum: MAX_CODEWORDS };

/// Builds [Symbol]s with a given pattern table.
///
/// ```ignore
/// let encoder = PDF417Encoder::new(&table);
/// let symbol = encoder.encode_text("Hello, world!", &Settings::default())?;
/// let bitmap = symbol.grid().to_bytes();
/// ```
#[derive(Debug)]
pub struct PDF417Encoder<'t, T: PatternTable + ?Sized> {
    table: &'t T,
}

impl<'t, T: PatternTable + ?Sized> Clone for PDF417Encoder<'t, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, T: PatternTable + ?Sized> Copy for PDF417Encoder<'t, T> {}

impl<'t, T: PatternTable + ?Sized> PDF417Encoder<'t, T> {
    pub const fn new(table: &'t T) -> Self {
        Self { table }
    }

    /// Encodes `bytes` with byte compaction.
    pub fn encode_bytes(&self, bytes: &[u8], settings: &Settings) -> Result<Symbol> {
        if bytes.is_empty() {
            return Err(NOTHING_TO_ENCODE);
        }
        self.build(high_level::compact_bytes(bytes), settings)
    }

    /// Encodes `text` with text compaction. Only the characters of the four
    /// text submodes are accepted (letters, digits, space, CR, LF, HT and
    /// ASCII punctuation).
    pub fn encode_text(&self, text: &str, settings: &Settings) -> Result<Symbol> {
        if text.is_empty() {
            return Err(NOTHING_TO_ENCODE);
        }
        self.build(high_level::compact_text(text)?, settings)
    }

    /// Sizes, pads, protects and renders a compacted payload whose first slot
    /// is reserved for the length descriptor.
    fn build(&self, mut codewords: Vec<u16>, settings: &Settings) -> Result<Symbol> {
        let data_len = codewords.len();
        let settings = settings.resolve(data_len)?;
        let ecc_count = settings.ecc_count();
        debug!("{data_len} data codewords, correction level {}", settings.level);

        let layout = Layout::compute(1 + data_len + ecc_count, &settings)?;

        let padded_len = layout.capacity() - ecc_count;
        codewords.resize(padded_len, CW_PADDING);
        codewords[0] = padded_len as u16;
        codewords.resize(layout.capacity(), 0);
        ecc::generate_ecc(&mut codewords, settings.level);

        let grid = render::render(self.table, &codewords, &layout, &settings);
        debug!("symbol rendered on a {}x{} pixel grid", grid.width(), grid.height());

        Ok(Symbol { layout, level: settings.level, compact: settings.compact, codewords, grid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CorrectionLevel;
    use crate::tables::SyntheticTable;

    const ENCODER: PDF417Encoder<'static, SyntheticTable> = PDF417Encoder::new(&SyntheticTable);

    #[test]
    fn test_four_bytes() {
        let symbol = ENCODER.encode_bytes(&[0, 1, 2, 3], &Settings::default()).unwrap();
        assert_eq!(symbol.rows(), 8);
        assert_eq!(symbol.columns(), (1 + 5) * 17 + 1);
        assert_eq!(symbol.data_columns(), 2);
        assert_eq!(symbol.level(), 2);
        assert_eq!(symbol.codewords().len(), 16);
        assert_eq!(symbol.data_len(), 8);
        assert_eq!(symbol.codewords()[..8], [8, 901, 0, 1, 2, 3, 900, 900]);
    }

    #[test]
    fn test_seventeen_bytes() {
        let bytes: Vec<u8> = (0..17).collect();
        let symbol = ENCODER.encode_bytes(&bytes, &Settings::default()).unwrap();
        assert_eq!(symbol.rows(), 13);
        assert_eq!(symbol.columns(), (1 + 5) * 17 + 1);
    }

    #[test]
    fn test_grid_size() {
        let symbol = ENCODER.encode_text("PDF417", &Settings::default()).unwrap();
        let grid = symbol.grid();
        assert_eq!(grid.width(), symbol.columns() * 4 + 16);
        assert_eq!(grid.height(), symbol.rows() * 12 + 16);
    }

    #[test]
    fn test_fixed_level() {
        let settings = Settings::default().with_correction_level(CorrectionLevel::Level(5));
        let symbol = ENCODER.encode_text("Fixed level", &settings).unwrap();
        assert_eq!(symbol.level(), 5);
        assert_eq!(symbol.codewords().len() - symbol.data_len(), 64);
    }

    #[test]
    fn test_correction_codewords_check_out() {
        let symbol = ENCODER.encode_text("Hello, world!", &Settings::default()).unwrap();
        assert!(ecc::syndrome(symbol.codewords(), symbol.level()).iter().all(|&r| r == 0));
    }

    #[test]
    fn test_errors() {
        let defaults = Settings::default();
        let empty = Err(Error::CapacityExceeded { required: 0, maximum: 925 });
        assert_eq!(ENCODER.encode_bytes(&[], &defaults), empty);
        assert_eq!(ENCODER.encode_text("", &defaults), empty);
        assert_eq!(
            ENCODER.encode_text("caf\u{e9}", &defaults),
            Err(Error::UnencodableCharacter { character: '\u{e9}', position: 3 })
        );

        let bad_level = defaults.with_correction_level(CorrectionLevel::Level(12));
        assert_eq!(ENCODER.encode_text("A", &bad_level), Err(Error::InvalidCorrectionLevel(12)));

        // 1200 bytes: 1002 data codewords, level 0
        let big = vec![7u8; 1200];
        assert_eq!(
            ENCODER.encode_bytes(&big, &defaults),
            Err(Error::CapacityExceeded { required: 1 + 1002 + 2, maximum: 925 })
        );
    }

    #[test]
    fn test_compact() {
        let settings = Settings::default().with_compact(true);
        let symbol = ENCODER.encode_bytes(&[0, 1, 2, 3], &settings).unwrap();
        assert!(symbol.is_compact());
        assert_eq!(symbol.columns(), (symbol.data_columns() + 2) * 17 + 1);
    }
}
