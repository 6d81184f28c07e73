use core::iter;

use crate::bitvector::BitVector;
use crate::generators::indicators::RowIndicators;
use crate::layout::Layout;
use crate::tables::{PatternTable, PATTERN_LEN, START_PATTERN, STOP_PATTERN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowPattern {
    Start,
    Left,
    Data,
    Right,
    Stop,
    End,
    None,
}

/// Iterator over the module patterns of one row: start pattern, left
/// indicator, data codewords, right indicator, stop pattern and the final one
/// module bar. Compact rows skip the right indicator and the stop pattern.
pub struct PDF417Row<'a, T: PatternTable + ?Sized> {
    table: &'a T,
    codewords: &'a [u16],
    next_pat: RowPattern,
    cluster: usize,
    /// (left, right)
    markers: (u16, u16),
    compact: bool,
}

impl<'a, T: PatternTable + ?Sized> PDF417Row<'a, T> {
    pub fn new(table: &'a T, codewords: &'a [u16], row: usize, indicators: &RowIndicators, compact: bool) -> Self {
        Self {
            table,
            codewords,
            next_pat: RowPattern::Start,
            cluster: row % 3,
            markers: indicators.markers(row),
            compact,
        }
    }

    fn codeword(&self, cw: u16) -> BitVector {
        BitVector::from_pattern(self.table.pattern(self.cluster, cw), PATTERN_LEN)
    }

    fn after_data(&self) -> RowPattern {
        if self.compact { RowPattern::End } else { RowPattern::Right }
    }
}

impl<'a, T: PatternTable + ?Sized> Clone for PDF417Row<'a, T> {
    fn clone(&self) -> Self {
        Self { table: self.table, codewords: self.codewords, ..*self }
    }
}

impl<'a, T: PatternTable + ?Sized> iter::Iterator for PDF417Row<'a, T> {
    type Item = BitVector;

    fn next(&mut self) -> Option<Self::Item> {
        let (item, next) = match self.next_pat {
            RowPattern::Start => (BitVector::from_pattern(START_PATTERN, PATTERN_LEN), RowPattern::Left),
            RowPattern::Left => {
                let next = if self.codewords.is_empty() { self.after_data() } else { RowPattern::Data };
                (self.codeword(self.markers.0), next)
            }
            RowPattern::Data => {
                let cw = self.codewords[0];
                self.codewords = &self.codewords[1..];

                let next = if self.codewords.is_empty() { self.after_data() } else { RowPattern::Data };
                (self.codeword(cw), next)
            }
            RowPattern::Right => (self.codeword(self.markers.1), RowPattern::Stop),
            RowPattern::Stop => (BitVector::from_pattern(STOP_PATTERN, PATTERN_LEN), RowPattern::End),
            RowPattern::End => (BitVector::filled(1, true), RowPattern::None),
            RowPattern::None => return None,
        };

        self.next_pat = next;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let tail = if self.compact { 1 } else { 3 };
        let count = self.codewords.len() + match self.next_pat {
            RowPattern::Start => 2 + tail,
            RowPattern::Left => 1 + tail,
            RowPattern::Data => tail,
            RowPattern::Right => 3,
            RowPattern::Stop => 2,
            RowPattern::End => 1,
            RowPattern::None => 0,
        };
        (count, Some(count))
    }
}

impl<'a, T: PatternTable + ?Sized> ExactSizeIterator for PDF417Row<'a, T> {}
impl<'a, T: PatternTable + ?Sized> iter::FusedIterator for PDF417Row<'a, T> {}

/// Iterator over the rows of a symbol.
pub struct PDF417RowIterator<'a, T: PatternTable + ?Sized> {
    table: &'a T,
    codewords: &'a [u16],
    layout: Layout,
    indicators: RowIndicators,
    compact: bool,

    row: usize,
}

impl<'a, T: PatternTable + ?Sized> PDF417RowIterator<'a, T> {
    pub fn new(table: &'a T, codewords: &'a [u16], layout: Layout, level: u8, compact: bool) -> Self {
        assert!(codewords.len() == layout.capacity(),
            "codewords will not fit in the provided configuration");

        Self {
            table,
            codewords,
            layout,
            indicators: RowIndicators::new(layout.rows(), layout.columns(), level),
            compact,
            row: 0,
        }
    }
}

impl<'a, T: PatternTable + ?Sized> iter::Iterator for PDF417RowIterator<'a, T> {
    type Item = PDF417Row<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row == self.layout.rows() {
            return None;
        }

        let cols = self.layout.columns();
        let start = self.row * cols;
        let codewords = &self.codewords[start..start + cols];
        let row = PDF417Row::new(self.table, codewords, self.row, &self.indicators, self.compact);

        self.row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.layout.rows() - self.row;
        (count, Some(count))
    }
}

impl<'a, T: PatternTable + ?Sized> ExactSizeIterator for PDF417RowIterator<'a, T> {}
impl<'a, T: PatternTable + ?Sized> iter::FusedIterator for PDF417RowIterator<'a, T> {}
