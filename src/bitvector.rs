use core::{fmt, iter, ops};

const BITS_PER_WORD: usize = u64::BITS as usize;

/// Fixed size array of bits packed in 64-bit words.
///
/// The length is set at construction and never changes. Indices are not
/// checked against the length: any index below [capacity](BitVector::capacity)
/// is accepted, so with a length of 2 the bits 2..63 can be read and written
/// as well. Indexing past the capacity panics. Callers must keep `index < len`
/// when they care about the value they read back.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    words: Box<[u64]>,
    len: usize,
}

#[inline]
const fn word_count(len: usize) -> usize {
    if len > 0 { (len - 1) / BITS_PER_WORD + 1 } else { 0 }
}

impl BitVector {
    /// Creates a vector of `len` cleared bits.
    pub fn new(len: usize) -> Self {
        Self::filled(len, false)
    }

    /// Creates a vector of `len` bits, all set to `value`.
    pub fn filled(len: usize, value: bool) -> Self {
        let fill = if value { u64::MAX } else { 0 };
        Self { words: vec![fill; word_count(len)].into_boxed_slice(), len }
    }

    /// Creates a vector from the `width` low bits of `value`, most significant
    /// bit first: bit `width - 1` of `value` lands at index 0. This is the
    /// left to right module order of a PDF417 pattern.
    pub fn from_pattern(value: u32, width: usize) -> Self {
        assert!(width <= u32::BITS as usize, "a pattern holds at most 32 modules");

        let mut bits = Self::new(width);
        if width > 0 {
            bits.words[0] = (value as u64).reverse_bits() >> (BITS_PER_WORD - width);
        }
        bits
    }

    /// Number of bits this vector was created with.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of addressable bits, `len` rounded up to a whole word.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.words[index / BITS_PER_WORD] & (1 << (index % BITS_PER_WORD)) != 0
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        let mask = 1 << (index % BITS_PER_WORD);
        let word = &mut self.words[index / BITS_PER_WORD];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Resets every bit to 0.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Sets every bit (including the unused tail of the last word) to `value`.
    pub fn fill(&mut self, value: bool) {
        self.words.fill(if value { u64::MAX } else { 0 });
    }

    /// True when no bit of the storage is set.
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Copies the bits of `other` into `self`, as many words as both hold.
    pub fn copy_from(&mut self, other: &BitVector) {
        let n = self.words.len().min(other.words.len());
        self.words[..n].copy_from_slice(&other.words[..n]);
    }

    /// Writes the storage into `target` byte by byte, bit 0 in the least
    /// significant position. With `msb_first` the bits of every byte are
    /// reversed so that bit 0 is the most significant one, the order used
    /// by 1 bit per pixel image formats. Stops at the shorter of the two.
    pub fn copy_to(&self, target: &mut [u8], msb_first: bool) {
        let bytes = self.words.iter().flat_map(|w| w.to_le_bytes());
        for (dst, byte) in target.iter_mut().zip(bytes) {
            *dst = if msb_first { byte.reverse_bits() } else { byte };
        }
    }

    /// Iterates over the first `len` bits.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }
}

impl<'a> iter::IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Box<dyn Iterator<Item = bool> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl ops::BitAnd for &BitVector {
    type Output = BitVector;

    /// The result is as long as the longer operand; bits past the shorter
    /// one are cleared.
    fn bitand(self, rhs: &BitVector) -> BitVector {
        let mut out = BitVector::new(self.len.max(rhs.len));
        for ((dst, a), b) in out.words.iter_mut().zip(self.words.iter()).zip(rhs.words.iter()) {
            *dst = a & b;
        }
        out
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BitVector(")?;
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}
