use crate::bitvector::BitVector;

/// Rows are stored with their width rounded up to this many bits.
pub const ROW_ALIGNMENT: usize = 32;

/// Monochrome pixel surface. A set pixel is dark (a bar).
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    aligned_width: usize,
    bits: BitVector,
}

impl PixelGrid {
    /// Creates a light (all clear) grid of `width` x `height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        let aligned_width = width.div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT;
        Self { width, height, aligned_width, bits: BitVector::new(aligned_width * height) }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bits, `width` rounded up to a multiple of 32.
    #[inline]
    pub const fn aligned_width(&self) -> usize {
        self.aligned_width
    }

    /// Returns whether the pixel at (`x`, `y`) is dark. `x` is not checked
    /// against the width: the padding of a row reads back as light.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits.get(y * self.aligned_width + x)
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        self.bits.set(y * self.aligned_width + x, dark);
    }

    /// Backing bit buffer, rows of `aligned_width` bits one after another.
    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// Raw bitmap of the grid: `aligned_width / 8` bytes per row, bottom row
    /// first, leftmost pixel in the most significant bit of each byte. Light
    /// pixels (and the row padding) are 1, dark pixels 0, so palette index 0
    /// is black and index 1 white, as in a 1 bit per pixel BMP.
    pub fn to_bytes(&self) -> Vec<u8> {
        let stride = self.aligned_width / 8;
        let mut top_down = vec![0u8; stride * self.height];
        self.bits.copy_to(&mut top_down, true);

        if stride == 0 {
            return top_down;
        }
        top_down.chunks_exact(stride).rev().flatten().map(|&b| !b).collect()
    }
}

impl core::fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("aligned_width", &self.aligned_width)
            .finish_non_exhaustive()
    }
}
