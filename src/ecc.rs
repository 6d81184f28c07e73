use crate::settings::MAX_LEVEL;
use crate::tables::{generator_coefficients, GF};

/// Number of correction codewords of a level: `2 << level`.
pub const fn ecc_count(level: u8) -> usize {
    assert!(level <= MAX_LEVEL, "ECC level must be between 0 and 8 inclusive");
    2 << level as usize
}

/// Runs the Reed-Solomon division of `data` by the generator of `factors`
/// and leaves the remainder in `acc`, highest degree first. `acc` must be as
/// long as `factors`.
fn divide(data: &[u16], factors: &[u16], acc: &mut [u16]) {
    let k = factors.len();
    debug_assert_eq!(acc.len(), k);
    acc.fill(0);

    // acc[0] holds the highest degree term, factors[0] the constant one.
    for &cw in data {
        let t = (cw as u32 + acc[0] as u32) % GF;

        for i in (0..k).rev() {
            let product = t * factors[i] as u32 % GF;
            let carry = if i > 0 { acc[k - i] as u32 } else { 0 };
            acc[k - 1 - i] = ((carry + GF - product) % GF) as u16;
        }
    }
}

/// Fills the last `2 << level` slots of `codewords` with the correction
/// codewords of everything before them.
pub fn generate_ecc(codewords: &mut [u16], level: u8) {
    let factors = generator_coefficients(level);

    assert!(codewords.len() >= factors.len());
    let (data, ecc) = codewords.split_at_mut(codewords.len() - factors.len());
    divide(data, factors, ecc);

    for e in ecc {
        if *e != 0 {
            *e = GF as u16 - *e;
        }
    }
}

/// Remainder of a complete codeword sequence (data followed by its
/// correction codewords). All zero when the sequence is consistent.
pub fn syndrome(codewords: &[u16], level: u8) -> Vec<u16> {
    let factors = generator_coefficients(level);
    let mut acc = vec![0; factors.len()];
    divide(codewords, factors, &mut acc);
    acc
}
