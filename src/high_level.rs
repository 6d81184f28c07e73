//! User data to high level codewords: text and byte compaction.
//!
//! Both compactors return a codeword vector whose first slot is reserved for
//! the symbol length descriptor; it is filled in once the symbol is sized.

use log::trace;

use crate::error::{Error, Result};

/// Codeword used to latch to text mode. Also the padding codeword.
pub const LATCH_TEXT: u16 = 900;
/// Codeword used to latch to byte mode when the byte count is not a
/// multiple of 6 (see [LATCH_BYTE_M6]).
pub const LATCH_BYTE: u16 = 901;
/// Codeword used to latch to numeric mode. Numeric compaction is not
/// produced by this encoder.
pub const LATCH_NUMERIC: u16 = 902;

// 903 to 912: reserved for future use

/// Codeword used to switch to byte mode for the next codeword only.
pub const SHIFT_BYTE: u16 = 913;

// 914 to 920: reserved for future use

/// Reader initialisation / programming symbol.
pub const READER_INIT: u16 = 921;
/// Macro PDF417 terminator.
pub const MACRO_TERMINATOR: u16 = 922;
/// Macro PDF417 optional field.
pub const MACRO_OPTIONAL_FIELD: u16 = 923;
/// Codeword used to latch to byte mode when the byte count is a multiple
/// of 6.
pub const LATCH_BYTE_M6: u16 = 924;
/// ECI user defined identifier.
pub const ECI_CUSTOM_ID: u16 = 925;
/// ECI general purpose identifier.
pub const ECI_GENERAL_ID: u16 = 926;
/// ECI code page.
pub const ECI_CODE_PAGE: u16 = 927;
/// Macro PDF417 control block.
pub const MACRO_CONTROL_BLOCK: u16 = 928;

/// Codeword used as padding at the end of the data section.
pub const CW_PADDING: u16 = LATCH_TEXT;

// Text sub-values shared by several submodes.
const SPACE: u8 = 26;
const LATCH_LOWER: u8 = 27;
const SHIFT_UPPER: u8 = 27;
const LATCH_MIXED: u8 = 28;
const LATCH_UPPER: u8 = 28;
const SHIFT_PUNC: u8 = 29;
/// Completes the last codeword when an odd number of sub-values was emitted.
const TEXT_PAD: u8 = SHIFT_PUNC;

/// Mixed submode characters, values 0 to 24. Value 25 latches to
/// punctuation and is not a character.
const MIXED_CHAR_SET: [u8; 25] = *b"0123456789&\r\t,:#-.$/+%*=^";
/// Punctuation submode characters, values 0 to 28.
const PUNC_CHAR_SET: [u8; 29] = *b";<>@[\\]_`~!\r\t,:\n-.$/\"|*()?{}'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Submode {
    Upper,
    Lower,
    Mixed,
    /// Only ever reached through a one character shift.
    Punctuation,
}

impl Submode {
    fn index(self, c: u8) -> Option<u8> {
        let position = |set: &[u8]| set.iter().position(|&r| r == c).map(|p| p as u8);
        match self {
            Submode::Upper if c.is_ascii_uppercase() => Some(c - b'A'),
            Submode::Lower if c.is_ascii_lowercase() => Some(c - b'a'),
            Submode::Upper | Submode::Lower | Submode::Mixed if c == b' ' => Some(SPACE),
            Submode::Mixed => position(&MIXED_CHAR_SET[..]),
            Submode::Punctuation => position(&PUNC_CHAR_SET[..]),
            Submode::Upper | Submode::Lower => None,
        }
    }

    /// Other submodes to look a character up in, by priority.
    fn fallbacks(self) -> [Submode; 3] {
        match self {
            Submode::Upper => [Submode::Lower, Submode::Mixed, Submode::Punctuation],
            Submode::Lower => [Submode::Upper, Submode::Mixed, Submode::Punctuation],
            Submode::Mixed => [Submode::Upper, Submode::Lower, Submode::Punctuation],
            Submode::Punctuation => unreachable!("punctuation is never the current submode"),
        }
    }

    fn latch(self, to: Submode) -> u8 {
        match (self, to) {
            (Submode::Upper | Submode::Mixed, Submode::Lower) => LATCH_LOWER,
            (Submode::Upper | Submode::Lower, Submode::Mixed) => LATCH_MIXED,
            (Submode::Mixed, Submode::Upper) => LATCH_UPPER,
            _ => unreachable!("no single latch from {self:?} to {to:?}"),
        }
    }
}

fn lookup(mode: Submode, c: char) -> Option<u8> {
    u8::try_from(c).ok().filter(u8::is_ascii).and_then(|c| mode.index(c))
}

macro_rules! push {
    ($out:ident, $half:ident, $head:expr, $($v:expr),+) => {{
        push!($out, $half, $head);
        push!($out, $half, $($v),+);
    }};
    ($out:ident, $half:ident, $v:expr) => {{
        let v = $v as u16;
        match $half.take() {
            Some(hi) => $out.push(hi * 30 + v),
            None => $half = Some(v),
        }
    }};
}

/// Compacts `s` with the text submodes. The symbol starts in text mode
/// (upper submode) so no latch codeword is emitted first.
pub fn compact_text(s: &str) -> Result<Vec<u16>> {
    let mut out = Vec::with_capacity(s.len() + 2);
    out.push(0); // length descriptor

    let mut mode = Submode::Upper;
    let mut half: Option<u16> = None; // pending high sub-value
    let mut chars = s.chars().enumerate().peekable();

    while let Some((position, c)) = chars.next() {
        if let Some(k) = lookup(mode, c) {
            push!(out, half, k);
            continue;
        }

        let found = mode.fallbacks().into_iter().find_map(|m| lookup(m, c).map(|k| (m, k)));
        match found {
            None => return Err(Error::UnencodableCharacter { character: c, position }),
            Some((Submode::Punctuation, k)) => push!(out, half, SHIFT_PUNC, k),
            Some((Submode::Upper, k)) if mode == Submode::Lower => {
                let upper_run = chars.peek().is_some_and(|&(_, n)| lookup(Submode::Upper, n).is_some());
                if upper_run {
                    push!(out, half, LATCH_MIXED, LATCH_UPPER, k);
                    mode = Submode::Upper;
                } else {
                    push!(out, half, SHIFT_UPPER, k);
                }
            }
            Some((target, k)) => {
                push!(out, half, mode.latch(target), k);
                mode = target;
            }
        }
    }

    if let Some(hi) = half {
        out.push(hi * 30 + TEXT_PAD as u16);
    }

    trace!("text compaction: {} chars -> {} codewords", s.chars().count(), out.len() - 1);
    Ok(out)
}

/// Compacts `bytes` with byte compaction: every 6 bytes become 5 base 900
/// codewords, the remaining bytes are stored one per codeword.
pub fn compact_bytes(bytes: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(2 + bytes.len() / 6 * 5 + bytes.len() % 6);
    out.push(0); // length descriptor
    out.push(match bytes.len() {
        1 => SHIFT_BYTE,
        n if n % 6 == 0 => LATCH_BYTE_M6,
        _ => LATCH_BYTE,
    });

    let mut groups = bytes.chunks_exact(6);
    for group in &mut groups {
        // pack six bytes
        let mut s = group.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        // append five codewords, most significant first
        let mut digits = [0u16; 5];
        for d in digits.iter_mut().rev() {
            *d = (s % 900) as u16;
            s /= 900;
        }
        out.extend_from_slice(&digits);
    }
    out.extend(groups.remainder().iter().map(|&b| b as u16));

    trace!("byte compaction: {} bytes -> {} codewords", bytes.len(), out.len() - 1);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_simple() {
        let cws = compact_text("Test").unwrap();
        assert_eq!(cws, [0, 19 * 30 + 27, 4 * 30 + 18, 19 * 30 + 29]);
    }

    #[test]
    fn test_text_switch_modes() {
        let cws = compact_text("abc1D234").unwrap();
        assert_eq!(cws, [0, 27 * 30 + 0, 1 * 30 + 2, 28 * 30 + 1, 28 * 30 + 3, 28 * 30 + 2, 3 * 30 + 4]);
    }

    #[test]
    fn test_text_with_digits() {
        let cws = compact_text("encoded 0123456789 as digits").unwrap();
        assert_eq!(cws, [0, 27 * 30 + 4, 13 * 30 + 2, 14 * 30 + 3, 4 * 30 + 3, 26 * 30 + 28, 0 * 30 + 1, 2 * 30 + 3, 4 * 30 + 5, 6 * 30 + 7, 8 * 30 + 9,
            26 * 30 + 27, 0 * 30 + 18, 26 * 30 + 3, 8 * 30 + 6, 8 * 30 + 19, 18 * 30 + 29]);
    }

    #[test]
    fn test_text_punctuation_shifts() {
        let cws = compact_text("This! Is a `quote (100%)`.").unwrap();
        assert_eq!(cws, [0,
            19 * 30 + 27, 7 * 30 + 8, 18 * 30 + 29, 10 * 30 + 26, 27 * 30 + 8, 18 * 30 + 26,
            0 * 30 + 26, 29 * 30 + 8, 16 * 30 + 20, 14 * 30 + 19, 4 * 30 + 26, 29 * 30 + 23,
            28 * 30 + 1, 0 * 30 + 0, 21 * 30 + 29, 24 * 30 + 29, 8 * 30 + 17]);
    }

    #[test]
    fn test_text_lower_to_upper() {
        // a run of capitals latches back through mixed
        assert_eq!(compact_text("aBC").unwrap(), [0, 27 * 30 + 0, 28 * 30 + 28, 1 * 30 + 2]);
        // a single capital is shifted
        assert_eq!(compact_text("aBc").unwrap(), [0, 27 * 30 + 0, 27 * 30 + 1, 2 * 30 + 29]);
    }

    #[test]
    fn test_text_question_mark_is_punctuation() {
        assert_eq!(compact_text("?").unwrap(), [0, 29 * 30 + 25]);
    }

    #[test]
    fn test_text_mixed_to_lower() {
        assert_eq!(compact_text("1a").unwrap(), [0, 28 * 30 + 1, 27 * 30 + 0]);
    }

    #[test]
    fn test_text_unencodable() {
        assert_eq!(
            compact_text("h\u{e9}llo"),
            Err(Error::UnencodableCharacter { character: '\u{e9}', position: 1 })
        );
        assert_eq!(
            compact_text("AB\x1B"),
            Err(Error::UnencodableCharacter { character: '\x1B', position: 2 })
        );
        assert!(compact_text("\0").is_err());
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(compact_text("").unwrap(), [0]);
    }

    #[test]
    fn test_bytes_multiple() {
        assert_eq!(compact_bytes(b"alcool"), [0, 924, 163, 238, 432, 766, 244]);
    }

    #[test]
    fn test_bytes_not_multiple() {
        assert_eq!(compact_bytes(b"encode bin"), [0, 901, 169, 883, 224, 680, 517, 32, 98, 105, 110]);
    }

    #[test]
    fn test_bytes_single() {
        assert_eq!(compact_bytes(&[0x41]), [0, 913, 0x41]);
    }

    #[test]
    fn test_bytes_count() {
        for n in 1..40usize {
            let bytes = vec![0xFFu8; n];
            let cws = compact_bytes(&bytes);
            assert_eq!(cws.len(), 2 + n / 6 * 5 + n % 6, "{n} bytes");
            assert!(cws[2..].iter().all(|&cw| cw < 900));
        }
    }
}
