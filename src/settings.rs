//! Encoder configuration.
//!
//! [Settings] is what the caller hands to the encoder. At the start of every
//! encode call it is checked and turned into a [ResolvedSettings] snapshot
//! whose correction level is concrete; that snapshot is what the later stages
//! receive.

use crate::error::{Error, Result};
use crate::{ecc, layout};

/// Highest correction level defined by PDF417.
pub const MAX_LEVEL: u8 = 8;

/// Error correction level requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionLevel {
    /// Pick the level from the amount of data. Recommended.
    #[default]
    Auto,
    /// Fixed level, 0 to 8 inclusive. Level `n` adds `2 << n` correction
    /// codewords.
    Level(u8),
}

impl TryFrom<u8> for CorrectionLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        if level > MAX_LEVEL {
            return Err(Error::InvalidCorrectionLevel(level));
        }
        Ok(CorrectionLevel::Level(level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Width of one module in pixels (default 4).
    pub module_width: u32,
    /// Height of a row in module widths (default 3).
    pub row_height: u32,
    /// Error correction level (default [CorrectionLevel::Auto]).
    pub correction_level: CorrectionLevel,
    /// Target width to height ratio of the symbol (default 2.2).
    pub aspect_ratio: f64,
    /// Blank margin around the symbol in pixels, on every side (default 8).
    pub quiet_zone: u32,
    /// Render a compact (truncated) PDF417 without the right row indicator
    /// and with a one module stop pattern (default false).
    pub compact: bool,
}

impl Settings {
    pub const DEFAULT: Settings = Settings {
        module_width: 4,
        row_height: 3,
        correction_level: CorrectionLevel::Auto,
        aspect_ratio: 2.2,
        quiet_zone: 8,
        compact: false,
    };

    pub const fn with_module_width(mut self, module_width: u32) -> Self {
        self.module_width = module_width;
        self
    }

    pub const fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub const fn with_correction_level(mut self, level: CorrectionLevel) -> Self {
        self.correction_level = level;
        self
    }

    pub const fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub const fn with_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    pub const fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Validates the settings and fixes the correction level for a payload of
    /// `data_len` codewords (length descriptor included).
    pub fn resolve(&self, data_len: usize) -> Result<ResolvedSettings> {
        if self.module_width == 0 {
            return Err(Error::InvalidSettings("module width must be at least 1 pixel".into()));
        }
        if self.row_height == 0 {
            return Err(Error::InvalidSettings("row height must be at least 1 module".into()));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "aspect ratio must be a positive number, got {}",
                self.aspect_ratio
            )));
        }

        let level = match self.correction_level {
            CorrectionLevel::Auto => layout::auto_level(data_len),
            CorrectionLevel::Level(level) if level <= MAX_LEVEL => level,
            CorrectionLevel::Level(level) => return Err(Error::InvalidCorrectionLevel(level)),
        };

        Ok(ResolvedSettings {
            module_width: self.module_width as usize,
            row_height: self.row_height as usize,
            aspect_ratio: self.aspect_ratio,
            quiet_zone: self.quiet_zone as usize,
            level,
            compact: self.compact,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings of a single encode call, with a concrete correction level.
///
/// Only built by [Settings::resolve], so every value has been validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSettings {
    pub(crate) module_width: usize,
    pub(crate) row_height: usize,
    pub(crate) aspect_ratio: f64,
    pub(crate) quiet_zone: usize,
    /// Always in `0..=MAX_LEVEL`.
    pub(crate) level: u8,
    pub(crate) compact: bool,
}

impl ResolvedSettings {
    #[inline]
    pub const fn module_width(&self) -> usize {
        self.module_width
    }

    #[inline]
    pub const fn row_height(&self) -> usize {
        self.row_height
    }

    #[inline]
    pub const fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[inline]
    pub const fn quiet_zone(&self) -> usize {
        self.quiet_zone
    }

    /// Correction level, automatic selection already applied.
    #[inline]
    pub const fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub const fn compact(&self) -> bool {
        self.compact
    }

    /// Number of correction codewords appended for the resolved level.
    #[inline]
    pub const fn ecc_count(&self) -> usize {
        ecc::ecc_count(self.level)
    }

    /// Height of a row in pixels.
    #[inline]
    pub const fn row_pixels(&self) -> usize {
        self.module_width * self.row_height
    }
}
