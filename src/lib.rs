//! PDF417 encoder.
//!
//! Text is packed with text compaction (four submodes, two values per
//! codeword), anything else with byte compaction. The payload is padded to a
//! rows x columns grid sized after an aspect ratio, protected with
//! Reed-Solomon codewords over GF(929), then rendered into a monochrome
//! [PixelGrid].
//!
//! The 3 x 929 bar/space pattern table is not bundled: pass any
//! [PatternTable], for instance a [LowLevelTable] over the standard table.
//!
//! ```ignore
//! use pdf417_encoder::{PDF417Encoder, Settings, LowLevelTable};
//!
//! let table = LowLevelTable::new(&PATTERNS)?;
//! let symbol = PDF417Encoder::new(&table).encode_text("Hello, world!", &Settings::default())?;
//! println!("{} rows of {} modules", symbol.rows(), symbol.columns());
//! let bitmap = symbol.grid().to_bytes();
//! ```

mod bitvector;
mod builder;
mod canvas;
pub mod ecc;
mod error;
pub mod generators;
#[cfg(feature = "embedded-graphics")]
mod graphics;
pub mod high_level;
pub mod layout;
pub mod render;
mod settings;
pub mod tables;

pub use bitvector::BitVector;
pub use builder::{PDF417Encoder, Symbol};
pub use canvas::{PixelGrid, ROW_ALIGNMENT};
pub use error::{Error, Result};
pub use layout::Layout;
pub use settings::{CorrectionLevel, ResolvedSettings, Settings, MAX_LEVEL};
pub use tables::{LowLevelTable, PatternTable};
