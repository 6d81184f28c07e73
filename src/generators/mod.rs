pub mod indicators;
pub mod pdf417;

pub use indicators::RowIndicators;
pub use pdf417::{PDF417Row, PDF417RowIterator};
