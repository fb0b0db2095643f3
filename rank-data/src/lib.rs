#![warn(clippy::all, rust_2018_idioms)]

//! Name popularity data: one `RankRecord` per name, holding its rank for each
//! decade since 1900, and the case-insensitive `RankStore` they are looked up
//! in.

mod record;
mod store;

pub use record::{RankRecord, RecordError};
pub use store::{LoadReport, RankStore};

/// Number of decades covered by each record.
pub const N_DECADES: usize = 11;
/// First decade of the dataset.
pub const START_DECADE: u32 = 1900;
/// Years between two consecutive decade indices.
pub const DECADE_STEP: u32 = 10;
