#![warn(clippy::all, rust_2018_idioms)]

//! Layout of name popularity charts. `ChartLayout` turns a viewport and a list
//! of `RankRecord`s into drawable primitives; `svg` renders those primitives
//! to SVG markup.

mod color;
mod layout;
pub mod svg;

pub use color::{color_to_hex, hex_to_color, Color, PALETTE_SIZE};
pub use layout::{ChartLayout, LayoutConfig, Primitive, Viewport};
