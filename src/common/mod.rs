//! Common types and utilities shared by the package writer, the slide writer
//! and the deck content.

pub mod color;
pub mod unit;
pub mod xml;

pub use color::RGBColor;
pub use unit::{EMUS_PER_INCH, EMUS_PER_PT, inch_to_emu, pt_to_emu};
