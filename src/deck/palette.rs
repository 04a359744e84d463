//! Colors used across the deck.

use crate::common::RGBColor;

pub const DARK_BLUE: RGBColor = RGBColor::new(44, 62, 80);
pub const BRIGHT_BLUE: RGBColor = RGBColor::new(52, 152, 219);
pub const RED: RGBColor = RGBColor::new(231, 76, 60);
pub const GREEN: RGBColor = RGBColor::new(39, 174, 96);
pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
/// Off-white for subtitles on dark backgrounds
pub const CLOUDS: RGBColor = RGBColor::new(236, 240, 241);

/// Pale fill behind the BM25 panels
pub const LIGHT_GREEN: RGBColor = RGBColor::new(212, 237, 218);
/// Pale fill behind the vector-search panel
pub const LIGHT_RED: RGBColor = RGBColor::new(248, 215, 218);
