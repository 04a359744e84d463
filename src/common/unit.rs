//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are English Metric Units (EMU); font sizes are
//! hundredths of a point. The deck content is authored in inches and points.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, rounding to the nearest unit.
///
/// # Examples
///
/// ```
/// use bm25_deck::common::unit::inch_to_emu;
/// assert_eq!(inch_to_emu(10.0), 9_144_000);
/// assert_eq!(inch_to_emu(0.7), 640_080);
/// ```
#[inline]
pub fn inch_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inch(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Convert points to EMU (line widths, insets).
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// Convert a point size to DrawingML's hundredths of a point (`sz`, `spcPts`).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slide_dimensions() {
        assert_eq!(inch_to_emu(10.0), 9_144_000);
        assert_eq!(inch_to_emu(7.5), 6_858_000);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_emu(3.0), 38_100);
        assert_eq!(pt_to_centipoints(54.0), 5400);
        assert_eq!(pt_to_centipoints(13.0), 1300);
    }

    proptest! {
        #[test]
        fn prop_inch_round_trip(hundredths in 0i64..2000) {
            let inches = hundredths as f64 / 100.0;
            let back = emu_to_inch(inch_to_emu(inches));
            prop_assert!((back - inches).abs() < 1e-6);
        }
    }
}
