/// RGB color representation used by fills, outlines and text runs.
///
/// # Examples
///
/// ```rust
/// use bm25_deck::common::RGBColor;
///
/// let green = RGBColor::new(39, 174, 96);
/// assert_eq!(green.to_hex(), "27AE60");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string ("27AE60" or "#27AE60").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to the uppercase `RRGGBB` form used by `<a:srgbClr val="..."/>`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Append `<a:solidFill><a:srgbClr val="RRGGBB"/></a:solidFill>` to `xml`.
    pub(crate) fn write_solid_fill(&self, xml: &mut String) {
        xml.push_str("<a:solidFill><a:srgbClr val=\"");
        xml.push_str(&self.to_hex());
        xml.push_str("\"/></a:solidFill>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let blue = RGBColor::new(52, 152, 219);
        assert_eq!(blue.to_hex(), "3498DB");
        assert_eq!(RGBColor::from_hex("#3498DB"), Some(blue));
        assert_eq!(RGBColor::from_hex("3498D"), None);
        assert_eq!(RGBColor::from_hex("ZZ98DB"), None);
    }

    #[test]
    fn test_solid_fill() {
        let mut xml = String::new();
        RGBColor::new(255, 255, 255).write_solid_fill(&mut xml);
        assert_eq!(xml, r#"<a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill>"#);
    }
}
