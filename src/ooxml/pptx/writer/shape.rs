/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::writer::table::MutableTable;
use crate::ooxml::pptx::writer::text::TextFrame;
use std::fmt::Write as FmtWrite;

/// Shape style references of a new auto shape: theme line, fill and effect
/// of `accent1`, minor font in `lt1`. Explicit fill, outline and run colors
/// override them.
const AUTO_SHAPE_STYLE: &str = concat!(
    "<p:style>",
    r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
    r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
    r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#,
    "</p:style>",
);

/// Outline of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFormat {
    pub color: RGBColor,
    /// Width in EMUs
    pub width: i64,
}

/// A filled, outlined rectangle with an optional text body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoShape {
    pub fill: Option<RGBColor>,
    pub line: Option<LineFormat>,
    pub text_frame: TextFrame,
}

impl AutoShape {
    pub fn rectangle() -> Self {
        Self::default()
    }

    /// Builder method: solid fill.
    pub fn fill(mut self, color: RGBColor) -> Self {
        self.fill = Some(color);
        self
    }

    /// Builder method: solid outline of `width` EMUs.
    pub fn line(mut self, color: RGBColor, width: i64) -> Self {
        self.line = Some(LineFormat { color, width });
        self
    }

    /// Builder method: text body.
    pub fn text(mut self, text_frame: TextFrame) -> Self {
        self.text_frame = text_frame;
        self
    }
}

/// The content of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    TextBox(TextFrame),
    AutoShape(AutoShape),
    Table(MutableTable),
}

/// A positioned shape on a slide (text box, auto shape or table).
#[derive(Debug, Clone, PartialEq)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) kind: ShapeKind,
}

impl MutableShape {
    pub(crate) fn new(shape_id: u32, x: i64, y: i64, width: i64, height: i64, kind: ShapeKind) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            kind,
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Position and size as (x, y, width, height) in EMUs.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Whether the shape lies entirely within a page of the given size.
    pub fn fits_within(&self, page_width: i64, page_height: i64) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && self.x + self.width <= page_width
            && self.y + self.height <= page_height
    }

    /// Text body of a text box or auto shape.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TextBox(frame) => Some(frame),
            ShapeKind::AutoShape(shape) => Some(&shape.text_frame),
            ShapeKind::Table(_) => None,
        }
    }

    pub fn table(&self) -> Option<&MutableTable> {
        match &self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    fn write_xfrm(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }

    /// Write this shape's XML to `xml`.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox(frame) => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                frame.to_shape_xml(xml)?;
                xml.push_str("</p:sp>");
            },
            ShapeKind::AutoShape(shape) => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                match shape.fill {
                    Some(color) => color.write_solid_fill(xml),
                    None => xml.push_str("<a:noFill/>"),
                }
                if let Some(line) = shape.line {
                    write!(xml, r#"<a:ln w="{}">"#, line.width)?;
                    line.color.write_solid_fill(xml);
                    xml.push_str("</a:ln>");
                }
                xml.push_str("</p:spPr>");
                xml.push_str(AUTO_SHAPE_STYLE);

                shape.text_frame.to_shape_xml(xml)?;
                xml.push_str("</p:sp>");
            },
            ShapeKind::Table(table) => {
                table.to_xml(xml, self.shape_id, self.x, self.y, self.width, self.height)?;
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_box_xml() {
        let shape = MutableShape::new(
            3,
            457200,
            1828800,
            8229600,
            914400,
            ShapeKind::TextBox(TextFrame::from_lines(["Hello"])),
        );
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.starts_with("<p:sp>"));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 2"/>"#));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="457200" y="1828800"/>"#));
        assert!(xml.contains(r#"<a:ext cx="8229600" cy="914400"/>"#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
        assert!(shape.table().is_none());
    }

    #[test]
    fn test_auto_shape_fill_and_line() {
        let green = RGBColor::new(39, 174, 96);
        let auto = AutoShape::rectangle()
            .fill(RGBColor::new(212, 237, 218))
            .line(green, 38100)
            .text(TextFrame::from_lines(["Agentic BM25"]));
        let shape = MutableShape::new(4, 0, 0, 100, 100, ShapeKind::AutoShape(auto));

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"name="Rectangle 3""#));
        assert!(xml.contains(r#"<a:prstGeom prst="rect">"#));
        assert!(xml.contains(r#"<a:srgbClr val="D4EDDA"/>"#));
        assert!(xml.contains(
            r#"<a:ln w="38100"><a:solidFill><a:srgbClr val="27AE60"/></a:solidFill></a:ln>"#
        ));
        assert_eq!(shape.text_frame().unwrap().text(), "Agentic BM25");

        let style = xml.find("<p:style>").unwrap();
        assert!(xml.find("</p:spPr>").unwrap() < style);
        assert!(style < xml.find("<p:txBody>").unwrap());
        assert!(xml.contains(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#));
    }

    #[test]
    fn test_fits_within() {
        let frame = ShapeKind::TextBox(TextFrame::new());
        let inside = MutableShape::new(3, 0, 0, 9144000, 6858000, frame.clone());
        assert!(inside.fits_within(9144000, 6858000));

        let overflow = MutableShape::new(3, 1, 0, 9144000, 100, frame.clone());
        assert!(!overflow.fits_within(9144000, 6858000));

        let negative = MutableShape::new(3, -1, 0, 10, 10, frame);
        assert!(!negative.fits_within(9144000, 6858000));
    }
}
