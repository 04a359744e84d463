/// Slide types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::common::xml::escape_text;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::shape::{AutoShape, MutableShape, ShapeKind};
use super::table::MutableTable;
use super::text::TextFrame;

/// The slide layouts every generated deck carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideLayout {
    /// A title placeholder and nothing else
    TitleOnly,
    /// No placeholders
    Blank,
}

impl SlideLayout {
    /// All layouts, in the order their parts are numbered.
    pub const ALL: [SlideLayout; 2] = [SlideLayout::TitleOnly, SlideLayout::Blank];

    /// One-based number of the layout part (`slideLayoutN.xml`).
    pub fn part_index(&self) -> usize {
        match self {
            Self::TitleOnly => 1,
            Self::Blank => 2,
        }
    }

    /// Display name stored in the layout's `p:cSld`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TitleOnly => "Title Only",
            Self::Blank => "Blank",
        }
    }

    /// Value of the layout's `type` attribute.
    pub(crate) fn type_attr(&self) -> &'static str {
        match self {
            Self::TitleOnly => "titleOnly",
            Self::Blank => "blank",
        }
    }

    pub fn has_title(&self) -> bool {
        matches!(self, Self::TitleOnly)
    }
}

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    pub(crate) layout: SlideLayout,
    /// Slide title (stored in title placeholder)
    pub(crate) title: Option<String>,
    /// Solid background fill
    pub(crate) background: Option<RGBColor>,
    /// Shapes on the slide
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            title: None,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Set the slide title.
    ///
    /// Only layouts with a title placeholder render a title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The slide's heading: its title, or for slides without one the first
    /// line of the first text box.
    pub fn heading(&self) -> Option<String> {
        if let Some(title) = self.title() {
            return Some(title.to_string());
        }
        self.shapes.iter().find_map(|shape| match &shape.kind {
            ShapeKind::TextBox(frame) => frame.paragraphs().first().map(|p| p.text()),
            _ => None,
        })
    }

    /// Set a solid background color for the slide.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    /// Next free shape ID. The group shape uses id=1 and the title id=2.
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 3) as u32
    }

    fn push_shape(&mut self, x: i64, y: i64, width: i64, height: i64, kind: ShapeKind) -> u32 {
        let shape_id = self.next_shape_id();
        self.shapes
            .push(MutableShape::new(shape_id, x, y, width, height, kind));
        shape_id
    }

    /// Add a text box and return its shape ID.
    ///
    /// Position and size are in EMUs.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64, text_frame: TextFrame) -> u32 {
        self.push_shape(x, y, width, height, ShapeKind::TextBox(text_frame))
    }

    /// Add an auto shape and return its shape ID.
    pub fn add_auto_shape(&mut self, x: i64, y: i64, width: i64, height: i64, shape: AutoShape) -> u32 {
        self.push_shape(x, y, width, height, ShapeKind::AutoShape(shape))
    }

    /// Add a table and return its shape ID.
    pub fn add_table(&mut self, x: i64, y: i64, width: i64, height: i64, table: MutableTable) -> u32 {
        self.push_shape(x, y, width, height, ShapeKind::Table(table))
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Iterate over the slide's tables.
    pub fn tables(&self) -> impl Iterator<Item = &MutableTable> {
        self.shapes.iter().filter_map(MutableShape::table)
    }

    /// Generate the slide XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;
        xml.push_str("<p:cSld>");

        if let Some(color) = self.background {
            xml.push_str("<p:bg><p:bgPr>");
            color.write_solid_fill(&mut xml);
            xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        if self.layout.has_title()
            && let Some(ref title) = self.title
        {
            self.write_title_shape(&mut xml, title)?;
        }

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Write the title placeholder shape.
    ///
    /// The placeholder inherits position and formatting from the layout.
    fn write_title_shape(&self, xml: &mut String, title: &str) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        xml.push_str("<a:r>");
        xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
        write!(xml, "<a:t>{}</a:t>", escape_text(title))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::inch_to_emu;

    #[test]
    fn test_title_only_slide_xml() {
        let mut slide = MutableSlide::new(256, SlideLayout::TitleOnly);
        slide.set_title("Cost Breakdown");
        slide.add_text_box(
            inch_to_emu(1.0),
            inch_to_emu(2.0),
            inch_to_emu(8.0),
            inch_to_emu(1.0),
            TextFrame::from_lines(["$9,000 per year"]),
        );

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains("<a:t>Cost Breakdown</a:t>"));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 2"/>"#));
        assert!(!xml.contains("<p:bg>"));
        assert!(xml.ends_with("</p:sld>"));
        assert_eq!(slide.heading().as_deref(), Some("Cost Breakdown"));
    }

    #[test]
    fn test_blank_slide_background_and_heading() {
        let mut slide = MutableSlide::new(257, SlideLayout::Blank);
        slide.set_background(RGBColor::new(52, 152, 219));
        let mut frame = TextFrame::new();
        frame.add_paragraph().set_text("Vector Search");
        frame.add_paragraph().set_text("subtitle");
        slide.add_text_box(0, 0, 100, 100, frame);

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="3498DB"/>"#));
        assert!(!xml.contains("<p:ph "));
        assert_eq!(slide.heading().as_deref(), Some("Vector Search"));
    }

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256, SlideLayout::TitleOnly);
        let first = slide.add_text_box(0, 0, 1, 1, TextFrame::new());
        let second = slide.add_auto_shape(0, 0, 1, 1, AutoShape::default());
        assert_eq!((first, second), (3, 4));
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.tables().count(), 0);
    }

    #[test]
    fn test_layout_parts() {
        assert_eq!(SlideLayout::TitleOnly.part_index(), 1);
        assert_eq!(SlideLayout::Blank.part_index(), 2);
        assert!(!SlideLayout::Blank.has_title());
        assert_eq!(SlideLayout::ALL.len(), 2);
    }
}
