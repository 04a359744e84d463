/// Text frames, paragraphs and runs for PPTX shapes.
use crate::common::RGBColor;
use crate::common::xml::escape_text;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Alignment, Anchor, ParagraphFormat, RunFormat};
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

/// A run of text sharing one character format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRun {
    pub(crate) text: String,
    pub(crate) format: RunFormat,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &RunFormat {
        &self.format
    }

    /// Builder method: set font size in points.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.format.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.format.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.format.italic = Some(italic);
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.format.color = Some(color);
        self
    }
}

/// A paragraph: ordered runs plus paragraph-level formatting.
///
/// The paragraph font applies to every run that does not override it,
/// and sizes the paragraph's end mark so empty paragraphs keep their
/// height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub(crate) runs: SmallVec<[TextRun; 2]>,
    pub(crate) font: RunFormat,
    pub(crate) format: ParagraphFormat,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single run of `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut para = Self::new();
        para.set_text(text);
        para
    }

    /// Replace all runs with a single run of `text`.
    ///
    /// An empty string leaves the paragraph without runs.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.runs.clear();
        if !text.is_empty() {
            self.runs.push(TextRun::new(text));
        }
        self
    }

    /// Append a run and return it for formatting.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut TextRun {
        let idx = self.runs.len();
        self.runs.push(TextRun::new(text));
        &mut self.runs[idx]
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn font(&self) -> &RunFormat {
        &self.font
    }

    pub fn paragraph_format(&self) -> &ParagraphFormat {
        &self.format
    }

    /// The format `run` is rendered with: its own settings over the
    /// paragraph font.
    pub fn effective_format(&self, run: &TextRun) -> RunFormat {
        run.format.merged_over(&self.font)
    }

    pub fn set_font(&mut self, font: RunFormat) -> &mut Self {
        self.font = font;
        self
    }

    /// Builder method: set default font size in points.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.font.size = Some(size);
        self
    }

    /// Builder method: set default bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.font.bold = Some(bold);
        self
    }

    /// Builder method: set default text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.font.color = Some(color);
        self
    }

    /// Builder method: set horizontal alignment.
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.format.alignment = Some(alignment);
        self
    }

    /// Builder method: set space after in points.
    pub fn space_after(&mut self, pts: f64) -> &mut Self {
        self.format.space_after = Some(pts);
        self
    }

    /// Builder method: set outline level.
    pub fn level(&mut self, level: u8) -> &mut Self {
        self.format.level = level.min(8);
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        self.format.write_props(xml);

        for run in &self.runs {
            xml.push_str("<a:r>");
            self.effective_format(run).write_props(xml, "a:rPr");
            write!(xml, "<a:t>{}</a:t>", escape_text(&run.text))?;
            xml.push_str("</a:r>");
        }

        if self.runs.is_empty() && self.font != RunFormat::default() {
            self.font.write_props(xml, "a:endParaRPr");
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Inner margins of a text frame, in EMUs. Unset sides keep the
/// application default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: Option<i64>,
    pub top: Option<i64>,
    pub right: Option<i64>,
    pub bottom: Option<i64>,
}

/// The text body of a shape or table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) word_wrap: bool,
    pub(crate) auto_fit: bool,
    pub(crate) insets: Insets,
    pub(crate) anchor: Option<Anchor>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame with one paragraph per entry of `lines`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: lines.into_iter().map(Paragraph::with_text).collect(),
            ..Self::default()
        }
    }

    /// Append an empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        let idx = self.paragraphs.len();
        self.paragraphs.push(Paragraph::new());
        &mut self.paragraphs[idx]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    /// Text of every paragraph joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.paragraphs.iter().all(|p| p.text().trim().is_empty())
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = wrap;
        self
    }

    /// Grow the shape to fit its text.
    pub fn set_auto_fit(&mut self, auto_fit: bool) -> &mut Self {
        self.auto_fit = auto_fit;
        self
    }

    pub fn set_insets(&mut self, insets: Insets) -> &mut Self {
        self.insets = insets;
        self
    }

    /// Builder method: the same margin on all four sides.
    pub fn margins(&mut self, emu: i64) -> &mut Self {
        self.insets = Insets {
            left: Some(emu),
            top: Some(emu),
            right: Some(emu),
            bottom: Some(emu),
        };
        self
    }

    pub fn set_anchor(&mut self, anchor: Anchor) -> &mut Self {
        self.anchor = Some(anchor);
        self
    }

    /// Write `<a:bodyPr>` for a shape text body.
    fn write_body_props(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:bodyPr");
        xml.push_str(if self.word_wrap {
            r#" wrap="square""#
        } else {
            r#" wrap="none""#
        });

        let sides = [
            ("lIns", self.insets.left),
            ("tIns", self.insets.top),
            ("rIns", self.insets.right),
            ("bIns", self.insets.bottom),
        ];
        for (attr, value) in sides {
            if let Some(emu) = value {
                write!(xml, r#" {}="{}""#, attr, emu)?;
            }
        }

        if let Some(anchor) = self.anchor {
            write!(xml, r#" anchor="{}""#, anchor.as_attr())?;
        }
        xml.push_str(r#" rtlCol="0""#);

        if self.auto_fit {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }
        Ok(())
    }

    fn write_paragraphs(&self, xml: &mut String) -> Result<()> {
        if self.paragraphs.is_empty() {
            // A text body needs at least one paragraph.
            xml.push_str("<a:p/>");
        }
        for para in &self.paragraphs {
            para.to_xml(xml)?;
        }
        Ok(())
    }

    /// Serialize as `<p:txBody>` of a shape.
    pub(crate) fn to_shape_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        self.write_body_props(xml)?;
        xml.push_str("<a:lstStyle/>");
        self.write_paragraphs(xml)?;
        xml.push_str("</p:txBody>");
        Ok(())
    }

    /// Serialize as `<a:txBody>` of a table cell.
    pub(crate) fn to_cell_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
        self.write_paragraphs(xml)?;
        xml.push_str("</a:txBody>");
        Ok(())
    }
}
