//! Format types for PPTX text.

use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;

/// Horizontal paragraph alignment (`algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

impl Alignment {
    /// The DrawingML attribute value.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
        }
    }
}

/// Vertical anchoring of text inside its shape (`anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Top,
    Middle,
}

impl Anchor {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
        }
    }
}

/// Character formatting for a run.
///
/// Unset fields inherit from the paragraph defaults and then from the
/// master text styles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunFormat {
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl RunFormat {
    /// Combine with `base`, fields set on `self` taking precedence.
    pub fn merged_over(&self, base: &RunFormat) -> RunFormat {
        RunFormat {
            size: self.size.or(base.size),
            bold: self.bold.or(base.bold),
            italic: self.italic.or(base.italic),
            color: self.color.or(base.color),
        }
    }

    /// Write the attributes and children of an `a:rPr`/`a:endParaRPr`
    /// element named `tag`.
    pub(crate) fn write_props(&self, xml: &mut String, tag: &str) {
        let mut buf = itoa::Buffer::new();

        xml.push('<');
        xml.push_str(tag);
        xml.push_str(r#" lang="en-US""#);
        if let Some(size) = self.size {
            xml.push_str(r#" sz=""#);
            xml.push_str(buf.format(pt_to_centipoints(size)));
            xml.push('"');
        }
        if let Some(bold) = self.bold {
            xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
        }
        if let Some(italic) = self.italic {
            xml.push_str(if italic { r#" i="1""# } else { r#" i="0""# });
        }
        xml.push_str(r#" dirty="0""#);

        match self.color {
            Some(color) => {
                xml.push('>');
                color.write_solid_fill(xml);
                xml.push_str("</");
                xml.push_str(tag);
                xml.push('>');
            },
            None => xml.push_str("/>"),
        }
    }
}

/// Paragraph-level formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphFormat {
    /// Horizontal alignment; inherits when unset
    pub alignment: Option<Alignment>,
    /// Space after the paragraph, in points
    pub space_after: Option<f64>,
    /// Outline level (0-8)
    pub level: u8,
}

impl ParagraphFormat {
    fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.space_after.is_none() && self.level == 0
    }

    pub(crate) fn write_props(&self, xml: &mut String) {
        if self.is_empty() {
            return;
        }

        let mut buf = itoa::Buffer::new();
        xml.push_str("<a:pPr");
        if self.level > 0 {
            xml.push_str(r#" lvl=""#);
            xml.push_str(buf.format(self.level));
            xml.push('"');
        }
        if let Some(alignment) = self.alignment {
            xml.push_str(r#" algn=""#);
            xml.push_str(alignment.as_attr());
            xml.push('"');
        }

        match self.space_after {
            Some(pts) => {
                xml.push_str("><a:spcAft><a:spcPts val=\"");
                xml.push_str(buf.format(pt_to_centipoints(pts)));
                xml.push_str("\"/></a:spcAft></a:pPr>");
            },
            None => xml.push_str("/>"),
        }
    }
}
