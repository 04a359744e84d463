/// Tables for PPTX slides.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::writer::text::{Paragraph, TextFrame};
use std::fmt::Write as FmtWrite;

/// GUID of the built-in "Medium Style 2 - Accent 1" table style.
pub const MEDIUM_STYLE_2_ACCENT_1: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// One table cell: a text body and an optional fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    text_frame: TextFrame,
    fill: Option<RGBColor>,
}

impl TableCell {
    /// A cell holding a single paragraph of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text_frame = TextFrame::new();
        text_frame.paragraphs.push(Paragraph::with_text(text));
        Self {
            text_frame,
            fill: None,
        }
    }

    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    /// The cell's first paragraph, created if the cell has none.
    pub fn paragraph_mut(&mut self) -> &mut Paragraph {
        if self.text_frame.paragraphs.is_empty() {
            return self.text_frame.add_paragraph();
        }
        &mut self.text_frame.paragraphs[0]
    }

    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    pub fn set_fill(&mut self, color: RGBColor) -> &mut Self {
        self.fill = Some(color);
        self
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tc>");
        self.text_frame.to_cell_xml(xml)?;
        match self.fill {
            Some(color) => {
                xml.push_str("<a:tcPr>");
                color.write_solid_fill(xml);
                xml.push_str("</a:tcPr>");
            },
            None => xml.push_str("<a:tcPr/>"),
        }
        xml.push_str("</a:tc>");
        Ok(())
    }
}

/// A rectangular grid of cells.
///
/// Every row has the same number of cells; ragged input is rejected when
/// the table is built.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableTable {
    rows: Vec<Vec<TableCell>>,
    col_widths: Option<Vec<i64>>,
}

impl MutableTable {
    /// Build a table from rows of cells.
    pub fn new(rows: Vec<Vec<TableCell>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(OoxmlError::InvalidFormat(
                "table must have at least one row".to_string(),
            ));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(OoxmlError::InvalidFormat(
                "table must have at least one column".to_string(),
            ));
        }
        if let Some(idx) = rows.iter().position(|row| row.len() != cols) {
            return Err(OoxmlError::InvalidFormat(format!(
                "table row {} has {} cells, expected {}",
                idx + 1,
                rows[idx].len(),
                cols
            )));
        }

        Ok(Self {
            rows,
            col_widths: None,
        })
    }

    /// Build a table of plain-text cells.
    pub fn from_text<R, S>(data: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = data
            .into_iter()
            .map(|row| row.into_iter().map(TableCell::new).collect())
            .collect();
        Self::new(rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Iterate over the cells of column `col`, top to bottom.
    pub fn column_mut(&mut self, col: usize) -> impl Iterator<Item = &mut TableCell> {
        self.rows.iter_mut().filter_map(move |r| r.get_mut(col))
    }

    /// Iterate over rows as slices of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[TableCell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [TableCell]> {
        self.rows.iter_mut().map(Vec::as_mut_slice)
    }

    /// Set explicit column widths in EMUs, one per column.
    pub fn set_column_widths(&mut self, widths: Vec<i64>) -> Result<()> {
        if widths.len() != self.column_count() {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} column widths given for {} columns",
                widths.len(),
                self.column_count()
            )));
        }
        self.col_widths = Some(widths);
        Ok(())
    }

    pub fn column_widths(&self) -> Option<&[i64]> {
        self.col_widths.as_deref()
    }

    /// Position of the first cell without text, as zero-based (row, col).
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|cell| cell.text_frame.is_blank())
                .map(|c| (r, c))
        })
    }

    /// Spread `total` EMUs evenly over `count` slots, giving the remainder
    /// to the last one.
    fn even_split(total: i64, count: usize) -> Vec<i64> {
        let count_i = count as i64;
        let each = total / count_i;
        let mut sizes = vec![each; count];
        if let Some(last) = sizes.last_mut() {
            *last += total - each * count_i;
        }
        sizes
    }

    /// Write the `<p:graphicFrame>` holding this table.
    pub(crate) fn to_xml(
        &self,
        xml: &mut String,
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<()> {
        let col_widths = match &self.col_widths {
            Some(widths) => widths.clone(),
            None => Self::even_split(width, self.column_count()),
        };
        let row_heights = Self::even_split(height, self.row_count());

        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Table {}"/>"#,
            shape_id,
            shape_id - 1
        )?;
        xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");

        xml.push_str("<p:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)?;
        xml.push_str("</p:xfrm>");

        xml.push_str("<a:graphic>");
        write!(xml, r#"<a:graphicData uri="{}">"#, namespace::DML_TABLE)?;
        xml.push_str("<a:tbl>");
        xml.push_str(r#"<a:tblPr firstRow="1" bandRow="1">"#);
        write!(xml, "<a:tableStyleId>{}</a:tableStyleId>", MEDIUM_STYLE_2_ACCENT_1)?;
        xml.push_str("</a:tblPr>");

        xml.push_str("<a:tblGrid>");
        for w in &col_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, w)?;
        }
        xml.push_str("</a:tblGrid>");

        for (row, h) in self.rows.iter().zip(&row_heights) {
            write!(xml, r#"<a:tr h="{}">"#, h)?;
            for cell in row {
                cell.to_xml(xml)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        xml.push_str("</a:graphicData>");
        xml.push_str("</a:graphic>");
        xml.push_str("</p:graphicFrame>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MutableTable {
        MutableTable::from_text([
            ["Metric", "Vector", "BM25"],
            ["Latency", "50-200ms", "<10ms"],
        ])
        .unwrap()
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = MutableTable::from_text(vec![vec!["a", "b"], vec!["c"]]).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidFormat(_)));
        assert!(MutableTable::from_text(Vec::<Vec<&str>>::new()).is_err());
        assert!(MutableTable::from_text(vec![Vec::<&str>::new()]).is_err());
    }

    #[test]
    fn test_dimensions_and_cells() {
        let table = sample();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.cell(1, 2).unwrap().text(), "<10ms");
        assert!(table.cell(2, 0).is_none());
        assert_eq!(table.first_empty_cell(), None);
    }

    #[test]
    fn test_first_empty_cell() {
        let table = MutableTable::from_text([["a", "b"], ["c", " "]]).unwrap();
        assert_eq!(table.first_empty_cell(), Some((1, 1)));
    }

    #[test]
    fn test_column_widths_must_match() {
        let mut table = sample();
        assert!(table.set_column_widths(vec![1, 2]).is_err());
        table.set_column_widths(vec![10, 20, 30]).unwrap();
        assert_eq!(table.column_widths(), Some(&[10, 20, 30][..]));
    }

    #[test]
    fn test_even_split_covers_total() {
        let sizes = MutableTable::even_split(100, 3);
        assert_eq!(sizes, vec![33, 33, 34]);
        assert_eq!(sizes.iter().sum::<i64>(), 100);
    }

    #[test]
    fn test_table_xml() {
        let mut table = sample();
        if let Some(corner) = table.column_mut(0).next() {
            corner.set_fill(RGBColor::new(44, 62, 80));
        }
        for cell in table.column_mut(2) {
            cell.paragraph_mut().bold(true);
        }

        let mut xml = String::new();
        table.to_xml(&mut xml, 3, 0, 0, 300, 200).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="3" name="Table 2"/>"#));
        assert!(xml.contains(namespace::DML_TABLE));
        assert!(xml.contains(MEDIUM_STYLE_2_ACCENT_1));
        assert!(xml.contains(r#"<a:tblPr firstRow="1" bandRow="1">"#));
        assert_eq!(xml.matches("<a:gridCol ").count(), 3);
        assert_eq!(xml.matches(r#"<a:tr h="100">"#).count(), 2);
        assert_eq!(xml.matches("<a:tc>").count(), 6);
        assert!(xml.contains(r#"<a:tcPr><a:solidFill><a:srgbClr val="2C3E50"/></a:solidFill></a:tcPr>"#));
        assert!(xml.contains("<a:t>&lt;10ms</a:t>"));
        assert_eq!(xml.matches(r#" b="1""#).count(), 2);
    }
}
