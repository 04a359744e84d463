//! Turning [`SlideSpec`]s into slides.

use crate::common::{inch_to_emu, pt_to_emu};
use crate::deck::content::{CellRule, Element, Frame, Para, SlideSpec, TableSpec, PANEL_OUTLINE_PT};
use crate::deck::palette::{BRIGHT_BLUE, WHITE};
use crate::ooxml::Result;
use crate::ooxml::pptx::{
    Alignment, Anchor, AutoShape, Insets, MutablePresentation, MutableSlide, MutableTable,
    Paragraph, RunFormat, SlideLayout, TextFrame,
};
use tracing::debug;

/// Append one slide built from `spec` to `pres`.
pub fn render_slide(pres: &mut MutablePresentation, spec: &SlideSpec) -> Result<()> {
    let layout = if spec.title.is_some() {
        SlideLayout::TitleOnly
    } else {
        SlideLayout::Blank
    };

    let slide = pres.add_slide(layout);
    if let Some(title) = spec.title {
        slide.set_title(title);
    }
    if let Some(color) = spec.background {
        slide.set_background(color);
    }

    for element in &spec.elements {
        render_element(slide, element)?;
    }

    debug!(
        slide_id = slide.slide_id(),
        outline = spec.outline,
        layout = layout.name(),
        shapes = slide.shape_count(),
        "rendered slide"
    );
    Ok(())
}

fn render_element(slide: &mut MutableSlide, element: &Element) -> Result<()> {
    match element {
        Element::TextBox {
            frame,
            word_wrap,
            paragraphs,
        } => {
            let mut text = text_frame(paragraphs);
            text.set_word_wrap(*word_wrap).set_auto_fit(true);
            let (x, y, w, h) = emu_rect(frame);
            slide.add_text_box(x, y, w, h, text);
        },
        Element::Panel {
            frame,
            fill,
            outline,
            margin_top,
            margin_left,
            paragraphs,
        } => {
            // New rectangles center their text vertically and open with a
            // centered paragraph; later paragraphs keep their own alignment.
            let mut text = text_frame(paragraphs);
            text.set_word_wrap(true)
                .set_anchor(Anchor::Middle)
                .set_insets(Insets {
                    top: Some(inch_to_emu(*margin_top)),
                    left: margin_left.map(inch_to_emu),
                    ..Insets::default()
                });
            if let Some(first) = text.paragraphs_mut().first_mut() {
                first.alignment(Alignment::Center);
            }
            let shape = AutoShape::rectangle()
                .fill(*fill)
                .line(*outline, pt_to_emu(PANEL_OUTLINE_PT))
                .text(text);
            let (x, y, w, h) = emu_rect(frame);
            slide.add_auto_shape(x, y, w, h, shape);
        },
        Element::Table(spec) => {
            let table = build_table(spec)?;
            let (x, y, w, h) = emu_rect(&spec.frame);
            slide.add_table(x, y, w, h, table);
        },
    }
    Ok(())
}

fn emu_rect(frame: &Frame) -> (i64, i64, i64, i64) {
    (
        inch_to_emu(frame.left),
        inch_to_emu(frame.top),
        inch_to_emu(frame.width),
        inch_to_emu(frame.height),
    )
}

fn text_frame(paragraphs: &[Para]) -> TextFrame {
    let mut frame = TextFrame::new();
    for spec in paragraphs {
        fill_paragraph(frame.add_paragraph(), spec);
    }
    frame
}

fn fill_paragraph(paragraph: &mut Paragraph, spec: &Para) {
    paragraph.set_font(RunFormat {
        size: spec.size,
        bold: spec.bold,
        italic: spec.italic,
        color: spec.color,
    });
    if spec.centered {
        paragraph.alignment(Alignment::Center);
    }
    if let Some(pts) = spec.space_after {
        paragraph.space_after(pts);
    }
    if spec.level > 0 {
        paragraph.level(spec.level);
    }

    for run in spec.runs.iter().filter(|r| !r.text.is_empty()) {
        let added = paragraph.add_run(run.text);
        if let Some(bold) = run.bold {
            added.bold(bold);
        }
        if let Some(color) = run.color {
            added.color(color);
        }
    }
}

/// Build a table with a header row styled white-on-blue, then apply the
/// column rules to the body rows.
pub fn build_table(spec: &TableSpec) -> Result<MutableTable> {
    let rows = std::iter::once(&spec.header).chain(spec.rows.iter());
    let mut table = MutableTable::from_text(rows.map(|row| row.iter().copied()))?;
    table.set_column_widths(spec.column_widths.iter().copied().map(inch_to_emu).collect())?;

    for (row_idx, row) in table.rows_mut().enumerate() {
        for cell in row.iter_mut() {
            if row_idx == 0 {
                cell.set_fill(BRIGHT_BLUE);
                cell.paragraph_mut()
                    .size(spec.header_size)
                    .bold(true)
                    .color(WHITE)
                    .alignment(Alignment::Center);
            } else {
                cell.paragraph_mut().size(spec.body_size);
            }
        }
    }

    for rule in &spec.rules {
        apply_rule(&mut table, rule);
    }
    Ok(table)
}

fn apply_rule(table: &mut MutableTable, rule: &CellRule) {
    for cell in table.column_mut(rule.column).skip(1) {
        let matches = rule
            .contains
            .is_none_or(|needle| cell.text().contains(needle));
        if !matches {
            continue;
        }
        let paragraph = cell.paragraph_mut();
        paragraph.color(rule.color);
        if rule.bold {
            paragraph.bold(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::content::{frame, para};
    use crate::deck::palette::{GREEN, LIGHT_GREEN, RED};
    use crate::ooxml::pptx::ShapeKind;

    fn sample_table() -> TableSpec {
        TableSpec {
            frame: frame(1.0, 1.0, 4.0, 2.0),
            column_widths: vec![2.0, 1.0, 1.0],
            header: vec!["Metric", "A", "Winner"],
            header_size: 14.0,
            body_size: 12.0,
            rows: vec![vec!["Latency", "1ms", "BM25"], vec!["Quality", "High", "Tie"]],
            rules: vec![CellRule {
                column: 2,
                contains: Some("BM25"),
                color: GREEN,
                bold: true,
            }],
        }
    }

    #[test]
    fn test_layout_follows_title() {
        let mut pres = MutablePresentation::new();
        let titled = SlideSpec {
            outline: "t",
            title: Some("Heading"),
            background: None,
            elements: vec![],
        };
        let blank = SlideSpec {
            title: None,
            background: Some(RED),
            ..titled.clone()
        };
        render_slide(&mut pres, &titled).unwrap();
        render_slide(&mut pres, &blank).unwrap();

        assert_eq!(pres.slides()[0].layout(), SlideLayout::TitleOnly);
        assert_eq!(pres.slides()[0].title(), Some("Heading"));
        assert_eq!(pres.slides()[1].layout(), SlideLayout::Blank);
        assert_eq!(pres.slides()[1].background(), Some(RED));
    }

    #[test]
    fn test_header_and_rules() {
        let table = build_table(&sample_table()).unwrap();
        assert_eq!((table.row_count(), table.column_count()), (3, 3));
        assert_eq!(
            table.column_widths(),
            Some(&[inch_to_emu(2.0), inch_to_emu(1.0), inch_to_emu(1.0)][..])
        );

        let header = table.cell(0, 2).unwrap();
        assert_eq!(header.fill(), Some(BRIGHT_BLUE));
        let font = header.text_frame().paragraphs()[0].font();
        assert_eq!(font.bold, Some(true));
        assert_eq!(font.color, Some(WHITE));
        assert_eq!(font.size, Some(14.0));

        let winner = table.cell(1, 2).unwrap().text_frame().paragraphs()[0].font();
        assert_eq!(winner.color, Some(GREEN));
        assert_eq!(winner.bold, Some(true));
        assert_eq!(winner.size, Some(12.0));

        let tie = table.cell(2, 2).unwrap().text_frame().paragraphs()[0].font();
        assert_eq!(tie.color, None);
        assert_eq!(tie.bold, None);
    }

    #[test]
    fn test_panel_shape() {
        let mut pres = MutablePresentation::new();
        let spec = SlideSpec {
            outline: "p",
            title: None,
            background: None,
            elements: vec![Element::Panel {
                frame: frame(1.0, 2.0, 3.0, 1.0),
                fill: LIGHT_GREEN,
                outline: GREEN,
                margin_top: 0.2,
                margin_left: None,
                paragraphs: vec![para("Inside").size(18.0).bold().center()],
            }],
        };
        render_slide(&mut pres, &spec).unwrap();

        let shape = &pres.slides()[0].shapes()[0];
        assert_eq!(
            shape.bounds(),
            (inch_to_emu(1.0), inch_to_emu(2.0), inch_to_emu(3.0), inch_to_emu(1.0))
        );
        let ShapeKind::AutoShape(auto) = shape.kind() else {
            panic!("expected an autoshape");
        };
        assert_eq!(auto.fill, Some(LIGHT_GREEN));
        let text = shape.text_frame().unwrap();
        assert!(text.word_wrap());
        assert_eq!(text.insets.top, Some(inch_to_emu(0.2)));
        assert_eq!(text.insets.left, None);
        assert_eq!(text.text(), "Inside");
        assert_eq!(text.anchor, Some(Anchor::Middle));
    }

    #[test]
    fn test_panel_centers_only_first_paragraph() {
        let mut pres = MutablePresentation::new();
        let spec = SlideSpec {
            outline: "p",
            title: None,
            background: None,
            elements: vec![Element::Panel {
                frame: frame(1.0, 2.0, 3.0, 2.0),
                fill: LIGHT_GREEN,
                outline: GREEN,
                margin_top: 0.2,
                margin_left: Some(0.2),
                paragraphs: vec![para("Heading").size(24.0).bold(), para("Detail").size(18.0)],
            }],
        };
        render_slide(&mut pres, &spec).unwrap();

        let paragraphs = pres.slides()[0].shapes()[0].text_frame().unwrap().paragraphs();
        assert_eq!(paragraphs[0].paragraph_format().alignment, Some(Alignment::Center));
        assert_eq!(paragraphs[1].paragraph_format().alignment, None);
    }

    #[test]
    fn test_empty_paragraph_keeps_spacing() {
        let frame = text_frame(&[para("").space_after(12.0)]);
        let paragraph = &frame.paragraphs()[0];
        assert!(paragraph.runs().is_empty());
        assert_eq!(paragraph.paragraph_format().space_after, Some(12.0));
    }
}
