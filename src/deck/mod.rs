//! The "Vector Search: Unnecessary Cost" deck.
//!
//! [`content`] describes the twelve slides as data, [`render`] turns each
//! description into a slide, and this module ties them to a
//! [`MutablePresentation`].
//!
//! # Example
//!
//! ```rust
//! use bm25_deck::deck::build_deck;
//!
//! let pres = build_deck()?;
//! assert_eq!(pres.slide_count(), 12);
//! # Ok::<(), bm25_deck::ooxml::OoxmlError>(())
//! ```

pub mod config;
pub mod content;
pub mod palette;
pub mod render;

pub use config::{DEFAULT_OUTPUT, DeckConfig};
pub use content::{SlideSpec, slides};

use crate::ooxml::Result;
use crate::ooxml::pptx::MutablePresentation;
use tracing::debug;

/// Build the deck with the default page size and document properties.
pub fn build_deck() -> Result<MutablePresentation> {
    build_deck_with(&DeckConfig::default())
}

/// Build the deck in memory. Nothing is written.
pub fn build_deck_with(config: &DeckConfig) -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(config.slide_width);
    pres.set_slide_height(config.slide_height);
    pres.set_title(&config.title);
    pres.set_creator(&config.creator);

    for spec in slides() {
        render::render_slide(&mut pres, &spec)?;
    }

    debug!(slides = pres.slide_count(), "deck built");
    Ok(pres)
}

/// Build the deck and write it to `config.output`, replacing any existing
/// file. Returns the number of slides written.
pub fn save_deck(config: &DeckConfig) -> Result<usize> {
    let pres = build_deck_with(config)?;
    pres.save(&config.output)?;
    Ok(pres.slide_count())
}

/// Console outline of the deck: one numbered line per slide.
pub fn outline_lines() -> Vec<String> {
    slides()
        .iter()
        .enumerate()
        .map(|(i, spec)| format!("{:>3}. {}", i + 1, spec.outline))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::palette::{GREEN, RED};
    use crate::ooxml::OoxmlError;
    use crate::ooxml::pptx::{MutableTable, RunFormat, open_summaries, read_slide_summaries};

    const HEADINGS: [&str; 12] = [
        "Vector Search: Unnecessary Cost",
        "Executive Summary",
        "Real-World Test: Identical Results",
        "Cost Breakdown: What Vector Search Actually Costs",
        "Understanding Agentic Search",
        "Why LLMs Make Vector Search Redundant",
        "Why BM25 Dominates for Technical Documentation",
        "Head-to-Head Performance",
        "When Vector Search Actually Adds Value",
        "The Bottom Line",
        "Recommendations",
        "Questions?",
    ];

    fn only_table(pres: &MutablePresentation, slide: usize) -> &MutableTable {
        let tables: Vec<_> = pres.slides()[slide].tables().collect();
        assert_eq!(tables.len(), 1);
        tables[0]
    }

    fn cell_text(table: &MutableTable) -> Vec<Vec<String>> {
        table
            .rows()
            .map(|row| row.iter().map(|cell| cell.text()).collect())
            .collect()
    }

    #[test]
    fn test_slide_order_and_headings() {
        let pres = build_deck().unwrap();
        assert_eq!(pres.slide_count(), 12);
        let headings: Vec<_> = pres
            .slides()
            .iter()
            .map(|s| s.heading().unwrap_or_default())
            .collect();
        assert_eq!(headings, HEADINGS);
    }

    #[test]
    fn test_page_size() {
        let pres = build_deck().unwrap();
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
        assert_eq!(pres.title(), Some("Vector Search: Unnecessary Cost"));
    }

    fn body_font(table: &MutableTable, row: usize, col: usize) -> RunFormat {
        *table.cell(row, col).unwrap().text_frame().paragraphs()[0].font()
    }

    /// The `<a:tc>` elements of a slide, row by row.
    fn cell_xml(xml: &str) -> Vec<&str> {
        xml.split("<a:tc>")
            .skip(1)
            .map(|tc| tc.split("</a:tc>").next().unwrap())
            .collect()
    }

    #[test]
    fn test_cost_table() {
        let pres = build_deck().unwrap();
        let table = only_table(&pres, 3);
        assert_eq!((table.row_count(), table.column_count()), (6, 3));
        assert_eq!(
            cell_text(table)[3],
            vec!["Annual Cost (1K queries/day)", "$0", "~$2/year"]
        );

        for row in 1..6 {
            let label = body_font(table, row, 0);
            assert_eq!((label.color, label.bold), (None, None));

            let bm25 = body_font(table, row, 1);
            assert_eq!((bm25.color, bm25.bold), (Some(GREEN), Some(true)));

            let vector = body_font(table, row, 2);
            assert_eq!((vector.color, vector.bold), (Some(RED), None));
        }
    }

    #[test]
    fn test_head_to_head_winners() {
        let pres = build_deck().unwrap();
        let table = only_table(&pres, 7);
        assert_eq!((table.row_count(), table.column_count()), (7, 4));
        assert_eq!(
            cell_text(table)[0],
            vec!["Metric", "BM25-Only", "Hybrid (BM25+Vector)", "Winner"]
        );
        assert_eq!(
            cell_text(table)[6],
            vec!["Failure Modes", "Disk I/O", "Disk I/O + API", "BM25"]
        );

        for row in 1..7 {
            for col in 0..3 {
                let font = body_font(table, row, col);
                assert_eq!((font.color, font.bold), (None, None), "cell ({row}, {col})");
            }

            let cell = table.cell(row, 3).unwrap();
            let font = body_font(table, row, 3);
            match cell.text().as_str() {
                "BM25" => assert_eq!((font.color, font.bold), (Some(GREEN), Some(true))),
                "Tie" => assert_eq!((font.color, font.bold), (None, None)),
                other => panic!("unexpected winner {other}"),
            }
        }
    }

    #[test]
    fn test_winner_formatting_is_serialized() {
        let pres = build_deck().unwrap();
        let xml = pres.slides()[7].to_xml().unwrap();
        let cells = cell_xml(&xml);
        assert_eq!(cells.len(), 28);

        let mut winners = 0;
        for row in 1..7 {
            let winner = cells[row * 4 + 3];
            if winner.contains("<a:t>BM25</a:t>") {
                winners += 1;
                assert!(winner.contains(r#" b="1""#));
                assert!(winner.contains("27AE60"));
            } else {
                assert!(winner.contains("<a:t>Tie</a:t>"));
                assert!(!winner.contains(r#" b="1""#));
                assert!(!winner.contains("27AE60"));
            }
            for col in 0..3 {
                assert!(!cells[row * 4 + col].contains("<a:solidFill>"));
            }
        }
        assert_eq!(winners, 4);
    }

    #[test]
    fn test_panel_text_layout() {
        let pres = build_deck().unwrap();
        let xml = pres.slides()[2].to_xml().unwrap();
        let panel = xml
            .split("<p:sp>")
            .find(|sp| sp.contains("<a:t>BM25-Only</a:t>"))
            .unwrap();

        assert!(panel.contains(r#"anchor="ctr""#));
        assert!(panel.contains(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#));
        // Only the opening paragraph is centered.
        assert_eq!(panel.matches(r#"algn="ctr""#).count(), 1);
        let centered = panel.find(r#"<a:pPr algn="ctr"/>"#).unwrap();
        assert!(centered < panel.find("BM25-Only").unwrap());
        // Uncolored runs fall back to the style font color.
        assert!(panel.contains(
            r#"<a:rPr lang="en-US" sz="1800" dirty="0"/><a:t>Latency: &lt;10ms</a:t>"#
        ));
    }

    #[test]
    fn test_shapes_fit_page() {
        let pres = build_deck().unwrap();
        for (i, slide) in pres.slides().iter().enumerate() {
            for shape in slide.shapes() {
                assert!(
                    shape.fits_within(pres.slide_width(), pres.slide_height()),
                    "shape {} on slide {} leaves the page",
                    shape.shape_id(),
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_deterministic_bytes() {
        let first = build_deck().unwrap().to_bytes().unwrap();
        let second = build_deck().unwrap().to_bytes().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_outline_lines() {
        let lines = outline_lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "  1. Title slide");
        assert_eq!(lines[11], " 12. Questions/Closing");
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let config = DeckConfig::new().with_output("/nonexistent-dir/deck.pptx");
        assert!(matches!(save_deck(&config), Err(OoxmlError::Io(_))));
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, b"stale").unwrap();

        let config = DeckConfig::new().with_output(&path);
        assert_eq!(save_deck(&config).unwrap(), 12);

        let summaries = open_summaries(&path).unwrap();
        let headings: Vec<_> = summaries.iter().map(|s| s.heading().unwrap_or_default()).collect();
        assert_eq!(headings, HEADINGS);

        assert_eq!(summaries[3].table_count(), 1);
        assert_eq!(summaries[7].tables[0][3][3], "BM25");
        assert!(summaries[4].texts[0].contains("semantic-to-keyword translation"));
    }

    #[test]
    fn test_bytes_match_summaries() {
        let bytes = build_deck().unwrap().to_bytes().unwrap();
        let summaries = read_slide_summaries(bytes).unwrap();
        assert_eq!(summaries.len(), 12);
        assert_eq!(summaries[2].texts.len(), 3);
        assert!(summaries[11].texts[1].starts_with("Key Takeaway:"));
    }
}
