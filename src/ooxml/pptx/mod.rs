//! PowerPoint (.pptx) presentation support.
//!
//! - `writer`: build a presentation in memory and save it as a package
//! - `template`: the master, layouts and theme every package carries
//! - `reader`: read back slide titles, text and tables from a saved file
//!
//! # Example
//!
//! ```rust
//! use bm25_deck::ooxml::pptx::{MutablePresentation, SlideLayout, TextFrame};
//! use bm25_deck::ooxml::pptx::reader::read_slide_summaries;
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideLayout::TitleOnly);
//! slide.set_title("The Bottom Line");
//! slide.add_text_box(914400, 1645920, 7315200, 914400, TextFrame::from_lines(["BM25 wins"]));
//!
//! let summaries = read_slide_summaries(pres.to_bytes()?)?;
//! assert_eq!(summaries[0].heading(), Some("The Bottom Line"));
//! # Ok::<(), bm25_deck::ooxml::OoxmlError>(())
//! ```

pub mod format;
pub mod reader;
pub mod template;
pub mod writer;

pub use format::{Alignment, Anchor, ParagraphFormat, RunFormat};
pub use reader::{SlideSummary, open_summaries, read_slide_summaries};
pub use writer::{
    AutoShape, Insets, LineFormat, MutablePresentation, MutableShape, MutableSlide, MutableTable,
    Paragraph, ShapeKind, SlideLayout, TableCell, TextFrame, TextRun,
};
