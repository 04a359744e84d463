//! Office Open XML (OOXML) presentation authoring.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): slides, shapes, text frames and tables,
//!    plus a small reader used to verify saved decks
//!
//! # Example
//!
//! ```rust,no_run
//! use bm25_deck::common::inch_to_emu;
//! use bm25_deck::ooxml::pptx::{MutablePresentation, SlideLayout, TextFrame};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideLayout::TitleOnly);
//! slide.set_title("Recommendations");
//! slide.add_text_box(
//!     inch_to_emu(1.0),
//!     inch_to_emu(1.8),
//!     inch_to_emu(8.0),
//!     inch_to_emu(5.0),
//!     TextFrame::from_lines(["Start with BM25"]),
//! );
//! pres.save("deck.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
