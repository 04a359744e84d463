//! bm25-deck - builds the "Vector Search: Unnecessary Cost" presentation
//!
//! The crate writes a twelve-slide PowerPoint deck arguing that BM25 keyword
//! search, paired with an LLM agent, matches vector search on technical
//! documentation at no cost.
//!
//! # Features
//!
//! - **Deck content as data**: every slide is a declarative description
//!   rendered by one generic renderer
//! - **PPTX writer**: slides, text boxes, filled shapes and tables serialized
//!   as an OOXML PresentationML package
//! - **Deterministic output**: the same deck always produces the same bytes
//! - **Reader**: reopen a saved deck and list slide headings, text and tables
//!
//! # Example - Building and saving the deck
//!
//! ```no_run
//! use bm25_deck::deck::{DeckConfig, save_deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeckConfig::new().with_output("deck.pptx");
//! let slides = save_deck(&config)?;
//! println!("Wrote {} slides", slides);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a saved deck
//!
//! ```no_run
//! use bm25_deck::ooxml::pptx::open_summaries;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! for (i, slide) in open_summaries("deck.pptx")?.iter().enumerate() {
//!     println!("{}: {}", i + 1, slide.heading().unwrap_or("(untitled)"));
//! }
//! # Ok(())
//! # }
//! ```

/// Units, colors and XML escaping shared by the writer and the deck
pub mod common;

/// The deck itself: configuration, palette, slide content and renderer
pub mod deck;

/// OOXML (Office Open XML) packaging and PresentationML authoring
///
/// This module provides the OPC package layer and the `.pptx` writer and
/// reader the deck is built on.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use deck::{DeckConfig, build_deck, build_deck_with, save_deck};
pub use ooxml::pptx::MutablePresentation;
pub use ooxml::{OoxmlError, Result};
