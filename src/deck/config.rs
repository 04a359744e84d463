//! Configuration for building and saving the deck.
//!
//! # Examples
//!
//! ```rust
//! use bm25_deck::deck::DeckConfig;
//!
//! // The binary uses the defaults
//! let config = DeckConfig::default();
//! assert_eq!(config.output.to_str(), Some("vector-search-unnecessary-cost.pptx"));
//!
//! // Or customize
//! let config = DeckConfig::new()
//!     .with_output("/tmp/deck.pptx")
//!     .with_creator("Search Team");
//! ```

use crate::common::inch_to_emu;
use std::path::PathBuf;

/// File name the deck is saved under by default.
pub const DEFAULT_OUTPUT: &str = "vector-search-unnecessary-cost.pptx";

/// Output location, page size and document properties of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Where the .pptx is written
    pub output: PathBuf,
    /// Slide width in EMUs
    pub slide_width: i64,
    /// Slide height in EMUs
    pub slide_height: i64,
    /// Document title stored in the core properties
    pub title: String,
    /// Document author stored in the core properties
    pub creator: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            slide_width: inch_to_emu(10.0),
            slide_height: inch_to_emu(7.5),
            title: "Vector Search: Unnecessary Cost".to_string(),
            creator: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

impl DeckConfig {
    /// Create a new `DeckConfig` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output path.
    #[inline]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the slide size in EMUs.
    ///
    /// Slide content is laid out for 10" x 7.5"; other sizes only change the
    /// page, not the shape positions.
    #[inline]
    pub fn with_slide_size(mut self, width: i64, height: i64) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }
}
