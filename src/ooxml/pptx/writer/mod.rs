//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{AutoShape, LineFormat, MutableShape, ShapeKind};
pub use slide::{MutableSlide, SlideLayout};
pub use table::{MutableTable, TableCell};
pub use text::{Insets, Paragraph, TextFrame, TextRun};
