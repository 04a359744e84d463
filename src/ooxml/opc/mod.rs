/// Open Packaging Conventions (OPC) implementation.
///
/// The packaging layer underneath a .pptx file:
///
/// - Part names (`PackURI`) and relationships between parts
/// - Content type registration (`[Content_Types].xml`)
/// - The ZIP-based physical package, written deterministically
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use error::{OpcError, Result};
pub use package::{OpcPackage, Part};
pub use packuri::PackURI;
pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
