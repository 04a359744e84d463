/// In-memory OPC package assembled before serialization.
///
/// Parts keep their insertion order so that the same sequence of `add_part`
/// calls always produces the same archive.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::rel::Relationships;

/// One part of a package: its name, content type, serialized bytes and the
/// relationships it owns.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate this part to `target`, returning the rId to reference it by.
    pub fn relate_to(&mut self, reltype: &str, target: &PackURI) -> String {
        self.rels.get_or_add(reltype, target)
    }
}

/// An Open Packaging Convention package under construction.
#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    /// Parts in insertion order
    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part. Partnames must be unique within a package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.iter().any(|p| p.partname() == part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    pub fn part(&self, partname: &PackURI) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname() == partname)
    }

    /// Relate the package itself to `target` (main document, properties).
    pub fn relate_to(&mut self, reltype: &str, target: &PackURI) -> String {
        self.rels.get_or_add(reltype, target)
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// The part targeted by the package's officeDocument relationship.
    pub fn main_document_part(&self) -> Result<&Part> {
        let rel = self
            .rels
            .of_type(relationship_type::OFFICE_DOCUMENT)
            .next()
            .ok_or_else(|| {
                OpcError::RelationshipNotFound(relationship_type::OFFICE_DOCUMENT.to_string())
            })?;
        let partname = rel.target_partname()?;
        self.part(&partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
