//! Physical package access: the ZIP container underneath an OPC package.
//!
//! Entries are written with Deflate compression and a fixed modification time
//! so identical packages serialize to identical bytes.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime, ZipArchive};

/// Physical package writer that builds the ZIP archive in memory.
pub struct PhysPkgWriter {
    zip_writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
    }

    /// Write a part to the package.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.zip_writer
            .start_file(pack_uri.membername(), Self::options())?;
        self.zip_writer.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the complete archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical package reader over an in-memory archive.
pub struct PhysPkgReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Read the bytes of a part.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(pack_uri.membername())
            .map_err(|_| OpcError::PartNotFound(pack_uri.to_string()))?;
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Read the `.rels` part of `source_uri`, if it has one.
    pub fn rels_xml_for(&mut self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source_uri.rels_uri()?;
        if !self.contains(&rels_uri) {
            return Ok(None);
        }
        self.blob_for(&rels_uri).map(Some)
    }

    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive.index_for_name(pack_uri.membername()).is_some()
    }

    /// ZIP member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        writer.write(&pack_uri, b"<p:presentation/>").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::from_bytes(zip_data).unwrap();
        assert!(reader.contains(&pack_uri));
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"<p:presentation/>");
    }

    #[test]
    fn test_missing_part() {
        let mut writer = PhysPkgWriter::new();
        writer
            .write(&PackURI::new("/_rels/.rels").unwrap(), b"<Relationships/>")
            .unwrap();
        let mut reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();

        let missing = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert!(matches!(reader.blob_for(&missing), Err(OpcError::PartNotFound(_))));
        assert_eq!(reader.rels_xml_for(&missing).unwrap(), None);
    }

    #[test]
    fn test_output_is_deterministic() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            writer
                .write(&PackURI::new("/a.xml").unwrap(), b"<a/>")
                .unwrap();
            writer
                .write(&PackURI::new("/b/c.xml").unwrap(), b"<c/>")
                .unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_member_order() {
        let mut writer = PhysPkgWriter::new();
        for name in ["/[Content_Types].xml", "/_rels/.rels", "/ppt/presentation.xml"] {
            writer.write(&PackURI::new(name).unwrap(), b"<x/>").unwrap();
        }
        let reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();
        assert_eq!(
            reader.member_names(),
            vec!["[Content_Types].xml", "_rels/.rels", "ppt/presentation.xml"]
        );
    }
}
