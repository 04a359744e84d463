use crate::common::xml::escape_attr;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
/// Relationship-related objects for OPC packages.
///
/// Every part (and the package itself) owns a set of relationships that name
/// the parts it depends on by rId.
use std::collections::HashMap;

/// A single internal relationship from a source part to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference relative to the source's base URI
    target_ref: String,

    /// Base URI for resolving the relative target
    base_uri: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, base_uri: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Resolve the target reference to an absolute partname.
    pub fn target_partname(&self) -> Result<PackURI> {
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref)
    }

    /// Numeric suffix of the rId, used for stable ordering.
    fn ordinal(&self) -> u32 {
        rid_ordinal(&self.r_id).unwrap_or(u32::MAX)
    }
}

fn rid_ordinal(r_id: &str) -> Option<u32> {
    r_id.strip_prefix("rId")?.parse().ok()
}

/// Collection of relationships from a single source.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    /// Map of relationship ID to Relationship
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection for a source whose
    /// directory is `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: HashMap::new(),
        }
    }

    /// Add a relationship with an explicit rId, replacing any previous one
    /// using the same id.
    pub fn add_relationship(&mut self, reltype: String, target_ref: String, r_id: String) {
        let rel = Relationship::new(r_id.clone(), reltype, target_ref, self.base_uri.clone());
        self.rels.insert(r_id, rel);
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get or add a relationship to a target part, returning its rId.
    ///
    /// An existing relationship of the same type to the same target is
    /// reused; otherwise the next free rId is allocated.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> String {
        let target_ref = target.relative_ref(&self.base_uri);
        if let Some(rel) = self
            .rels
            .values()
            .find(|rel| rel.reltype() == reltype && rel.target_ref() == target_ref)
        {
            return rel.r_id().to_string();
        }

        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref, r_id.clone());
        r_id
    }

    /// Get the next available relationship ID, filling gaps first.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self.rels.keys().filter_map(|k| rid_ordinal(k)).collect();
        used.sort_unstable();

        let mut next = 1u32;
        for num in used {
            match num.cmp(&next) {
                std::cmp::Ordering::Equal => next += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        let mut buf = itoa::Buffer::new();
        format!("rId{}", buf.format(next))
    }

    /// All relationships of the given type, in rId order.
    pub fn of_type<'a>(&'a self, reltype: &'a str) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.iter().filter(move |rel| rel.reltype() == reltype)
    }

    /// Iterate over the relationships in rId order (`rId2` before `rId10`).
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        let mut rels: Vec<&Relationship> = self.rels.values().collect();
        rels.sort_by(|a, b| a.ordinal().cmp(&b.ordinal()).then_with(|| a.r_id.cmp(&b.r_id)));
        rels.into_iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in self.iter() {
            xml.push_str(r#"<Relationship Id=""#);
            xml.push_str(&escape_attr(rel.r_id()));
            xml.push_str(r#"" Type=""#);
            xml.push_str(&escape_attr(rel.reltype()));
            xml.push_str(r#"" Target=""#);
            xml.push_str(&escape_attr(rel.target_ref()));
            xml.push_str(r#""/>"#);
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}
