/// Provides the PackURI value type for part names within an OPC package.
use crate::ooxml::opc::error::{OpcError, Result};

/// A partname within an OPC package, e.g. `/ppt/slides/slide1.xml`.
///
/// PackURIs always begin with a forward slash and use forward slashes as
/// separators. The package itself is addressed by the pseudo-partname `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a new PackURI, rejecting names that do not start with `/`.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Create the partname of the `idx`-th member of a tuple part family.
    ///
    /// `PackURI::indexed("/ppt/slides/slide", 3, "xml")` is `/ppt/slides/slide3.xml`.
    pub fn indexed(stem: &str, idx: usize, ext: &str) -> Result<Self> {
        let mut buf = itoa::Buffer::new();
        Self::new(format!("{}{}.{}", stem, buf.format(idx), ext))
    }

    /// Resolve a relationship target (like `slides/slide1.xml` or
    /// `../slideLayouts/slideLayout1.xml`) against the source's base URI.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self> {
        if relative_ref.starts_with('/') {
            return Self::new(relative_ref);
        }

        let mut segments: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        for part in relative_ref.split('/') {
            match part {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                _ => segments.push(part),
            }
        }

        Self::new(format!("/{}", segments.join("/")))
    }

    /// The directory portion, e.g. `/ppt/slides` for `/ppt/slides/slide1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// The filename portion, e.g. `slide1.xml`. Empty for `/`.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// The extension without the leading period.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        match filename.rfind('.') {
            Some(pos) => &filename[pos + 1..],
            None => "",
        }
    }

    /// The ZIP member name (leading slash stripped).
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// The reference to this part relative to `base_uri`, as written in a
    /// `Target` attribute.
    ///
    /// `/ppt/slideLayouts/slideLayout1.xml` relative to `/ppt/slides` is
    /// `../slideLayouts/slideLayout1.xml`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();
        let common = from
            .iter()
            .zip(to.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = Vec::with_capacity(from.len() - common + to.len() - common);
        parts.extend(std::iter::repeat_n("..", from.len() - common));
        parts.extend(&to[common..]);
        parts.join("/")
    }

    /// The partname of the `.rels` part holding this part's relationships,
    /// e.g. `/ppt/slides/_rels/slide1.xml.rels`.
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base_uri = self.base_uri();
        if base_uri == "/" {
            Self::new(format!("/_rels/{}.rels", self.filename()))
        } else {
            Self::new(format!("{}/_rels/{}.rels", base_uri, self.filename()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";
