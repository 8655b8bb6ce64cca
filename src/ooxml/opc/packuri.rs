/// The PackURI value type.
///
/// A PackURI is a part name within an OPC package: it begins with a forward
/// slash and uses forward slashes as separators.
use crate::common::{Error, Result};

pub const PACKAGE_URI: &str = "/";
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a new PackURI; the string must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(Error::Xml(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Directory portion, e.g. "/word" for "/word/document.xml".
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Final path segment, e.g. "document.xml".
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => &self.uri,
        }
    }

    /// ZIP member name: the URI without its leading slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Reference to this part relative to `base_uri`.
    ///
    /// Only the cases a report package needs are handled: targets below the
    /// base directory, and everything relative to the package root.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }
        match self.uri.strip_prefix(base_uri) {
            Some(rest) if rest.starts_with('/') => rest[1..].to_string(),
            _ => {
                let depth = base_uri.matches('/').count();
                format!("{}{}", "../".repeat(depth), self.membername())
            },
        }
    }

    /// URI of the relationships part belonging to this part.
    ///
    /// "/word/document.xml" maps to "/word/_rels/document.xml.rels" and the
    /// package pseudo-partname "/" maps to "/_rels/.rels".
    pub fn rels_uri(&self) -> PackURI {
        let filename = if self.uri == PACKAGE_URI {
            ""
        } else {
            self.filename()
        };
        let base = self.base_uri();
        let uri = if base == "/" {
            format!("/_rels/{}.rels", filename)
        } else {
            format!("{}/_rels/{}.rels", base, filename)
        };
        PackURI { uri }
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let uri = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(uri.base_uri(), "/word");
        assert_eq!(uri.filename(), "document.xml");
        assert_eq!(uri.membername(), "word/document.xml");
    }

    #[test]
    fn test_requires_leading_slash() {
        assert!(PackURI::new("word/document.xml").is_err());
    }

    #[test]
    fn test_rels_uri() {
        let doc = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(doc.rels_uri().as_str(), "/word/_rels/document.xml.rels");

        let pkg = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(pkg.rels_uri().as_str(), "/_rels/.rels");
        assert_eq!(pkg.rels_uri().membername(), "_rels/.rels");
    }

    #[test]
    fn test_relative_ref() {
        let styles = PackURI::new("/word/styles.xml").unwrap();
        assert_eq!(styles.relative_ref("/word"), "styles.xml");
        assert_eq!(styles.relative_ref("/"), "word/styles.xml");

        let core = PackURI::new("/docProps/core.xml").unwrap();
        assert_eq!(core.relative_ref("/word"), "../docProps/core.xml");
    }
}
