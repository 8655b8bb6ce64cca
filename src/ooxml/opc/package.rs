/// In-memory OPC package assembled before serialization.
use crate::common::Result;
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A part: partname, content type, serialized bytes and outgoing relationships.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
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

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate this part to `target`, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.add(reltype, &target_ref)
    }
}

/// A package: package-level relationships plus parts in write order.
#[derive(Debug, Clone, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part and return a mutable reference to it.
    pub fn add_part(&mut self, part: Part) -> &mut Part {
        self.parts.push(part);
        let idx = self.parts.len() - 1;
        &mut self.parts[idx]
    }

    /// Add a package-level relationship to a part.
    pub fn relate_to(&mut self, partname: &str, reltype: &str) -> Result<String> {
        let target = PackURI::new(partname)?;
        Ok(self.rels.add(reltype, &target.relative_ref("/")))
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part(&self, partname: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname.as_str() == partname)
    }
}
