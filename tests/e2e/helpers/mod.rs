use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing_subscriber::EnvFilter;


static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Routes library logs to the test output; filter with RUST_LOG
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Reads a `pubDate` value back into UTC
pub fn parse_rfc822(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc2822(value.trim())?.with_timezone(&Utc))
}

/// Element of a parsed document, addressed by its slash-separated path
#[derive(Debug, Clone)]
pub struct XmlNode {
    pub path: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
}

impl XmlNode {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parsed document: every element in document order
#[derive(Debug)]
pub struct XmlDocument {
    pub declaration_encoding: Option<String>,
    pub nodes: Vec<XmlNode>,
}

impl XmlDocument {
    pub fn all(&self, path: &str) -> Vec<&XmlNode> {
        self.nodes.iter().filter(|n| n.path == path).collect()
    }

    pub fn first(&self, path: &str) -> Option<&XmlNode> {
        self.nodes.iter().find(|n| n.path == path)
    }

    pub fn texts(&self, path: &str) -> Vec<&str> {
        self.all(path).into_iter().map(|n| n.text.as_str()).collect()
    }

    /// Direct children of the `index`-th `rss/channel/item`
    pub fn item_children(&self, index: usize) -> Vec<&XmlNode> {
        let mut seen = None;
        let mut children = Vec::new();
        for node in &self.nodes {
            if node.path == "rss/channel/item" {
                seen = Some(seen.map_or(0, |i| i + 1));
                continue;
            }
            if seen == Some(index) && node.path.starts_with("rss/channel/item/") {
                children.push(node);
            }
        }
        children
    }
}

/// Parses `xml` with quick-xml, failing on any well-formedness error
pub fn parse_document(xml: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut declaration_encoding = None;
    let mut nodes: Vec<XmlNode> = Vec::new();
    let mut open: Vec<(String, usize)> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Decl(decl)) => {
                if let Some(encoding) = decl.encoding() {
                    declaration_encoding = Some(String::from_utf8_lossy(&encoding?).to_string());
                }
            }
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let path = child_path(&open, &name);
                nodes.push(XmlNode {
                    path: path.clone(),
                    attributes: read_attributes(&e)?,
                    text: String::new(),
                });
                open.push((path, nodes.len() - 1));
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                nodes.push(XmlNode {
                    path: child_path(&open, &name),
                    attributes: read_attributes(&e)?,
                    text: String::new(),
                });
            }
            Ok(Event::Text(e)) => {
                if let Some((_, index)) = open.last() {
                    nodes[*index].text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("XML parse error at {}: {}", reader.buffer_position(), e),
            _ => {}
        }
    }

    if !open.is_empty() {
        bail!("document ended with {} unclosed elements", open.len());
    }

    Ok(XmlDocument {
        declaration_encoding,
        nodes,
    })
}

fn child_path(open: &[(String, usize)], name: &str) -> String {
    match open.last() {
        Some((parent, _)) => format!("{}/{}", parent, name),
        None => name.to_string(),
    }
}

fn read_attributes(e: &quick_xml::events::BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).to_string(),
            attr.unescape_value()?.to_string(),
        ));
    }
    Ok(attributes)
}
