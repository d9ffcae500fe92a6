use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::option::SerializeOption;
use super::rfc822;
use crate::domain::feed::{Author, Feed, Item};
use crate::error::{SyndicationError, SyndicationResult};
use crate::infrastructure::encoding;

pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
pub const RSS_VERSION: &str = "2.0";

const XML_VERSION: &str = "1.0";
const RSS_MIME_TYPE: &str = "application/rss+xml";

/// Serializes `feed` into an RSS 2.0 document.
///
/// The XML declaration names `options.encoding`; the returned text itself
/// is a Rust string. Use [`serialize_to_vec`] for the encoded bytes.
///
/// Fails with [`SyndicationError::InvalidCharacter`] if any value holds a
/// character outside the XML 1.0 `Char` production, and with
/// [`SyndicationError::DateOutOfRange`] for publish dates outside years
/// 0..=9999.
pub fn serialize(feed: &Feed, options: &SerializeOption) -> SyndicationResult<String> {
    encoding::ensure_supported(options.encoding)?;
    let declared = encoding::declared_name(options.encoding);
    tracing::debug!(
        title = %feed.title,
        items = feed.items.len(),
        encoding = %declared,
        "Serializing feed"
    );

    let mut writer = if options.indent {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };

    writer.write_event(Event::Decl(BytesDecl::new(
        XML_VERSION,
        Some(declared.as_str()),
        None,
    )))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", RSS_VERSION));
    rss.push_attribute(("xmlns:atom", ATOM_NAMESPACE));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &feed.title)?;
    write_text_element(&mut writer, "description", &feed.description)?;
    write_text_element(&mut writer, "link", feed.link.as_str())?;

    let mut self_link = BytesStart::new("atom:link");
    self_link.push_attribute(("href", checked(feed.link.as_str())?));
    self_link.push_attribute(("rel", "self"));
    self_link.push_attribute(("type", RSS_MIME_TYPE));
    writer.write_event(Event::Empty(self_link))?;

    if let Some(copyright) = present(&feed.copyright) {
        write_text_element(&mut writer, "copyright", copyright)?;
    }
    if let Some(language) = present(&feed.language) {
        write_text_element(&mut writer, "language", language)?;
    }

    for item in &feed.items {
        write_item(&mut writer, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let xml = String::from_utf8(writer.into_inner())?;
    tracing::debug!(length = xml.len(), "Feed serialized");

    Ok(xml)
}

/// Serializes `feed` and encodes the document in `options.encoding`.
///
/// UTF-16 output starts with a byte order mark. Fails without output if
/// any character cannot be represented in the target encoding.
pub fn serialize_to_vec(feed: &Feed, options: &SerializeOption) -> SyndicationResult<Vec<u8>> {
    let xml = serialize(feed, options)?;
    encoding::encode(&xml, options.encoding)
}

fn write_item(writer: &mut Writer<Vec<u8>>, item: &Item) -> SyndicationResult<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text_element(writer, "title", &item.title)?;
    write_text_element(writer, "description", &item.body)?;
    write_text_element(writer, "link", item.link.as_str())?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "true"));
    write_element(writer, guid, item.guid())?;

    write_text_element(writer, "pubDate", &rfc822::format(&item.publish_date)?)?;

    if let Some(author) = &item.author {
        write_text_element(writer, "author", &author_text(author))?;
    }
    for category in &item.categories {
        write_text_element(writer, "category", category)?;
    }
    if let Some(comments) = &item.comments {
        write_text_element(writer, "comments", comments.as_str())?;
    }

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

/// RSS 2.0 author convention: `email (name)`
fn author_text(author: &Author) -> String {
    match present(&author.email) {
        Some(email) => format!("{} ({})", email, author.name),
        None => author.name.clone(),
    }
}

/// XML 1.0 `Char`: `#x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]`
fn is_xml_char(c: char) -> bool {
    matches!(c as u32,
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x0001_0000..=0x0010_FFFF
    )
}

/// Passes `value` through if every character may appear in an XML document
fn checked(value: &str) -> SyndicationResult<&str> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        None => Ok(value),
        Some(character) => {
            tracing::warn!(
                character = ?character,
                "Feed contains a character not allowed in XML"
            );
            Err(SyndicationError::InvalidCharacter { character })
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> SyndicationResult<()> {
    write_element(writer, BytesStart::new(name), text)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    start: BytesStart<'_>,
    text: &str,
) -> SyndicationResult<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(checked(text)?)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}
