//! XML wire documents: request serialization and reply parsing.

use indexmap::IndexMap;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::types::XmlElement;

/// Serialize `<root><name>value</name>...</root>`.
///
/// No XML declaration is emitted; the service accepts the bare document.
/// Text values are escaped by the writer.
pub(crate) fn element_with_children(
    root: &str,
    children: &[(&str, &str)],
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(BytesStart::new(root)))?;
    for &(name, value) in children {
        writer.write_event(Event::Start(BytesStart::new(name)))?;
        writer.write_event(Event::Text(BytesText::new(value)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(root)))?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Parse the first start (or self-closing) element of `xml`.
///
/// Returns `None` when the document holds no element at all. Ill-formed
/// markup surfaces as the parser's own error.
pub(crate) fn parse_root_element(xml: &str) -> Result<Option<XmlElement>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                let mut attributes = IndexMap::new();
                for attribute in element.attributes() {
                    let attribute = attribute?;
                    let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
                    let value = attribute.unescape_value()?.into_owned();
                    attributes.insert(key, value);
                }
                return Ok(Some(XmlElement { name, attributes }));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
