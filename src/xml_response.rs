use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::{Error, Result};

/// One element of a parsed response, with its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    depth: usize,
}

impl XmlElement {
    /// Qualified name as written in the source (`ns:endpoint` stays prefixed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value with XML entities resolved. Names are case-sensitive.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Nesting depth, the document element being 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn from_start(start: &BytesStart<'_>, depth: usize) -> Result<Self> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|_| Error::XmlParse("element name is not valid UTF-8".into()))?
            .to_string();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::XmlParse(format!("<{name}>: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|_| {
                    Error::XmlParse(format!("<{name}>: attribute name is not valid UTF-8"))
                })?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::XmlParse(format!("<{name} {key}>: {e}")))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            depth,
        })
    }
}

/// A parsed XML response, flattened to its elements in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlResponse {
    elements: Vec<XmlElement>,
}

impl XmlResponse {
    /// Strict parse: any syntax error, or an element left open at the end of
    /// input, fails the whole response.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut elements = Vec::new();
        read_elements(xml, &mut elements)?;
        Ok(Self { elements })
    }

    /// Best-effort parse: elements read before a syntax error are kept and the
    /// error is handed back next to them.
    pub fn parse_lenient(xml: &str) -> (Self, Option<Error>) {
        let mut elements = Vec::new();
        let err = read_elements(xml, &mut elements).err();
        (Self { elements }, err)
    }

    /// Elements with the given qualified name in document order; `*` matches
    /// every element.
    pub fn get_elements_by_tag_name<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.elements
            .iter()
            .filter(move |element| tag == "*" || element.name == tag)
    }

    pub fn elements(&self) -> &[XmlElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn read_elements(xml: &str, out: &mut Vec<XmlElement>) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    loop {
        match reader
            .read_event()
            .map_err(|e| Error::XmlParse(format!("at byte {}: {e}", reader.error_position())))?
        {
            Event::Start(e) => {
                out.push(XmlElement::from_start(&e, depth)?);
                depth += 1;
            }
            Event::Empty(e) => {
                out.push(XmlElement::from_start(&e, depth)?);
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::XmlParse("unbalanced end tag".into()))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::XmlParse(format!(
            "{depth} element(s) left open at end of input"
        )));
    }
    Ok(())
}
