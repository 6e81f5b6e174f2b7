//! Small helpers over `xmltree` shared by the response decoders

use ::xml::reader::{EventReader, ParserConfig, XmlEvent};
use xmltree::{Element, XMLNode};

use crate::error::DecodeError;

/// Parse a response body into its root element
///
/// Whitespace-only text is kept as a text node, so a `<c8_array>` holding
/// only blanks keeps its value. Text outside the root is dropped.
pub(crate) fn parse(body: &str) -> Result<Element, DecodeError> {
    let config = ParserConfig::new()
        .whitespace_to_characters(true)
        .ignore_comments(true);
    let reader = EventReader::new_with_config(body.trim_start_matches('\u{feff}').as_bytes(), config);

    let mut open: Vec<Element> = Vec::new();
    let mut root = None;
    for event in reader {
        match event.map_err(|e| DecodeError::Xml(e.to_string()))? {
            XmlEvent::StartElement { name, attributes, .. } => {
                let mut element = Element::new(&name.local_name);
                for attr in attributes {
                    element.attributes.insert(attr.name.local_name, attr.value);
                }
                open.push(element);
            }
            XmlEvent::EndElement { .. } => {
                let element = open
                    .pop()
                    .ok_or_else(|| DecodeError::Xml("unbalanced end tag".to_string()))?;
                match open.last_mut() {
                    Some(parent) => parent.children.push(XMLNode::Element(element)),
                    None => root = Some(element),
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) | XmlEvent::CData(text) => {
                if let Some(current) = open.last_mut() {
                    current.children.push(XMLNode::Text(text));
                }
            }
            _ => {}
        }
    }
    root.ok_or_else(|| DecodeError::Xml("no root element".to_string()))
}

/// Element children of `element`, in document order
pub(crate) fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

/// The first child element called `name`
pub(crate) fn child<'a>(element: &'a Element, name: &str) -> Result<&'a Element, DecodeError> {
    child_elements(element)
        .find(|child| child.name == name)
        .ok_or_else(|| DecodeError::MissingElement(name.to_string()))
}

/// Text content of `element`; an empty element yields an empty string
pub(crate) fn text(element: &Element) -> String {
    element
        .get_text()
        .map(|t| t.into_owned())
        .unwrap_or_default()
}

/// A required attribute of `element`
pub(crate) fn attribute<'a>(
    element: &'a Element,
    element_name: &'static str,
    attribute: &'static str,
) -> Result<&'a str, DecodeError> {
    element
        .attributes
        .get(attribute)
        .map(String::as_str)
        .ok_or(DecodeError::MissingAttribute {
            element: element_name,
            attribute,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_text() {
        let root = parse("<r><a>one</a><b/><a>two</a></r>").unwrap();
        assert_eq!(text(child(&root, "a").unwrap()), "one");
        assert_eq!(text(child(&root, "b").unwrap()), "");
        assert_eq!(child_elements(&root).count(), 3);
        assert_eq!(
            child(&root, "c").unwrap_err(),
            DecodeError::MissingElement("c".to_string())
        );
    }

    #[test]
    fn test_whitespace_text_is_kept() {
        let root = parse("<value>\n  <c8_array>   </c8_array>\n</value>").unwrap();
        assert_eq!(text(child(&root, "c8_array").unwrap()), "   ");
        assert_eq!(child_elements(&root).count(), 1);
    }

    #[test]
    fn test_entities_and_cdata() {
        let root = parse("<r><a>Rock &amp; Roll</a><b><![CDATA[A&B]]></b></r>").unwrap();
        assert_eq!(text(child(&root, "a").unwrap()), "Rock & Roll");
        assert_eq!(text(child(&root, "b").unwrap()), "A&B");
    }

    #[test]
    fn test_attribute() {
        let root = parse(r#"<item key="7"/>"#).unwrap();
        assert_eq!(attribute(&root, "item", "key").unwrap(), "7");
        assert_eq!(
            attribute(&root, "item", "name").unwrap_err(),
            DecodeError::MissingAttribute { element: "item", attribute: "name" }
        );
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse("<fsapiResponse><status>"), Err(DecodeError::Xml(_))));
        assert!(matches!(parse(""), Err(DecodeError::Xml(_))));
    }
}
