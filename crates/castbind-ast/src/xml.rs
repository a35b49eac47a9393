//! CastXML document → node arena.
//!
//! Every element directly below the document element becomes a top-level
//! node; deeper elements (`EnumValue`, `Argument`, ...) hang off their
//! parent as children. Text content is irrelevant for CastXML and dropped.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::AstError;
use crate::node::{AttributeNode, NodeRef, NodeTag};

pub(crate) struct Forest {
    pub nodes: Vec<AttributeNode>,
    pub top_level: Vec<NodeRef>,
}

pub(crate) fn parse_forest(text: &str) -> Result<Forest, AstError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut forest = Forest {
        nodes: Vec::new(),
        top_level: Vec::new(),
    };
    // Open elements below the document element.
    let mut open: Vec<NodeRef> = Vec::new();
    let mut seen_document = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if depth == 0 {
                    seen_document = true;
                } else {
                    let node = forest.push(&start, &open)?;
                    open.push(node);
                }
                depth += 1;
            }
            Event::Empty(start) => {
                if depth == 0 {
                    seen_document = true;
                } else {
                    forest.push(&start, &open)?;
                }
            }
            Event::End(_) => {
                if depth > 1 {
                    open.pop();
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof if depth > 0 => return Err(AstError::Truncated { open: depth }),
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_document {
        return Err(AstError::EmptyDocument);
    }
    Ok(forest)
}

impl Forest {
    fn push(&mut self, start: &BytesStart<'_>, open: &[NodeRef]) -> Result<NodeRef, AstError> {
        let tag = NodeTag::from_element(&String::from_utf8_lossy(start.name().as_ref()));

        let mut attributes = HashMap::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.insert(key, value);
        }

        let node = NodeRef(u32::try_from(self.nodes.len()).map_err(|_| AstError::TooLarge)?);
        self.nodes.push(AttributeNode::new(tag, attributes));
        match open.last() {
            Some(parent) => self.nodes[parent.index()].children.push(node),
            None => self.top_level.push(node),
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_elements_become_children() {
        let forest = parse_forest(
            r#"<?xml version="1.0"?>
<CastXML format="1.1.0">
  <Enumeration id="_3" name="EE" context="_1">
    <EnumValue name="A" init="0"/>
    <EnumValue name="B" init="1"/>
  </Enumeration>
  <Namespace id="_1" name="::"/>
</CastXML>"#,
        )
        .expect("valid document");

        assert_eq!(forest.top_level.len(), 2);
        let en = &forest.nodes[forest.top_level[0].index()];
        assert_eq!(en.tag(), &NodeTag::Enumeration);
        let values: Vec<_> = en
            .children()
            .iter()
            .map(|c| forest.nodes[c.index()].name().unwrap_or_default())
            .collect();
        assert_eq!(values, ["A", "B"]);
        assert_eq!(
            forest.nodes[forest.top_level[1].index()].tag(),
            &NodeTag::Namespace
        );
    }

    #[test]
    fn attribute_entities_are_unescaped() {
        let forest = parse_forest(
            r#"<CastXML><File id="f1" name="a&amp;b.hh"/></CastXML>"#,
        )
        .expect("valid document");
        assert_eq!(forest.nodes[0].name(), Some("a&b.hh"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_forest(""), Err(AstError::EmptyDocument)));
    }

    #[test]
    fn mismatched_tags_are_rejected() {
        let result = parse_forest("<CastXML><Class id=\"_1\"></Method></CastXML>");
        assert!(matches!(result, Err(AstError::Xml(_))));
    }

    #[test]
    fn truncated_document_is_rejected() {
        let result = parse_forest(
            r#"<CastXML><Namespace id="_1" name="::"/><Namespace id="_2" name="O" context="_1"/><Class id="_3" name="C" context="_2">"#,
        );
        assert!(matches!(result, Err(AstError::Truncated { open: 2 })));
    }

    #[test]
    fn unclosed_document_element_is_rejected() {
        let result = parse_forest(r#"<CastXML><Namespace id="_1" name="::"/>"#);
        assert!(matches!(result, Err(AstError::Truncated { open: 1 })));
    }
}
