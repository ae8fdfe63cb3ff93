//! In-memory document tree used to assemble the board file before serialization.
//!
//! A node owns its children outright, so a subtree is moved into its parent and
//! can never be shared or attached to itself. The only invariant the type
//! enforces at runtime is that a node holds child elements or text, not both.

use std::fmt;

use indexmap::IndexMap;

use crate::error::NodeError;

/// Scalar attribute value, stringified only when the tree is serialized
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Integer(i64),
    Text(String),
    /// Printed as the `yes` / `no` tokens EAGLE uses for booleans
    Flag(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(value) => f.write_str(&format_number(*value)),
            AttrValue::Integer(value) => write!(f, "{}", value),
            AttrValue::Text(value) => f.write_str(value),
            AttrValue::Flag(true) => f.write_str("yes"),
            AttrValue::Flag(false) => f.write_str("no"),
        }
    }
}

/// Formats a coordinate or dimension for output.
///
/// Values are rounded to six decimals so accumulated floating point noise
/// (`17.779999999999998`) never reaches the file, then printed in shortest
/// form: `23`, `12.5`, `1.9304`.
pub fn format_number(value: f64) -> String {
    let mut rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        rounded = 0.0; // drop the sign of -0
    }
    format!("{}", rounded)
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Integer(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Integer(value.into())
    }
}

impl From<u8> for AttrValue {
    fn from(value: u8) -> Self {
        AttrValue::Integer(value.into())
    }
}

impl From<u16> for AttrValue {
    fn from(value: u16) -> Self {
        AttrValue::Integer(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Integer(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// One markup element
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    name: String,
    attributes: IndexMap<String, AttrValue>,
    children: Vec<XmlNode>,
    text: Option<String>,
}

impl XmlNode {
    /// Creates an element with no attributes, no children and no text
    pub fn new(name: impl Into<String>) -> Self {
        XmlNode {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Creates a leaf element holding only text content
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = XmlNode::new(name);
        node.text = Some(text.into());
        node
    }

    /// Inserts or overwrites an attribute. An overwritten key keeps its original position.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), NodeError> {
        if !self.children.is_empty() {
            return Err(NodeError::TextOnParent {
                element: self.name.clone(),
            });
        }
        self.text = Some(text.into());
        Ok(())
    }

    /// Appends `child`, taking ownership of it
    pub fn add_child(&mut self, child: XmlNode) -> Result<(), NodeError> {
        if self.text.is_some() {
            return Err(NodeError::ChildOnTextNode {
                element: self.name.clone(),
            });
        }
        self.children.push(child);
        Ok(())
    }

    pub fn with_child(mut self, child: XmlNode) -> Result<Self, NodeError> {
        self.add_child(child)?;
        Ok(self)
    }

    /// Appends every node yielded by `children`, stopping at the first rejection
    pub fn extend_children<I>(&mut self, children: I) -> Result<(), NodeError>
    where
        I: IntoIterator<Item = XmlNode>,
    {
        for child in children {
            self.add_child(child)?;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First direct child with the given tag name
    pub fn find_child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// All nodes below this one (depth first, document order) with the given tag name
    pub fn descendants_named(&self, name: &str) -> Vec<&XmlNode> {
        let mut found = Vec::new();
        collect_named(self, name, &mut found);
        found
    }
}

fn collect_named<'a>(node: &'a XmlNode, name: &str, found: &mut Vec<&'a XmlNode>) {
    for child in &node.children {
        if child.name == name {
            found.push(child);
        }
        collect_named(child, name, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = XmlNode::new("board");
        assert_eq!(node.name(), "board");
        assert!(node.attributes().is_empty());
        assert!(node.children().is_empty());
        assert!(node.text().is_none());
    }

    #[test]
    fn test_attribute_last_write_wins_and_keeps_position() {
        let mut node = XmlNode::new("via");
        node.set_attribute("x", 1.0);
        node.set_attribute("y", 2.0);
        node.set_attribute("x", 3.5);

        let keys: Vec<&str> = node.attributes().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(node.attribute("x"), Some(&AttrValue::Number(3.5)));
    }

    #[test]
    fn test_text_after_children_is_rejected() {
        let mut node = XmlNode::new("package");
        node.add_child(XmlNode::new("circle")).unwrap();

        let err = node.set_text("oops").unwrap_err();
        assert_eq!(err, NodeError::TextOnParent { element: "package".to_string() });
        assert!(node.text().is_none());
    }

    #[test]
    fn test_child_after_text_is_rejected() {
        let mut node = XmlNode::text_element("description", "hole");

        let err = node.add_child(XmlNode::new("circle")).unwrap_err();
        assert_eq!(err, NodeError::ChildOnTextNode { element: "description".to_string() });
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_descendants_in_document_order() {
        let signal_a = XmlNode::new("signal")
            .with_attribute("name", "N$1")
            .with_child(XmlNode::new("via").with_attribute("x", 1.0))
            .unwrap();
        let signal_b = XmlNode::new("signal")
            .with_attribute("name", "N$2")
            .with_child(XmlNode::new("via").with_attribute("x", 2.0))
            .unwrap();
        let mut signals = XmlNode::new("signals");
        signals.extend_children([signal_a, signal_b]).unwrap();

        let vias = signals.descendants_named("via");
        assert_eq!(vias.len(), 2);
        assert_eq!(vias[1].attribute("x"), Some(&AttrValue::Number(2.0)));
        assert_eq!(signals.children_named("signal").count(), 2);
        assert!(signals.find_child("wire").is_none());
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(23.0), "23");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(1.9304), "1.9304");
        assert_eq!(format_number(7.0 * 2.54), "17.78");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-9), "0");
    }

    #[test]
    fn test_flag_tokens() {
        assert_eq!(AttrValue::from(true).to_string(), "yes");
        assert_eq!(AttrValue::from(false).to_string(), "no");
        assert_eq!(AttrValue::from(16u8).to_string(), "16");
    }
}
