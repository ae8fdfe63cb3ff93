//! Typed EAGLE drawing primitives
//!
//! Each primitive is a plain struct with the attributes its element requires,
//! in the order EAGLE writes them. Converting into an [`XmlNode`] is the only
//! behavior they have.

use crate::xml_node::XmlNode;

/// Straight line segment (`wire`), used for traces and board outline edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub layer: u16,
}

/// Arc end style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcCap {
    Flat,
}

impl ArcCap {
    pub fn as_str(self) -> &'static str {
        match self {
            ArcCap::Flat => "flat",
        }
    }
}

/// Curved `wire` sweeping `curve` degrees from (x1, y1) to (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub layer: u16,
    pub curve: f64,
    pub cap: Option<ArcCap>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub width: f64,
    pub layer: u16,
}

/// Text label; the string becomes the element content
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub layer: u16,
    pub value: String,
}

/// Plated through-hole belonging to a signal
#[derive(Debug, Clone, PartialEq)]
pub struct Via {
    pub x: f64,
    pub y: f64,
    /// Layer span, e.g. `1-16` for a through via
    pub extent: String,
    pub drill: f64,
    pub diameter: f64,
}

/// Placed instance of a library package
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub library: String,
    pub package: String,
    pub value: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// Filled rectangle given by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub layer: u16,
}

impl From<Wire> for XmlNode {
    fn from(wire: Wire) -> Self {
        XmlNode::new("wire")
            .with_attribute("x1", wire.x1)
            .with_attribute("y1", wire.y1)
            .with_attribute("x2", wire.x2)
            .with_attribute("y2", wire.y2)
            .with_attribute("width", wire.width)
            .with_attribute("layer", wire.layer)
    }
}

impl From<Arc> for XmlNode {
    fn from(arc: Arc) -> Self {
        let node = XmlNode::new("wire")
            .with_attribute("x1", arc.x1)
            .with_attribute("y1", arc.y1)
            .with_attribute("x2", arc.x2)
            .with_attribute("y2", arc.y2)
            .with_attribute("width", arc.width)
            .with_attribute("layer", arc.layer)
            .with_attribute("curve", arc.curve);
        match arc.cap {
            Some(cap) => node.with_attribute("cap", cap.as_str()),
            None => node,
        }
    }
}

impl From<Circle> for XmlNode {
    fn from(circle: Circle) -> Self {
        XmlNode::new("circle")
            .with_attribute("x", circle.x)
            .with_attribute("y", circle.y)
            .with_attribute("radius", circle.radius)
            .with_attribute("width", circle.width)
            .with_attribute("layer", circle.layer)
    }
}

impl From<Text> for XmlNode {
    fn from(text: Text) -> Self {
        XmlNode::text_element("text", text.value)
            .with_attribute("x", text.x)
            .with_attribute("y", text.y)
            .with_attribute("size", text.size)
            .with_attribute("layer", text.layer)
    }
}

impl From<Via> for XmlNode {
    fn from(via: Via) -> Self {
        XmlNode::new("via")
            .with_attribute("x", via.x)
            .with_attribute("y", via.y)
            .with_attribute("extent", via.extent)
            .with_attribute("drill", via.drill)
            .with_attribute("diameter", via.diameter)
    }
}

impl From<Element> for XmlNode {
    fn from(element: Element) -> Self {
        XmlNode::new("element")
            .with_attribute("name", element.name)
            .with_attribute("library", element.library)
            .with_attribute("package", element.package)
            .with_attribute("value", element.value)
            .with_attribute("x", element.x)
            .with_attribute("y", element.y)
    }
}

impl From<Vertex> for XmlNode {
    fn from(vertex: Vertex) -> Self {
        XmlNode::new("vertex")
            .with_attribute("x", vertex.x)
            .with_attribute("y", vertex.y)
    }
}

impl From<Rectangle> for XmlNode {
    fn from(rect: Rectangle) -> Self {
        XmlNode::new("rectangle")
            .with_attribute("x1", rect.x1)
            .with_attribute("y1", rect.y1)
            .with_attribute("x2", rect.x2)
            .with_attribute("y2", rect.y2)
            .with_attribute("layer", rect.layer)
    }
}
