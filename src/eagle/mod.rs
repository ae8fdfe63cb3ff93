//! EAGLE board file vocabulary
//!
//! # Submodules
//! - `primitives` - Typed drawing elements (wires, arcs, vias, ...)
//! - `layers` - Layer numbers and the layer definition table
//! - `library` - The mounting hole library embedded in each board

pub mod layers;
pub mod library;
pub mod primitives;

use crate::xml_node::XmlNode;

pub use layers::{layers_node, LayerDef, LAYERS};
pub use library::holes_library;
pub use primitives::{Arc, ArcCap, Circle, Element, Rectangle, Text, Vertex, Via, Wire};

/// EAGLE file format version written on the root element
pub const EAGLE_VERSION: &str = "6.3";

/// Measurement grid: 0.005 inch lines, 0.001 inch alternate grid, hidden
pub fn grid_node() -> XmlNode {
    XmlNode::new("grid")
        .with_attribute("distance", 0.005)
        .with_attribute("unitdist", "inch")
        .with_attribute("unit", "inch")
        .with_attribute("altdistance", 0.001)
        .with_attribute("altunitdist", "inch")
        .with_attribute("altunit", "inch")
        .with_attribute("style", "lines")
        .with_attribute("multiple", 1)
        .with_attribute("display", false)
}
