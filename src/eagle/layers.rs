//! EAGLE layer definitions
//!
//! The `layers` table written into every board. EAGLE refuses to open a board
//! that references a layer missing from this table.

use crate::error::NodeError;
use crate::xml_node::XmlNode;

pub const BOTTOM: u16 = 16;
pub const DIMENSION: u16 = 20;
pub const T_PLACE: u16 = 21;
pub const B_STOP: u16 = 30;
pub const T_KEEPOUT: u16 = 39;
pub const B_KEEPOUT: u16 = 40;
pub const T_RESTRICT: u16 = 41;
pub const B_RESTRICT: u16 = 42;
pub const V_RESTRICT: u16 = 43;
pub const DOCUMENT: u16 = 48;
pub const T_DOCU: u16 = 51;

/// One `layer` record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerDef {
    pub number: u16,
    pub name: &'static str,
    /// EAGLE palette index
    pub color: u8,
    /// Fill pattern index
    pub fill: u8,
    pub visible: bool,
    pub active: bool,
}

impl From<LayerDef> for XmlNode {
    fn from(layer: LayerDef) -> Self {
        XmlNode::new("layer")
            .with_attribute("number", layer.number)
            .with_attribute("name", layer.name)
            .with_attribute("color", layer.color)
            .with_attribute("fill", layer.fill)
            .with_attribute("visible", layer.visible)
            .with_attribute("active", layer.active)
    }
}

const fn layer(number: u16, name: &'static str, color: u8, fill: u8, visible: bool, active: bool) -> LayerDef {
    LayerDef { number, name, color, fill, visible, active }
}

pub const LAYERS: &[LayerDef] = &[
    layer(1, "Top", 4, 1, true, true),
    layer(2, "Route2", 1, 3, false, true),
    layer(3, "Route3", 4, 3, false, true),
    layer(4, "Route4", 1, 4, false, true),
    layer(5, "Route5", 4, 4, false, true),
    layer(6, "Route6", 1, 8, false, true),
    layer(7, "Route7", 4, 8, false, true),
    layer(8, "Route8", 1, 2, false, true),
    layer(9, "Route9", 4, 2, false, true),
    layer(10, "Route10", 1, 7, false, true),
    layer(11, "Route11", 4, 7, false, true),
    layer(12, "Route12", 1, 5, false, true),
    layer(13, "Route13", 4, 5, false, true),
    layer(14, "Route14", 1, 6, false, true),
    layer(15, "Route15", 4, 6, false, true),
    layer(16, "Bottom", 1, 1, true, true),
    layer(17, "Pads", 2, 1, true, true),
    layer(18, "Vias", 2, 1, true, true),
    layer(19, "Unrouted", 6, 1, true, true),
    layer(20, "Dimension", 15, 1, true, true),
    layer(21, "tPlace", 7, 1, true, true),
    layer(22, "bPlace", 7, 1, true, true),
    layer(23, "tOrigins", 15, 1, true, true),
    layer(24, "bOrigins", 15, 1, true, true),
    layer(25, "tNames", 7, 1, true, true),
    layer(26, "bNames", 7, 1, true, true),
    layer(27, "tValues", 7, 1, true, true),
    layer(28, "bValues", 7, 1, true, true),
    layer(29, "tStop", 7, 3, false, true),
    layer(30, "bStop", 7, 6, false, true),
    layer(31, "tCream", 7, 4, false, true),
    layer(32, "bCream", 7, 5, false, true),
    layer(33, "tFinish", 6, 3, false, true),
    layer(34, "bFinish", 6, 6, false, true),
    layer(35, "tGlue", 7, 4, false, true),
    layer(36, "bGlue", 7, 5, false, true),
    layer(37, "tTest", 7, 1, false, true),
    layer(38, "bTest", 7, 1, false, true),
    layer(39, "tKeepout", 4, 11, true, true),
    layer(40, "bKeepout", 1, 11, true, true),
    layer(41, "tRestrict", 4, 10, true, true),
    layer(42, "bRestrict", 1, 10, true, true),
    layer(43, "vRestrict", 2, 10, true, true),
    layer(44, "Drills", 7, 1, false, true),
    layer(45, "Holes", 7, 1, true, true),
    layer(46, "Milling", 3, 1, false, true),
    layer(47, "Measures", 7, 1, false, true),
    layer(48, "Document", 7, 1, true, true),
    layer(49, "Reference", 7, 1, true, true),
    layer(50, "dxf", 7, 1, false, true),
    layer(51, "tDocu", 7, 1, true, true),
    layer(52, "bDocu", 7, 1, true, true),
    layer(53, "tGND_GNDA", 7, 9, false, false),
    layer(54, "bGND_GNDA", 1, 9, false, false),
    layer(56, "wert", 7, 1, true, true),
    layer(91, "Nets", 2, 1, false, false),
    layer(92, "Busses", 1, 1, false, false),
    layer(93, "Pins", 2, 1, false, false),
    layer(94, "Symbols", 4, 1, false, false),
    layer(95, "Names", 7, 1, false, false),
    layer(96, "Values", 7, 1, false, false),
    layer(97, "Info", 7, 1, false, false),
    layer(98, "Guide", 6, 1, false, false),
    layer(100, "Muster", 7, 1, false, false),
    layer(101, "Patch_Top", 12, 4, true, true),
    layer(102, "Vscore", 7, 1, true, true),
    layer(103, "fp3", 7, 1, false, true),
    layer(104, "Name", 7, 1, true, true),
    layer(105, "Beschreib", 9, 1, true, true),
    layer(106, "BGA-Top", 4, 1, true, true),
    layer(107, "BD-Top", 5, 1, true, true),
    layer(108, "fp8", 7, 1, false, true),
    layer(109, "fp9", 7, 1, false, true),
    layer(110, "fp0", 7, 1, false, true),
    layer(111, "LPC17xx", 7, 1, true, true),
    layer(112, "tPlaceRed", 12, 1, true, true),
    layer(113, "tPlaceBlue", 9, 1, true, true),
    layer(116, "Patch_BOT", 9, 4, true, true),
    layer(121, "_tsilk", 7, 1, true, true),
    layer(122, "_bsilk", 7, 1, true, true),
    layer(123, "tTestmark", 7, 1, false, true),
    layer(124, "bTestmark", 7, 1, false, true),
    layer(125, "_tNames", 7, 1, true, true),
    layer(126, "_bNames", 7, 1, true, true),
    layer(127, "_tValues", 7, 1, true, true),
    layer(128, "_bValues", 7, 1, true, true),
    layer(131, "tAdjust", 7, 1, false, true),
    layer(132, "bAdjust", 7, 1, false, true),
    layer(144, "Drill_legend", 7, 1, true, true),
    layer(151, "HeatSink", 7, 1, true, true),
    layer(152, "_bDocu", 7, 1, true, true),
    layer(199, "Contour", 7, 1, true, true),
    layer(200, "200bmp", 1, 10, true, true),
    layer(201, "201bmp", 2, 1, false, false),
    layer(202, "202bmp", 3, 1, false, false),
    layer(203, "203bmp", 4, 10, true, true),
    layer(204, "204bmp", 5, 10, true, true),
    layer(205, "205bmp", 6, 10, true, true),
    layer(206, "206bmp", 7, 10, true, true),
    layer(207, "207bmp", 8, 10, true, true),
    layer(208, "208bmp", 9, 10, true, true),
    layer(209, "209bmp", 7, 1, false, true),
    layer(210, "210bmp", 7, 1, false, true),
    layer(211, "211bmp", 7, 1, true, true),
    layer(212, "212bmp", 7, 1, true, true),
    layer(213, "213bmp", 7, 1, true, true),
    layer(214, "214bmp", 7, 1, true, true),
    layer(215, "215bmp", 7, 1, true, true),
    layer(216, "216bmp", 7, 1, true, true),
    layer(217, "217bmp", 18, 1, false, false),
    layer(218, "218bmp", 19, 1, false, false),
    layer(219, "219bmp", 20, 1, false, false),
    layer(220, "220bmp", 21, 1, false, false),
    layer(221, "221bmp", 22, 1, false, false),
    layer(222, "222bmp", 23, 1, false, false),
    layer(223, "223bmp", 24, 1, false, false),
    layer(224, "224bmp", 25, 1, false, false),
    layer(248, "Housing", 7, 1, true, true),
    layer(249, "Edge", 7, 1, true, true),
    layer(250, "Descript", 7, 1, false, false),
    layer(251, "SMDround", 7, 1, false, false),
    layer(254, "cooling", 7, 1, true, true),
];

/// Builds the `layers` element holding one record per entry of [`LAYERS`]
pub fn layers_node() -> Result<XmlNode, NodeError> {
    let mut layers = XmlNode::new("layers");
    layers.extend_children(LAYERS.iter().copied().map(XmlNode::from))?;
    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find_layer(number: u16) -> Option<&'static LayerDef> {
        LAYERS.iter().find(|layer| layer.number == number)
    }

    #[test]
    fn test_layer_numbers_are_unique_and_ascending() {
        let mut seen = HashSet::new();
        for pair in LAYERS.windows(2) {
            assert!(pair[0].number < pair[1].number, "{} before {}", pair[0].number, pair[1].number);
        }
        for layer in LAYERS {
            assert!(seen.insert(layer.number));
        }
    }

    #[test]
    fn test_referenced_layers_exist() {
        for number in [BOTTOM, DIMENSION, T_PLACE, B_STOP, T_KEEPOUT, B_KEEPOUT,
                       T_RESTRICT, B_RESTRICT, V_RESTRICT, DOCUMENT, T_DOCU] {
            assert!(find_layer(number).is_some(), "layer {} missing", number);
        }
        assert_eq!(find_layer(BOTTOM).map(|l| l.name), Some("Bottom"));
        assert_eq!(find_layer(DIMENSION).map(|l| l.name), Some("Dimension"));
    }

    #[test]
    fn test_layers_node() {
        let node = layers_node().unwrap();
        assert_eq!(node.children().len(), LAYERS.len());

        let top = &node.children()[0];
        assert_eq!(top.attribute("name").map(|v| v.to_string()), Some("Top".to_string()));
        assert_eq!(top.attribute("visible").map(|v| v.to_string()), Some("yes".to_string()));
    }
}
