//! Board outline, mounting holes and silkscreen decoration

use crate::eagle::layers::{B_STOP, DIMENSION, T_PLACE};
use crate::eagle::library::{MOUNT_HOLE_LIBRARY, MOUNT_HOLE_PACKAGE, MOUNT_HOLE_VALUE};
use crate::eagle::{Arc, Element, Rectangle, Text, Vertex, Wire};
use crate::error::NodeError;
use crate::layout::params::{GridGeometry, LayoutParams};
use crate::xml_node::XmlNode;
use log::warn;

const OUTLINE_WIDTH: f64 = 0.127;
const CORNER_SWEEP: f64 = 90.0;

const LABEL_SIZE: f64 = 2.0;
const LOGO_SCALE: f64 = 1.4;
const LOGO_WIDTH: f64 = 0.4064;

/// Rounded rectangle on the Dimension layer: a quarter arc of radius `inset`
/// at each corner, joined by straight edges.
pub fn outline(params: &LayoutParams, geo: &GridGeometry) -> Vec<XmlNode> {
    let (hw, hl, inset) = (geo.half_width, geo.half_length, params.inset);
    let arc = |x1: f64, y1: f64, x2: f64, y2: f64| -> XmlNode {
        Arc {
            x1,
            y1,
            x2,
            y2,
            width: OUTLINE_WIDTH,
            layer: DIMENSION,
            curve: CORNER_SWEEP,
            cap: None,
        }
        .into()
    };
    let edge = |x1: f64, y1: f64, x2: f64, y2: f64| -> XmlNode {
        Wire {
            x1,
            y1,
            x2,
            y2,
            width: OUTLINE_WIDTH,
            layer: DIMENSION,
        }
        .into()
    };

    vec![
        arc(hw, hl - inset, hw - inset, hl),
        edge(hw - inset, hl, -hw + inset, hl),
        arc(hw - inset, -hl, hw, -hl + inset),
        edge(hw, -hl + inset, hw, hl - inset),
        arc(-hw + inset, hl, -hw, hl - inset),
        edge(hw - inset, -hl, -hw + inset, -hl),
        arc(-hw, -hl + inset, -hw + inset, -hl),
        edge(-hw, -hl + inset, -hw, hl - inset),
    ]
}

/// `elements` holding the four mounting holes, `inset` in from both edges at each corner
pub fn mounting_holes(params: &LayoutParams, geo: &GridGeometry) -> Result<XmlNode, NodeError> {
    let x = geo.half_width - params.inset;
    let y = geo.half_length - params.inset;
    let corners = [("H1", x, y), ("H2", -x, y), ("H3", x, -y), ("H4", -x, -y)];

    let mut elements = XmlNode::new("elements");
    elements.extend_children(corners.iter().map(|&(name, x, y)| {
        Element {
            name: name.to_string(),
            library: MOUNT_HOLE_LIBRARY.to_string(),
            package: MOUNT_HOLE_PACKAGE.to_string(),
            value: MOUNT_HOLE_VALUE.to_string(),
            x,
            y,
        }
        .into()
    }))?;
    Ok(elements)
}

/// The board's `plain` element: bottom mask opening, outline, badge box, label and logo
pub fn plain(params: &LayoutParams, geo: &GridGeometry) -> Result<XmlNode, NodeError> {
    let (hw, hl) = (geo.half_width, geo.half_length);
    let mut plain = XmlNode::new("plain");

    // no solder mask on the back
    plain.add_child(
        Rectangle {
            x1: -hw,
            y1: -hl,
            x2: hw,
            y2: hl,
            layer: B_STOP,
        }
        .into(),
    )?;

    plain.extend_children(outline(params, geo))?;

    // box for the badge owner's name
    let box_half_width = hw - (params.inset + 3.0);
    let label_x = if box_half_width > 0.0 {
        plain.add_child(
            Rectangle {
                x1: -box_half_width,
                y1: hl - 0.5,
                x2: box_half_width,
                y2: hl - params.inset - 1.5,
                layer: T_PLACE,
            }
            .into(),
        )?;
        -(box_half_width - 2.0)
    } else {
        warn!(
            "board width {} mm leaves no room for the badge box, omitting it",
            2.0 * hw
        );
        -(hw - params.inset)
    };

    plain.add_child(
        Text {
            x: label_x,
            y: -hl + 1.0,
            size: LABEL_SIZE,
            layer: T_PLACE,
            value: params.label.clone(),
        }
        .into(),
    )?;

    plain.add_child(logo(hl)?)?;
    Ok(plain)
}

/// Chevron-shaped logo polygon hanging below the badge box
fn logo(half_length: f64) -> Result<XmlNode, NodeError> {
    let width = 26.6 * LOGO_SCALE;
    let height = 10.1 * LOGO_SCALE;
    let flex = 6.1 * LOGO_SCALE;
    let top = half_length - 6.0;
    let half = width / 2.0;

    let vertices = [
        Vertex { x: -half, y: top },
        Vertex { x: 0.0, y: top - flex },
        Vertex { x: half, y: top },
        Vertex { x: half, y: top - height },
        Vertex { x: 0.0, y: top - (height + flex) },
        Vertex { x: -half, y: top - height },
    ];

    let mut polygon = XmlNode::new("polygon")
        .with_attribute("layer", T_PLACE)
        .with_attribute("width", LOGO_WIDTH);
    polygon.extend_children(vertices.into_iter().map(XmlNode::from))?;
    Ok(polygon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::params::GridSettings;
    use crate::xml_node::AttrValue;

    fn reference() -> (LayoutParams, GridGeometry) {
        let params = LayoutParams::default();
        let geo = GridGeometry::compute(&params, &GridSettings::for_orientation(true)).unwrap();
        (params, geo)
    }

    fn number(node: &XmlNode, key: &str) -> f64 {
        match node.attribute(key) {
            Some(AttrValue::Number(value)) => *value,
            other => panic!("attribute {} is {:?}", key, other),
        }
    }

    #[test]
    fn test_corner_arcs_have_inset_radius() {
        let (params, geo) = reference();
        let arcs: Vec<XmlNode> = outline(&params, &geo)
            .into_iter()
            .filter(|n| n.attribute("curve").is_some())
            .collect();
        assert_eq!(arcs.len(), 4);

        for arc in &arcs {
            assert_eq!(number(arc, "curve"), 90.0);
            assert_eq!(arc.attribute("layer"), Some(&AttrValue::Integer(20)));
            // a 90 degree arc of radius r has a chord of r * sqrt(2)
            let chord = (number(arc, "x2") - number(arc, "x1")).hypot(number(arc, "y2") - number(arc, "y1"));
            assert!((chord - params.inset * 2f64.sqrt()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_edges_stop_at_the_corner_arcs() {
        let (params, geo) = reference();
        let edges: Vec<XmlNode> = outline(&params, &geo)
            .into_iter()
            .filter(|n| n.attribute("curve").is_none())
            .collect();
        assert_eq!(edges.len(), 4);

        let lengths: Vec<f64> = edges
            .iter()
            .map(|e| (number(e, "x2") - number(e, "x1")).hypot(number(e, "y2") - number(e, "y1")))
            .collect();
        assert_eq!(lengths, vec![46.0, 25.0, 46.0, 25.0]);
    }

    #[test]
    fn test_mounting_holes_at_corners() {
        let (params, geo) = reference();
        let elements = mounting_holes(&params, &geo).unwrap();
        let positions: Vec<(f64, f64)> = elements
            .children()
            .iter()
            .map(|e| (number(e, "x"), number(e, "y")))
            .collect();
        assert_eq!(positions, vec![(23.0, 12.5), (-23.0, 12.5), (23.0, -12.5), (-23.0, -12.5)]);
        for element in elements.children() {
            assert_eq!(element.attribute("package"), Some(&AttrValue::from("3,0")));
        }
    }

    #[test]
    fn test_plain_contents() {
        let (params, geo) = reference();
        let plain = plain(&params, &geo).unwrap();
        assert_eq!(plain.children_named("rectangle").count(), 2);
        assert_eq!(plain.children_named("wire").count(), 8);

        let label = plain.find_child("text").unwrap();
        assert_eq!(label.text(), Some("Brunswick Hackerspace"));

        let polygon = plain.find_child("polygon").unwrap();
        assert_eq!(polygon.children().len(), 6);
    }

    #[test]
    fn test_narrow_board_omits_badge_box() {
        let params = LayoutParams {
            board_width: 12.0,
            board_length: 54.0,
            inset: 4.0,
            horizontal: false,
            ..LayoutParams::default()
        };
        let geo = GridGeometry::compute(&params, &GridSettings::for_orientation(false)).unwrap();
        let plain = plain(&params, &geo).unwrap();

        // only the bStop rectangle remains
        let rectangles: Vec<&XmlNode> = plain.children_named("rectangle").collect();
        assert_eq!(rectangles.len(), 1);
        assert_eq!(rectangles[0].attribute("layer"), Some(&AttrValue::Integer(30)));

        // label starts at the mounting hole column
        let label = plain.find_child("text").unwrap();
        assert_eq!(number(label, "x"), -2.0);
    }

    #[test]
    fn test_badge_box_spans_inside_mounting_holes() {
        let (params, geo) = reference();
        let plain = plain(&params, &geo).unwrap();
        let badge = plain
            .children_named("rectangle")
            .find(|r| r.attribute("layer") == Some(&AttrValue::Integer(21)))
            .unwrap();
        assert_eq!(number(badge, "x1"), -20.0);
        assert_eq!(number(badge, "x2"), 20.0);
        assert_eq!(number(plain.find_child("text").unwrap(), "x"), -18.0);
    }
}
