//! The `holes` library and its 3.0 mm mounting hole package

use crate::eagle::layers::{
    B_KEEPOUT, B_RESTRICT, DOCUMENT, T_DOCU, T_KEEPOUT, T_PLACE, T_RESTRICT, V_RESTRICT,
};
use crate::eagle::primitives::{Arc, ArcCap, Circle, Text};
use crate::error::NodeError;
use crate::xml_node::XmlNode;

pub const MOUNT_HOLE_LIBRARY: &str = "holes";
pub const MOUNT_HOLE_PACKAGE: &str = "3,0";
pub const MOUNT_HOLE_VALUE: &str = "MOUNT-HOLE3.0";

/// Drill diameter of the mounting hole in millimeters
pub const MOUNT_HOLE_DRILL: f64 = 3.0;

/// `library` element containing the mounting hole package
pub fn holes_library() -> Result<XmlNode, NodeError> {
    let packages = XmlNode::new("packages").with_child(mount_hole_package()?)?;
    XmlNode::new("library")
        .with_attribute("name", MOUNT_HOLE_LIBRARY)
        .with_child(packages)
}

fn mount_hole_package() -> Result<XmlNode, NodeError> {
    let mut package = XmlNode::new("package").with_attribute("name", MOUNT_HOLE_PACKAGE);
    package.add_child(XmlNode::text_element(
        "description",
        "<b>MOUNTING HOLE</b> 3.0 mm with drill center",
    ))?;

    // Documentation marks: two flat-capped quarter arcs and a center dot
    let arc_offset = 2.159;
    package.add_child(
        Arc {
            x1: -arc_offset,
            y1: 0.0,
            x2: 0.0,
            y2: -arc_offset,
            width: 2.4892,
            layer: T_DOCU,
            curve: 90.0,
            cap: Some(ArcCap::Flat),
        }
        .into(),
    )?;
    package.add_child(
        Arc {
            x1: 0.0,
            y1: arc_offset,
            x2: arc_offset,
            y2: 0.0,
            width: 2.4892,
            layer: T_DOCU,
            curve: -90.0,
            cap: Some(ArcCap::Flat),
        }
        .into(),
    )?;
    package.add_child(centered_circle(T_DOCU, 0.4572, 0.762))?;

    package.add_child(centered_circle(T_PLACE, 0.1524, 3.429))?;
    package.add_child(centered_circle(T_PLACE, 2.032, 1.6))?;

    // Keep copper and routing away from the screw head
    for layer in [T_KEEPOUT, B_KEEPOUT, T_RESTRICT, B_RESTRICT, V_RESTRICT] {
        package.add_child(centered_circle(layer, 2.032, 3.048))?;
    }

    package.add_child(
        Text {
            x: -1.27,
            y: -3.81,
            size: 1.27,
            layer: DOCUMENT,
            value: MOUNT_HOLE_PACKAGE.to_string(),
        }
        .into(),
    )?;
    package.add_child(
        XmlNode::new("hole")
            .with_attribute("x", 0.0)
            .with_attribute("y", 0.0)
            .with_attribute("drill", MOUNT_HOLE_DRILL),
    )?;

    Ok(package)
}

fn centered_circle(layer: u16, width: f64, radius: f64) -> XmlNode {
    Circle {
        x: 0.0,
        y: 0.0,
        radius,
        width,
        layer,
    }
    .into()
}
