//! Signal groups: chains of vias joined by traces, one net each

use crate::eagle::layers::BOTTOM;
use crate::eagle::{Via, Wire};
use crate::error::NodeError;
use crate::xml_node::XmlNode;

/// Hands out net names `N$1`, `N$2`, ... for one generation run
#[derive(Debug)]
pub struct NetNamer {
    next: u32,
}

impl NetNamer {
    pub fn new() -> Self {
        NetNamer { next: 1 }
    }

    pub fn next_name(&mut self) -> String {
        let name = format!("N${}", self.next);
        self.next += 1;
        name
    }

    /// Number of names handed out so far
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for NetNamer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copper used for every pad and trace on the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    pub layer: u16,
    pub width: f64,
    pub extent: &'static str,
    pub drill: f64,
    pub diameter: f64,
}

pub const PROTO_TRACE: TraceStyle = TraceStyle {
    layer: BOTTOM,
    width: 0.4064,
    extent: "1-16",
    drill: 1.2,
    diameter: 1.9304,
};

/// `holes` pads starting at (x, y), each `(dx, dy)` from the previous one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chain {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub holes: usize,
}

impl Chain {
    /// A lone pad, its own one-via net
    pub fn pad(x: f64, y: f64) -> Self {
        Chain {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            holes: 1,
        }
    }
}

/// Accumulates the `signals` element, naming each net in emission order
#[derive(Debug)]
pub struct SignalSet {
    namer: NetNamer,
    style: TraceStyle,
    node: XmlNode,
    vias: usize,
    wires: usize,
    reach_x: f64,
    reach_y: f64,
}

impl SignalSet {
    pub fn new(style: TraceStyle) -> Self {
        SignalSet {
            namer: NetNamer::new(),
            style,
            node: XmlNode::new("signals"),
            vias: 0,
            wires: 0,
            reach_x: 0.0,
            reach_y: 0.0,
        }
    }

    /// Emits one net for `chain`: a via per hole, and a trace back to the
    /// previous via for every hole after the first.
    pub fn add_chain(&mut self, chain: Chain) -> Result<(), NodeError> {
        let mut signal = XmlNode::new("signal").with_attribute("name", self.namer.next_name());

        for hole in 0..chain.holes {
            let x = chain.x + hole as f64 * chain.dx;
            let y = chain.y + hole as f64 * chain.dy;
            signal.add_child(
                Via {
                    x,
                    y,
                    extent: self.style.extent.to_string(),
                    drill: self.style.drill,
                    diameter: self.style.diameter,
                }
                .into(),
            )?;
            self.vias += 1;
            self.reach_x = self.reach_x.max(x.abs());
            self.reach_y = self.reach_y.max(y.abs());

            if hole != 0 {
                signal.add_child(
                    Wire {
                        x1: x,
                        y1: y,
                        x2: x - chain.dx,
                        y2: y - chain.dy,
                        width: self.style.width,
                        layer: self.style.layer,
                    }
                    .into(),
                )?;
                self.wires += 1;
            }
        }

        self.node.add_child(signal)
    }

    pub fn add_pad(&mut self, x: f64, y: f64) -> Result<(), NodeError> {
        self.add_chain(Chain::pad(x, y))
    }

    pub fn net_count(&self) -> usize {
        self.namer.issued() as usize
    }

    pub fn via_count(&self) -> usize {
        self.vias
    }

    pub fn wire_count(&self) -> usize {
        self.wires
    }

    /// Farthest pad center from the board center on each axis
    pub fn reach(&self) -> (f64, f64) {
        (self.reach_x, self.reach_y)
    }

    pub fn style(&self) -> &TraceStyle {
        &self.style
    }

    pub fn into_node(self) -> XmlNode {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml_node::AttrValue;

    #[test]
    fn test_net_names_are_sequential() {
        let mut namer = NetNamer::new();
        assert_eq!(namer.issued(), 0);
        assert_eq!(namer.next_name(), "N$1");
        assert_eq!(namer.next_name(), "N$2");
        assert_eq!(namer.next_name(), "N$3");
        assert_eq!(namer.issued(), 3);
    }

    #[test]
    fn test_chain_links_each_via_to_previous() {
        let mut signals = SignalSet::new(PROTO_TRACE);
        signals
            .add_chain(Chain {
                x: 17.78,
                y: 13.97,
                dx: 0.0,
                dy: -2.54,
                holes: 5,
            })
            .unwrap();

        assert_eq!(signals.via_count(), 5);
        assert_eq!(signals.wire_count(), 4);
        let node = signals.into_node();
        let signal = &node.children()[0];
        assert_eq!(signal.attribute("name"), Some(&AttrValue::from("N$1")));

        let names: Vec<&str> = signal.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["via", "via", "wire", "via", "wire", "via", "wire", "via", "wire"]);

        // second via and the trace back to the first
        let wire = &signal.children()[2];
        assert_eq!(wire.attribute("x1"), Some(&AttrValue::Number(17.78)));
        assert_eq!(wire.attribute("y2").map(|v| v.to_string()), Some("13.97".to_string()));
        assert_eq!(wire.attribute("layer"), Some(&AttrValue::Integer(16)));
    }

    #[test]
    fn test_single_pads_are_separate_nets() {
        let mut signals = SignalSet::new(PROTO_TRACE);
        signals.add_pad(1.0, 2.0).unwrap();
        signals.add_pad(-1.0, 2.0).unwrap();

        assert_eq!(signals.net_count(), 2);
        assert_eq!(signals.wire_count(), 0);
        assert_eq!(signals.reach(), (1.0, 2.0));
        let node = signals.into_node();
        assert_eq!(node.children()[1].attribute("name"), Some(&AttrValue::from("N$2")));
        assert_eq!(node.children()[1].children().len(), 1);
    }
}
