//! Board layout generation
//!
//! Turns a handful of board dimensions into a complete EAGLE document tree.
//! The run is one-directional: geometry is computed, nodes are built and
//! attached, and nothing is read back from the tree afterwards.
//!
//! # Submodules
//! - `params` - Inputs, grid constants and validated derived geometry
//! - `signals` - Net naming and via/trace chains
//! - `outline` - Outline, mounting holes and silkscreen decoration

pub mod outline;
pub mod params;
pub mod signals;

use log::{debug, info, warn};

use crate::eagle::{grid_node, holes_library, layers_node, EAGLE_VERSION};
use crate::error::BoardError;
use crate::xml_node::XmlNode;

pub use params::{GridGeometry, GridSettings, LayoutParams, PITCH};
pub use signals::{Chain, NetNamer, SignalSet, TraceStyle, PROTO_TRACE};

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct Board {
    /// Root `eagle` element
    pub document: XmlNode,
    pub stats: LayoutStats,
}

/// Counts gathered while placing pads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStats {
    pub row_count: usize,
    pub start_row: f64,
    pub nets: usize,
    pub main_grid_vias: usize,
    pub bus_vias: usize,
    pub proto_vias: usize,
    pub wires: usize,
    /// Farthest pad edge from the board center, (x, y)
    pub pad_reach: (f64, f64),
}

impl LayoutStats {
    pub fn total_vias(&self) -> usize {
        self.main_grid_vias + self.bus_vias + self.proto_vias
    }
}

/// Generates a board with the reference grid constants for its orientation
pub fn generate_default_board(params: &LayoutParams) -> Result<Board, BoardError> {
    generate_board(params, &GridSettings::for_orientation(params.horizontal))
}

/// Generates the full document tree for one board.
///
/// All parameters are validated before any node is created, so a rejected
/// board never yields partial output.
pub fn generate_board(params: &LayoutParams, settings: &GridSettings) -> Result<Board, BoardError> {
    let geo = GridGeometry::compute(params, settings)?;
    debug!(
        "grid: span={:.3}mm rows={} start_row={} chain_offset={:.4}mm horizontal={}",
        geo.span, geo.row_count, geo.start_row, geo.chain_offset, params.horizontal
    );

    let mut signals = SignalSet::new(PROTO_TRACE);

    place_main_chains(&mut signals, params, settings, &geo)?;
    let main_grid_vias = signals.via_count();

    place_bus_chains(&mut signals, params, settings, &geo)?;
    let bus_vias = signals.via_count() - main_grid_vias;

    place_proto_pads(&mut signals, params, settings, &geo)?;
    let proto_vias = signals.via_count() - main_grid_vias - bus_vias;

    let pad_radius = signals.style().diameter / 2.0;
    let (reach_x, reach_y) = signals.reach();
    let pad_reach = (reach_x + pad_radius, reach_y + pad_radius);
    if pad_reach.0 > geo.half_width || pad_reach.1 > geo.half_length {
        warn!(
            "pads reach ({:.3}, {:.3})mm from center, past the {}x{}mm board edge",
            pad_reach.0,
            pad_reach.1,
            params.board_width,
            params.board_length
        );
    }

    let stats = LayoutStats {
        row_count: geo.row_count,
        start_row: geo.start_row,
        nets: signals.net_count(),
        main_grid_vias,
        bus_vias,
        proto_vias,
        wires: signals.wire_count(),
        pad_reach,
    };

    let mut board = XmlNode::new("board");
    board.add_child(outline::plain(params, &geo)?)?;
    board.add_child(XmlNode::new("libraries").with_child(holes_library()?)?)?;
    board.add_child(outline::mounting_holes(params, &geo)?)?;
    board.add_child(signals.into_node())?;

    let mut drawing = XmlNode::new("drawing");
    drawing.add_child(grid_node())?;
    drawing.add_child(layers_node()?)?;
    drawing.add_child(board)?;

    let document = XmlNode::new("eagle")
        .with_attribute("version", EAGLE_VERSION)
        .with_child(drawing)?;

    info!(
        "generated {}x{}mm board: {} nets, {} vias ({} grid, {} bus, {} proto), {} traces",
        params.board_width,
        params.board_length,
        stats.nets,
        stats.total_vias(),
        stats.main_grid_vias,
        stats.bus_vias,
        stats.proto_vias,
        stats.wires
    );

    Ok(Board { document, stats })
}

/// Two parallel chains of linked pads, one group per row on each side of the
/// center line, each group stepping from the outside toward the center.
fn place_main_chains(
    signals: &mut SignalSet,
    params: &LayoutParams,
    settings: &GridSettings,
    geo: &GridGeometry,
) -> Result<(), BoardError> {
    let pitch = settings.pitch;
    let holes = settings.holes_per_group;
    let offset = geo.chain_offset;
    let mut along = geo.start_row * pitch;

    for _ in 0..geo.main_rows {
        if params.horizontal {
            signals.add_chain(Chain { x: along, y: offset, dx: 0.0, dy: -pitch, holes })?;
            signals.add_chain(Chain { x: along, y: -offset, dx: 0.0, dy: pitch, holes })?;
        } else {
            signals.add_chain(Chain { x: -offset, y: along, dx: pitch, dy: 0.0, holes })?;
            signals.add_chain(Chain { x: offset, y: along, dx: -pitch, dy: 0.0, holes })?;
        }
        along -= pitch;
    }
    Ok(())
}

/// Power rails running the length of the grid. Horizontal boards put them
/// between the two main chains, vertical boards put a pair outside each chain.
fn place_bus_chains(
    signals: &mut SignalSet,
    params: &LayoutParams,
    settings: &GridSettings,
    geo: &GridGeometry,
) -> Result<(), BoardError> {
    let pitch = settings.pitch;
    let holes = geo.row_count - settings.bus_trim;
    let along = bus_start(settings, geo);

    for count in 0..settings.bus_count {
        if params.horizontal {
            let y = pitch / 2.0 - pitch * count as f64;
            signals.add_chain(Chain { x: along, y, dx: -pitch, dy: 0.0, holes })?;
        } else {
            let x = geo.chain_offset + (settings.bus_count - count) as f64 * pitch;
            signals.add_chain(Chain { x: -x, y: along, dx: 0.0, dy: -pitch, holes })?;
            signals.add_chain(Chain { x, y: along, dx: 0.0, dy: -pitch, holes })?;
        }
    }
    Ok(())
}

/// Loose single-pad nets flanking the grid on both sides
fn place_proto_pads(
    signals: &mut SignalSet,
    params: &LayoutParams,
    settings: &GridSettings,
    geo: &GridGeometry,
) -> Result<(), BoardError> {
    let pitch = settings.pitch;

    for column in 0..settings.proto_columns {
        if params.horizontal {
            // columns just past the last grid row, ranks centered on the board
            let x = geo.start_row * pitch + (settings.proto_columns - column) as f64 * pitch;
            let top = (settings.proto_ranks as f64 - 1.0) / 2.0 * pitch;
            for rank in 0..settings.proto_ranks {
                let y = top - rank as f64 * pitch;
                signals.add_pad(x, y)?;
                signals.add_pad(-x, y)?;
            }
        } else {
            let x = geo.chain_offset + (settings.bus_count + column + 1) as f64 * pitch;
            let top = bus_start(settings, geo);
            for row in 0..geo.row_count - settings.bus_trim {
                let y = top - row as f64 * pitch;
                signals.add_pad(-x, y)?;
                signals.add_pad(x, y)?;
            }
        }
    }
    Ok(())
}

/// First bus pad along the primary axis, centered on the trimmed rows
fn bus_start(settings: &GridSettings, geo: &GridGeometry) -> f64 {
    (geo.start_row - settings.bus_trim as f64 / 2.0) * settings.pitch
}
