//! Layout inputs and the grid geometry derived from them

use crate::error::BoardError;

/// Standard 0.1 inch hole spacing in millimeters
pub const PITCH: f64 = 0.1 * 25.4;

pub const DEFAULT_BOARD_WIDTH: f64 = 54.0;
pub const DEFAULT_BOARD_LENGTH: f64 = 33.0;
pub const DEFAULT_INSET: f64 = 4.0;
pub const DEFAULT_LABEL: &str = "Brunswick Hackerspace";

/// Upper bound on rows, pads per group and any other per-board pad count
pub const MAX_GRID_COUNT: usize = 10_000;

/// Board dimensions and orientation, all in millimeters
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub board_width: f64,
    pub board_length: f64,
    /// Mounting hole distance from each edge, also the corner radius
    pub inset: f64,
    /// Main hole grid runs along the width when set, along the length otherwise
    pub horizontal: bool,
    /// Text printed on the silkscreen near the bottom edge
    pub label: String,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            board_width: DEFAULT_BOARD_WIDTH,
            board_length: DEFAULT_BOARD_LENGTH,
            inset: DEFAULT_INSET,
            horizontal: true,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

/// Constants of the hole grid. The reference values differ by orientation,
/// see [`GridSettings::for_orientation`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    pub pitch: f64,
    /// Pads linked together in each main-grid group
    pub holes_per_group: usize,
    /// Power/ground rails
    pub bus_count: usize,
    /// Gap between the two main chains, in pitches
    pub gap: f64,
    /// Clearance kept between the inset line and the first row, in millimeters
    pub edge_clearance: f64,
    /// Main-grid rows placed beyond the computed row count
    pub extra_rows: usize,
    /// Columns of loose prototyping pads on each side
    pub proto_columns: usize,
    /// Pads per prototyping column (horizontal layout only)
    pub proto_ranks: usize,
    /// Rows dropped from the bus chains and vertical prototyping columns
    pub bus_trim: usize,
}

impl GridSettings {
    pub fn for_orientation(horizontal: bool) -> Self {
        if horizontal {
            GridSettings {
                pitch: PITCH,
                holes_per_group: 5,
                bus_count: 2,
                gap: 1.0,
                edge_clearance: 3.0,
                extra_rows: 0,
                proto_columns: 3,
                proto_ranks: 6,
                bus_trim: 0,
            }
        } else {
            GridSettings {
                pitch: PITCH,
                holes_per_group: 5,
                bus_count: 2,
                gap: 1.0,
                edge_clearance: 1.5,
                extra_rows: 1,
                proto_columns: 2,
                proto_ranks: 6,
                bus_trim: 2,
            }
        }
    }
}

/// Values derived once per run from [`LayoutParams`] and [`GridSettings`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub half_width: f64,
    pub half_length: f64,
    /// Usable length along the primary axis
    pub span: f64,
    pub row_count: usize,
    /// Rows of main-grid groups, `row_count + extra_rows`
    pub main_rows: usize,
    /// `(row_count - 1) / 2`, kept fractional so an even row count still centers
    pub start_row: f64,
    /// Distance from the board center line to the outermost pad of a main chain
    pub chain_offset: f64,
}

impl GridGeometry {
    /// Validates the inputs and derives the grid. Fails before anything is built.
    pub fn compute(params: &LayoutParams, settings: &GridSettings) -> Result<Self, BoardError> {
        require_positive("board_width", params.board_width)?;
        require_positive("board_length", params.board_length)?;
        require_positive("inset", params.inset)?;
        require_positive("pitch", settings.pitch)?;
        require_positive("edge_clearance", settings.edge_clearance)?;
        require_non_negative("gap", settings.gap)?;

        let smaller = params.board_width.min(params.board_length);
        if 2.0 * params.inset > smaller {
            return Err(BoardError::invalid(
                "inset",
                format!(
                    "{} mm exceeds half the smaller board dimension ({} mm)",
                    params.inset, smaller
                ),
            ));
        }
        if settings.holes_per_group == 0 {
            return Err(BoardError::invalid("holes_per_group", "must be at least 1"));
        }
        for (parameter, count) in [
            ("holes_per_group", settings.holes_per_group),
            ("bus_count", settings.bus_count),
            ("extra_rows", settings.extra_rows),
            ("proto_columns", settings.proto_columns),
            ("proto_ranks", settings.proto_ranks),
        ] {
            require_bounded(parameter, count)?;
        }

        let primary = if params.horizontal {
            params.board_width
        } else {
            params.board_length
        };
        let span = primary - 2.0 * (params.inset + settings.edge_clearance);
        if span <= 0.0 {
            return Err(BoardError::invalid(
                "inset",
                format!("usable span {} mm is not positive", span),
            ));
        }

        let rows = (span / settings.pitch).floor();
        if rows > MAX_GRID_COUNT as f64 {
            return Err(BoardError::invalid(
                "pitch",
                format!(
                    "usable span {} mm holds {} rows, more than {}",
                    span, rows, MAX_GRID_COUNT
                ),
            ));
        }
        let row_count = rows as usize;
        if row_count == 0 {
            return Err(BoardError::invalid(
                "pitch",
                format!("usable span {} mm is shorter than one pitch", span),
            ));
        }
        if row_count <= settings.bus_trim {
            return Err(BoardError::invalid(
                "bus_trim",
                format!(
                    "trimming {} rows leaves no bus pads out of {}",
                    settings.bus_trim, row_count
                ),
            ));
        }

        let main_rows = row_count
            .checked_add(settings.extra_rows)
            .filter(|rows| *rows <= MAX_GRID_COUNT)
            .ok_or_else(|| {
                BoardError::invalid(
                    "extra_rows",
                    format!("{} rows plus {} extra exceeds {}", row_count, settings.extra_rows, MAX_GRID_COUNT),
                )
            })?;

        Ok(GridGeometry {
            half_width: params.board_width / 2.0,
            half_length: params.board_length / 2.0,
            span,
            row_count,
            main_rows,
            start_row: (row_count as f64 - 1.0) / 2.0,
            chain_offset: (settings.holes_per_group as f64 + settings.gap / 2.0) * settings.pitch,
        })
    }
}

fn require_positive(parameter: &'static str, value: f64) -> Result<(), BoardError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BoardError::invalid(
            parameter,
            format!("{} is not a positive length", value),
        ));
    }
    Ok(())
}

fn require_bounded(parameter: &'static str, count: usize) -> Result<(), BoardError> {
    if count > MAX_GRID_COUNT {
        return Err(BoardError::invalid(
            parameter,
            format!("{} is more than {}", count, MAX_GRID_COUNT),
        ));
    }
    Ok(())
}

fn require_non_negative(parameter: &'static str, value: f64) -> Result<(), BoardError> {
    if !value.is_finite() || value < 0.0 {
        return Err(BoardError::invalid(
            parameter,
            format!("{} must be zero or more", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(params: &LayoutParams) -> Result<GridGeometry, BoardError> {
        GridGeometry::compute(params, &GridSettings::for_orientation(params.horizontal))
    }

    #[test]
    fn test_reference_board_geometry() {
        let geo = geometry(&LayoutParams::default()).unwrap();
        assert_eq!(geo.half_width, 27.0);
        assert_eq!(geo.half_length, 16.5);
        assert_eq!(geo.span, 40.0);
        assert_eq!(geo.row_count, 15);
        assert_eq!(geo.start_row, 7.0);
        assert!((geo.chain_offset - 5.5 * PITCH).abs() < 1e-9);
    }

    #[test]
    fn test_even_row_count_keeps_half_row_offset() {
        // span 41.0 / 2.54 = 16.14 -> 16 rows, centered at 7.5
        let params = LayoutParams {
            board_width: 55.0,
            ..LayoutParams::default()
        };
        let geo = geometry(&params).unwrap();
        assert_eq!(geo.row_count, 16);
        assert_eq!(geo.start_row, 7.5);
    }

    #[test]
    fn test_vertical_uses_length() {
        let params = LayoutParams {
            horizontal: false,
            ..LayoutParams::default()
        };
        let geo = geometry(&params).unwrap();
        assert_eq!(geo.span, 33.0 - 2.0 * 5.5);
        assert_eq!(geo.row_count, 8);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        for (width, length, inset) in [(0.0, 33.0, 4.0), (54.0, -1.0, 4.0), (54.0, 33.0, 0.0), (f64::NAN, 33.0, 4.0)] {
            let params = LayoutParams {
                board_width: width,
                board_length: length,
                inset,
                ..LayoutParams::default()
            };
            assert!(matches!(geometry(&params), Err(BoardError::InvalidParameter { .. })));
        }
    }

    #[test]
    fn test_rejects_oversized_inset() {
        let params = LayoutParams {
            inset: 17.0,
            ..LayoutParams::default()
        };
        match geometry(&params) {
            Err(BoardError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "inset"),
            other => panic!("expected inset rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_span() {
        // inset fits the board but leaves no room for the grid
        let params = LayoutParams {
            board_width: 20.0,
            board_length: 20.0,
            inset: 8.0,
            ..LayoutParams::default()
        };
        assert!(matches!(geometry(&params), Err(BoardError::InvalidParameter { .. })));
    }

    #[test]
    fn test_rejects_span_shorter_than_pitch() {
        let params = LayoutParams {
            board_width: 16.0,
            board_length: 16.0,
            inset: 4.0,
            ..LayoutParams::default()
        };
        // span = 16 - 14 = 2.0 < 2.54
        match geometry(&params) {
            Err(BoardError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "pitch"),
            other => panic!("expected pitch rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let huge = LayoutParams {
            board_length: 1e30,
            horizontal: false,
            ..LayoutParams::default()
        };
        match geometry(&huge) {
            Err(BoardError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "pitch"),
            other => panic!("expected pitch rejection, got {:?}", other),
        }

        let tiny_pitch = GridSettings {
            pitch: 1e-9,
            ..GridSettings::for_orientation(true)
        };
        assert!(matches!(
            GridGeometry::compute(&LayoutParams::default(), &tiny_pitch),
            Err(BoardError::InvalidParameter { parameter: "pitch", .. })
        ));

        for settings in [
            GridSettings { extra_rows: usize::MAX, ..GridSettings::for_orientation(true) },
            GridSettings { extra_rows: MAX_GRID_COUNT, ..GridSettings::for_orientation(true) },
            GridSettings { holes_per_group: MAX_GRID_COUNT + 1, ..GridSettings::for_orientation(true) },
            GridSettings { proto_ranks: usize::MAX, ..GridSettings::for_orientation(true) },
        ] {
            assert!(matches!(
                GridGeometry::compute(&LayoutParams::default(), &settings),
                Err(BoardError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_main_rows_include_extra_rows() {
        let params = LayoutParams {
            horizontal: false,
            ..LayoutParams::default()
        };
        let geo = geometry(&params).unwrap();
        assert_eq!(geo.main_rows, geo.row_count + 1);
    }

    #[test]
    fn test_rejects_zero_edge_clearance() {
        let settings = GridSettings {
            edge_clearance: 0.0,
            ..GridSettings::for_orientation(true)
        };
        assert!(matches!(
            GridGeometry::compute(&LayoutParams::default(), &settings),
            Err(BoardError::InvalidParameter { parameter: "edge_clearance", .. })
        ));
    }

    #[test]
    fn test_rejects_bus_trim_consuming_all_rows() {
        let params = LayoutParams {
            board_width: 20.0,
            board_length: 18.0,
            inset: 4.0,
            horizontal: false,
            ..LayoutParams::default()
        };
        // span = 18 - 11 = 7.0 -> 2 rows, trim 2
        match geometry(&params) {
            Err(BoardError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "bus_trim"),
            other => panic!("expected bus_trim rejection, got {:?}", other),
        }
    }
}
