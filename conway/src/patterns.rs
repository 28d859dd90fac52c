// patterns.rs - Built-in preset patterns
//
// Cells are absolute (row, col) positions on the default 64x96 canvas.

use crate::error::FormatError;
use crate::grid::Grid;
use crate::persist;

pub struct Pattern {
    pub id: &'static str,
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Library order; the UI binds keys 1-9 and 0 to the first ten entries.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        id: "gosper-glider-gun",
        name: "Gosper Glider Gun",
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
    Pattern {
        id: "glider-reflector",
        name: "Glider Reflector",
        cells: &[
            // Glider heading south-east
            (25, 38), (26, 39), (27, 37), (27, 38), (27, 39),
            // Pentadecathlon; sends the glider back the way it came
            (30, 52), (30, 57),
            (31, 50), (31, 51), (31, 53), (31, 54), (31, 55), (31, 56), (31, 58), (31, 59),
            (32, 52), (32, 57),
        ],
    },
    Pattern {
        id: "lwss",
        name: "Lightweight Spaceship",
        cells: &[
            (30, 6), (30, 9), (31, 10), (32, 6), (32, 10),
            (33, 7), (33, 8), (33, 9), (33, 10),
        ],
    },
    Pattern {
        id: "mwss",
        name: "Middleweight Spaceship",
        cells: &[
            (30, 8), (31, 6), (31, 10), (32, 11), (33, 6), (33, 11),
            (34, 7), (34, 8), (34, 9), (34, 10), (34, 11),
        ],
    },
    Pattern {
        id: "hwss",
        name: "Heavyweight Spaceship",
        cells: &[
            (30, 8), (30, 9), (31, 6), (31, 11), (32, 12), (33, 6), (33, 12),
            (34, 7), (34, 8), (34, 9), (34, 10), (34, 11), (34, 12),
        ],
    },
    Pattern {
        id: "glider",
        name: "Glider",
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
    Pattern {
        id: "blinker",
        name: "Blinker",
        cells: &[(32, 47), (32, 48), (32, 49)],
    },
    Pattern {
        id: "toad",
        name: "Toad",
        cells: &[(31, 48), (31, 49), (31, 50), (32, 47), (32, 48), (32, 49)],
    },
    Pattern {
        id: "beacon",
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        id: "pulsar",
        name: "Pulsar",
        cells: &[
            // Top half
            (26, 44), (26, 45), (26, 46), (26, 50), (26, 51), (26, 52),
            (28, 42), (28, 47), (28, 49), (28, 54),
            (29, 42), (29, 47), (29, 49), (29, 54),
            (30, 42), (30, 47), (30, 49), (30, 54),
            (31, 44), (31, 45), (31, 46), (31, 50), (31, 51), (31, 52),
            // Bottom half (mirrored)
            (33, 44), (33, 45), (33, 46), (33, 50), (33, 51), (33, 52),
            (34, 42), (34, 47), (34, 49), (34, 54),
            (35, 42), (35, 47), (35, 49), (35, 54),
            (36, 42), (36, 47), (36, 49), (36, 54),
            (38, 44), (38, 45), (38, 46), (38, 50), (38, 51), (38, 52),
        ],
    },
    Pattern {
        id: "r-pentomino",
        name: "R-pentomino",
        cells: &[(31, 48), (31, 49), (32, 47), (32, 48), (33, 48)],
    },
];

/// Look up a preset by identifier.
pub fn find(id: &str) -> Result<&'static Pattern, FormatError> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.id == id)
        .ok_or_else(|| FormatError::UnknownPreset(id.to_owned()))
}

impl Pattern {
    /// Height and width of the smallest box from the origin holding every cell.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        let (need_rows, need_cols) = self.extent();
        need_rows <= rows && need_cols <= cols
    }

    /// Place the pattern on an all-dead `rows x cols` grid.
    ///
    /// The rest of the grid is padded with dead cells. A pattern that does
    /// not fit is rejected rather than clipped.
    pub fn to_grid(&self, rows: usize, cols: usize) -> Result<Grid, FormatError> {
        Grid::with_alive(rows, cols, self.cells).map_err(|_| FormatError::PresetDoesNotFit {
            id: self.id,
            rows,
            cols,
        })
    }

    /// The pattern in the persisted JSON format.
    pub fn to_json(&self, rows: usize, cols: usize) -> Result<String, FormatError> {
        persist::to_json(&self.to_grid(rows, cols)?)
    }
}
