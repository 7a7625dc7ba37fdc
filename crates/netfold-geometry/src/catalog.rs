//! The fixed catalog of net templates.
//!
//! Each template places six positions on a small grid. Position order is
//! significant: within a family, every template is indexed so that folding it
//! yields the family's [`PositionTopology`](crate::PositionTopology).

use serde::Serialize;

use crate::ShapeFamily;
use crate::fold::{FoldError, fold_placements, opposite_pairs};

/// A square on the net grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    /// Row, counted from the top.
    pub row: u8,
    /// Column, counted from the left.
    pub col: u8,
}

impl GridCell {
    /// Construct a cell.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Orthogonal grid distance between two cells.
    #[must_use]
    pub fn manhattan(self, other: GridCell) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

/// Grid dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridSize {
    /// Number of rows.
    pub rows: u8,
    /// Number of columns.
    pub cols: u8,
}

/// A net layout: six grid cells and the family whose topology they fold to.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Unique template name, prefixed by its family name.
    pub name: &'static str,
    /// Family providing the topology tables.
    pub family: ShapeFamily,
    /// Cells for positions 0-5.
    pub placements: [GridCell; 6],
    /// Bounding grid.
    pub grid: GridSize,
}

const fn cells(raw: [(u8, u8); 6]) -> [GridCell; 6] {
    [
        GridCell::new(raw[0].0, raw[0].1),
        GridCell::new(raw[1].0, raw[1].1),
        GridCell::new(raw[2].0, raw[2].1),
        GridCell::new(raw[3].0, raw[3].1),
        GridCell::new(raw[4].0, raw[4].1),
        GridCell::new(raw[5].0, raw[5].1),
    ]
}

const WIDE: GridSize = GridSize { rows: 3, cols: 4 };
const BARS: GridSize = GridSize { rows: 2, cols: 5 };

/// The eleven distinct cube nets, one template each.
pub static CATALOG: [Template; 11] = [
    // 1-4-1 with both caps on the second ring square.
    Template {
        name: "cross",
        family: ShapeFamily::Cross,
        placements: cells([(0, 1), (1, 0), (1, 1), (1, 2), (1, 3), (2, 1)]),
        grid: WIDE,
    },
    // 1-3-2: a cap over the end of a row of three, two squares stepping down.
    Template {
        name: "cross-step",
        family: ShapeFamily::Cross,
        placements: cells([(0, 2), (1, 0), (1, 1), (1, 2), (2, 3), (2, 2)]),
        grid: WIDE,
    },
    // 1-4-1 with caps on the second and first ring squares.
    Template {
        name: "t",
        family: ShapeFamily::T,
        placements: cells([(0, 1), (1, 1), (2, 0), (1, 2), (1, 3), (1, 0)]),
        grid: WIDE,
    },
    // 1-4-1 with caps on the third and second ring squares.
    Template {
        name: "t-shifted",
        family: ShapeFamily::T,
        placements: cells([(0, 2), (1, 1), (2, 1), (1, 2), (1, 3), (1, 0)]),
        grid: WIDE,
    },
    // 2-3-1 with the lone square under the middle of the row.
    Template {
        name: "t-step",
        family: ShapeFamily::T,
        placements: cells([(0, 0), (1, 1), (1, 2), (0, 1), (1, 3), (2, 2)]),
        grid: WIDE,
    },
    // 2-2-2 staircase.
    Template {
        name: "z-stairs",
        family: ShapeFamily::Z,
        placements: cells([(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 3)]),
        grid: WIDE,
    },
    // 3-3: two rows of three overlapping by one column.
    Template {
        name: "z-bars",
        family: ShapeFamily::Z,
        placements: cells([(0, 0), (0, 1), (1, 2), (0, 2), (1, 3), (1, 4)]),
        grid: BARS,
    },
    // 2-3-1 with the lone square under the end of the row.
    Template {
        name: "z-step",
        family: ShapeFamily::Z,
        placements: cells([(0, 0), (0, 1), (1, 1), (1, 2), (2, 3), (1, 3)]),
        grid: WIDE,
    },
    // 1-4-1 with both caps on the first ring square.
    Template {
        name: "l",
        family: ShapeFamily::L,
        placements: cells([(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (2, 0)]),
        grid: WIDE,
    },
    // 1-4-1 with caps on opposite ends of the ring.
    Template {
        name: "l-hooked",
        family: ShapeFamily::L,
        placements: cells([(0, 3), (1, 0), (1, 1), (1, 2), (1, 3), (2, 0)]),
        grid: WIDE,
    },
    // 1-4-1 with caps on the last and second ring squares.
    Template {
        name: "l-reach",
        family: ShapeFamily::L,
        placements: cells([(0, 3), (1, 0), (1, 1), (1, 2), (1, 3), (2, 1)]),
        grid: WIDE,
    },
];

/// The whole catalog.
#[must_use]
pub fn catalog() -> &'static [Template] {
    &CATALOG
}

/// Look up a template by exact name.
#[must_use]
pub fn find_template(name: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.name == name)
}

/// Templates belonging to `family`, in catalog order.
pub fn templates_for(family: ShapeFamily) -> impl Iterator<Item = &'static Template> {
    CATALOG.iter().filter(move |t| t.family == family)
}

/// A template whose fold disagrees with its family tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDefect {
    /// The placements do not fold into a cube at all.
    Unfoldable {
        /// Template name.
        template: &'static str,
        /// Why folding failed.
        reason: FoldError,
    },
    /// The fold pairs opposite faces differently from the family table.
    OppositeMismatch {
        /// Template name.
        template: &'static str,
        /// Pairs produced by folding.
        folded: Vec<(usize, usize)>,
        /// Pairs listed in the family table.
        table: Vec<(usize, usize)>,
    },
    /// A placement lies outside the declared grid.
    OutOfGrid {
        /// Template name.
        template: &'static str,
        /// Offending cell.
        cell: GridCell,
    },
}

/// Fold every template and compare it with its family's fixed tables.
///
/// Returns the defects found; an empty vector means the catalog is sound.
#[must_use]
pub fn verify_catalog() -> Vec<CatalogDefect> {
    let mut defects = Vec::new();
    for template in &CATALOG {
        if let Some(cell) = template
            .placements
            .iter()
            .find(|c| c.row >= template.grid.rows || c.col >= template.grid.cols)
        {
            defects.push(CatalogDefect::OutOfGrid {
                template: template.name,
                cell: *cell,
            });
        }

        match fold_placements(&template.placements) {
            Ok(faces) => {
                let folded = opposite_pairs(&faces);
                let table = template.family.topology().opposite_pairs();
                if folded != table {
                    defects.push(CatalogDefect::OppositeMismatch {
                        template: template.name,
                        folded,
                        table,
                    });
                }
            }
            Err(reason) => defects.push(CatalogDefect::Unfoldable {
                template: template.name,
                reason,
            }),
        }
    }
    defects
}
