//! A labeled net: a catalog template with the labels 1-6 painted on it.

use serde::Serialize;

use crate::catalog::{GridCell, GridSize, Template};
use crate::error::{GeometryError, check_label};
use crate::ShapeFamily;

/// One labeled square of a net.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NetFace {
    /// Row on the net grid.
    pub row: u8,
    /// Column on the net grid.
    pub col: u8,
    /// Face label, 1-6.
    pub label: u8,
}

impl NetFace {
    /// The grid cell this face occupies.
    #[must_use]
    pub fn cell(&self) -> GridCell {
        GridCell::new(self.row, self.col)
    }
}

/// An unfolded cube with labeled faces.
///
/// `faces[i]` is position `i` of the template, so the family topology
/// applies to face indices directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Net {
    template: &'static str,
    family: ShapeFamily,
    grid: GridSize,
    faces: [NetFace; 6],
}

impl Net {
    /// Paint `labels` onto `template` in position order.
    ///
    /// Fails unless `labels` is a permutation of 1-6.
    pub fn from_template(template: &'static Template, labels: [u8; 6]) -> Result<Self, GeometryError> {
        let mut seen = [false; 7];
        for label in labels {
            let label = usize::from(check_label(label)?);
            if seen[label] {
                return Err(GeometryError::InvalidNet(format!(
                    "label {label} appears more than once"
                )));
            }
            seen[label] = true;
        }

        let mut faces = [NetFace {
            row: 0,
            col: 0,
            label: 0,
        }; 6];
        for (face, (cell, label)) in faces.iter_mut().zip(template.placements.iter().zip(labels)) {
            *face = NetFace {
                row: cell.row,
                col: cell.col,
                label,
            };
        }

        Ok(Self {
            template: template.name,
            family: template.family,
            grid: template.grid,
            faces,
        })
    }

    /// Name of the template this net was built from.
    #[must_use]
    pub fn template_name(&self) -> &'static str {
        self.template
    }

    /// Family whose topology governs this net.
    #[must_use]
    pub fn family(&self) -> ShapeFamily {
        self.family
    }

    /// Grid dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Faces in position order.
    #[must_use]
    pub fn faces(&self) -> &[NetFace; 6] {
        &self.faces
    }

    /// Labels in position order.
    #[must_use]
    pub fn labels(&self) -> [u8; 6] {
        self.faces.map(|f| f.label)
    }

    /// Position of `label`, or `None` if the net does not carry it.
    #[must_use]
    pub fn position_of(&self, label: u8) -> Option<usize> {
        self.faces.iter().position(|f| f.label == label)
    }

    /// Label at `position`, or `None` for an index above 5.
    #[must_use]
    pub fn label_at(&self, position: usize) -> Option<u8> {
        self.faces.get(position).map(|f| f.label)
    }

    /// The face at `(row, col)`, if any.
    #[must_use]
    pub fn face_at(&self, row: u8, col: u8) -> Option<&NetFace> {
        self.faces.iter().find(|f| f.row == row && f.col == col)
    }
}
