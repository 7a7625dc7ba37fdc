//! Physical folding of a net by rolling a cube across its grid.
//!
//! Position 0 is laid on the `NegZ` face. Crossing into a neighboring cell
//! tips the cube over the shared edge, which rotates the frame
//! `(normal, north, east)` by a quarter turn. Every position visited this way
//! ends on the face its frame normal points at.

use glam::IVec3;

use crate::CubeFace;
use crate::catalog::GridCell;

/// Why a set of placements does not fold into a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FoldError {
    /// A position cannot be reached from position 0 through shared edges.
    #[error("position {0} is not connected to the rest of the net")]
    Disconnected(usize),
    /// Two positions land on the same cube face.
    #[error("positions {0} and {1} fold onto the same face")]
    Overlap(usize, usize),
}

/// Orientation of the rolling cube while it rests on one grid cell.
#[derive(Clone, Copy, Debug)]
struct Frame {
    normal: IVec3,
    north: IVec3,
    east: IVec3,
}

impl Frame {
    fn roll(self, d_row: i32, d_col: i32) -> Frame {
        let Frame {
            normal,
            north,
            east,
        } = self;
        match (d_row, d_col) {
            (-1, 0) => Frame {
                normal: north,
                north: -normal,
                east,
            },
            (1, 0) => Frame {
                normal: -north,
                north: normal,
                east,
            },
            (0, 1) => Frame {
                normal: east,
                north,
                east: -normal,
            },
            (0, -1) => Frame {
                normal: -east,
                north,
                east: normal,
            },
            _ => self,
        }
    }
}

const STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Fold six grid cells and report which cube face each position lands on.
pub fn fold_placements(placements: &[GridCell; 6]) -> Result<[CubeFace; 6], FoldError> {
    let mut frames: [Option<Frame>; 6] = [None; 6];
    frames[0] = Some(Frame {
        normal: IVec3::NEG_Z,
        north: IVec3::Y,
        east: IVec3::X,
    });

    let mut stack = vec![0usize];
    while let Some(current) = stack.pop() {
        let Some(frame) = frames[current] else {
            continue;
        };
        let here = placements[current];
        for (d_row, d_col) in STEPS {
            let row = i32::from(here.row) + d_row;
            let col = i32::from(here.col) + d_col;
            let Some(next) = placements
                .iter()
                .position(|c| i32::from(c.row) == row && i32::from(c.col) == col)
            else {
                continue;
            };
            if frames[next].is_none() {
                frames[next] = Some(frame.roll(d_row, d_col));
                stack.push(next);
            }
        }
    }

    let mut faces = [CubeFace::NegZ; 6];
    for (position, frame) in frames.iter().enumerate() {
        let frame = frame.ok_or(FoldError::Disconnected(position))?;
        // Rolls are quarter turns of axis vectors, so the normal stays a unit axis.
        faces[position] = CubeFace::from_normal(frame.normal).unwrap_or(CubeFace::NegZ);
        if let Some(earlier) = faces[..position].iter().position(|f| *f == faces[position]) {
            return Err(FoldError::Overlap(earlier, position));
        }
    }
    Ok(faces)
}

/// Position pairs that end on opposite faces, ascending.
#[must_use]
pub fn opposite_pairs(faces: &[CubeFace; 6]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(3);
    for p in 0..6 {
        for q in p + 1..6 {
            if faces[p].opposite() == faces[q] {
                pairs.push((p, q));
            }
        }
    }
    pairs
}

/// Position triples whose faces share one cube corner, each ascending.
#[must_use]
pub fn corner_triples(faces: &[CubeFace; 6]) -> Vec<[usize; 3]> {
    let mut triples = Vec::with_capacity(8);
    for a in 0..6 {
        for b in a + 1..6 {
            for c in b + 1..6 {
                if faces[a].shares_edge_with(faces[b])
                    && faces[b].shares_edge_with(faces[c])
                    && faces[a].shares_edge_with(faces[c])
                {
                    triples.push([a, b, c]);
                }
            }
        }
    }
    triples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CATALOG, find_template};

    fn grid(raw: [(u8, u8); 6]) -> [GridCell; 6] {
        raw.map(|(row, col)| GridCell::new(row, col))
    }

    #[test]
    fn test_cross_center_opposes_far_ring_square() {
        let faces = fold_placements(&grid([(0, 1), (1, 0), (1, 1), (1, 2), (1, 3), (2, 1)])).unwrap();
        assert_eq!(faces[2].opposite(), faces[4]);
        assert_eq!(faces[1].opposite(), faces[3]);
        assert_eq!(faces[0].opposite(), faces[5]);
    }

    #[test]
    fn test_staircase_opposites() {
        let faces = fold_placements(&grid([(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 3)])).unwrap();
        assert_eq!(opposite_pairs(&faces), vec![(0, 3), (1, 4), (2, 5)]);
    }

    #[test]
    fn test_straight_strip_overlaps() {
        let result = fold_placements(&grid([(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]));
        assert_eq!(result, Err(FoldError::Overlap(0, 4)));
    }

    #[test]
    fn test_disconnected_cell_is_reported() {
        let result = fold_placements(&grid([(0, 1), (1, 0), (1, 1), (1, 2), (1, 3), (3, 3)]));
        assert_eq!(result, Err(FoldError::Disconnected(5)));
    }

    #[test]
    fn test_fold_corners_match_fixed_vertices() {
        for template in &CATALOG {
            let faces = fold_placements(&template.placements).unwrap();
            let mut folded = corner_triples(&faces);
            let mut table = template.family.topology().vertices().to_vec();
            folded.sort_unstable();
            table.sort_unstable();
            assert_eq!(folded, table, "{} corners disagree", template.name);
        }
    }

    #[test]
    fn test_fold_touches_all_six_faces() {
        let t = find_template("z-bars").unwrap();
        let faces = fold_placements(&t.placements).unwrap();
        for face in CubeFace::ALL {
            assert!(faces.contains(&face));
        }
    }
}
