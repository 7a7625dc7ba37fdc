//! Fixed position topologies for each net family.
//!
//! A topology answers two questions about the six grid positions of a net
//! once it has been folded: which positions end up sharing a cube edge, and
//! which position triples meet at one of the cube's eight corners. Both are
//! fixed data. Every family's tables are checked against a physical fold of
//! its templates in [`crate::catalog::verify_catalog`].

/// Adjacency and corner tables for one shape family.
#[derive(Debug, PartialEq, Eq)]
pub struct PositionTopology {
    /// For each position, the four positions that share an edge with it.
    adjacency: [[usize; 4]; 6],
    /// The eight corners, each as an ascending position triple.
    vertices: [[usize; 3]; 8],
}

impl PositionTopology {
    /// The full adjacency table, indexed by position.
    #[must_use]
    pub fn adjacency(&self) -> &[[usize; 4]; 6] {
        &self.adjacency
    }

    /// The eight corner triples.
    #[must_use]
    pub fn vertices(&self) -> &[[usize; 3]; 8] {
        &self.vertices
    }

    /// Positions adjacent to `position`, `None` for an index above 5.
    #[must_use]
    pub fn adjacent_positions(&self, position: usize) -> Option<[usize; 4]> {
        self.adjacency.get(position).copied()
    }

    /// Whether `a` and `b` share an edge. Out-of-range indices never do.
    #[must_use]
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        a != b && self.adjacency.get(a).is_some_and(|row| row.contains(&b))
    }

    /// The single position neither equal nor adjacent to `position`.
    ///
    /// Returns `None` for an index above 5, or when zero or several
    /// candidates exist, which only a malformed table can produce.
    #[must_use]
    pub fn opposite_of(&self, position: usize) -> Option<usize> {
        if position >= self.adjacency.len() {
            return None;
        }
        let mut candidates =
            (0..6).filter(|&other| other != position && !self.is_adjacent(position, other));
        let first = candidates.next()?;
        match candidates.next() {
            None => Some(first),
            Some(_) => None,
        }
    }

    /// Whether the unordered triple is one of the eight corners.
    #[must_use]
    pub fn is_vertex(&self, triple: [usize; 3]) -> bool {
        let mut sorted = triple;
        sorted.sort_unstable();
        self.vertices.contains(&sorted)
    }

    /// Opposite pairs as `(low, high)`, ascending. Empty entries are skipped.
    #[must_use]
    pub fn opposite_pairs(&self) -> Vec<(usize, usize)> {
        (0..6)
            .filter_map(|p| self.opposite_of(p).map(|q| (p, q)))
            .filter(|(p, q)| p < q)
            .collect()
    }
}

/// The symmetric 1-4-1 cross, indexed cap, ring left to right, cap, and
/// any other net indexed to the same opposite pairs: (0,5) (1,3) (2,4).
pub static CROSS_TOPOLOGY: PositionTopology = PositionTopology {
    adjacency: [
        [1, 2, 3, 4],
        [0, 2, 4, 5],
        [0, 1, 3, 5],
        [0, 2, 4, 5],
        [0, 1, 3, 5],
        [1, 2, 3, 4],
    ],
    vertices: [
        [0, 1, 2],
        [0, 2, 3],
        [0, 3, 4],
        [1, 2, 5],
        [2, 3, 5],
        [3, 4, 5],
        [0, 1, 4],
        [1, 4, 5],
    ],
};

/// Nets indexed so that opposite pairs are (0,2) (1,4) (3,5).
pub static T_TOPOLOGY: PositionTopology = PositionTopology {
    adjacency: [
        [1, 3, 4, 5],
        [0, 2, 3, 5],
        [1, 3, 4, 5],
        [0, 1, 2, 4],
        [0, 2, 3, 5],
        [0, 1, 2, 4],
    ],
    vertices: [
        [0, 1, 3],
        [1, 2, 3],
        [0, 3, 4],
        [2, 3, 4],
        [0, 1, 5],
        [1, 2, 5],
        [0, 4, 5],
        [2, 4, 5],
    ],
};

/// The 2-2-2 staircase indexed along the stairs, and the other nets indexed
/// to its opposite pairs: (0,3) (1,4) (2,5).
pub static Z_TOPOLOGY: PositionTopology = PositionTopology {
    adjacency: [
        [1, 2, 4, 5],
        [0, 2, 3, 5],
        [0, 1, 3, 4],
        [1, 2, 4, 5],
        [0, 2, 3, 5],
        [0, 1, 3, 4],
    ],
    vertices: [
        [0, 1, 2],
        [1, 2, 3],
        [2, 3, 4],
        [3, 4, 5],
        [0, 1, 5],
        [0, 2, 4],
        [1, 3, 5],
        [0, 4, 5],
    ],
};

/// 1-4-1 nets whose caps sit at different columns, indexed cap, ring left
/// to right, cap. The tables coincide with [`CROSS_TOPOLOGY`].
pub static L_TOPOLOGY: PositionTopology = PositionTopology {
    adjacency: [
        [1, 2, 3, 4],
        [0, 2, 4, 5],
        [0, 1, 3, 5],
        [0, 2, 4, 5],
        [0, 1, 3, 5],
        [1, 2, 3, 4],
    ],
    vertices: [
        [0, 1, 2],
        [0, 2, 3],
        [0, 3, 4],
        [1, 2, 5],
        [2, 3, 5],
        [3, 4, 5],
        [0, 1, 4],
        [1, 4, 5],
    ],
};
