//! Adjacency queries against the active family topology.
//!
//! The engine is an explicit context value: callers activate the family of
//! the net they are reasoning about and pass that net to every face query.
//! Position queries validate indices eagerly; face queries validate label
//! range eagerly but treat a label missing from the net as "no result".

use tracing::{debug, warn};

use crate::error::{GeometryError, check_label, check_position};
use crate::net::Net;
use crate::topology::PositionTopology;
use crate::ShapeFamily;

/// Adjacency and corner queries bound to one shape family at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjacencyEngine {
    family: ShapeFamily,
}

impl Default for AdjacencyEngine {
    fn default() -> Self {
        Self::new(ShapeFamily::FALLBACK)
    }
}

impl AdjacencyEngine {
    /// Create an engine with `family` active.
    #[must_use]
    pub fn new(family: ShapeFamily) -> Self {
        Self { family }
    }

    /// Bind the engine to `family`.
    pub fn activate(&mut self, family: ShapeFamily) {
        if self.family != family {
            debug!(from = %self.family, to = %family, "switching topology");
        }
        self.family = family;
    }

    /// Bind the engine to a family given by name.
    ///
    /// Unknown names fall back to [`ShapeFamily::FALLBACK`] with a warning.
    /// Returns the family that ended up active.
    pub fn activate_by_name(&mut self, name: &str) -> ShapeFamily {
        let family = ShapeFamily::from_name(name).unwrap_or_else(|| {
            warn!(
                name,
                fallback = %ShapeFamily::FALLBACK,
                "no topology for net family, using fallback"
            );
            ShapeFamily::FALLBACK
        });
        self.activate(family);
        family
    }

    /// The active family.
    #[must_use]
    pub fn family(&self) -> ShapeFamily {
        self.family
    }

    /// The active topology tables.
    #[must_use]
    pub fn topology(&self) -> &'static PositionTopology {
        self.family.topology()
    }

    /// Whether the active family is the one `net` was built from.
    #[must_use]
    pub fn is_synced_with(&self, net: &Net) -> bool {
        self.family == net.family()
    }

    /// Whether two positions share an edge once folded.
    pub fn positions_adjacent(&self, a: usize, b: usize) -> Result<bool, GeometryError> {
        let a = check_position(a)?;
        let b = check_position(b)?;
        Ok(self.topology().is_adjacent(a, b))
    }

    /// The four positions sharing an edge with `position`.
    pub fn adjacent_positions(&self, position: usize) -> Result<[usize; 4], GeometryError> {
        let position = check_position(position)?;
        self.topology()
            .adjacent_positions(position)
            .ok_or(GeometryError::InvalidPosition(position))
    }

    /// The position that ends on the opposite cube face.
    pub fn opposite_position(&self, position: usize) -> Result<usize, GeometryError> {
        let position = check_position(position)?;
        self.topology()
            .opposite_of(position)
            .ok_or(GeometryError::NoOpposite(position, self.family.name()))
    }

    /// Whether two labeled faces share an edge once `net` is folded.
    ///
    /// Returns `Ok(false)` when either label is absent from the net.
    pub fn faces_adjacent(&self, a: u8, b: u8, net: &Net) -> Result<bool, GeometryError> {
        check_label(a)?;
        check_label(b)?;
        match (net.position_of(a), net.position_of(b)) {
            (Some(pa), Some(pb)) => self.positions_adjacent(pa, pb),
            _ => Ok(false),
        }
    }

    /// Labels of the faces sharing an edge with `label`.
    ///
    /// Returns an empty vector when `label` is absent from the net.
    pub fn adjacent_faces(&self, label: u8, net: &Net) -> Result<Vec<u8>, GeometryError> {
        check_label(label)?;
        let Some(position) = net.position_of(label) else {
            debug!(label, template = net.template_name(), "label not on net");
            return Ok(Vec::new());
        };
        Ok(self
            .adjacent_positions(position)?
            .iter()
            .filter_map(|&p| net.label_at(p))
            .collect())
    }

    /// Label of the face opposite `label`, or `None` when it cannot be found.
    pub fn opposite_face(&self, label: u8, net: &Net) -> Result<Option<u8>, GeometryError> {
        check_label(label)?;
        let Some(position) = net.position_of(label) else {
            debug!(label, template = net.template_name(), "label not on net");
            return Ok(None);
        };
        match self.opposite_position(position) {
            Ok(opposite) => Ok(net.label_at(opposite)),
            Err(err) => {
                warn!(label, %err, "opposite face lookup failed");
                Ok(None)
            }
        }
    }

    /// Whether the three labeled faces meet at one corner of the folded cube.
    ///
    /// Labels must be in 1-6. Repeated labels or labels absent from the net
    /// never meet. Otherwise the unordered position triple must be one of the
    /// active family's eight corners; pairwise adjacency is not enough.
    pub fn can_meet_at_vertex(&self, a: u8, b: u8, c: u8, net: &Net) -> Result<bool, GeometryError> {
        check_label(a)?;
        check_label(b)?;
        check_label(c)?;
        if a == b || b == c || a == c {
            return Ok(false);
        }
        match (net.position_of(a), net.position_of(b), net.position_of(c)) {
            (Some(pa), Some(pb), Some(pc)) => Ok(self.topology().is_vertex([pa, pb, pc])),
            _ => Ok(false),
        }
    }

    /// The active family's corners expressed as labels of `net`.
    #[must_use]
    pub fn vertex_labels(&self, net: &Net) -> Vec<[u8; 3]> {
        self.topology()
            .vertices()
            .iter()
            .filter_map(|&[a, b, c]| Some([net.label_at(a)?, net.label_at(b)?, net.label_at(c)?]))
            .collect()
    }
}
