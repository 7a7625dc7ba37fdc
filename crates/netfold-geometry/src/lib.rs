//! Cube-net geometry: template catalog, per-family position topology, and the
//! adjacency engine that decides which labeled faces meet once a net is folded.

pub mod catalog;
mod cube_face;
mod engine;
mod error;
mod family;
pub mod fold;
mod net;
mod topology;

pub use catalog::{CatalogDefect, GridCell, GridSize, Template, catalog, find_template};
pub use cube_face::CubeFace;
pub use engine::AdjacencyEngine;
pub use error::{GeometryError, check_label};
pub use family::ShapeFamily;
pub use net::{Net, NetFace};
pub use topology::{CROSS_TOPOLOGY, L_TOPOLOGY, PositionTopology, T_TOPOLOGY, Z_TOPOLOGY};
