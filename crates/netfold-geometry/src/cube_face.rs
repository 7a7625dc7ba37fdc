//! The six faces of a folded cube and their integer normals.

use glam::IVec3;

/// A face of the folded cube, named by the axis its outward normal points along.
///
/// Nets start folding with position 0 on [`CubeFace::NegZ`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// Right (+X).
    PosX,
    /// Left (-X).
    NegX,
    /// Top (+Y).
    PosY,
    /// Bottom (-Y).
    NegY,
    /// Back (+Z).
    PosZ,
    /// Front (-Z).
    NegZ,
}

impl CubeFace {
    /// Every face, positive axis first.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// The face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> IVec3 {
        match self {
            CubeFace::PosX => IVec3::X,
            CubeFace::NegX => IVec3::NEG_X,
            CubeFace::PosY => IVec3::Y,
            CubeFace::NegY => IVec3::NEG_Y,
            CubeFace::PosZ => IVec3::Z,
            CubeFace::NegZ => IVec3::NEG_Z,
        }
    }

    /// The face whose outward normal is `normal`, if it is an axis unit vector.
    #[must_use]
    pub fn from_normal(normal: IVec3) -> Option<CubeFace> {
        CubeFace::ALL.into_iter().find(|face| face.normal() == normal)
    }

    /// Two distinct faces share an edge unless they are opposite.
    #[must_use]
    pub fn shares_edge_with(self, other: CubeFace) -> bool {
        self != other && self.opposite() != other
    }
}
