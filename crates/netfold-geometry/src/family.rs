//! The closed set of net shape families.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::topology::{CROSS_TOPOLOGY, L_TOPOLOGY, PositionTopology, T_TOPOLOGY, Z_TOPOLOGY};

/// A family of net templates that share one position topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFamily {
    /// Four-square ring with both caps on the same column.
    Cross,
    /// Three-square bar over a vertical stem.
    T,
    /// Two-two-two staircase.
    Z,
    /// Four-square ring with caps on different columns.
    L,
}

impl ShapeFamily {
    /// All families in catalog order.
    pub const ALL: [ShapeFamily; 4] = [
        ShapeFamily::Cross,
        ShapeFamily::T,
        ShapeFamily::Z,
        ShapeFamily::L,
    ];

    /// Family used when an external name cannot be resolved.
    pub const FALLBACK: ShapeFamily = ShapeFamily::Cross;

    /// Lowercase identifier used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeFamily::Cross => "cross",
            ShapeFamily::T => "t",
            ShapeFamily::Z => "z",
            ShapeFamily::L => "l",
        }
    }

    /// The fixed topology tables for this family.
    #[must_use]
    pub fn topology(self) -> &'static PositionTopology {
        match self {
            ShapeFamily::Cross => &CROSS_TOPOLOGY,
            ShapeFamily::T => &T_TOPOLOGY,
            ShapeFamily::Z => &Z_TOPOLOGY,
            ShapeFamily::L => &L_TOPOLOGY,
        }
    }

    /// Parse a family name, case-insensitively.
    ///
    /// Accepts the identifier (`"z"`), a shape suffix (`"z-shape"`) or a
    /// template name whose prefix names the family (`"z-stairs"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<ShapeFamily> {
        let lower = name.trim().to_ascii_lowercase();
        let head = lower.split(['-', '_', ' ']).next().unwrap_or_default();
        ShapeFamily::ALL
            .into_iter()
            .find(|family| family.name() == head)
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
