//! Geometry error types.

/// Errors raised by adjacency queries and net construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A position index outside `0..=5`.
    #[error("invalid position index {0}: expected 0-5")]
    InvalidPosition(usize),

    /// A face label outside `1..=6`.
    #[error("invalid face label {0}: expected 1-6")]
    InvalidLabel(u8),

    /// The active topology has no unique opposite for a position.
    #[error("no unique opposite position for {0} in the {1} topology")]
    NoOpposite(usize, &'static str),

    /// Net data that cannot describe a foldable cube.
    #[error("invalid net: {0}")]
    InvalidNet(String),

    /// A face triple that repeats a label.
    #[error("face triple repeats label {0}")]
    DuplicateLabel(u8),
}

/// Returns `Ok(position)` when `position` is a valid index into a net.
pub(crate) fn check_position(position: usize) -> Result<usize, GeometryError> {
    if position < 6 {
        Ok(position)
    } else {
        Err(GeometryError::InvalidPosition(position))
    }
}

/// Returns `Ok(label)` when `label` is a valid face label.
pub fn check_label(label: u8) -> Result<u8, GeometryError> {
    if (1..=6).contains(&label) {
        Ok(label)
    } else {
        Err(GeometryError::InvalidLabel(label))
    }
}
