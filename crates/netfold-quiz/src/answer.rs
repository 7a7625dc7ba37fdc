//! Answer options: three visible cube faces and their correctness flag.

use serde::Serialize;

use netfold_geometry::{AdjacencyEngine, GeometryError, Net, check_label};

/// Three faces of a cube seen from one corner.
///
/// The labels are always distinct. Which label sits on which display face is
/// cosmetic; corner validity only depends on the label set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FaceTriple {
    front: u8,
    left: u8,
    top: u8,
}

impl FaceTriple {
    /// Build a triple, rejecting labels outside 1-6 and repeated labels.
    pub fn new(front: u8, left: u8, top: u8) -> Result<Self, GeometryError> {
        check_label(front)?;
        check_label(left)?;
        check_label(top)?;
        if front == left || front == top {
            return Err(GeometryError::DuplicateLabel(front));
        }
        if left == top {
            return Err(GeometryError::DuplicateLabel(left));
        }
        Ok(Self { front, left, top })
    }

    /// Build a triple from `[front, left, top]`.
    pub fn from_labels(labels: [u8; 3]) -> Result<Self, GeometryError> {
        Self::new(labels[0], labels[1], labels[2])
    }

    /// Label shown on the front face.
    #[must_use]
    pub fn front(&self) -> u8 {
        self.front
    }

    /// Label shown on the left face.
    #[must_use]
    pub fn left(&self) -> u8 {
        self.left
    }

    /// Label shown on the top face.
    #[must_use]
    pub fn top(&self) -> u8 {
        self.top
    }

    /// `[front, left, top]`.
    #[must_use]
    pub fn labels(&self) -> [u8; 3] {
        [self.front, self.left, self.top]
    }

    /// The labels in ascending order, for order-independent comparison.
    #[must_use]
    pub fn label_set(&self) -> [u8; 3] {
        let mut set = self.labels();
        set.sort_unstable();
        set
    }

    /// Whether both triples show the same three labels in any arrangement.
    #[must_use]
    pub fn same_labels(&self, other: &FaceTriple) -> bool {
        self.label_set() == other.label_set()
    }

    /// Whether these faces meet at one corner of the folded `net`.
    pub fn meets_at_vertex(&self, engine: &AdjacencyEngine, net: &Net) -> Result<bool, GeometryError> {
        engine.can_meet_at_vertex(self.front, self.left, self.top, net)
    }
}

/// One of the four answers offered for a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CubeOption {
    /// Stable identifier, `option-N` where `N` is the generation order.
    pub id: String,
    /// Faces shown for this option.
    pub faces: FaceTriple,
    /// Whether this is the answer the net folds into.
    pub is_correct: bool,
}

impl CubeOption {
    /// Create the option generated `index`-th.
    #[must_use]
    pub fn new(index: usize, faces: FaceTriple, is_correct: bool) -> Self {
        Self {
            id: format!("option-{index}"),
            faces,
            is_correct,
        }
    }
}

/// Four options with exactly one marked correct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    options: [CubeOption; 4],
}

impl AnswerSet {
    pub(crate) fn new(options: [CubeOption; 4]) -> Self {
        Self { options }
    }

    /// Options in presentation order.
    #[must_use]
    pub fn options(&self) -> &[CubeOption; 4] {
        &self.options
    }

    /// The correct option.
    #[must_use]
    pub fn correct(&self) -> Option<&CubeOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    /// How many options are marked correct.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }

    /// The option with identifier `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CubeOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Iterate over the options in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &CubeOption> {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_rejects_repeated_labels() {
        assert_eq!(FaceTriple::new(1, 1, 2), Err(GeometryError::DuplicateLabel(1)));
        assert_eq!(FaceTriple::new(1, 2, 2), Err(GeometryError::DuplicateLabel(2)));
        assert_eq!(FaceTriple::new(3, 2, 3), Err(GeometryError::DuplicateLabel(3)));
        assert_eq!(FaceTriple::new(7, 2, 3), Err(GeometryError::InvalidLabel(7)));
    }

    #[test]
    fn test_label_set_ignores_arrangement() {
        let a = FaceTriple::new(5, 1, 3).unwrap();
        let b = FaceTriple::new(3, 5, 1).unwrap();
        assert_ne!(a, b);
        assert!(a.same_labels(&b));
        assert_eq!(a.label_set(), [1, 3, 5]);
    }

    #[test]
    fn test_option_ids_follow_index() {
        let faces = FaceTriple::new(1, 2, 3).unwrap();
        assert_eq!(CubeOption::new(2, faces, false).id, "option-2");
    }

    #[test]
    fn test_answer_set_lookup() {
        let faces = |a, b, c| FaceTriple::new(a, b, c).unwrap();
        let set = AnswerSet::new([
            CubeOption::new(0, faces(1, 2, 3), false),
            CubeOption::new(1, faces(1, 2, 4), true),
            CubeOption::new(2, faces(1, 2, 5), false),
            CubeOption::new(3, faces(1, 2, 6), false),
        ]);
        assert_eq!(set.correct().map(|o| o.id.as_str()), Some("option-1"));
        assert_eq!(set.correct_count(), 1);
        assert!(set.get("option-3").is_some());
        assert!(set.get("option-4").is_none());
        assert_eq!(set.iter().count(), 4);
    }

    #[test]
    fn test_serializes_as_list() {
        let faces = FaceTriple::new(4, 5, 6).unwrap();
        let set = AnswerSet::new([
            CubeOption::new(0, faces, true),
            CubeOption::new(1, faces, false),
            CubeOption::new(2, faces, false),
            CubeOption::new(3, faces, false),
        ]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"front\":4"));
        assert!(json.contains("\"is_correct\":true"));
    }
}
