//! Display orientation for a corner triple.

use netfold_geometry::{GeometryError, GridCell, Net};

use crate::answer::FaceTriple;

/// Rank of `other` as the front face, seen from `pivot` on the net grid:
/// below, then left-of, then above, then right-of.
fn front_priority(pivot: GridCell, other: GridCell) -> u8 {
    let d_row = i32::from(other.row) - i32::from(pivot.row);
    let d_col = i32::from(other.col) - i32::from(pivot.col);
    match (d_row, d_col) {
        (1, 0) => 4,
        (0, -1) => 3,
        (-1, 0) => 2,
        (0, 1) => 1,
        _ => 0,
    }
}

/// Assign three corner labels to the front, left and top display faces.
///
/// The pivot is the label whose grid cell touches both other cells on the
/// flat net; it becomes `left`. The neighbor ranked highest by
/// [`front_priority`] becomes `front` and the last label `top`. Without a
/// pivot the labels keep their order.
pub fn orient_for_display(labels: [u8; 3], net: &Net) -> Result<FaceTriple, GeometryError> {
    let cell_of = |label: u8| net.position_of(label).map(|p| net.faces()[p].cell());
    let (Some(c0), Some(c1), Some(c2)) = (cell_of(labels[0]), cell_of(labels[1]), cell_of(labels[2]))
    else {
        return FaceTriple::from_labels(labels);
    };
    let cells = [c0, c1, c2];

    for pivot in 0..3 {
        let a = (pivot + 1) % 3;
        let b = (pivot + 2) % 3;
        if cells[pivot].manhattan(cells[a]) == 1 && cells[pivot].manhattan(cells[b]) == 1 {
            let (front, top) = if front_priority(cells[pivot], cells[a])
                >= front_priority(cells[pivot], cells[b])
            {
                (a, b)
            } else {
                (b, a)
            };
            return FaceTriple::new(labels[front], labels[pivot], labels[top]);
        }
    }
    FaceTriple::from_labels(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netfold_geometry::find_template;

    fn identity_net(template: &str) -> Net {
        Net::from_template(find_template(template).unwrap(), [1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_pivot_goes_left() {
        // Cross: label 3 at (1,1) touches label 1 at (0,1) and label 2 at (1,0).
        let net = identity_net("cross");
        let faces = orient_for_display([1, 2, 3], &net).unwrap();
        assert_eq!(faces.left(), 3);
        // Label 2 is left of the pivot, label 1 above it.
        assert_eq!(faces.front(), 2);
        assert_eq!(faces.top(), 1);
    }

    #[test]
    fn test_below_beats_left() {
        // Cross: pivot 3 at (1,1) with 6 below and 2 left of it.
        let net = identity_net("cross");
        let faces = orient_for_display([2, 3, 6], &net).unwrap();
        assert_eq!(faces.left(), 3);
        assert_eq!(faces.front(), 6);
        assert_eq!(faces.top(), 2);
    }

    #[test]
    fn test_order_of_input_does_not_matter_with_pivot() {
        let net = identity_net("cross");
        let a = orient_for_display([6, 2, 3], &net).unwrap();
        let b = orient_for_display([3, 6, 2], &net).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_pivot_keeps_order() {
        // Cross corner {0, 3, 4}: labels 1 at (0,1), 4 at (1,2), 5 at (1,3).
        // Only 4 and 5 touch on the grid, so there is no pivot.
        let net = identity_net("cross");
        let faces = orient_for_display([1, 4, 5], &net).unwrap();
        assert_eq!(faces.labels(), [1, 4, 5]);
    }

    #[test]
    fn test_front_priority_ranks() {
        let pivot = GridCell::new(1, 1);
        assert_eq!(front_priority(pivot, GridCell::new(2, 1)), 4);
        assert_eq!(front_priority(pivot, GridCell::new(1, 0)), 3);
        assert_eq!(front_priority(pivot, GridCell::new(0, 1)), 2);
        assert_eq!(front_priority(pivot, GridCell::new(1, 2)), 1);
        assert_eq!(front_priority(pivot, GridCell::new(2, 2)), 0);
    }
}
