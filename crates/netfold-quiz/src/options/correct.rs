//! Correct-answer synthesis.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use netfold_geometry::{AdjacencyEngine, GeometryError, Net};

use super::orient::orient_for_display;
use crate::answer::FaceTriple;
use crate::error::QuizError;

/// Pick a corner of the folded net uniformly and orient it for display.
///
/// The candidates are the active family's eight corners mapped to labels and
/// confirmed with [`AdjacencyEngine::can_meet_at_vertex`]. If none survives,
/// every label combination is searched; if that also fails the topology is
/// defective and [`QuizError::GenerationFailure`] is returned.
pub fn synthesize_correct<R: Rng + ?Sized>(
    engine: &AdjacencyEngine,
    net: &Net,
    rng: &mut R,
) -> Result<FaceTriple, QuizError> {
    let mut candidates = Vec::with_capacity(8);
    for [a, b, c] in engine.vertex_labels(net) {
        if engine.can_meet_at_vertex(a, b, c, net)? {
            candidates.push([a, b, c]);
        }
    }

    let labels = match candidates.choose(rng) {
        Some(labels) => *labels,
        None => {
            warn!(
                template = net.template_name(),
                "no corner from the vertex table, searching all combinations"
            );
            exhaustive_corner(engine, net)?.ok_or(QuizError::GenerationFailure {
                template: net.template_name(),
            })?
        }
    };

    let faces = orient_for_display(labels, net)?;
    debug!(?labels, ?faces, "correct option");
    Ok(faces)
}

/// The first label combination, in net order, whose faces meet at a corner.
pub fn exhaustive_corner(engine: &AdjacencyEngine, net: &Net) -> Result<Option<[u8; 3]>, GeometryError> {
    let labels = net.labels();
    for i in 0..6 {
        for j in i + 1..6 {
            for k in j + 1..6 {
                let triple = [labels[i], labels[j], labels[k]];
                if engine.can_meet_at_vertex(triple[0], triple[1], triple[2], net)? {
                    return Ok(Some(triple));
                }
            }
        }
    }
    Ok(None)
}
