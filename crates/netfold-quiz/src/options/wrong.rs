//! Wrong-answer synthesis.
//!
//! Random sampling handles almost every case. The strategies after it only
//! run when sampling keeps producing corners or repeats, and each candidate
//! goes through the same acceptance check.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::{debug, warn};

use netfold_geometry::{AdjacencyEngine, GeometryError, Net};

use super::GenerationLimits;
use crate::answer::FaceTriple;

/// How a wrong option was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrongStrategy {
    /// Three distinct labels drawn at random.
    RandomSample,
    /// A label, its opposite face and one filler label.
    OppositePair,
    /// One label shown twice. Never accepted while triples need distinct labels.
    DuplicateLabel,
    /// First failing label combination in net order.
    ExhaustiveSearch,
    /// One unchecked shuffle of the labels.
    RandomShuffle,
    /// Scan of every ordered triple of distinct labels.
    GuaranteedSearch,
    /// Opposite pair plus filler kept without the uniqueness check.
    Stale,
}

/// A legal triple that is not a corner of `net` and repeats no label set in
/// `accepted`.
fn accept(
    engine: &AdjacencyEngine,
    net: &Net,
    candidate: [u8; 3],
    accepted: &[FaceTriple],
) -> Result<Option<FaceTriple>, GeometryError> {
    let faces = match FaceTriple::from_labels(candidate) {
        Ok(faces) => faces,
        Err(GeometryError::DuplicateLabel(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    if faces.meets_at_vertex(engine, net)? {
        return Ok(None);
    }
    if accepted.iter().any(|a| a.same_labels(&faces)) {
        return Ok(None);
    }
    Ok(Some(faces))
}

fn random_triple<R: Rng + ?Sized>(net: &Net, rng: &mut R) -> [u8; 3] {
    let mut labels = net.labels();
    labels.shuffle(rng);
    [labels[0], labels[1], labels[2]]
}

fn opposite_pair<R: Rng + ?Sized>(
    engine: &AdjacencyEngine,
    net: &Net,
    rng: &mut R,
) -> Result<Option<[u8; 3]>, GeometryError> {
    let labels = net.labels();
    let Some(&first) = labels.choose(rng) else {
        return Ok(None);
    };
    let Some(opposite) = engine.opposite_face(first, net)? else {
        return Ok(None);
    };
    let fillers: Vec<u8> = labels
        .iter()
        .copied()
        .filter(|&l| l != first && l != opposite)
        .collect();
    Ok(fillers.choose(rng).map(|&filler| [first, opposite, filler]))
}

fn duplicate_label<R: Rng + ?Sized>(net: &Net, rng: &mut R) -> [u8; 3] {
    let [a, b, _] = random_triple(net, rng);
    [a, a, b]
}

fn first_failing_combination(
    engine: &AdjacencyEngine,
    net: &Net,
    accepted: &[FaceTriple],
) -> Result<Option<FaceTriple>, GeometryError> {
    let labels = net.labels();
    for i in 0..6 {
        for j in i + 1..6 {
            for k in j + 1..6 {
                if let Some(faces) = accept(engine, net, [labels[i], labels[j], labels[k]], accepted)? {
                    return Ok(Some(faces));
                }
            }
        }
    }
    Ok(None)
}

fn first_failing_ordered(
    engine: &AdjacencyEngine,
    net: &Net,
    accepted: &[FaceTriple],
) -> Result<Option<FaceTriple>, GeometryError> {
    let labels = net.labels();
    for &a in &labels {
        for &b in &labels {
            for &c in &labels {
                if a == b || a == c || b == c {
                    continue;
                }
                if let Some(faces) = accept(engine, net, [a, b, c], accepted)? {
                    return Ok(Some(faces));
                }
            }
        }
    }
    Ok(None)
}

/// Produce a wrong option for `net` whose label set differs from every
/// triple in `accepted`.
///
/// Returns the triple with the strategy that produced it. Only
/// [`WrongStrategy::Stale`] may break the uniqueness rule, and only when no
/// unused non-corner label set is left.
pub fn synthesize_wrong<R: Rng + ?Sized>(
    engine: &AdjacencyEngine,
    net: &Net,
    accepted: &[FaceTriple],
    limits: &GenerationLimits,
    rng: &mut R,
) -> Result<(FaceTriple, WrongStrategy), GeometryError> {
    for _ in 0..limits.wrong_sample_attempts {
        if let Some(faces) = accept(engine, net, random_triple(net, rng), accepted)? {
            return Ok((faces, WrongStrategy::RandomSample));
        }
    }
    debug!(
        attempts = limits.wrong_sample_attempts,
        "random sampling exhausted, trying fallback strategies"
    );

    if let Some(candidate) = opposite_pair(engine, net, rng)? {
        if let Some(faces) = accept(engine, net, candidate, accepted)? {
            return Ok((faces, WrongStrategy::OppositePair));
        }
    }
    if let Some(faces) = accept(engine, net, duplicate_label(net, rng), accepted)? {
        return Ok((faces, WrongStrategy::DuplicateLabel));
    }
    if let Some(faces) = first_failing_combination(engine, net, accepted)? {
        return Ok((faces, WrongStrategy::ExhaustiveSearch));
    }
    if let Some(faces) = accept(engine, net, random_triple(net, rng), accepted)? {
        return Ok((faces, WrongStrategy::RandomShuffle));
    }
    if let Some(faces) = first_failing_ordered(engine, net, accepted)? {
        return Ok((faces, WrongStrategy::GuaranteedSearch));
    }

    warn!(
        template = net.template_name(),
        accepted = accepted.len(),
        "no unused wrong option left, repeating a label set"
    );
    let labels = net.labels();
    let opposite = engine.opposite_face(labels[0], net)?.unwrap_or(labels[1]);
    let filler = labels
        .iter()
        .copied()
        .find(|&l| l != labels[0] && l != opposite)
        .unwrap_or(labels[2]);
    Ok((FaceTriple::new(labels[0], opposite, filler)?, WrongStrategy::Stale))
}
