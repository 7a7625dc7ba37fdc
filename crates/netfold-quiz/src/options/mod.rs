//! Answer-option generation for a labeled net.
//!
//! One option shows three faces that meet at a corner of the folded cube;
//! the other three show faces that cannot. [`generate_options`] runs the
//! whole pipeline: correct synthesis, display orientation, wrong synthesis,
//! shuffle and finalization.

mod correct;
mod finalize;
mod orient;
mod wrong;

pub use correct::{exhaustive_corner, synthesize_correct};
pub use finalize::finalize;
pub use orient::orient_for_display;
pub use wrong::{WrongStrategy, synthesize_wrong};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use netfold_geometry::{AdjacencyEngine, Net};

use crate::answer::{AnswerSet, CubeOption};
use crate::error::QuizError;

/// Bounds on the retry loops of option generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Random draws per wrong option before the fallback strategies run.
    pub wrong_sample_attempts: u32,
    /// Regenerations per non-conforming wrong option during finalization.
    pub regenerate_attempts: u32,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            wrong_sample_attempts: 100,
            regenerate_attempts: 100,
        }
    }
}

/// Build four shuffled options for `net`, exactly one of them correct.
///
/// The engine is re-bound to the net's family first, so a stale engine only
/// costs a debug event.
pub fn generate_options<R: Rng + ?Sized>(
    engine: &mut AdjacencyEngine,
    net: &Net,
    limits: &GenerationLimits,
    rng: &mut R,
) -> Result<AnswerSet, QuizError> {
    if !engine.is_synced_with(net) {
        debug!(
            active = %engine.family(),
            net = %net.family(),
            "engine out of sync with net, re-activating"
        );
    }
    engine.activate(net.family());

    let mut triples = Vec::with_capacity(4);
    triples.push(synthesize_correct(engine, net, rng)?);
    for _ in 0..3 {
        let (faces, strategy) = synthesize_wrong(engine, net, &triples, limits, rng)?;
        debug!(?faces, ?strategy, "wrong option");
        triples.push(faces);
    }

    let mut options: [CubeOption; 4] =
        std::array::from_fn(|i| CubeOption::new(i, triples[i], i == 0));
    options.shuffle(rng);
    finalize(engine, net, &mut options, limits, rng)?;

    Ok(AnswerSet::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net_gen::generate_net;
    use netfold_geometry::{ShapeFamily, find_template};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_options_for_generated_nets() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut engine = AdjacencyEngine::default();
        let limits = GenerationLimits::default();
        for _ in 0..200 {
            let net = generate_net(&mut engine, &mut rng).unwrap();
            let answers = generate_options(&mut engine, &net, &limits, &mut rng).unwrap();
            assert_eq!(answers.correct_count(), 1);
            for option in answers.iter() {
                assert_eq!(
                    option.faces.meets_at_vertex(&engine, &net).unwrap(),
                    option.is_correct
                );
            }
            let mut sets: Vec<[u8; 3]> = answers.iter().map(|o| o.faces.label_set()).collect();
            sets.sort_unstable();
            sets.dedup();
            assert_eq!(sets.len(), 4);
        }
    }

    #[test]
    fn test_stale_engine_is_resynced() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let net = Net::from_template(find_template("t-shifted").unwrap(), [3, 1, 4, 6, 2, 5]).unwrap();
        let mut engine = AdjacencyEngine::new(ShapeFamily::Z);
        let answers =
            generate_options(&mut engine, &net, &GenerationLimits::default(), &mut rng).unwrap();
        assert_eq!(engine.family(), ShapeFamily::T);
        let correct = answers.correct().unwrap();
        assert!(correct.faces.meets_at_vertex(&engine, &net).unwrap());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut engine = AdjacencyEngine::default();
        let net = generate_net(&mut engine, &mut rng).unwrap();
        let answers =
            generate_options(&mut engine, &net, &GenerationLimits::default(), &mut rng).unwrap();
        let mut ids: Vec<&str> = answers.iter().map(|o| o.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["option-0", "option-1", "option-2", "option-3"]);
    }

    #[test]
    fn test_same_seed_same_question() {
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut engine = AdjacencyEngine::default();
            let net = generate_net(&mut engine, &mut rng).unwrap();
            let answers =
                generate_options(&mut engine, &net, &GenerationLimits::default(), &mut rng)
                    .unwrap();
            (net, answers)
        };
        assert_eq!(run(77), run(77));
    }
}
