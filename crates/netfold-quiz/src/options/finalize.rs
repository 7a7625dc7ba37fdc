//! Post-shuffle checks on a set of four options.

use rand::Rng;
use tracing::{debug, warn};

use netfold_geometry::{AdjacencyEngine, GeometryError, Net};

use super::correct::exhaustive_corner;
use super::orient::orient_for_display;
use super::wrong::synthesize_wrong;
use super::GenerationLimits;
use crate::answer::{CubeOption, FaceTriple};
use crate::error::QuizError;

/// Slot that should end up marked correct, re-deriving its faces if no
/// option validates.
fn settle_correct(
    engine: &AdjacencyEngine,
    net: &Net,
    options: &mut [CubeOption; 4],
) -> Result<usize, QuizError> {
    for (i, option) in options.iter().enumerate() {
        if option.is_correct && option.faces.meets_at_vertex(engine, net)? {
            return Ok(i);
        }
    }
    for (i, option) in options.iter().enumerate() {
        if option.faces.meets_at_vertex(engine, net)? {
            return Ok(i);
        }
    }

    let slot = options.iter().position(|o| o.is_correct).unwrap_or(0);
    let labels = exhaustive_corner(engine, net)?.ok_or(QuizError::GenerationFailure {
        template: net.template_name(),
    })?;
    options[slot].faces = orient_for_display(labels, net)?;
    warn!(slot, ?labels, "no option met at a corner, re-derived the correct one");
    Ok(slot)
}

fn conforms(
    engine: &AdjacencyEngine,
    net: &Net,
    options: &[CubeOption; 4],
    slot: usize,
    correct: &FaceTriple,
) -> Result<bool, GeometryError> {
    let faces = &options[slot].faces;
    if faces == correct || faces.meets_at_vertex(engine, net)? {
        return Ok(false);
    }
    Ok(!options
        .iter()
        .enumerate()
        .any(|(i, other)| i != slot && other.faces.same_labels(faces)))
}

/// Leave exactly one option marked correct and regenerate wrong options that
/// are corners or repeat another option's labels.
///
/// A wrong option still non-conforming after `limits.regenerate_attempts`
/// regenerations is kept and reported as a quality warning.
pub fn finalize<R: Rng + ?Sized>(
    engine: &AdjacencyEngine,
    net: &Net,
    options: &mut [CubeOption; 4],
    limits: &GenerationLimits,
    rng: &mut R,
) -> Result<(), QuizError> {
    let correct_slot = settle_correct(engine, net, options)?;
    for (i, option) in options.iter_mut().enumerate() {
        option.is_correct = i == correct_slot;
    }
    let correct = options[correct_slot].faces;

    for slot in 0..options.len() {
        if slot == correct_slot {
            continue;
        }
        let mut attempts = 0;
        while !conforms(engine, net, options, slot, &correct)? {
            if attempts >= limits.regenerate_attempts {
                warn!(
                    template = net.template_name(),
                    option = %options[slot].id,
                    attempts,
                    "QualityWarning: wrong option still conflicts after regeneration"
                );
                break;
            }
            let others: Vec<FaceTriple> = options
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != slot)
                .map(|(_, o)| o.faces)
                .collect();
            let (faces, strategy) = synthesize_wrong(engine, net, &others, limits, rng)?;
            debug!(option = %options[slot].id, ?faces, ?strategy, "regenerated wrong option");
            options[slot].faces = faces;
            attempts += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use netfold_geometry::{ShapeFamily, find_template};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tracing_subscriber::fmt::{self, MakeWriter};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct Buffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn cross_net() -> Net {
        Net::from_template(find_template("cross").unwrap(), [1, 2, 3, 4, 5, 6]).unwrap()
    }

    fn option(index: usize, labels: [u8; 3], is_correct: bool) -> CubeOption {
        CubeOption::new(index, FaceTriple::from_labels(labels).unwrap(), is_correct)
    }

    fn assert_conforming(engine: &AdjacencyEngine, net: &Net, options: &[CubeOption; 4]) {
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
        for (i, o) in options.iter().enumerate() {
            assert_eq!(o.faces.meets_at_vertex(engine, net).unwrap(), o.is_correct);
            for other in &options[i + 1..] {
                assert!(!o.faces.same_labels(&other.faces));
            }
        }
    }

    #[test]
    fn test_well_formed_set_is_untouched() {
        let net = cross_net();
        let engine = AdjacencyEngine::new(ShapeFamily::Cross);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut options = [
            option(0, [1, 2, 6], false),
            option(1, [1, 2, 3], true),
            option(2, [2, 4, 5], false),
            option(3, [1, 3, 6], false),
        ];
        let before = options.clone();
        finalize(&engine, &net, &mut options, &GenerationLimits::default(), &mut rng).unwrap();
        assert_eq!(options, before);
    }

    #[test]
    fn test_extra_correct_marks_are_cleared() {
        let net = cross_net();
        let engine = AdjacencyEngine::new(ShapeFamily::Cross);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut options = [
            option(0, [1, 2, 6], true),
            option(1, [1, 2, 3], true),
            option(2, [2, 4, 5], false),
            option(3, [1, 3, 6], false),
        ];
        finalize(&engine, &net, &mut options, &GenerationLimits::default(), &mut rng).unwrap();
        assert!(options[1].is_correct);
        assert_conforming(&engine, &net, &options);
    }

    #[test]
    fn test_unmarked_corner_becomes_correct() {
        let net = cross_net();
        let engine = AdjacencyEngine::new(ShapeFamily::Cross);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut options = [
            option(0, [1, 2, 6], true),
            option(1, [2, 4, 5], false),
            option(2, [1, 3, 4], false),
            option(3, [1, 3, 6], false),
        ];
        finalize(&engine, &net, &mut options, &GenerationLimits::default(), &mut rng).unwrap();
        assert!(options[2].is_correct);
        assert_conforming(&engine, &net, &options);
    }

    #[test]
    fn test_correct_is_rederived_into_marked_slot() {
        let net = cross_net();
        let engine = AdjacencyEngine::new(ShapeFamily::Cross);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut options = [
            option(0, [1, 2, 6], false),
            option(1, [2, 4, 5], false),
            option(2, [1, 3, 6], true),
            option(3, [3, 4, 5], false),
        ];
        // {3, 4, 5} is positions {2, 3, 4}, which holds the opposite pair 2-4.
        finalize(&engine, &net, &mut options, &GenerationLimits::default(), &mut rng).unwrap();
        assert!(options[2].is_correct);
        assert_eq!(options[2].faces.label_set(), [1, 2, 3]);
        assert_conforming(&engine, &net, &options);
    }

    #[test]
    fn test_duplicate_wrong_options_are_regenerated() {
        let net = cross_net();
        let engine = AdjacencyEngine::new(ShapeFamily::Cross);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut options = [
            option(0, [1, 2, 3], true),
            option(1, [1, 2, 6], false),
            option(2, [6, 2, 1], false),
            option(3, [1, 3, 4], false),
        ];
        finalize(&engine, &net, &mut options, &GenerationLimits::default(), &mut rng).unwrap();
        assert!(options[0].is_correct);
        assert_conforming(&engine, &net, &options);
    }

    #[test]
    fn test_zero_regeneration_budget_keeps_conflicts() {
        let net = cross_net();
        let engine = AdjacencyEngine::new(ShapeFamily::Cross);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let limits = GenerationLimits {
            regenerate_attempts: 0,
            ..GenerationLimits::default()
        };
        let mut options = [
            option(0, [1, 2, 3], true),
            option(1, [1, 2, 6], false),
            option(2, [6, 2, 1], false),
            option(3, [2, 4, 5], false),
        ];
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(buffer.clone())
                .with_ansi(false),
        );
        tracing::subscriber::with_default(subscriber, || {
            finalize(&engine, &net, &mut options, &limits, &mut rng).unwrap();
        });
        assert_eq!(options[2].faces.labels(), [6, 2, 1]);

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let warnings: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("QualityWarning"))
            .collect();
        // Options 1 and 2 repeat each other, so both are reported.
        assert_eq!(warnings.len(), 2, "{output}");
        for warning in &warnings {
            assert!(warning.contains("WARN"));
            assert!(warning.contains("template=\"cross\""));
        }
        assert!(warnings.iter().any(|w| w.contains("option=option-2")));
    }
}
