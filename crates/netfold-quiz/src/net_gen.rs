//! Random net generation: a uniformly chosen template painted with a
//! uniformly shuffled permutation of the labels 1-6.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use netfold_geometry::{AdjacencyEngine, GeometryError, Net, ShapeFamily, Template, catalog};

/// Chooses templates from a fixed pool and labels them.
#[derive(Clone, Debug)]
pub struct NetGenerator {
    templates: Vec<&'static Template>,
}

impl Default for NetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NetGenerator {
    /// A generator over the whole catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: catalog().iter().collect(),
        }
    }

    /// A generator over the templates of `families` only.
    ///
    /// An empty selection keeps the whole catalog.
    #[must_use]
    pub fn with_families(families: &[ShapeFamily]) -> Self {
        let templates: Vec<&'static Template> = catalog()
            .iter()
            .filter(|t| families.contains(&t.family))
            .collect();
        if templates.is_empty() {
            return Self::new();
        }
        Self { templates }
    }

    /// The template pool.
    #[must_use]
    pub fn templates(&self) -> &[&'static Template] {
        &self.templates
    }

    /// Generate a net and activate its family on `engine`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        engine: &mut AdjacencyEngine,
        rng: &mut R,
    ) -> Result<Net, GeometryError> {
        let template = self.templates[rng.random_range(0..self.templates.len())];

        let mut labels = [1, 2, 3, 4, 5, 6];
        labels.shuffle(rng);

        let net = Net::from_template(template, labels)?;
        engine.activate(net.family());
        debug!(template = template.name, ?labels, "generated net");
        Ok(net)
    }
}

/// Generate a net from the whole catalog and activate its family on `engine`.
pub fn generate_net<R: Rng + ?Sized>(
    engine: &mut AdjacencyEngine,
    rng: &mut R,
) -> Result<Net, GeometryError> {
    NetGenerator::new().generate(engine, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_labels_are_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut engine = AdjacencyEngine::default();
        for _ in 0..50 {
            let net = generate_net(&mut engine, &mut rng).unwrap();
            let mut labels = net.labels();
            labels.sort_unstable();
            assert_eq!(labels, [1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_generation_activates_family() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut engine = AdjacencyEngine::new(ShapeFamily::Z);
        let generator = NetGenerator::with_families(&[ShapeFamily::T]);
        let net = generator.generate(&mut engine, &mut rng).unwrap();
        assert_eq!(net.family(), ShapeFamily::T);
        assert_eq!(engine.family(), ShapeFamily::T);
    }

    #[test]
    fn test_faces_follow_template_placements() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut engine = AdjacencyEngine::default();
        let net = generate_net(&mut engine, &mut rng).unwrap();
        let template = netfold_geometry::find_template(net.template_name()).unwrap();
        for (face, cell) in net.faces().iter().zip(template.placements) {
            assert_eq!(face.cell(), cell);
        }
        assert_eq!(net.grid(), template.grid);
    }

    #[test]
    fn test_family_filter() {
        let generator = NetGenerator::with_families(&[ShapeFamily::Z, ShapeFamily::L]);
        assert!(
            generator
                .templates()
                .iter()
                .all(|t| matches!(t.family, ShapeFamily::Z | ShapeFamily::L))
        );
        assert_eq!(NetGenerator::with_families(&[]).templates().len(), catalog().len());
    }

    #[test]
    fn test_every_template_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut engine = AdjacencyEngine::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(generate_net(&mut engine, &mut rng).unwrap().template_name());
        }
        assert_eq!(seen.len(), catalog().len());
    }

    #[test]
    fn test_first_label_is_roughly_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut engine = AdjacencyEngine::default();
        let mut counts = [0u32; 7];
        let rounds = 6000;
        for _ in 0..rounds {
            let net = generate_net(&mut engine, &mut rng).unwrap();
            counts[usize::from(net.labels()[0])] += 1;
        }
        for label in 1..=6 {
            // Expected 1000 per label.
            assert!(
                (800..1200).contains(&counts[label]),
                "label {label} drawn {} times",
                counts[label]
            );
        }
    }
}
