use super::*;

/// Perturbs each gene with probability `probability` by up to
/// `strength * (max_value - min_value)` in either direction, then reclamps it
/// into the DNA's range. Returns how many genes were touched.
pub fn mutate<R: Rng>(dna: &mut Dna, probability: f64, strength: f64, rng: &mut R) -> Result<usize> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GeneticsError::range(format!(
            "mutation probability {probability} outside [0, 1]"
        )));
    }

    let (min, max) = (dna.min_value(), dna.max_value());
    let scale = dna.span() * strength;
    let mut mutated = 0;

    for gene in dna.genes_mut() {
        if rng.gen_bool(probability) {
            let shifted = *gene + rng.gen_range(-1.0_f64..=1.0) * scale;
            // max/min instead of clamp: deserialized bounds are not guaranteed ordered
            *gene = shifted.max(min).min(max);
            mutated += 1;
        }
    }

    tracing::debug!(
        genes = dna.number_of_genes(),
        mutated,
        probability,
        strength,
        "Mutated DNA"
    );
    Ok(mutated)
}
