use super::*;

/// Uniform crossover: every gene is taken from either parent with equal odds.
pub fn recombine_with_rng<R: Rng>(dna: &Dna, other: &Dna, rng: &mut R) -> Result<Dna> {
    if dna.number_of_genes() != other.number_of_genes() || !dna.same_bounds(other) {
        tracing::debug!(
            bounds = ?(dna.min_value(), dna.max_value()),
            other_bounds = ?(other.min_value(), other.max_value()),
            "Parents differ in shape"
        );
        return Err(GeneticsError::length_mismatch(
            dna.number_of_genes(),
            other.number_of_genes(),
        ));
    }

    let genes: Vec<f64> = dna
        .genes()
        .iter()
        .zip(other.genes())
        .map(|(&a, &b)| if rng.gen_bool(0.5) { a } else { b })
        .collect();

    tracing::debug!(genes = genes.len(), "Recombined DNA");
    Ok(Dna::from_parts(genes, dna.min_value(), dna.max_value()))
}
