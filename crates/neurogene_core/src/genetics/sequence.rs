use super::*;

pub fn sequence(dna: &Dna, from: usize, length: usize) -> Result<Dna> {
    let available = dna.number_of_genes();
    let end = from
        .checked_add(length)
        .filter(|&end| end <= available)
        .ok_or(GeneticsError::Index {
            from,
            length,
            available,
        })?;
    Ok(Dna::from_parts(
        dna.genes()[from..end].to_vec(),
        dna.min_value(),
        dna.max_value(),
    ))
}

/// Linear map from the DNA's own range onto `[target_min, target_max]`.
///
/// A DNA whose range is a single point carries no information; every gene then
/// lands on the middle of the target range.
pub fn norm_to(dna: &Dna, target_min: f64, target_max: f64) -> Result<Vec<f64>> {
    check_target(target_min, target_max)?;
    Ok(dna
        .genes()
        .iter()
        .map(|&gene| rescale(dna, gene, target_min, target_max))
        .collect())
}

pub fn normed_gene(dna: &Dna, index: usize, target_min: f64, target_max: f64) -> Result<f64> {
    check_target(target_min, target_max)?;
    let gene = dna.genes().get(index).ok_or(GeneticsError::Index {
        from: index,
        length: 1,
        available: dna.number_of_genes(),
    })?;
    Ok(rescale(dna, *gene, target_min, target_max))
}

fn rescale(dna: &Dna, gene: f64, target_min: f64, target_max: f64) -> f64 {
    let span = dna.span();
    if span == 0.0 {
        return (target_min + target_max) / 2.0;
    }
    (gene - dna.min_value()) / span * (target_max - target_min) + target_min
}

fn check_target(target_min: f64, target_max: f64) -> Result<()> {
    // NaN fails the comparison too
    if target_min <= target_max {
        Ok(())
    } else {
        Err(GeneticsError::range(format!(
            "target min {target_min} must not exceed target max {target_max}"
        )))
    }
}
