pub mod crossover;
pub mod mutation;
pub mod sequence;

pub use neurogene_data::Dna;
use rand::Rng;

use crate::error::{GeneticsError, Result};

/// Trait defining the genetic operators on [`Dna`].
///
/// Randomness always comes from the caller's generator so runs stay reproducible.
pub trait DnaLogic: Sized {
    /// `count` genes, all zero, sharing the range `[min, max]`.
    fn with_count(count: usize, min: f64, max: f64) -> Result<Self>;

    /// Wraps `genes` without checking them against `[min, max]`.
    fn from_genes(genes: Vec<f64>, min: f64, max: f64) -> Result<Self>;

    /// `count` genes drawn uniformly from `[min, max]`.
    fn new_random_with_rng<R: Rng>(count: usize, min: f64, max: f64, rng: &mut R)
        -> Result<Self>;

    fn sequence(&self, from: usize, length: usize) -> Result<Self>;
    fn norm_to(&self, target_min: f64, target_max: f64) -> Result<Vec<f64>>;
    fn normed_gene(&self, index: usize, target_min: f64, target_max: f64) -> Result<f64>;
    fn mutate<R: Rng>(&mut self, probability: f64, strength: f64, rng: &mut R) -> Result<usize>;
    fn recombine_with<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self>;
}

impl DnaLogic for Dna {
    fn with_count(count: usize, min: f64, max: f64) -> Result<Self> {
        check_range(min, max)?;
        Ok(Dna::from_parts(vec![0.0; count], min, max))
    }

    fn from_genes(genes: Vec<f64>, min: f64, max: f64) -> Result<Self> {
        check_range(min, max)?;
        Ok(Dna::from_parts(genes, min, max))
    }

    fn new_random_with_rng<R: Rng>(
        count: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Self> {
        check_range(min, max)?;
        let genes = (0..count).map(|_| rng.gen_range(min..=max)).collect();
        Ok(Dna::from_parts(genes, min, max))
    }

    fn sequence(&self, from: usize, length: usize) -> Result<Self> {
        sequence::sequence(self, from, length)
    }

    fn norm_to(&self, target_min: f64, target_max: f64) -> Result<Vec<f64>> {
        sequence::norm_to(self, target_min, target_max)
    }

    fn normed_gene(&self, index: usize, target_min: f64, target_max: f64) -> Result<f64> {
        sequence::normed_gene(self, index, target_min, target_max)
    }

    fn mutate<R: Rng>(&mut self, probability: f64, strength: f64, rng: &mut R) -> Result<usize> {
        mutation::mutate(self, probability, strength, rng)
    }

    fn recombine_with<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self> {
        crossover::recombine_with_rng(self, other, rng)
    }
}

/// Genetic ranges must be finite and ordered.
pub(crate) fn check_range(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GeneticsError::range(format!(
            "bounds [{min}, {max}] must be finite"
        )));
    }
    if min > max {
        return Err(GeneticsError::range(format!(
            "min-value {min} must not exceed max-value {max}"
        )));
    }
    if !(max - min).is_finite() {
        return Err(GeneticsError::range(format!(
            "span of [{min}, {max}] overflows"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_with_count_is_zeroed() {
        let dna = Dna::with_count(4, -1.0, 1.0).expect("valid range");
        assert_eq!(dna.genes(), &[0.0; 4]);
        assert_eq!((dna.min_value(), dna.max_value()), (-1.0, 1.0));
    }

    #[test]
    fn test_from_genes_does_not_validate_values() {
        let dna = Dna::from_genes(vec![5.0, -5.0], 0.0, 1.0).expect("valid range");
        assert_eq!(dna.genes(), &[5.0, -5.0]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            Dna::with_count(3, 1.0, 0.0),
            Err(GeneticsError::Range(_))
        ));
        assert!(matches!(
            Dna::from_genes(vec![0.0], 0.0, f64::NAN),
            Err(GeneticsError::Range(_))
        ));
    }

    #[test]
    fn test_overflowing_span_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(matches!(
            Dna::new_random_with_rng(4, -f64::MAX, f64::MAX, &mut rng),
            Err(GeneticsError::Range(_))
        ));
        assert!(matches!(
            Dna::with_count(4, -f64::MAX, f64::MAX),
            Err(GeneticsError::Range(_))
        ));
        assert!(Dna::with_count(4, 0.0, f64::MAX).is_ok());
    }

    #[test]
    fn test_random_genes_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let dna = Dna::new_random_with_rng(200, -2.0, 3.0, &mut rng).expect("valid range");
        assert_eq!(dna.number_of_genes(), 200);
        assert!(dna.genes().iter().all(|g| (-2.0..=3.0).contains(g)));
    }

    #[test]
    fn test_random_genes_deterministic() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        let a = Dna::new_random_with_rng(16, 0.0, 1.0, &mut rng1).expect("valid range");
        let b = Dna::new_random_with_rng(16, 0.0, 1.0, &mut rng2).expect("valid range");
        assert_eq!(a, b);
    }
}
