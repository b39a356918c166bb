use serde::{Deserialize, Serialize};

/// A fixed-length sequence of real-valued genes sharing one numeric range.
///
/// The gene count never changes after construction: callers only ever get
/// slices of the sequence. Validated constructors and all genetic operators
/// live in `neurogene_core::genetics::DnaLogic`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dna {
    genes: Vec<f64>,
    min_value: f64,
    max_value: f64,
}

impl Dna {
    /// Wraps the given parts as-is. Neither the genes nor the bounds are checked.
    #[must_use]
    pub fn from_parts(genes: Vec<f64>, min_value: f64, max_value: f64) -> Self {
        Self {
            genes,
            min_value,
            max_value,
        }
    }

    #[must_use]
    pub fn number_of_genes(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable access to the gene values. The length stays fixed.
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Width of the genetic range (`max_value - min_value`).
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Whether both DNAs share the exact same bounds.
    #[must_use]
    pub fn same_bounds(&self, other: &Dna) -> bool {
        self.min_value == other.min_value && self.max_value == other.max_value
    }
}
