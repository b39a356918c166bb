//! Configuration management for organism archetypes.
//!
//! This module provides strongly-typed configuration structures that map to a
//! `config.toml` file. Every section has working defaults.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [dna]
//! gene_min = 0.0
//! gene_max = 1.0
//!
//! [brain]
//! layer_sizes = [12, 10, 14]
//! weight_min = -1.0
//! weight_max = 1.0
//!
//! [body]
//! size_min = 0.5
//! size_max = 3.0
//! efficiency_cutoff = 0.8
//! efficiency_bonus = 1.2
//!
//! [evolution]
//! mutation_probability = 0.05
//! mutation_strength = 0.1
//! ```

use crate::body::BODY_GENES;
use crate::brain::{MEMORY_OUTPUTS, RAW_OUTPUTS};
use neurogene_data::WeightRange;
use serde::{Deserialize, Serialize};

/// Genetic range shared by every gene of an organism.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DnaConfig {
    pub gene_min: f64,
    pub gene_max: f64,
}

impl Default for DnaConfig {
    fn default() -> Self {
        Self {
            gene_min: 0.0,
            gene_max: 1.0,
        }
    }
}

/// Shape of the decision net and the range its genes are normalized into.
///
/// The input layer holds the senses followed by the remembered values fed
/// back from the previous decision.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BrainConfig {
    pub layer_sizes: Vec<usize>,
    pub weight_min: f64,
    pub weight_max: f64,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            layer_sizes: vec![7 + MEMORY_OUTPUTS, 10, RAW_OUTPUTS],
            weight_min: -1.0,
            weight_max: 1.0,
        }
    }
}

impl BrainConfig {
    #[must_use]
    pub fn weight_range(&self) -> WeightRange {
        WeightRange {
            min: self.weight_min,
            max: self.weight_max,
        }
    }

    /// Number of external senses the input layer takes besides the memory slots.
    #[must_use]
    pub fn sense_count(&self) -> usize {
        self.layer_sizes
            .first()
            .map_or(0, |&inputs| inputs.saturating_sub(MEMORY_OUTPUTS))
    }

    #[must_use]
    pub fn number_of_needed_genes(&self) -> usize {
        self.layer_sizes.windows(2).map(|pair| pair[0] * pair[1]).sum()
    }
}

/// Thresholds for turning genes into body traits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    pub size_min: f64,
    pub size_max: f64,
    /// Above this, a diet efficiency is promoted to a pure specialist.
    pub efficiency_cutoff: f64,
    /// Efficiency a pure specialist gets.
    pub efficiency_bonus: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            size_min: 0.5,
            size_max: 3.0,
            efficiency_cutoff: 0.8,
            efficiency_bonus: 1.2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionConfig {
    pub mutation_probability: f64,
    pub mutation_strength: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_probability: 0.05,
            mutation_strength: 0.1,
        }
    }
}

/// Complete configuration of one organism archetype.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub dna: DnaConfig,
    pub brain: BrainConfig,
    pub body: BodyConfig,
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    /// Total genes of an organism: body genes first, then the net's genes.
    #[must_use]
    pub fn gene_count(&self) -> usize {
        BODY_GENES + self.brain.number_of_needed_genes()
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // DNA validation
        anyhow::ensure!(
            self.dna.gene_min.is_finite() && self.dna.gene_max.is_finite(),
            "Gene bounds must be finite"
        );
        anyhow::ensure!(
            self.dna.gene_min < self.dna.gene_max,
            "Gene min must be below gene max"
        );

        // Brain validation
        anyhow::ensure!(
            self.brain.layer_sizes.len() >= 2,
            "Brain needs at least an input and an output layer"
        );
        anyhow::ensure!(
            self.brain.layer_sizes.iter().all(|&size| size > 0),
            "Every brain layer needs at least one cell"
        );
        anyhow::ensure!(
            self.brain.layer_sizes.first().copied().unwrap_or(0) > MEMORY_OUTPUTS,
            "Input layer must hold at least one sense besides the {} memory slots",
            MEMORY_OUTPUTS
        );
        anyhow::ensure!(
            self.brain.layer_sizes.last().copied() == Some(RAW_OUTPUTS),
            "Output layer must have exactly {} cells",
            RAW_OUTPUTS
        );
        anyhow::ensure!(
            self.brain.weight_min.is_finite() && self.brain.weight_max.is_finite(),
            "Weight bounds must be finite"
        );
        anyhow::ensure!(
            self.brain.weight_min <= self.brain.weight_max,
            "Weight min must not exceed weight max"
        );

        // Body validation
        anyhow::ensure!(self.body.size_min > 0.0, "Size min must be positive");
        anyhow::ensure!(
            self.body.size_min <= self.body.size_max,
            "Size min must not exceed size max"
        );
        anyhow::ensure!(
            self.body.efficiency_cutoff >= 0.5 && self.body.efficiency_cutoff <= 1.0,
            "Efficiency cutoff must be in [0.5, 1.0]"
        );
        anyhow::ensure!(
            self.body.efficiency_bonus >= 0.0,
            "Efficiency bonus must be non-negative"
        );

        // Evolution validation
        anyhow::ensure!(
            self.evolution.mutation_probability >= 0.0
                && self.evolution.mutation_probability <= 1.0,
            "Mutation probability must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.evolution.mutation_strength >= 0.0,
            "Mutation strength must be non-negative"
        );

        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "Rejected archetype configuration");
            return Err(e);
        }
        Ok(config)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.dna).as_bytes());
        hasher.update(format!("{:?}", self.brain).as_bytes());
        hasher.update(format!("{:?}", self.body).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hex::encode(hasher.finalize())
    }
}
