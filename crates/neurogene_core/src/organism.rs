//! A single organism: its DNA, the body and brain expressed from it, and the
//! memory it carries from one decision to the next.

use crate::body::{Body, BODY_GENES};
use crate::brain::{Brain, Decision, MEMORY_OUTPUTS};
use crate::config::AppConfig;
use crate::error::{GeneticsError, Result};
use crate::genetics::{Dna, DnaLogic};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Organism {
    id: u64,
    generation: u32,
    dna: Dna,
    body: Body,
    brain: Brain,
    memory: [f64; MEMORY_OUTPUTS],
}

impl Organism {
    pub fn new_random_with_rng<R: Rng>(id: u64, config: &AppConfig, rng: &mut R) -> Result<Self> {
        let dna = Dna::new_random_with_rng(
            config.gene_count(),
            config.dna.gene_min,
            config.dna.gene_max,
            rng,
        )?;
        Self::from_dna(id, 0, dna, config)
    }

    /// Expresses `dna`: the first [`BODY_GENES`] genes build the body, the rest
    /// wire the brain.
    pub fn from_dna(id: u64, generation: u32, dna: Dna, config: &AppConfig) -> Result<Self> {
        let expected = config.gene_count();
        if dna.number_of_genes() != expected {
            return Err(GeneticsError::length_mismatch(
                expected,
                dna.number_of_genes(),
            ));
        }

        let body = Body::newborn(&dna.sequence(0, BODY_GENES)?, &config.body)?;
        let mut brain = Brain::new(&config.brain.layer_sizes, config.brain.weight_range())?;
        brain.construct(&dna.sequence(BODY_GENES, brain.number_of_needed_genes())?)?;

        tracing::debug!(id, generation, genes = expected, "Expressed organism");
        Ok(Self {
            id,
            generation,
            dna,
            body,
            brain,
            memory: [0.0; MEMORY_OUTPUTS],
        })
    }

    /// One decision: the senses followed by the remembered values are written
    /// into the input layer, the net runs one pass, and the decoded memory is
    /// kept for the next call.
    pub fn think(&mut self, senses: &[f64]) -> Result<Decision> {
        let mut input = Vec::with_capacity(senses.len() + MEMORY_OUTPUTS);
        input.extend_from_slice(senses);
        input.extend_from_slice(&self.memory);

        let actions = self.brain.think(&input)?;
        let decision = Decision::from_actions(&actions);
        self.memory = decision.memory;
        Ok(decision)
    }

    /// Recombines both parents' DNA, mutates it with the configured evolution
    /// parameters and expresses the child one generation after the elder parent.
    pub fn offspring_with_rng<R: Rng>(
        &self,
        other: &Organism,
        id: u64,
        config: &AppConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let mut dna = self.dna.recombine_with(&other.dna, rng)?;
        dna.mutate(
            config.evolution.mutation_probability,
            config.evolution.mutation_strength,
            rng,
        )?;
        let generation = self.generation.max(other.generation) + 1;
        Self::from_dna(id, generation, dna, config)
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn dna(&self) -> &Dna {
        &self.dna
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    #[must_use]
    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    #[must_use]
    pub fn memory(&self) -> [f64; MEMORY_OUTPUTS] {
        self.memory
    }
}
