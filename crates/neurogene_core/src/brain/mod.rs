pub mod codec;
pub mod forward;
pub mod topology;

pub use codec::{CreatureCodec, SignalCodec};
pub use neurogene_data::{
    Decision, Dna, Link, NeuralCell, NeuralLayerNet, Steer, WeightRange, ACTION_COUNT,
    MEMORY_OUTPUTS,
};

use crate::error::{GeneticsError, Result};

/// Trait defining the per-cell logic of a layered net.
pub trait CellLogic {
    /// Sets every link weight from `dna`, one gene per link in link order,
    /// normalized into `range`.
    fn construct(&mut self, dna: &Dna, range: WeightRange) -> Result<()>;

    /// Adds `memory * weight` into every linked cell of `next_layer`, then
    /// clears the own memory. Does nothing while the memory is exactly zero.
    fn push(&mut self, next_layer: &mut [NeuralCell]);
}

/// Trait defining the structural and propagation logic of a layered net.
pub trait NetLogic: Sized {
    /// Builds a net with the default `[-1, 1]` weight range.
    fn new(layer_sizes: &[usize]) -> Result<Self>;
    fn with_weight_range(layer_sizes: &[usize], range: WeightRange) -> Result<Self>;

    #[must_use]
    fn number_of_needed_genes(&self) -> usize;

    /// Overwrites every weight from `dna`. All or nothing.
    fn construct(&mut self, dna: &Dna) -> Result<()>;

    /// One forward pass through every layer.
    fn calculate_net(&mut self);
}

pub const OUTPUT_LABELS: [&str; 14] = [
    "Front",
    "Back",
    "Right",
    "Left",
    "TurnCCW",
    "TurnCW",
    "Eat",
    "Attack",
    "Split",
    "Mem0",
    "Mem1",
    "Mem2",
    "Mem3",
    "Mem4",
];

/// Output-layer size a [`CreatureCodec`] decodes.
pub const RAW_OUTPUTS: usize = OUTPUT_LABELS.len();
pub const PAIR_GROUPS: usize = 3;
pub const THRESHOLD_OUTPUTS: usize = 3;
pub const MEMORY_START: usize = PAIR_GROUPS * 2 + THRESHOLD_OUTPUTS;

impl CellLogic for NeuralCell {
    fn construct(&mut self, dna: &Dna, range: WeightRange) -> Result<()> {
        topology::construct_cell(self, dna, range)
    }

    fn push(&mut self, next_layer: &mut [NeuralCell]) {
        forward::push(self, next_layer)
    }
}

impl NetLogic for NeuralLayerNet {
    fn new(layer_sizes: &[usize]) -> Result<Self> {
        topology::create_net(layer_sizes, WeightRange::default())
    }

    fn with_weight_range(layer_sizes: &[usize], range: WeightRange) -> Result<Self> {
        topology::create_net(layer_sizes, range)
    }

    fn number_of_needed_genes(&self) -> usize {
        topology::number_of_needed_genes(self)
    }

    fn construct(&mut self, dna: &Dna) -> Result<()> {
        topology::construct_net(self, dna)
    }

    fn calculate_net(&mut self) {
        forward::calculate_net(self)
    }
}

/// A layered net paired with the codec that feeds and reads it.
#[derive(Clone, Debug)]
pub struct Brain<C: SignalCodec = CreatureCodec> {
    net: NeuralLayerNet,
    codec: C,
}

impl Brain<CreatureCodec> {
    /// A creature brain: the output layer must hold [`RAW_OUTPUTS`] cells.
    pub fn new(layer_sizes: &[usize], range: WeightRange) -> Result<Self> {
        Self::with_codec(
            NeuralLayerNet::with_weight_range(layer_sizes, range)?,
            CreatureCodec,
        )
    }
}

impl<C: SignalCodec> Brain<C> {
    pub fn with_codec(net: NeuralLayerNet, codec: C) -> Result<Self> {
        if let Some(expected) = codec.output_size() {
            let found = net.output_layer().len();
            if found != expected {
                return Err(GeneticsError::topology(format!(
                    "codec decodes {expected} outputs but the output layer has {found} cells"
                )));
            }
        }
        Ok(Self { net, codec })
    }

    #[must_use]
    pub fn net(&self) -> &NeuralLayerNet {
        &self.net
    }

    #[must_use]
    pub fn codec(&self) -> &C {
        &self.codec
    }

    #[must_use]
    pub fn number_of_needed_genes(&self) -> usize {
        self.net.number_of_needed_genes()
    }

    pub fn construct(&mut self, dna: &Dna) -> Result<()> {
        self.net.construct(dna)
    }

    pub fn set_input(&mut self, values: &[f64]) -> Result<()> {
        self.codec.set_input(self.net.input_layer_mut(), values)
    }

    pub fn calculate_net(&mut self) {
        self.net.calculate_net();
    }

    #[must_use]
    pub fn interpret_output(&self) -> C::Output {
        self.codec.interpret_output(&self.net.output())
    }

    /// Sets the input, runs one pass and decodes the result.
    pub fn think(&mut self, values: &[f64]) -> Result<C::Output> {
        self.set_input(values)?;
        self.calculate_net();
        Ok(self.interpret_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::DnaLogic;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_memory_start_index() {
        assert_eq!(MEMORY_START, 9);
        assert_eq!(RAW_OUTPUTS - MEMORY_START, MEMORY_OUTPUTS);
    }

    #[test]
    fn test_creature_brain_requires_fourteen_outputs() {
        assert!(Brain::new(&[4, 6, RAW_OUTPUTS], WeightRange::default()).is_ok());
        assert!(matches!(
            Brain::new(&[4, 6, 11], WeightRange::default()),
            Err(GeneticsError::Topology(_))
        ));
    }

    #[test]
    fn test_brain_think_produces_action_vector() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut brain = Brain::new(&[3, 5, RAW_OUTPUTS], WeightRange::default())
            .expect("valid topology");
        let dna = Dna::new_random_with_rng(brain.number_of_needed_genes(), 0.0, 1.0, &mut rng)
            .expect("valid range");
        brain.construct(&dna).expect("matching gene count");

        let actions = brain.think(&[0.5, -0.25, 1.0]).expect("matching input");
        assert_eq!(actions.len(), ACTION_COUNT);
        for &code in &actions[..PAIR_GROUPS] {
            assert!(code == 0.0 || code == 1.0 || code == 2.0);
        }
        for &flag in &actions[PAIR_GROUPS..6] {
            assert!(flag == 0.0 || flag == 1.0);
        }
        for &memory in &actions[6..] {
            assert!((-1.0..=1.0).contains(&memory));
        }
    }

    #[test]
    fn test_brain_think_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut brain1 = Brain::new(&[2, RAW_OUTPUTS], WeightRange::default())
            .expect("valid topology");
        let dna = Dna::new_random_with_rng(brain1.number_of_needed_genes(), -1.0, 1.0, &mut rng)
            .expect("valid range");
        brain1.construct(&dna).expect("matching gene count");
        let mut brain2 = brain1.clone();

        let a = brain1.think(&[0.3, 0.7]).expect("matching input");
        let b = brain2.think(&[0.3, 0.7]).expect("matching input");
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_input_length_mismatch() {
        let mut brain = Brain::new(&[3, RAW_OUTPUTS], WeightRange::default())
            .expect("valid topology");
        assert_eq!(
            brain.set_input(&[1.0, 2.0]),
            Err(GeneticsError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert!(brain.net().input_layer().iter().all(|c| c.memory() == 0.0));
    }
}
