pub mod data;

pub use data::decision::{Decision, Steer, ACTION_COUNT, MEMORY_OUTPUTS};
pub use data::genome::Dna;
pub use data::neural::{Link, NeuralCell, NeuralLayerNet, WeightRange};
