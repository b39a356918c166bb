//! # Neurogene Core
//!
//! The genotype-to-phenotype kernel of an artificial-life simulation.
//!
//! This crate contains:
//! - Real-valued DNA with mutation, uniform crossover, slicing and rescaling
//! - Layered, memory-propagating decision nets wired from DNA
//! - Decoding of net output into creature actions
//! - Bounded scalars for biological quantities
//! - Body traits and organisms expressed from DNA
//!
//! ## Architecture
//!
//! Plain data lives in `neurogene_data`; the behaviour is attached here through
//! the [`DnaLogic`], [`CellLogic`] and [`NetLogic`] traits. Every operation is
//! synchronous and every random draw comes from a caller-supplied generator, so
//! a seeded run is reproducible.
//!
//! ## Example
//!
//! ```
//! use neurogene_core::brain::{NetLogic, NeuralLayerNet};
//! use neurogene_core::genetics::{Dna, DnaLogic};
//!
//! let mut net = NeuralLayerNet::new(&[1, 1]).unwrap();
//! let dna = Dna::from_genes(vec![0.75], 0.0, 1.0).unwrap();
//! net.construct(&dna).unwrap();
//!
//! net.input_layer_mut()[0].set_memory(2.0);
//! net.calculate_net();
//! assert_eq!(net.output(), vec![1.0]);
//! ```

/// Body traits expressed from DNA
pub mod body;
/// Scalars with toggleable lower and upper clamps
pub mod bounded;
/// Layered decision nets and their codecs
pub mod brain;
/// Configuration of organism archetypes
pub mod config;
/// Error types
pub mod error;
/// Real-valued DNA and its genetic operators
pub mod genetics;
/// Logging setup
pub mod metrics;
/// Organisms assembled from DNA, body and brain
pub mod organism;

pub use bounded::{Bound, BoundedValue};
pub use brain::{Brain, CellLogic, CreatureCodec, NetLogic, SignalCodec};
pub use error::{GeneticsError, Result};
pub use genetics::DnaLogic;
pub use metrics::init_logging;
pub use neurogene_data::{Decision, Dna, NeuralCell, NeuralLayerNet, Steer, WeightRange};
pub use organism::Organism;
