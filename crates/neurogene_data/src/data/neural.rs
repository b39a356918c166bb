use serde::{Deserialize, Serialize};

/// Closed interval the genes of a net are normalized into when they become weights.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self { min: -1.0, max: 1.0 }
    }
}

/// A weighted, one-directional link into the following layer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// Index of the target cell within the next layer.
    pub target: usize,
    /// Link weight.
    pub weight: f64,
}

/// One memory-bearing node of a [`NeuralLayerNet`].
///
/// The link list is fixed when the cell is created; only the weights change afterwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NeuralCell {
    memory: f64,
    links: Vec<Link>,
}

impl NeuralCell {
    /// Creates a cell linked to every cell of a following layer of `next_layer_size` cells.
    /// All weights start at zero.
    #[must_use]
    pub fn linked_to(next_layer_size: usize) -> Self {
        Self {
            memory: 0.0,
            links: (0..next_layer_size)
                .map(|target| Link {
                    target,
                    weight: 0.0,
                })
                .collect(),
        }
    }

    /// Creates a cell without outgoing links (terminal layer).
    #[must_use]
    pub fn terminal() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn set_memory(&mut self, memory: f64) {
        self.memory = memory;
    }

    pub fn add_memory(&mut self, delta: f64) {
        self.memory += delta;
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Weights of the outgoing links, in link order.
    pub fn weights_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.links.iter_mut().map(|link| &mut link.weight)
    }

    /// Number of genes this cell consumes when it is constructed: one per link.
    #[must_use]
    pub fn number_of_needed_genes(&self) -> usize {
        self.links.len()
    }
}

/// An ordered chain of cell layers, densely connected between neighbours.
///
/// Layer 0 is the input layer, the last layer is the output layer and has no links.
/// The shape is fixed once built; use `neurogene_core::brain::NetLogic` to build
/// and drive it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NeuralLayerNet {
    layers: Vec<Vec<NeuralCell>>,
    weight_range: WeightRange,
}

impl NeuralLayerNet {
    /// Wraps already wired layers. The caller guarantees the dense linkage.
    #[must_use]
    pub fn from_layers(layers: Vec<Vec<NeuralCell>>, weight_range: WeightRange) -> Self {
        Self {
            layers,
            weight_range,
        }
    }

    #[must_use]
    pub fn weight_range(&self) -> WeightRange {
        self.weight_range
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&[NeuralCell]> {
        self.layers.get(index).map(Vec::as_slice)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut [NeuralCell]> {
        self.layers.get_mut(index).map(Vec::as_mut_slice)
    }

    /// Borrows layer `index` and layer `index + 1` mutably at the same time.
    pub fn adjacent_layers_mut(
        &mut self,
        index: usize,
    ) -> Option<(&mut [NeuralCell], &mut [NeuralCell])> {
        let split = index.checked_add(1).filter(|&split| split < self.layers.len())?;
        let (head, tail) = self.layers.split_at_mut(split);
        Some((head[index].as_mut_slice(), tail[0].as_mut_slice()))
    }

    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    #[must_use]
    pub fn input_layer(&self) -> &[NeuralCell] {
        self.layers.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn input_layer_mut(&mut self) -> &mut [NeuralCell] {
        self.layers
            .first_mut()
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }

    #[must_use]
    pub fn output_layer(&self) -> &[NeuralCell] {
        self.layers.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn output_layer_mut(&mut self) -> &mut [NeuralCell] {
        self.layers
            .last_mut()
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }

    /// Memory values of the output layer.
    #[must_use]
    pub fn output(&self) -> Vec<f64> {
        self.output_layer().iter().map(NeuralCell::memory).collect()
    }

    /// All link weights in gene order (layer by layer, cell by cell, link by link).
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.layers
            .iter()
            .flatten()
            .flat_map(|cell| cell.links().iter().map(|link| link.weight))
            .collect()
    }
}
