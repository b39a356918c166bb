use super::*;
use crate::genetics::{check_range, DnaLogic};

/// Builds the layers back to front: the terminal layer first, then every
/// preceding layer with each cell linked to every cell of the layer after it.
pub fn create_net(layer_sizes: &[usize], range: WeightRange) -> Result<NeuralLayerNet> {
    if layer_sizes.len() < 2 {
        return Err(GeneticsError::topology(format!(
            "a net needs at least an input and an output layer, got {} layer(s)",
            layer_sizes.len()
        )));
    }
    if let Some(empty) = layer_sizes.iter().position(|&size| size == 0) {
        return Err(GeneticsError::topology(format!("layer {empty} has no cells")));
    }
    check_range(range.min, range.max)?;

    let mut layers = Vec::with_capacity(layer_sizes.len());
    let mut following = None;
    for &size in layer_sizes.iter().rev() {
        let layer: Vec<NeuralCell> = match following {
            None => (0..size).map(|_| NeuralCell::terminal()).collect(),
            Some(next_size) => (0..size).map(|_| NeuralCell::linked_to(next_size)).collect(),
        };
        layers.push(layer);
        following = Some(size);
    }
    layers.reverse();

    Ok(NeuralLayerNet::from_layers(layers, range))
}

/// Sum over the non-terminal layers of `size[i] * size[i + 1]`.
pub fn number_of_needed_genes(net: &NeuralLayerNet) -> usize {
    (0..net.layer_count())
        .filter_map(|index| net.layer(index))
        .flatten()
        .map(NeuralCell::number_of_needed_genes)
        .sum()
}

pub fn construct_cell(cell: &mut NeuralCell, dna: &Dna, range: WeightRange) -> Result<()> {
    let needed = cell.number_of_needed_genes();
    if dna.number_of_genes() != needed {
        return Err(GeneticsError::length_mismatch(needed, dna.number_of_genes()));
    }
    let normed = dna.norm_to(range.min, range.max)?;
    for (weight, value) in cell.weights_mut().zip(normed) {
        *weight = value;
    }
    Ok(())
}

/// Hands every non-terminal cell a contiguous gene block as long as the next
/// layer. Wires a staging copy and only commits it once every cell succeeded.
pub fn construct_net(net: &mut NeuralLayerNet, dna: &Dna) -> Result<()> {
    let needed = number_of_needed_genes(net);
    if dna.number_of_genes() != needed {
        return Err(GeneticsError::length_mismatch(needed, dna.number_of_genes()));
    }

    let range = net.weight_range();
    let mut staged = net.clone();
    let mut position = 0;
    for index in 0..staged.layer_count().saturating_sub(1) {
        let Some((current, next)) = staged.adjacent_layers_mut(index) else {
            break;
        };
        let block = next.len();
        for cell in current.iter_mut() {
            cell.construct(&dna.sequence(position, block)?, range)?;
            position += block;
        }
    }

    *net = staged;
    tracing::debug!(
        genes = needed,
        layers = ?net.layer_sizes(),
        "Constructed neural net"
    );
    Ok(())
}
