use super::*;

pub fn push(cell: &mut NeuralCell, next_layer: &mut [NeuralCell]) {
    let memory = cell.memory();
    if memory == 0.0 {
        return;
    }
    for link in cell.links() {
        if let Some(target) = next_layer.get_mut(link.target) {
            target.add_memory(memory * link.weight);
        }
    }
    cell.set_memory(0.0);
}

/// One discrete propagation step.
///
/// The output layer is cleared first so stale results never accumulate, then
/// every layer pushes into its successor in increasing layer order. Cells of one
/// layer never write to each other, so their order within the layer is free.
/// The input layer is not cleared: whatever is left there (nothing, after a
/// push) carries over unless the caller sets new input.
pub fn calculate_net(net: &mut NeuralLayerNet) {
    for cell in net.output_layer_mut() {
        cell.set_memory(0.0);
    }
    for index in 0..net.layer_count().saturating_sub(1) {
        if let Some((current, next)) = net.adjacent_layers_mut(index) {
            for cell in current.iter_mut() {
                push(cell, next);
            }
        }
    }
    tracing::trace!(output = ?net.output(), "Calculated net");
}
