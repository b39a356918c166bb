//! Encoding of external signals into the input layer and decoding of the
//! output layer into actions.

use super::*;

/// The per-archetype extension point of a [`Brain`].
pub trait SignalCodec {
    type Output;

    /// Writes `values` into the memory of the input cells.
    fn set_input(&self, input_layer: &mut [NeuralCell], values: &[f64]) -> Result<()>;

    /// Decodes the raw memory values of the output layer.
    fn interpret_output(&self, output: &[f64]) -> Self::Output;

    /// Output-layer size this codec expects, if it expects a fixed one.
    fn output_size(&self) -> Option<usize> {
        None
    }
}

/// Decoder for creature brains: 14 raw outputs become an 11-entry action vector.
///
/// | actions | raw outputs | scheme |
/// |---------|-------------|--------|
/// | 0..3    | 0..6        | opposing pairs: `0` idle, `1` first wins, `2` second wins |
/// | 3..6    | 6..9        | threshold: `1` when positive |
/// | 6..11   | 9..14       | memory: divided by the group's largest magnitude |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreatureCodec;

impl SignalCodec for CreatureCodec {
    type Output = [f64; ACTION_COUNT];

    fn set_input(&self, input_layer: &mut [NeuralCell], values: &[f64]) -> Result<()> {
        if values.len() != input_layer.len() {
            return Err(GeneticsError::length_mismatch(input_layer.len(), values.len()));
        }
        for (cell, &value) in input_layer.iter_mut().zip(values) {
            cell.set_memory(value);
        }
        Ok(())
    }

    /// Missing raw outputs read as zero.
    fn interpret_output(&self, output: &[f64]) -> Self::Output {
        let mut raw = [0.0; RAW_OUTPUTS];
        for (slot, &value) in raw.iter_mut().zip(output) {
            *slot = value;
        }
        decode(&raw)
    }

    fn output_size(&self) -> Option<usize> {
        Some(RAW_OUTPUTS)
    }
}

#[must_use]
pub fn decode(raw: &[f64; RAW_OUTPUTS]) -> [f64; ACTION_COUNT] {
    let mut actions = [0.0; ACTION_COUNT];

    for group in 0..PAIR_GROUPS {
        actions[group] = decode_pair(raw[group * 2], raw[group * 2 + 1]);
    }

    for offset in 0..THRESHOLD_OUTPUTS {
        actions[PAIR_GROUPS + offset] = decode_threshold(raw[PAIR_GROUPS * 2 + offset]);
    }

    let mut memory = [0.0; MEMORY_OUTPUTS];
    memory.copy_from_slice(&raw[MEMORY_START..RAW_OUTPUTS]);
    let start = PAIR_GROUPS + THRESHOLD_OUTPUTS;
    actions[start..].copy_from_slice(&normalize_memory(&memory));

    actions
}

/// `1 + index` of the larger value when it is positive, else `0`.
/// On a tie the first value wins.
#[must_use]
pub fn decode_pair(first: f64, second: f64) -> f64 {
    let (winner, max) = if second > first {
        (1, second)
    } else {
        (0, first)
    };
    if max > 0.0 {
        f64::from(winner + 1)
    } else {
        0.0
    }
}

#[must_use]
pub fn decode_threshold(raw: f64) -> f64 {
    if raw > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Scales the group by its largest magnitude into `[-1, 1]`.
/// An all-zero group stays all zero.
#[must_use]
pub fn normalize_memory(raw: &[f64; MEMORY_OUTPUTS]) -> [f64; MEMORY_OUTPUTS] {
    let abs_max = raw.iter().fold(0.0_f64, |max, value| max.max(value.abs()));
    if abs_max == 0.0 {
        return [0.0; MEMORY_OUTPUTS];
    }
    raw.map(|value| value / abs_max)
}
