use serde::{Deserialize, Serialize};

/// Length of the decoded action vector.
pub const ACTION_COUNT: usize = 11;
/// Number of remembered values carried from one decision to the next.
pub const MEMORY_OUTPUTS: usize = 5;

/// Outcome of a pair of opposing outputs.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Steer {
    /// Neither output of the pair was positive.
    #[default]
    Idle,
    /// The first output of the pair won.
    First,
    /// The second output of the pair won.
    Second,
}

impl Steer {
    /// Reads the `{0, 1, 2}` code produced by the pair decoder.
    #[must_use]
    pub fn from_code(code: f64) -> Self {
        if code == 1.0 {
            Steer::First
        } else if code == 2.0 {
            Steer::Second
        } else {
            Steer::Idle
        }
    }
}

/// Typed view of a decoded action vector.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    /// Move to the front (`First`) or the back (`Second`).
    pub advance: Steer,
    /// Move to the right (`First`) or the left (`Second`).
    pub strafe: Steer,
    /// Turn counterclockwise (`First`) or clockwise (`Second`).
    pub turn: Steer,
    pub eat: bool,
    pub attack: bool,
    pub split: bool,
    /// Remembered values, each within `[-1, 1]`.
    pub memory: [f64; MEMORY_OUTPUTS],
}

impl Decision {
    #[must_use]
    pub fn from_actions(actions: &[f64; ACTION_COUNT]) -> Self {
        let mut memory = [0.0; MEMORY_OUTPUTS];
        memory.copy_from_slice(&actions[6..ACTION_COUNT]);
        Self {
            advance: Steer::from_code(actions[0]),
            strafe: Steer::from_code(actions[1]),
            turn: Steer::from_code(actions[2]),
            eat: actions[3] > 0.0,
            attack: actions[4] > 0.0,
            split: actions[5] > 0.0,
            memory,
        }
    }
}
