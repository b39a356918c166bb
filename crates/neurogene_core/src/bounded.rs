//! Scalars with independently toggleable lower and upper clamps.
//!
//! Used for biological quantities such as life and food that must stay within
//! the limits set by the body's traits. Every clamping operation reports how far
//! the value overstepped: negative below the lower bound, positive above the
//! upper bound, zero when nothing was clamped.

use crate::error::{GeneticsError, Result};
use serde::{Deserialize, Serialize};

/// One side of a [`BoundedValue`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Bound {
    pub limit: f64,
    pub active: bool,
}

impl Bound {
    #[must_use]
    pub fn active(limit: f64) -> Self {
        Self {
            limit,
            active: true,
        }
    }

    #[must_use]
    pub fn inactive() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoundedValue {
    value: f64,
    lower: Bound,
    upper: Bound,
}

impl BoundedValue {
    /// Creates an unbounded value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            lower: Bound::inactive(),
            upper: Bound::inactive(),
        }
    }

    /// Creates a value clamped to `[min, max]`, both bounds active.
    #[must_use]
    pub fn with_bounds(value: f64, min: f64, max: f64) -> Self {
        Self::with_sides(value, Bound::active(min), Bound::active(max))
    }

    /// Creates a value with explicit sides and clamps it right away.
    #[must_use]
    pub fn with_sides(value: f64, lower: Bound, upper: Bound) -> Self {
        let mut bounded = Self {
            value,
            lower,
            upper,
        };
        bounded.check_bounds();
        bounded
    }

    /// Creates a value from a `[lower, upper]` pair of limits and a matching pair
    /// of activity flags.
    ///
    /// # Errors
    /// [`GeneticsError::Arity`] unless both slices have exactly two entries.
    pub fn with_boundaries(value: f64, boundaries: &[f64], active: &[bool]) -> Result<Self> {
        let (lower, upper) = sides_from(boundaries, active)?;
        Ok(Self::with_sides(value, lower, upper))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn lower(&self) -> Bound {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> Bound {
        self.upper
    }

    /// Overwrites the value without clamping.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Clamps the value into the active bounds and returns the overstep.
    pub fn check_bounds(&mut self) -> f64 {
        let mut overstep = 0.0;
        if self.lower.active && self.value < self.lower.limit {
            overstep = self.value - self.lower.limit;
            self.value = self.lower.limit;
        } else if self.upper.active && self.value > self.upper.limit {
            overstep = self.value - self.upper.limit;
            self.value = self.upper.limit;
        }
        overstep
    }

    /// Adds `delta` without clamping.
    pub fn unchecked_change(&mut self, delta: f64) {
        self.value += delta;
    }

    /// Adds `delta`, clamps, and returns the overstep.
    pub fn checked_change(&mut self, delta: f64) -> f64 {
        self.value += delta;
        self.check_bounds()
    }

    /// Replaces both bounds, clamps, and returns the overstep.
    ///
    /// # Errors
    /// [`GeneticsError::Arity`] unless both slices have exactly two entries.
    /// The value and its bounds are left unchanged on failure.
    pub fn set_boundaries(&mut self, boundaries: &[f64], active: &[bool]) -> Result<f64> {
        let (lower, upper) = sides_from(boundaries, active)?;
        self.lower = lower;
        self.upper = upper;
        Ok(self.check_bounds())
    }
}

fn sides_from(boundaries: &[f64], active: &[bool]) -> Result<(Bound, Bound)> {
    match (boundaries, active) {
        ([lower, upper], [lower_active, upper_active]) => Ok((
            Bound {
                limit: *lower,
                active: *lower_active,
            },
            Bound {
                limit: *upper,
                active: *upper_active,
            },
        )),
        _ => Err(GeneticsError::Arity {
            boundaries: boundaries.len(),
            flags: active.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_change_clamps_at_upper() {
        let mut life = BoundedValue::with_bounds(5.0, 0.0, 10.0);
        let overstep = life.checked_change(20.0);
        assert_eq!(life.value(), 10.0);
        assert_eq!(overstep, 15.0);
    }

    #[test]
    fn test_checked_change_clamps_at_lower() {
        let mut food = BoundedValue::with_bounds(2.0, 0.0, 10.0);
        let overstep = food.checked_change(-5.0);
        assert_eq!(food.value(), 0.0);
        assert_eq!(overstep, -3.0);
    }

    #[test]
    fn test_checked_change_within_bounds() {
        let mut value = BoundedValue::with_bounds(5.0, 0.0, 10.0);
        assert_eq!(value.checked_change(1.0), 0.0);
        assert_eq!(value.value(), 6.0);
    }

    #[test]
    fn test_unbounded_never_clamps() {
        let mut value = BoundedValue::new(0.0);
        assert_eq!(value.checked_change(1e9), 0.0);
        assert_eq!(value.checked_change(-2e9), 0.0);
        assert_eq!(value.value(), -1e9);
    }

    #[test]
    fn test_unchecked_change_skips_clamp() {
        let mut value = BoundedValue::with_bounds(5.0, 0.0, 10.0);
        value.unchecked_change(20.0);
        assert_eq!(value.value(), 25.0);
        assert_eq!(value.check_bounds(), 15.0);
        assert_eq!(value.value(), 10.0);
    }

    #[test]
    fn test_single_active_side() {
        let mut value = BoundedValue::with_boundaries(3.0, &[0.0, 1.0], &[true, false])
            .expect("two entries each");
        assert_eq!(value.value(), 3.0);
        assert_eq!(value.checked_change(-4.0), -1.0);
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn test_constructor_clamps() {
        let value = BoundedValue::with_bounds(12.0, 0.0, 10.0);
        assert_eq!(value.value(), 10.0);
    }

    #[test]
    fn test_set_boundaries_reclamps() {
        let mut value = BoundedValue::new(8.0);
        let overstep = value
            .set_boundaries(&[0.0, 5.0], &[true, true])
            .expect("two entries each");
        assert_eq!(overstep, 3.0);
        assert_eq!(value.value(), 5.0);
        assert!(value.upper().active);
    }

    #[test]
    fn test_set_boundaries_arity_error_leaves_value() {
        let mut value = BoundedValue::with_bounds(4.0, 0.0, 5.0);
        let before = value;
        let err = value
            .set_boundaries(&[0.0, 1.0, 2.0], &[true, true])
            .unwrap_err();
        assert_eq!(
            err,
            GeneticsError::Arity {
                boundaries: 3,
                flags: 2
            }
        );
        assert_eq!(value, before);
        assert!(value.set_boundaries(&[0.0, 1.0], &[true]).is_err());
    }

    #[test]
    fn test_with_boundaries_arity_error() {
        assert!(BoundedValue::with_boundaries(1.0, &[], &[]).is_err());
    }
}
