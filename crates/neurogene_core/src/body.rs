//! Body traits expressed from the first genes of an organism's DNA.
//!
//! | gene | trait | range |
//! |------|-------|-------|
//! | 0 | size | `[size_min, size_max]` |
//! | 1..4 | colour (RGB) | `0..=255` |
//! | 4 | meat efficiency | `[0, 1]`, plant efficiency is the rest |

use crate::bounded::{Bound, BoundedValue};
use crate::config::BodyConfig;
use crate::error::{GeneticsError, Result};
use crate::genetics::{Dna, DnaLogic};
use serde::{Deserialize, Serialize};

/// Genes a body consumes.
pub const BODY_GENES: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Body {
    life: BoundedValue,
    food: BoundedValue,
    size: f64,
    color: [u8; 3],
    meat_efficiency: f64,
    plant_efficiency: f64,
}

impl Body {
    /// An unexpressed body: life and food only bounded below by zero.
    #[must_use]
    pub fn new(life: f64, food: f64) -> Self {
        let open_top = Bound {
            limit: 1.0,
            active: false,
        };
        Self {
            life: BoundedValue::with_sides(life, Bound::active(0.0), open_top),
            food: BoundedValue::with_sides(food, Bound::active(0.0), open_top),
            size: 0.0,
            color: [0; 3],
            meat_efficiency: 0.0,
            plant_efficiency: 0.0,
        }
    }

    /// Expresses `dna` and starts with full life and an empty stomach.
    pub fn newborn(dna: &Dna, config: &BodyConfig) -> Result<Self> {
        let mut body = Self::new(0.0, 0.0);
        body.construct(dna, config)?;
        body.life.checked_change(body.size);
        Ok(body)
    }

    /// Sets every trait from exactly [`BODY_GENES`] genes. Life and food get
    /// bounded to `[0, size]`. Nothing changes on failure.
    pub fn construct(&mut self, dna: &Dna, config: &BodyConfig) -> Result<()> {
        if dna.number_of_genes() != BODY_GENES {
            return Err(GeneticsError::length_mismatch(
                BODY_GENES,
                dna.number_of_genes(),
            ));
        }

        let size = dna.normed_gene(0, config.size_min, config.size_max)?;
        let mut color = [0; 3];
        for (channel, value) in color.iter_mut().enumerate() {
            *value = dna
                .normed_gene(channel + 1, 0.0, 255.0)?
                .round()
                .clamp(0.0, 255.0) as u8;
        }

        let mut meat = dna.normed_gene(4, 0.0, 1.0)?;
        let mut plant = 1.0 - meat;
        if meat > config.efficiency_cutoff {
            meat = config.efficiency_bonus;
            plant = 0.0;
        } else if plant > config.efficiency_cutoff {
            meat = 0.0;
            plant = config.efficiency_bonus;
        }

        let mut life = self.life;
        let mut food = self.food;
        life.set_boundaries(&[0.0, size], &[true, true])?;
        food.set_boundaries(&[0.0, size], &[true, true])?;

        self.life = life;
        self.food = food;
        self.size = size;
        self.color = color;
        self.meat_efficiency = meat;
        self.plant_efficiency = plant;
        Ok(())
    }

    /// Adds food and returns what did not fit (positive) or was missing (negative).
    pub fn feed(&mut self, amount: f64) -> f64 {
        self.food.checked_change(amount)
    }

    /// Removes life and returns the overstep below zero.
    pub fn hurt(&mut self, damage: f64) -> f64 {
        self.life.checked_change(-damage)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life.value() > 0.0
    }

    #[must_use]
    pub fn life(&self) -> &BoundedValue {
        &self.life
    }

    #[must_use]
    pub fn food(&self) -> &BoundedValue {
        &self.food
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    #[must_use]
    pub fn meat_efficiency(&self) -> f64 {
        self.meat_efficiency
    }

    #[must_use]
    pub fn plant_efficiency(&self) -> f64 {
        self.plant_efficiency
    }
}
