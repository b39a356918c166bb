pub mod macros;

use neurogene_lib::model::config::AppConfig;
use neurogene_lib::model::organism::Organism;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct OrganismBuilder {
    config: AppConfig,
    seed: u64,
    id: u64,
}

#[allow(dead_code)]
impl OrganismBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            seed: 42,
            id: 1,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    pub fn build(self) -> (Organism, AppConfig, ChaCha8Rng) {
        let mut rng = self.rng();
        let organism = Organism::new_random_with_rng(self.id, &self.config, &mut rng)
            .expect("Failed to build organism");
        (organism, self.config, rng)
    }
}
