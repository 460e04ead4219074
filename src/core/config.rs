use crate::catalog::JsonCatalog;
use crate::core::constants::DEFAULT_DATA_PATH;
use crate::core::dice::RngDice;
use crate::core::error::CatalogError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Runtime settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Catalog JSON file
    pub data_path: PathBuf,
    /// Fixed seed for a reproducible session; entropy when `None`
    pub seed: Option<u64>,
    /// Colour health bars with terminal escape codes
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed: None,
            color: true,
        }
    }
}

impl GameConfig {
    pub fn load_catalog(&self) -> Result<JsonCatalog, CatalogError> {
        JsonCatalog::from_path(&self.data_path)
    }

    pub fn dice(&self) -> RngDice<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RngDice::new(rng)
    }
}
