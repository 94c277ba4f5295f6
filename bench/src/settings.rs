use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

use crate::Result;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchSettings {
    pub ray_count: u32,
    pub seed: u32,
    /// Ring count of the tessellated sphere, the grid gets the same number of cells per side
    pub mesh_resolution: u32,
    /// Any `log::LevelFilter` name
    pub log_level: String,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            ray_count: 1 << 20,
            seed: 0x73b9_642e,
            mesh_resolution: 32,
            log_level: "info".into(),
        }
    }
}

impl BenchSettings {
    /// Reads settings from a YAML file, missing fields falling back to defaults.
    /// No path gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::open(path)?;
                Ok(serde_yaml::from_reader(file)?)
            }
            None => Ok(Self::default()),
        }
    }
}
