use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{circuit::DT, error::positive, Error, Result};

/// Simulation settings shared by every circuit description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "SimConfig::default_dt")]
    pub dt: f64,
    /// Simulated horizon, in the same unit as the gate time constants.
    #[serde(default = "SimConfig::default_tmax")]
    pub tmax: f64,
    /// Standard deviation of the noise added to every gate step.
    #[serde(default)]
    pub sigma: f64,
    /// Fixes the noise stream across processes when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimConfig {
    fn default_dt() -> f64 {
        DT
    }

    fn default_tmax() -> f64 {
        20.0
    }

    /// Reads `path`, or returns the defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a step or horizon that is not finite and positive, and a
    /// non-finite `sigma`. Negative `sigma` only mirrors the noise.
    pub fn validate(&self) -> Result<()> {
        positive("dt", self.dt)?;
        positive("tmax", self.tmax)?;
        if !self.sigma.is_finite() {
            return Err(Error::InvalidParameter {
                name: "sigma",
                value: self.sigma,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: Self::default_dt(),
            tmax: Self::default_tmax(),
            sigma: 0.0,
            seed: None,
        }
    }
}
