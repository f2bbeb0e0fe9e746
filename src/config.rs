//! Simulator settings loaded from TOML.
//!
//! ```toml
//! max_qubits = 5
//! seed = 42
//! shots = 1024
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::circuit::MAX_QUBITS;
use crate::error::{Result, SimError};

/// Largest register offered by the interactive menu unless configured otherwise.
pub const DEFAULT_MAX_QUBITS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Upper bound accepted when prompting for the qubit count.
    pub max_qubits: usize,
    /// Seed for the measurement RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Number of shots for histogram sampling.
    pub shots: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            seed: None,
            shots: 1024,
        }
    }
}

impl SimulatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SimulatorConfig =
            toml::from_str(text).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(SimError::Config(format!(
                "max_qubits must be between 1 and {}, got {}",
                MAX_QUBITS, self.max_qubits
            )));
        }
        if self.shots == 0 {
            return Err(SimError::Config("shots must be positive".to_string()));
        }
        Ok(())
    }
}
