use super::errors::NetworkError;
use super::types::BROADCASTER;
use serde::{Deserialize, Serialize};

/// Run-time settings for counting and detection runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Entry point that receives the button pulse
    pub entry: String,
    /// Presses summed in counting mode
    pub press_count: u64,
    /// Module whose first low pulse ends detection mode
    pub target: String,
    /// Upper bound on presses in detection mode
    pub max_presses: u64,
    /// Require every branch to fire again at twice its first press
    pub verify_periods: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            entry: BROADCASTER.to_string(),
            press_count: 1000,
            target: "rx".to_string(),
            max_presses: 1_000_000,
            verify_periods: true,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let config: SimulationConfig =
            serde_json::from_str(json).map_err(|e| NetworkError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    pub fn with_press_count(mut self, press_count: u64) -> Self {
        self.press_count = press_count;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_max_presses(mut self, max_presses: u64) -> Self {
        self.max_presses = max_presses;
        self
    }

    pub fn with_verify_periods(mut self, verify_periods: bool) -> Self {
        self.verify_periods = verify_periods;
        self
    }

    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.entry.trim().is_empty() {
            return Err(NetworkError::Config("entry must not be empty".to_string()));
        }
        if self.target.trim().is_empty() {
            return Err(NetworkError::Config("target must not be empty".to_string()));
        }
        if self.press_count == 0 {
            return Err(NetworkError::Config("press_count must be at least 1".to_string()));
        }
        if self.max_presses == 0 {
            return Err(NetworkError::Config("max_presses must be at least 1".to_string()));
        }
        Ok(())
    }
}
