use super::cycle_analyzer::{BranchPeriod, CycleAnalysis};
use super::errors::NetworkError;
use super::types::{ModuleName, PulseCounts};
use serde::Serialize;

/// Outcome of a counting run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PulseReport {
    pub presses: u64,
    pub low: u64,
    pub high: u64,
    pub product: u64,
}

impl PulseReport {
    pub fn new(presses: u64, counts: PulseCounts) -> Result<Self, NetworkError> {
        Ok(Self {
            presses,
            low: counts.low,
            high: counts.high,
            product: counts.product()?,
        })
    }
}

/// Outcome of a detection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub target: ModuleName,
    /// Hub conjunction, absent when found by brute force
    pub hub: Option<ModuleName>,
    pub branches: Vec<BranchPeriod>,
    pub presses: u64,
}

impl DetectionReport {
    /// Report for a target found by pressing until it received a low pulse
    pub fn brute_force(target: &str, presses: u64) -> Self {
        Self {
            target: target.to_string(),
            hub: None,
            branches: Vec::new(),
            presses,
        }
    }
}

impl From<CycleAnalysis> for DetectionReport {
    fn from(analysis: CycleAnalysis) -> Self {
        Self {
            target: analysis.target,
            hub: Some(analysis.hub),
            branches: analysis.branches,
            presses: analysis.presses,
        }
    }
}
