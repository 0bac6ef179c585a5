use super::errors::NetworkError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Name of a module in the network
pub type ModuleName = String;

/// Default name of the entry point module
pub const BROADCASTER: &str = "broadcaster";

/// Sender name used for the pulse that starts every button press
pub const BUTTON: &str = "button";

/// A single binary signal carried along one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pulse {
    Low,
    High,
}

impl Pulse {
    pub fn is_high(self) -> bool {
        self == Pulse::High
    }

    pub fn is_low(self) -> bool {
        self == Pulse::Low
    }
}

impl From<bool> for Pulse {
    fn from(high: bool) -> Self {
        if high {
            Pulse::High
        } else {
            Pulse::Low
        }
    }
}

impl std::fmt::Display for Pulse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pulse::Low => write!(f, "low"),
            Pulse::High => write!(f, "high"),
        }
    }
}

/// Low/high pulse totals for one or more button presses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseCounts {
    pub low: u64,
    pub high: u64,
}

impl PulseCounts {
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Record one delivered pulse
    pub fn record(&mut self, pulse: Pulse) {
        match pulse {
            Pulse::Low => self.low += 1,
            Pulse::High => self.high += 1,
        }
    }

    /// Total low pulses multiplied by total high pulses
    pub fn product(&self) -> Result<u64, NetworkError> {
        self.low
            .checked_mul(self.high)
            .ok_or(NetworkError::CountOverflow {
                low: self.low,
                high: self.high,
            })
    }
}

impl Add for PulseCounts {
    type Output = PulseCounts;

    fn add(self, other: PulseCounts) -> PulseCounts {
        PulseCounts {
            low: self.low + other.low,
            high: self.high + other.high,
        }
    }
}

impl AddAssign for PulseCounts {
    fn add_assign(&mut self, other: PulseCounts) {
        self.low += other.low;
        self.high += other.high;
    }
}
