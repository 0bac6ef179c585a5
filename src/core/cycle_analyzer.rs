//! Termination detection by branch periods.
//!
//! The target is fed by a single conjunction (the hub). The hub emits low
//! only once every one of its inputs has most recently sent high. Each input
//! is driven by an independent counter-like sub-network that fires (sends
//! high into the hub) on a fixed period. Measuring every period and combining
//! them with a least common multiple gives the first press on which all
//! branches fire together, without simulating that many presses.

use super::config::SimulationConfig;
use super::dispatcher::{Dispatcher, PressObserver};
use super::errors::NetworkError;
use super::event::PulseEvent;
use super::module::ModuleKind;
use super::network::Network;
use super::types::{ModuleName, Pulse, PulseCounts};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `None` on overflow. `lcm(0, n)` is 0.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Fold `lcm` over all values; an empty input yields 1
pub fn lcm_all<I: IntoIterator<Item = u64>>(values: I) -> Option<u64> {
    values
        .into_iter()
        .try_fold(1u64, |acc, value| lcm(acc, value))
}

/// Measured period of one branch feeding the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchPeriod {
    pub name: ModuleName,
    pub period: u64,
    /// Whether a second fire confirmed the period
    pub confirmed: bool,
}

/// Result of a cycle analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleAnalysis {
    pub target: ModuleName,
    pub hub: ModuleName,
    pub branches: Vec<BranchPeriod>,
    /// First press on which the target receives a low pulse
    pub presses: u64,
    /// Presses actually simulated to measure the branches
    pub simulated_presses: u64,
}

/// Records the presses on which each branch sent high into the hub, whether
/// a firing branch dropped back to low before the press ended, and the first
/// press on which the target itself received a low pulse.
struct BranchTracker {
    hub: ModuleName,
    target: ModuleName,
    branches: Vec<ModuleName>,
    fires: HashMap<ModuleName, Vec<u64>>,
    /// Last pulse each branch sent into the hub during the current press
    last_pulse: HashMap<ModuleName, Pulse>,
    latched: Option<(ModuleName, u64)>,
    target_low: Option<u64>,
}

impl BranchTracker {
    fn new(hub: &str, target: &str, branches: &[ModuleName]) -> Self {
        Self {
            hub: hub.to_string(),
            target: target.to_string(),
            branches: branches.to_vec(),
            fires: branches.iter().map(|b| (b.clone(), Vec::new())).collect(),
            last_pulse: HashMap::new(),
            latched: None,
            target_low: None,
        }
    }

    fn fires(&self, branch: &str) -> &[u64] {
        self.fires.get(branch).map(|f| f.as_slice()).unwrap_or(&[])
    }
}

impl PressObserver for BranchTracker {
    fn on_pulse(&mut self, press: u64, event: &PulseEvent) {
        if self.target_low.is_none() && event.is_low_to(&self.target) {
            self.target_low = Some(press);
        }
        if event.receiver != self.hub {
            return;
        }
        if let Some(fires) = self.fires.get_mut(&event.sender) {
            self.last_pulse.insert(event.sender.clone(), event.pulse);
            // One fire per press is enough
            if event.pulse.is_high() && fires.last() != Some(&press) {
                fires.push(press);
            }
        }
    }

    fn on_press_complete(&mut self, press: u64, _counts: PulseCounts) {
        if self.latched.is_none() {
            self.latched = self
                .branches
                .iter()
                .find(|b| self.fires(b).last() == Some(&press) && self.last_pulse.get(*b) == Some(&Pulse::High))
                .map(|b| (b.clone(), press));
        }
        self.last_pulse.clear();
    }
}

/// Combine branch periods into the first press on which all of them fire together
pub fn combine_periods(periods: &[BranchPeriod]) -> Result<u64, NetworkError> {
    lcm_all(periods.iter().map(|p| p.period)).ok_or(NetworkError::PeriodOverflow)
}

/// Finds the press count at which a target first receives a low pulse
pub struct CycleAnalyzer {
    target: ModuleName,
    max_presses: u64,
    verify_periods: bool,
}

impl CycleAnalyzer {
    pub fn new(target: impl Into<ModuleName>) -> Self {
        let defaults = SimulationConfig::default();
        Self {
            target: target.into(),
            max_presses: defaults.max_presses,
            verify_periods: defaults.verify_periods,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            target: config.target.clone(),
            max_presses: config.max_presses,
            verify_periods: config.verify_periods,
        }
    }

    pub fn with_max_presses(mut self, max_presses: u64) -> Self {
        self.max_presses = max_presses;
        self
    }

    pub fn with_verify_periods(mut self, verify_periods: bool) -> Self {
        self.verify_periods = verify_periods;
        self
    }

    /// Locate the hub conjunction and the branches feeding it
    pub fn find_branches(&self, network: &Network) -> Result<(ModuleName, Vec<ModuleName>), NetworkError> {
        let feeders = network.senders_to(&self.target);
        let hub = match feeders.as_slice() {
            [] => return Err(NetworkError::UnreachableTarget(self.target.clone())),
            [hub] => hub.clone(),
            _ => {
                return Err(NetworkError::UnsupportedTopology(format!(
                    "'{}' is fed by {} modules, expected a single conjunction",
                    self.target,
                    feeders.len()
                )))
            }
        };

        let kind = network.module(&hub).map(|m| m.kind());
        if kind != Some(ModuleKind::Conjunction) {
            return Err(NetworkError::UnsupportedTopology(format!(
                "'{}' feeds '{}' but is not a conjunction",
                hub, self.target
            )));
        }

        let branches = network.senders_to(&hub);
        if branches.is_empty() {
            return Err(NetworkError::UnsupportedTopology(format!(
                "hub '{}' has no inputs",
                hub
            )));
        }
        Ok((hub, branches))
    }

    /// Press until every branch period is known, then combine them
    pub fn analyze(&self, dispatcher: &mut Dispatcher) -> Result<CycleAnalysis, NetworkError> {
        if dispatcher.presses() != 0 {
            return Err(NetworkError::InvalidOperation(format!(
                "cycle analysis needs an unpressed network, {} presses already made",
                dispatcher.presses()
            )));
        }

        let (hub, branches) = self.find_branches(dispatcher.network())?;
        debug!(
            "Analyzing '{}' through hub '{}' with branches {:?}",
            self.target, hub, branches
        );

        let needed = if self.verify_periods { 2 } else { 1 };
        let mut tracker = BranchTracker::new(&hub, &self.target, &branches);

        while !branches.iter().all(|b| tracker.fires(b).len() >= needed) {
            if dispatcher.presses() >= self.max_presses {
                warn!(
                    "Gave up on '{}' after {} presses",
                    self.target,
                    dispatcher.presses()
                );
                return Err(NetworkError::PressLimitExceeded {
                    limit: self.max_presses,
                });
            }
            dispatcher.press_observed(&mut tracker)?;

            if let Some(press) = tracker.target_low {
                info!(
                    "'{}' received a low pulse on press {} while measuring branches",
                    self.target, press
                );
                return Ok(CycleAnalysis {
                    target: self.target.clone(),
                    branches: self.measured_so_far(&tracker, &branches),
                    hub,
                    presses: press,
                    simulated_presses: dispatcher.presses(),
                });
            }
            if let Some((branch, press)) = tracker.latched.take() {
                return Err(NetworkError::LatchedBranch { branch, press });
            }
        }

        let mut periods = Vec::with_capacity(branches.len());
        for branch in &branches {
            let fires = tracker.fires(branch);
            let first = fires[0];
            if self.verify_periods && fires[1] != 2 * first {
                return Err(NetworkError::AperiodicBranch {
                    branch: branch.clone(),
                    first,
                    second: fires[1],
                });
            }
            debug!("Branch '{}' fires every {} presses", branch, first);
            periods.push(BranchPeriod {
                name: branch.clone(),
                period: first,
                confirmed: self.verify_periods,
            });
        }

        let presses = combine_periods(&periods)?;
        info!(
            "'{}' first receives a low pulse on press {} ({} branches, {} presses simulated)",
            self.target,
            presses,
            periods.len(),
            dispatcher.presses()
        );

        Ok(CycleAnalysis {
            target: self.target.clone(),
            hub,
            branches: periods,
            presses,
            simulated_presses: dispatcher.presses(),
        })
    }

    /// Periods of the branches that have fired so far
    fn measured_so_far(&self, tracker: &BranchTracker, branches: &[ModuleName]) -> Vec<BranchPeriod> {
        branches
            .iter()
            .filter_map(|branch| {
                let fires = tracker.fires(branch);
                let first = *fires.first()?;
                Some(BranchPeriod {
                    name: branch.clone(),
                    period: first,
                    confirmed: self.verify_periods && fires.get(1) == Some(&(2 * first)),
                })
            })
            .collect()
    }
}
