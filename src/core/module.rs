use super::errors::NetworkError;
use super::types::{ModuleName, Pulse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of module kinds a network can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    Broadcaster,
    FlipFlop,
    Conjunction,
}

impl ModuleKind {
    /// Sigil used in textual descriptions (empty for the broadcaster)
    pub fn sigil(self) -> &'static str {
        match self {
            ModuleKind::Broadcaster => "",
            ModuleKind::FlipFlop => "%",
            ModuleKind::Conjunction => "&",
        }
    }
}

/// Variant-specific internal state of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleState {
    Broadcaster,
    FlipFlop { on: bool },
    /// Last pulse received from every known sender
    Conjunction { memory: HashMap<ModuleName, Pulse> },
}

impl ModuleState {
    /// Fresh state for a module of the given kind
    pub fn initial(kind: ModuleKind) -> Self {
        match kind {
            ModuleKind::Broadcaster => ModuleState::Broadcaster,
            ModuleKind::FlipFlop => ModuleState::FlipFlop { on: false },
            ModuleKind::Conjunction => ModuleState::Conjunction {
                memory: HashMap::new(),
            },
        }
    }

    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleState::Broadcaster => ModuleKind::Broadcaster,
            ModuleState::FlipFlop { .. } => ModuleKind::FlipFlop,
            ModuleState::Conjunction { .. } => ModuleKind::Conjunction,
        }
    }
}

/// One node of the pulse network: name, ordered outgoing edges and state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: ModuleName,
    destinations: Vec<ModuleName>,
    state: ModuleState,
}

impl Module {
    pub fn new(name: impl Into<ModuleName>, kind: ModuleKind, destinations: Vec<ModuleName>) -> Self {
        Self {
            name: name.into(),
            destinations,
            state: ModuleState::initial(kind),
        }
    }

    pub fn broadcaster(name: impl Into<ModuleName>, destinations: Vec<ModuleName>) -> Self {
        Self::new(name, ModuleKind::Broadcaster, destinations)
    }

    pub fn flip_flop(name: impl Into<ModuleName>, destinations: Vec<ModuleName>) -> Self {
        Self::new(name, ModuleKind::FlipFlop, destinations)
    }

    pub fn conjunction(name: impl Into<ModuleName>, destinations: Vec<ModuleName>) -> Self {
        Self::new(name, ModuleKind::Conjunction, destinations)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ModuleKind {
        self.state.kind()
    }

    pub fn destinations(&self) -> &[ModuleName] {
        &self.destinations
    }

    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    /// Remembered inputs of a conjunction, `None` for other kinds
    pub fn memory(&self) -> Option<&HashMap<ModuleName, Pulse>> {
        match &self.state {
            ModuleState::Conjunction { memory } => Some(memory),
            _ => None,
        }
    }

    /// Register `sender` as a known input, remembered as low.
    /// Only conjunctions keep per-sender memory; other kinds ignore this.
    pub fn prime_sender(&mut self, sender: &str) {
        if let ModuleState::Conjunction { memory } = &mut self.state {
            memory.insert(sender.to_string(), Pulse::Low);
        }
    }

    /// Forget every remembered input. Used before re-priming.
    pub(crate) fn clear_memory(&mut self) {
        if let ModuleState::Conjunction { memory } = &mut self.state {
            memory.clear();
        }
    }

    /// Handle one incoming pulse and return the pulses to send, in edge order
    pub fn process(&mut self, pulse: Pulse, from: &str) -> Result<Vec<(ModuleName, Pulse)>, NetworkError> {
        let output = match &mut self.state {
            ModuleState::Broadcaster => pulse,
            ModuleState::FlipFlop { on } => {
                if pulse.is_high() {
                    return Ok(Vec::new());
                }
                *on = !*on;
                Pulse::from(*on)
            }
            ModuleState::Conjunction { memory } => {
                match memory.get_mut(from) {
                    Some(last) => *last = pulse,
                    None => {
                        return Err(NetworkError::UnprimedSender {
                            module: self.name.clone(),
                            sender: from.to_string(),
                        })
                    }
                }
                Pulse::from(!memory.values().all(|p| p.is_high()))
            }
        };

        Ok(self.broadcast(output))
    }

    fn broadcast(&self, pulse: Pulse) -> Vec<(ModuleName, Pulse)> {
        self.destinations
            .iter()
            .map(|dest| (dest.clone(), pulse))
            .collect()
    }
}
