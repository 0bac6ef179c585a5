use super::types::{ModuleName, Pulse};

/// A pulse in flight from one module to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseEvent {
    pub sender: ModuleName,
    pub receiver: ModuleName,
    pub pulse: Pulse,
}

impl PulseEvent {
    pub fn new(sender: impl Into<ModuleName>, receiver: impl Into<ModuleName>, pulse: Pulse) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            pulse,
        }
    }

    /// True when this event delivers a low pulse to `module`
    pub fn is_low_to(&self, module: &str) -> bool {
        self.pulse.is_low() && self.receiver == module
    }
}

impl std::fmt::Display for PulseEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -{}-> {}", self.sender, self.pulse, self.receiver)
    }
}
