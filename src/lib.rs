pub mod core;

// Re-export commonly used types
pub use crate::core::builder::NetworkBuilder;
pub use crate::core::config::SimulationConfig;
pub use crate::core::cycle_analyzer::{gcd, lcm, lcm_all, CycleAnalysis, CycleAnalyzer};
pub use crate::core::description::{parse_description, ModuleDeclaration};
pub use crate::core::dispatcher::{Dispatcher, PressObserver};
pub use crate::core::errors::NetworkError;
pub use crate::core::event::PulseEvent;
pub use crate::core::module::{Module, ModuleKind, ModuleState};
pub use crate::core::network::Network;
pub use crate::core::types::{ModuleName, Pulse, PulseCounts};
