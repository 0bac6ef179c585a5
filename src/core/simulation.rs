use super::config::SimulationConfig;
use super::cycle_analyzer::CycleAnalyzer;
use super::description::ModuleDeclaration;
use super::dispatcher::Dispatcher;
use super::errors::NetworkError;
use super::network::Network;
use super::report::{DetectionReport, PulseReport};
use log::{info, warn};

/// Press a fresh network `config.press_count` times and report the totals
pub fn count_pulses(declarations: Vec<ModuleDeclaration>, config: &SimulationConfig) -> Result<PulseReport, NetworkError> {
    config.validate()?;
    let network = Network::new(declarations, &config.entry)?;
    let mut dispatcher = Dispatcher::new(network);
    let counts = dispatcher.run_presses(config.press_count)?;
    PulseReport::new(config.press_count, counts)
}

/// Find the first press on which `config.target` receives a low pulse.
///
/// Branch analysis is tried first. When the target is not fed by a single
/// conjunction, or a branch does not fire on a clean period, falls back to
/// pressing a fresh copy of the network until it happens.
pub fn detect_first_low(declarations: Vec<ModuleDeclaration>, config: &SimulationConfig) -> Result<DetectionReport, NetworkError> {
    config.validate()?;
    let network = Network::new(declarations, &config.entry)?;
    let analyzer = CycleAnalyzer::from_config(config);

    let reason = match analyzer.find_branches(&network) {
        Ok(_) => {
            let mut dispatcher = Dispatcher::new(network.clone());
            match analyzer.analyze(&mut dispatcher) {
                Ok(analysis) => return Ok(DetectionReport::from(analysis)),
                Err(e @ NetworkError::LatchedBranch { .. }) | Err(e @ NetworkError::AperiodicBranch { .. }) => {
                    e.to_string()
                }
                Err(e) => return Err(e),
            }
        }
        Err(NetworkError::UnsupportedTopology(reason)) => reason,
        Err(e) => return Err(e),
    };

    warn!("Branch analysis unavailable ({}), pressing until '{}' goes low", reason, config.target);
    let mut dispatcher = Dispatcher::new(network);
    let presses = dispatcher.presses_until_low(&config.target, config.max_presses)?;
    info!("Brute force found '{}' after {} presses", config.target, presses);
    Ok(DetectionReport::brute_force(&config.target, presses))
}
