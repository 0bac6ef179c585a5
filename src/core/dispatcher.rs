use super::errors::NetworkError;
use super::event::PulseEvent;
use super::event_queue::PulseQueue;
use super::network::Network;
use super::types::{Pulse, PulseCounts, BUTTON};
use log::{debug, info, trace};

/// Observer trait for delivered pulses
pub trait PressObserver {
    /// Called for every pulse as it is taken off the queue
    fn on_pulse(&mut self, press: u64, event: &PulseEvent);

    /// Called once the queue of a press has drained
    fn on_press_complete(&mut self, _press: u64, _counts: PulseCounts) {}
}

/// Remembers whether one module received a low pulse during a press
pub struct LowPulseWatch {
    target: String,
    seen: bool,
}

impl LowPulseWatch {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            seen: false,
        }
    }

    pub fn seen(&self) -> bool {
        self.seen
    }
}

impl PressObserver for LowPulseWatch {
    fn on_pulse(&mut self, _press: u64, event: &PulseEvent) {
        if event.is_low_to(&self.target) {
            self.seen = true;
        }
    }
}

/// Drives button presses against a network it exclusively owns.
///
/// Every press is delivered breadth-first: a pulse produced while handling
/// another is queued behind everything already pending.
pub struct Dispatcher {
    network: Network,
    presses: u64,
    observers: Vec<Box<dyn PressObserver>>,
}

impl Dispatcher {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            presses: 0,
            observers: Vec::new(),
        }
    }

    /// Add an observer that sees every press from now on
    pub fn add_observer(&mut self, observer: Box<dyn PressObserver>) {
        self.observers.push(observer);
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    /// Number of completed button presses
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// Press the button once and return the pulses delivered during the press
    pub fn press_button(&mut self) -> Result<PulseCounts, NetworkError> {
        self.press(None)
    }

    /// Press once, additionally reporting to `observer` for this press only
    pub fn press_observed(&mut self, observer: &mut dyn PressObserver) -> Result<PulseCounts, NetworkError> {
        self.press(Some(observer))
    }

    /// Press once and report whether `watch` received a low pulse.
    /// The press always runs to completion.
    pub fn press_button_watching(&mut self, watch: &str) -> Result<bool, NetworkError> {
        let mut watcher = LowPulseWatch::new(watch);
        self.press_observed(&mut watcher)?;
        Ok(watcher.seen())
    }

    /// Press `count` times without any reset and sum the pulse counts
    pub fn run_presses(&mut self, count: u64) -> Result<PulseCounts, NetworkError> {
        let mut total = PulseCounts::default();
        for _ in 0..count {
            total += self.press_button()?;
        }

        info!(
            "Network {}: {} presses delivered {} low and {} high pulses",
            self.network.id(),
            count,
            total.low,
            total.high
        );
        Ok(total)
    }

    /// Keep pressing until `target` receives a low pulse and return that press number.
    /// Gives up once `max_presses` presses have been made in total.
    pub fn presses_until_low(&mut self, target: &str, max_presses: u64) -> Result<u64, NetworkError> {
        if self.network.senders_to(target).is_empty() {
            return Err(NetworkError::UnreachableTarget(target.to_string()));
        }

        while self.presses < max_presses {
            if self.press_button_watching(target)? {
                info!(
                    "Network {}: '{}' received a low pulse on press {}",
                    self.network.id(),
                    target,
                    self.presses
                );
                return Ok(self.presses);
            }
        }

        Err(NetworkError::PressLimitExceeded { limit: max_presses })
    }

    fn press(&mut self, mut extra: Option<&mut dyn PressObserver>) -> Result<PulseCounts, NetworkError> {
        self.presses += 1;
        let press = self.presses;

        let mut queue = PulseQueue::new();
        let mut counts = PulseCounts::default();
        queue.enqueue(PulseEvent::new(BUTTON, self.network.entry(), Pulse::Low));

        while let Some(queued) = queue.dequeue() {
            let event = queued.event;
            counts.record(event.pulse);
            trace!("press {} #{}: {}", press, queued.sequence_num, event);

            for observer in &mut self.observers {
                observer.on_pulse(press, &event);
            }
            if let Some(observer) = extra.as_deref_mut() {
                observer.on_pulse(press, &event);
            }

            // Undeclared receivers are sinks
            if let Some(module) = self.network.module_mut(&event.receiver) {
                for (dest, pulse) in module.process(event.pulse, &event.sender)? {
                    queue.enqueue(PulseEvent::new(event.receiver.clone(), dest, pulse));
                }
            }
        }

        for observer in &mut self.observers {
            observer.on_press_complete(press, counts);
        }
        if let Some(observer) = extra {
            observer.on_press_complete(press, counts);
        }

        debug!(
            "=== Press {} on network {}: {} low, {} high, {} pulses queued ===",
            press,
            self.network.id(),
            counts.low,
            counts.high,
            queue.total_enqueued()
        );
        Ok(counts)
    }
}
