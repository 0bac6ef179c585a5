use super::event::PulseEvent;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct QueuedEvent {
    pub sequence_num: u64,
    pub event: PulseEvent,
}

/// Strict FIFO queue of pending pulses.
/// Events leave in the exact order they were enqueued.
pub struct PulseQueue {
    events: VecDeque<QueuedEvent>,
    sequence_counter: u64,
}

impl PulseQueue {
    /// Create an empty PulseQueue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
            sequence_counter: 0,
        }
    }

    /// Append an event behind everything already pending
    pub fn enqueue(&mut self, event: PulseEvent) {
        self.events.push_back(QueuedEvent {
            sequence_num: self.sequence_counter,
            event,
        });
        self.sequence_counter += 1;
    }

    /// Remove the oldest pending event
    pub fn dequeue(&mut self) -> Option<QueuedEvent> {
        self.events.pop_front()
    }

    /// Number of events enqueued since creation
    pub fn total_enqueued(&self) -> u64 {
        self.sequence_counter
    }
}

impl Default for PulseQueue {
    fn default() -> Self {
        Self::new()
    }
}
