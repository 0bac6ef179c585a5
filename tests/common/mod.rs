#![allow(dead_code)]

use pulsesim::{parse_description, Dispatcher, Network};

pub const COUNTER_LOOP: &str = include_str!("../fixtures/counter_loop.txt");
pub const FEEDBACK_CONJUNCTION: &str = include_str!("../fixtures/feedback_conjunction.txt");

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn network(text: &str) -> Network {
    Network::new(parse_description(text).unwrap(), "broadcaster").unwrap()
}

pub fn dispatcher(text: &str) -> Dispatcher {
    Dispatcher::new(network(text))
}

/// Independent binary counters, one per period, each feeding `hub` -> `rx`
/// through an inverter and resetting itself when it reaches its period.
pub fn counter_chains(periods: &[u64]) -> String {
    let mut lines = Vec::new();
    let mut starts = Vec::new();

    for (k, &period) in periods.iter().enumerate() {
        let width = (64 - period.leading_zeros()) as usize;
        let bit = |i: usize| format!("b{}_{}", k, i);
        starts.push(bit(0));

        for i in 0..width {
            let mut dests = Vec::new();
            if i + 1 < width {
                dests.push(bit(i + 1));
            }
            if (period >> i) & 1 == 1 {
                dests.push(format!("c{}", k));
            }
            lines.push(format!("%{} -> {}", bit(i), dests.join(", ")));
        }

        let mut resets: Vec<String> = (0..width)
            .filter(|i| (period >> i) & 1 == 0)
            .map(|i| bit(i))
            .collect();
        resets.push(bit(0));
        resets.push(format!("i{}", k));
        lines.push(format!("&c{} -> {}", k, resets.join(", ")));
        lines.push(format!("&i{} -> hub", k));
    }

    lines.push("&hub -> rx".to_string());
    lines.push(format!("broadcaster -> {}", starts.join(", ")));
    lines.join("\n")
}
