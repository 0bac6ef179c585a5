pub mod builder;
pub mod config;
pub mod cycle_analyzer;
pub mod description;
pub mod dispatcher;
pub mod errors;
pub mod event;
pub mod event_queue;
pub mod module;
pub mod network;
pub mod report;
pub mod simulation;
pub mod types;

#[cfg(test)]
mod tests;
