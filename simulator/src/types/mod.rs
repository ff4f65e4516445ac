/// Wall-clock milliseconds between simulation ticks.
pub const TICK_FREQUENCY_MILLIS: u64 = 2000;

pub mod aircraft;

pub mod airport;

pub mod conflict;

pub mod flight_phase;

pub mod sim_error;

pub mod simulation;

pub mod timer;
