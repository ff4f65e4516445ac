use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::aircraft::{Aircraft, AircraftView};
use super::airport::Airport;
use super::conflict::{pair_key, Conflict, HORIZONTAL_SEPARATION_KM, VERTICAL_SEPARATION};
use super::sim_error::SimError;
use crate::geo;

/// Manages the overall state of the radar simulation.
///
/// The `Simulation` owns the aircraft collection (fixed size, created once)
/// and the active-conflict mapping (rebuilt wholesale every tick). It is
/// driven externally, one `tick()` at a time; no state is mutated outside a
/// tick.
pub struct Simulation {
    pub aircraft: Vec<Aircraft>,
    airports: Vec<Airport>,
    active_conflicts: HashMap<String, Conflict>,
    rng: StdRng,
}

impl Simulation {
    /// Creates a simulation with `aircraft_count` aircraft assigned random
    /// departure and destination airports from the registry.
    pub fn new(aircraft_count: usize) -> Result<Self, SimError> {
        Self::with_rng(aircraft_count, StdRng::from_entropy())
    }

    /// Like [`Simulation::new`] but with a seeded generator, so runs are
    /// reproducible.
    pub fn with_seed(aircraft_count: usize, seed: u64) -> Result<Self, SimError> {
        Self::with_rng(aircraft_count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(aircraft_count: usize, mut rng: StdRng) -> Result<Self, SimError> {
        if aircraft_count == 0 {
            return Err(SimError::InvalidAircraftCount(aircraft_count));
        }

        let airports = Airport::registry();

        let mut aircraft = Vec::with_capacity(aircraft_count);
        for id in 1..=aircraft_count as u32 {
            let departure = airports[rng.gen_range(0..airports.len())].clone();
            let destination = airports[rng.gen_range(0..airports.len())].clone();
            aircraft.push(Aircraft::new(id, &departure, destination));
        }

        Ok(Simulation {
            aircraft,
            airports,
            active_conflicts: HashMap::new(),
            rng,
        })
    }

    /// Advances every aircraft one step, then re-evaluates conflicts.
    /// Returns only the conflicts that opened this tick; pairs that were
    /// already conflicting on the previous tick are not reported again.
    pub fn tick(&mut self) -> Vec<Conflict> {
        for plane in self.aircraft.iter_mut() {
            let dist_to_destination = plane.distance_to_destination();

            plane.update_phase(dist_to_destination, &mut self.rng);
            plane.update_speed();
            plane.update_altitude(&mut self.rng);
            plane.advance(dist_to_destination, &self.airports, &mut self.rng);
        }

        self.detect_conflicts()
    }

    /// O(n²) pairwise scan over all aircraft, run after every position has
    /// settled for the tick. Acceptable at tens of aircraft; the scaling
    /// limit if counts ever reach the thousands.
    fn detect_conflicts(&mut self) -> Vec<Conflict> {
        let mut current_conflicts = HashMap::new();
        let mut new_alerts = Vec::new();

        for i in 0..self.aircraft.len() {
            for j in (i + 1)..self.aircraft.len() {
                let a = &self.aircraft[i];
                let b = &self.aircraft[j];

                let distance =
                    geo::distance_km(a.latitude, a.longitude, b.latitude, b.longitude);
                let altitude_difference = (a.altitude - b.altitude).abs();

                if distance < HORIZONTAL_SEPARATION_KM && altitude_difference < VERTICAL_SEPARATION
                {
                    let key = pair_key(a.id, b.id);
                    let conflict = Conflict::new(a, b, distance);

                    if !self.active_conflicts.contains_key(&key) {
                        new_alerts.push(conflict.clone());
                    }
                    current_conflicts.insert(key, conflict);
                }
            }
        }

        // Pairs present in the old mapping but not the new one have
        // resolved; they vanish with the wholesale swap, no event emitted.
        self.active_conflicts = current_conflicts;

        new_alerts
    }

    /// Read-only copy of every aircraft's state, ordered by id.
    pub fn snapshot(&self) -> Vec<AircraftView> {
        self.aircraft.iter().map(Aircraft::view).collect()
    }

    /// Number of conflicts considered ongoing as of the last tick.
    pub fn active_conflict_count(&self) -> usize {
        self.active_conflicts.len()
    }
}
