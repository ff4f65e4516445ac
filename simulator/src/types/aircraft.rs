use rand::Rng;

use super::airport::Airport;
use super::flight_phase::FlightPhase;
use crate::geo;

/// Altitude floor an aircraft sits at while on the ground.
pub const GROUND_ALTITUDE: f64 = 500.0;

/// Aircraft closer than this to their destination are pulled toward
/// descent/landing regardless of their current phase.
pub const DESCENT_THRESHOLD_KM: f64 = 50.0;

/// Aircraft closer than this to their destination are considered arrived.
pub const ARRIVAL_THRESHOLD_KM: f64 = 5.0;

/// Speed change per tick, in km/h, toward the current phase's target.
pub const ACCELERATION_KMH: f64 = 20.0;

const CLIMB_RATE_FT_MIN: f64 = 500.0;
const DESCENT_RATE_FT_MIN: f64 = 750.0;
const FEET_TO_METERS: f64 = 0.3048;
const CRUISE_JITTER: f64 = 10.0;

const TICK_SECONDS: f64 = super::TICK_FREQUENCY_MILLIS as f64 / 1000.0;

/// Mutable record of one aircraft's kinematic and lifecycle state. Created
/// once at engine initialization and mutated on every tick until the process
/// ends; never destroyed individually.
#[derive(Clone, Debug, PartialEq)]
pub struct Aircraft {
    pub id: u32,
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    pub destination: Airport,
    pub altitude: f64,
    pub speed: f64,
    /// Derived from position and destination every tick, degrees [0, 360).
    pub heading: i32,
    pub distance_traveled: f64,
    pub phase: FlightPhase,
    pub target_altitude: f64,
    /// Feet per minute; constant per aircraft in this model.
    pub climb_rate: f64,
}

impl Aircraft {
    /// Creates an aircraft parked at `departure` and routed to
    /// `destination`. The callsign is derived from the id.
    pub fn new(id: u32, departure: &Airport, destination: Airport) -> Self {
        let heading = geo::bearing(
            departure.latitude,
            departure.longitude,
            destination.latitude,
            destination.longitude,
        );

        Aircraft {
            id,
            callsign: format!("TN{:03}", id),
            latitude: departure.latitude,
            longitude: departure.longitude,
            destination,
            altitude: GROUND_ALTITUDE,
            speed: 0.0,
            heading,
            distance_traveled: 0.0,
            phase: FlightPhase::GroundTaxi,
            target_altitude: 10_000.0,
            climb_rate: CLIMB_RATE_FT_MIN,
        }
    }

    pub fn distance_to_destination(&self) -> f64 {
        geo::distance_km(
            self.latitude,
            self.longitude,
            self.destination.latitude,
            self.destination.longitude,
        )
    }

    /// Evaluates the phase rules in priority order. The proximity override
    /// runs first and can yank the aircraft toward descent/landing from any
    /// phase; the forward-progression rules only apply otherwise.
    pub(crate) fn update_phase<R: Rng>(&mut self, dist_to_destination: f64, rng: &mut R) {
        if dist_to_destination < DESCENT_THRESHOLD_KM {
            if self.altitude > 1000.0 {
                self.phase = FlightPhase::Descent;
                self.target_altitude = GROUND_ALTITUDE;
            } else {
                self.phase = FlightPhase::Landing;
            }
        } else if self.phase == FlightPhase::GroundTaxi && self.speed > 50.0 {
            self.phase = FlightPhase::Takeoff;
        } else if self.phase == FlightPhase::Takeoff && self.altitude > 1000.0 {
            self.phase = FlightPhase::Climb;
            self.target_altitude = rng.gen_range(10_000.0..15_000.0);
        } else if self.phase == FlightPhase::Climb
            && self.altitude >= self.target_altitude - 200.0
        {
            self.phase = FlightPhase::Cruise;
        }
    }

    /// Drives the speed toward the phase target by the fixed acceleration
    /// step, clamped so it never overshoots in either direction.
    pub(crate) fn update_speed(&mut self) {
        let target = self.phase.target_speed();

        if self.speed < target {
            self.speed = (self.speed + ACCELERATION_KMH).min(target);
        } else if self.speed > target {
            self.speed = (self.speed - ACCELERATION_KMH).max(target);
        }
    }

    pub(crate) fn update_altitude<R: Rng>(&mut self, rng: &mut R) {
        let climb_per_tick = self.climb_rate * FEET_TO_METERS / 60.0 * TICK_SECONDS;
        let descent_per_tick = DESCENT_RATE_FT_MIN * FEET_TO_METERS / 60.0 * TICK_SECONDS;

        match self.phase {
            FlightPhase::GroundTaxi | FlightPhase::Landing => {
                self.altitude = GROUND_ALTITUDE;
            }
            FlightPhase::Takeoff => {
                // Steeper climb-out than the nominal rate.
                self.altitude += climb_per_tick * 1.5;
            }
            FlightPhase::Climb => {
                if self.altitude < self.target_altitude {
                    self.altitude += climb_per_tick;
                }
            }
            FlightPhase::Cruise => {
                // Track jitter, not intentional altitude change.
                self.altitude += (rng.gen::<f64>() - 0.5) * 2.0 * CRUISE_JITTER;
            }
            FlightPhase::Descent => {
                if self.altitude > self.target_altitude {
                    self.altitude = (self.altitude - descent_per_tick).max(self.target_altitude);
                }
            }
        }
    }

    /// Handles arrival and moves the aircraft toward its destination.
    ///
    /// Arrival is decided before movement: within the arrival threshold the
    /// aircraft is re-routed to a random airport and reset to the ground
    /// state. The heading is recomputed from the (possibly new) destination
    /// every tick regardless of movement.
    pub(crate) fn advance<R: Rng>(
        &mut self,
        dist_to_destination: f64,
        airports: &[Airport],
        rng: &mut R,
    ) {
        let mut dist = dist_to_destination;

        if dist < ARRIVAL_THRESHOLD_KM {
            self.destination = airports[rng.gen_range(0..airports.len())].clone();
            self.distance_traveled = 0.0;
            self.altitude = GROUND_ALTITUDE;
            self.phase = FlightPhase::GroundTaxi;
            self.speed = 0.0;
            dist = self.distance_to_destination();
        }

        self.heading = geo::bearing(
            self.latitude,
            self.longitude,
            self.destination.latitude,
            self.destination.longitude,
        );

        // A zero distance would make the move ratio undefined; the arrival
        // branch above has already handled that case, so just stay put.
        if dist <= 0.0 {
            return;
        }

        let step_distance = self.speed / 3600.0 * TICK_SECONDS;
        let move_ratio = step_distance / dist;

        if move_ratio < 1.0 {
            self.latitude += (self.destination.latitude - self.latitude) * move_ratio;
            self.longitude += (self.destination.longitude - self.longitude) * move_ratio;
            self.distance_traveled += step_distance;
        }
    }

    /// Read-only copy of this aircraft's state, safe to serialize.
    pub fn view(&self) -> AircraftView {
        AircraftView {
            id: self.id,
            callsign: self.callsign.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            speed: self.speed,
            heading: self.heading,
            phase: self.phase,
            destination: self.destination.name.clone(),
        }
    }
}

/// Point-in-time export of one aircraft for external consumption.
#[derive(Clone, Debug, PartialEq)]
pub struct AircraftView {
    pub id: u32,
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
    pub heading: i32,
    pub phase: FlightPhase,
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_aircraft() -> Aircraft {
        // Parked at Tunis-Carthage, routed to Tozeur (roughly 380 km).
        let departure = Airport::new("Tunis-Carthage", 36.851, 10.227);
        let destination = Airport::new("Tozeur", 33.93, 8.13);
        Aircraft::new(1, &departure, destination)
    }

    #[test]
    fn new_aircraft_starts_parked() {
        let plane = test_aircraft();

        assert_eq!(plane.callsign, "TN001");
        assert_eq!(plane.phase, FlightPhase::GroundTaxi);
        assert_eq!(plane.altitude, GROUND_ALTITUDE);
        assert_eq!(plane.speed, 0.0);
        assert_eq!(plane.distance_traveled, 0.0);
    }

    #[test]
    fn proximity_override_forces_descent_from_climb() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Climb;
        plane.altitude = 5000.0;

        plane.update_phase(40.0, &mut rng);

        assert_eq!(plane.phase, FlightPhase::Descent);
        assert_eq!(plane.target_altitude, GROUND_ALTITUDE);
    }

    #[test]
    fn proximity_override_lands_low_aircraft() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Descent;
        plane.altitude = 800.0;

        plane.update_phase(30.0, &mut rng);

        assert_eq!(plane.phase, FlightPhase::Landing);
    }

    #[test]
    fn taxi_flips_to_takeoff_past_the_speed_gate() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.speed = 60.0;

        plane.update_phase(300.0, &mut rng);

        assert_eq!(plane.phase, FlightPhase::Takeoff);
    }

    #[test]
    fn takeoff_transitions_to_climb_above_one_thousand() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Takeoff;
        plane.altitude = 1100.0;

        plane.update_phase(300.0, &mut rng);

        assert_eq!(plane.phase, FlightPhase::Climb);
        assert!((10_000.0..15_000.0).contains(&plane.target_altitude));
    }

    #[test]
    fn climb_levels_off_near_the_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Climb;
        plane.target_altitude = 12_000.0;
        plane.altitude = 11_850.0;

        plane.update_phase(300.0, &mut rng);

        assert_eq!(plane.phase, FlightPhase::Cruise);
    }

    #[test]
    fn speed_accelerates_by_fixed_step() {
        let mut plane = test_aircraft();

        plane.update_speed();
        assert_eq!(plane.speed, 20.0);
        plane.update_speed();
        assert_eq!(plane.speed, 40.0);
    }

    #[test]
    fn speed_never_overshoots_the_target() {
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Takeoff;
        plane.speed = 240.0;

        plane.update_speed();
        assert_eq!(plane.speed, 250.0);

        // Decelerating toward a slower target clamps the same way.
        plane.phase = FlightPhase::Landing;
        plane.speed = 160.0;
        plane.update_speed();
        assert_eq!(plane.speed, 150.0);
    }

    #[test]
    fn ground_phases_pin_altitude_to_the_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Landing;
        plane.altitude = 900.0;

        plane.update_altitude(&mut rng);

        assert_eq!(plane.altitude, GROUND_ALTITUDE);
    }

    #[test]
    fn takeoff_climbs_faster_than_nominal() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Takeoff;

        let before = plane.altitude;
        plane.update_altitude(&mut rng);

        let nominal = CLIMB_RATE_FT_MIN * FEET_TO_METERS / 60.0 * TICK_SECONDS;
        assert!((plane.altitude - before - nominal * 1.5).abs() < 1e-9);
    }

    #[test]
    fn climb_stops_at_target_altitude() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Climb;
        plane.target_altitude = 12_000.0;
        plane.altitude = 12_000.0;

        plane.update_altitude(&mut rng);

        assert_eq!(plane.altitude, 12_000.0);
    }

    #[test]
    fn descent_clamps_at_target_altitude() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Descent;
        plane.target_altitude = GROUND_ALTITUDE;
        plane.altitude = GROUND_ALTITUDE + 2.0;

        plane.update_altitude(&mut rng);

        assert_eq!(plane.altitude, GROUND_ALTITUDE);
    }

    #[test]
    fn cruise_jitter_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Cruise;
        plane.altitude = 12_000.0;

        for _ in 0..100 {
            let before = plane.altitude;
            plane.update_altitude(&mut rng);
            assert!((plane.altitude - before).abs() <= CRUISE_JITTER);
        }
    }

    #[test]
    fn arrival_resets_the_aircraft() {
        let mut rng = StdRng::seed_from_u64(3);
        let airports = Airport::registry();
        let mut plane = test_aircraft();
        plane.phase = FlightPhase::Landing;
        plane.speed = 150.0;
        plane.altitude = GROUND_ALTITUDE;
        plane.distance_traveled = 372.5;

        plane.advance(2.0, &airports, &mut rng);

        assert_eq!(plane.phase, FlightPhase::GroundTaxi);
        assert_eq!(plane.speed, 0.0);
        assert_eq!(plane.altitude, GROUND_ALTITUDE);
        assert_eq!(plane.distance_traveled, 0.0);
        assert!(airports.contains(&plane.destination));
    }

    #[test]
    fn zero_distance_never_produces_nan() {
        let mut rng = StdRng::seed_from_u64(3);
        let airports = Airport::registry();
        let mut plane = test_aircraft();
        // Destination coincides with the current position.
        plane.destination = Airport::new("Here", plane.latitude, plane.longitude);

        plane.advance(0.0, &airports, &mut rng);

        assert!(!plane.latitude.is_nan());
        assert!(!plane.longitude.is_nan());
        assert_eq!(plane.phase, FlightPhase::GroundTaxi);
    }

    #[test]
    fn movement_interpolates_toward_the_destination() {
        let mut rng = StdRng::seed_from_u64(3);
        let airports = Airport::registry();
        let mut plane = test_aircraft();
        plane.speed = 480.0;

        let dist_before = plane.distance_to_destination();
        plane.advance(dist_before, &airports, &mut rng);

        let step = 480.0 / 3600.0 * TICK_SECONDS;
        assert!(plane.distance_to_destination() < dist_before);
        assert!((plane.distance_traveled - step).abs() < 1e-9);
    }
}
