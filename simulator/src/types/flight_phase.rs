use super::sim_error::SimError;

/// The stages of an aircraft's flight lifecycle. Progression is conditional
/// rather than strictly ordered: the proximity override can pull an aircraft
/// toward `Descent`/`Landing` from any phase.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FlightPhase {
    GroundTaxi,
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Landing,
}

impl FlightPhase {
    /// Converts the `FlightPhase` variant to its display representation.
    pub fn as_str(&self) -> &str {
        match self {
            FlightPhase::GroundTaxi => "TAXIING",
            FlightPhase::Takeoff => "TAKING OFF",
            FlightPhase::Climb => "CLIMBING",
            FlightPhase::Cruise => "CRUISING",
            FlightPhase::Descent => "DESCENDING",
            FlightPhase::Landing => "LANDING",
        }
    }

    /// Creates a `FlightPhase` variant from its display representation.
    pub fn from_str(phase: &str) -> Result<FlightPhase, SimError> {
        match phase.to_uppercase().as_str() {
            "TAXIING" => Ok(FlightPhase::GroundTaxi),
            "TAKING OFF" => Ok(FlightPhase::Takeoff),
            "CLIMBING" => Ok(FlightPhase::Climb),
            "CRUISING" => Ok(FlightPhase::Cruise),
            "DESCENDING" => Ok(FlightPhase::Descent),
            "LANDING" => Ok(FlightPhase::Landing),
            _ => Err(SimError::Other("Invalid flight phase".to_string())),
        }
    }

    /// Ground-track speed the phase drives toward, in km/h. The ground phase
    /// targets the takeoff roll speed so a departing aircraft can reach the
    /// speed gate that flips it into `Takeoff`.
    pub fn target_speed(&self) -> f64 {
        match self {
            FlightPhase::GroundTaxi => 250.0,
            FlightPhase::Takeoff => 250.0,
            FlightPhase::Climb => 300.0,
            FlightPhase::Cruise => 480.0,
            FlightPhase::Descent => 350.0,
            FlightPhase::Landing => 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_strings_round_trip() {
        let phases = [
            FlightPhase::GroundTaxi,
            FlightPhase::Takeoff,
            FlightPhase::Climb,
            FlightPhase::Cruise,
            FlightPhase::Descent,
            FlightPhase::Landing,
        ];
        for phase in phases {
            assert_eq!(FlightPhase::from_str(phase.as_str()).unwrap(), phase);
        }
    }

    #[test]
    fn unknown_phase_rejected() {
        assert!(FlightPhase::from_str("HOLDING").is_err());
    }

    #[test]
    fn cruise_is_the_fastest_phase() {
        assert_eq!(FlightPhase::Cruise.target_speed(), 480.0);
        for phase in [
            FlightPhase::GroundTaxi,
            FlightPhase::Takeoff,
            FlightPhase::Climb,
            FlightPhase::Descent,
            FlightPhase::Landing,
        ] {
            assert!(phase.target_speed() <= 480.0);
        }
    }
}
