use super::aircraft::Aircraft;

/// Horizontal separation below which a pair of aircraft is in conflict, km.
pub const HORIZONTAL_SEPARATION_KM: f64 = 15.0;

/// Vertical separation below which a pair of aircraft is in conflict, in
/// altitude units.
pub const VERTICAL_SEPARATION: f64 = 500.0;

/// A pair of aircraft simultaneously within the horizontal and vertical
/// separation thresholds. Derived from aircraft state every tick, never
/// owned across ticks: the active set is rebuilt wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    pub aircraft1: String,
    pub aircraft2: String,
    pub distance_km: f64,
    pub message: String,
}

impl Conflict {
    pub fn new(a: &Aircraft, b: &Aircraft, distance_km: f64) -> Self {
        Conflict {
            aircraft1: a.callsign.clone(),
            aircraft2: b.callsign.clone(),
            distance_km,
            message: format!(
                "CONFLICT: {} and {} - {:.1} km apart",
                a.callsign, b.callsign, distance_km
            ),
        }
    }
}

/// Canonical key for an unordered aircraft pair: ids ascending, joined.
pub fn pair_key(a: u32, b: u32) -> String {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    format!("{}-{}", low, high)
}
