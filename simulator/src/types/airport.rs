/// Represents an airport with its name and geographical position.
#[derive(Clone, Debug, PartialEq)]
pub struct Airport {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Airport {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    /// The fixed set of airports served by the simulation. Built once at
    /// engine initialization and never mutated afterwards.
    pub fn registry() -> Vec<Airport> {
        vec![
            Airport::new("Tunis-Carthage", 36.851, 10.227),
            Airport::new("Enfidha", 36.075, 10.438),
            Airport::new("Sfax", 34.717, 10.69),
            Airport::new("Djerba", 33.875, 10.775),
            Airport::new("Tozeur", 33.93, 8.13),
        ]
    }
}
