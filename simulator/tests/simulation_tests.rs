use simulator::types::flight_phase::FlightPhase;
use simulator::types::simulation::Simulation;

#[test]
fn two_sims_with_the_same_seed_stay_in_lockstep() {
    let mut sim1 = Simulation::with_seed(12, 42).unwrap();
    let mut sim2 = Simulation::with_seed(12, 42).unwrap();

    for _ in 0..10 {
        let alerts1 = sim1.tick();
        let alerts2 = sim2.tick();
        assert_eq!(alerts1.len(), alerts2.len());
    }

    assert_eq!(sim1.snapshot(), sim2.snapshot());
}

#[test]
fn fleet_eventually_gets_airborne() {
    let mut sim = Simulation::with_seed(20, 7).unwrap();

    for _ in 0..50 {
        sim.tick();
    }

    let airborne = sim
        .snapshot()
        .iter()
        .filter(|view| view.altitude > 500.0)
        .count();
    assert!(airborne > 0, "no aircraft left the ground in 50 ticks");
}

#[test]
fn state_stays_within_physical_bounds_over_a_long_run() {
    let mut sim = Simulation::with_seed(15, 123).unwrap();

    for _ in 0..200 {
        sim.tick();

        for view in sim.snapshot() {
            assert!(view.altitude >= 500.0, "{}: altitude {}", view.callsign, view.altitude);
            assert!(
                view.speed >= 0.0 && view.speed <= 480.0,
                "{}: speed {}",
                view.callsign,
                view.speed
            );
            assert!(
                (0..360).contains(&view.heading),
                "{}: heading {}",
                view.callsign,
                view.heading
            );
            assert!(view.latitude.is_finite() && view.longitude.is_finite());
        }
    }
}

#[test]
fn snapshot_reflects_phase_labels_used_on_the_wire() {
    let mut sim = Simulation::with_seed(5, 1).unwrap();
    sim.tick();

    for view in sim.snapshot() {
        let label = view.phase.as_str();
        assert_eq!(FlightPhase::from_str(label).unwrap(), view.phase);
    }
}

#[test]
fn snapshot_is_ordered_by_id() {
    let sim = Simulation::with_seed(10, 3).unwrap();
    let ids: Vec<u32> = sim.snapshot().iter().map(|view| view.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
}
