use std::collections::HashMap;
use std::io::Write;
use std::net::TcpStream;
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use logger::{Color, Logger};
use radar_protocol::frame::Frame;
use radar_protocol::messages::alert::Alert;
use radar_protocol::messages::tracks::{Track, Tracks};
use radar_protocol::Serializable;
use simulator::types::aircraft::AircraftView;
use simulator::types::simulation::Simulation;
use threadpool::ThreadPool;
use uuid::Uuid;

use crate::errors::ServerError;

/// Builds the wire frame for a simulation snapshot.
pub fn tracks_frame(snapshot: &[AircraftView]) -> Frame {
    let tracks = snapshot
        .iter()
        .map(|view| Track {
            id: view.id as i32,
            callsign: view.callsign.clone(),
            latitude: view.latitude,
            longitude: view.longitude,
            altitude: view.altitude,
            speed: view.speed,
            heading: view.heading,
            phase: view.phase.as_str().to_string(),
            destination: view.destination.clone(),
        })
        .collect();

    Frame::Tracks(Tracks::new(tracks))
}

/// Runs one simulation tick and fans the results out to every connected
/// client: the full snapshot always, followed by one alert frame per newly
/// opened conflict.
pub fn run_tick(
    simulation: &Arc<Mutex<Simulation>>,
    clients: &Arc<Mutex<HashMap<Uuid, TcpStream>>>,
    pool: &ThreadPool,
    logger: &Arc<Logger>,
    current_time: NaiveDateTime,
    tick_count: usize,
) -> Result<(), ServerError> {
    let (alerts, snapshot, active) = {
        let mut sim = simulation
            .lock()
            .map_err(|_| ServerError::LockError("simulation lock poisoned".to_string()))?;
        let alerts = sim.tick();
        (alerts, sim.snapshot(), sim.active_conflict_count())
    };

    logger.info(
        &format!(
            "tick {}: {} aircraft, {} active conflicts",
            tick_count,
            snapshot.len(),
            active
        ),
        Color::Blue,
        false,
    )?;

    let tracks_bytes = Arc::new(tracks_frame(&snapshot).to_bytes()?);
    send_to_all(clients, pool, logger, tracks_bytes);

    let timestamp_millis = current_time.and_utc().timestamp_millis();
    for conflict in alerts {
        logger.warn(&conflict.message, true)?;

        let alert = Frame::Alert(Alert::new(&conflict.message, timestamp_millis));
        send_to_all(clients, pool, logger, Arc::new(alert.to_bytes()?));
    }

    Ok(())
}

/// Queues one write per client on the pool. A client whose write fails is
/// removed from the map; the rest of the fan-out is unaffected.
fn send_to_all(
    clients: &Arc<Mutex<HashMap<Uuid, TcpStream>>>,
    pool: &ThreadPool,
    logger: &Arc<Logger>,
    bytes: Arc<Vec<u8>>,
) {
    let targets: Vec<(Uuid, TcpStream)> = match clients.lock() {
        Ok(clients_lock) => clients_lock
            .iter()
            .filter_map(|(id, stream)| stream.try_clone().ok().map(|s| (*id, s)))
            .collect(),
        Err(_) => return,
    };

    for (id, mut stream) in targets {
        let bytes = Arc::clone(&bytes);
        let clients = Arc::clone(clients);
        let logger = Arc::clone(logger);

        pool.execute(move || {
            if stream.write_all(&bytes).is_err() {
                if let Ok(mut clients_lock) = clients.lock() {
                    clients_lock.remove(&id);
                }
                let _ = logger.warn(&format!("Dropped unreachable client {}", id), true);
            }
        });
    }
}
