use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::{Arc, Mutex};

use logger::{Color, Logger};
use radar_protocol::frame::{read_frame, Frame};
use radar_protocol::messages::auth::LoginOk;
use radar_protocol::messages::error::ErrorMessage;
use radar_protocol::Serializable;
use simulator::types::simulation::Simulation;
use uuid::Uuid;

use crate::broadcast::tracks_frame;
use crate::errors::ServerError;
use crate::users;

/// Runs the lifecycle of one client connection.
///
/// The first frame must be a `LOGIN`; anything else, or bad credentials, gets
/// an `ERROR` frame and the connection is dropped. On success the client is
/// sent its role, the current snapshot, and is registered for the per-tick
/// broadcast until it disconnects.
pub fn handle_client(
    mut stream: TcpStream,
    simulation: Arc<Mutex<Simulation>>,
    clients: Arc<Mutex<HashMap<Uuid, TcpStream>>>,
    logger: Arc<Logger>,
) -> Result<(), ServerError> {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let login = match read_frame(&mut stream)? {
        Frame::Login(login) => login,
        _ => {
            send_frame(
                &mut stream,
                &Frame::Error(ErrorMessage::new("Expected LOGIN frame")),
            )?;
            logger.warn(&format!("{} sent a non-login first frame", peer), true)?;
            return Ok(());
        }
    };

    let role = match users::authenticate(&login.username, &login.password) {
        Some(role) => role,
        None => {
            send_frame(
                &mut stream,
                &Frame::Error(ErrorMessage::new("Invalid credentials")),
            )?;
            logger.warn(
                &format!("Rejected login for '{}' from {}", login.username, peer),
                true,
            )?;
            return Ok(());
        }
    };

    send_frame(
        &mut stream,
        &Frame::LoginOk(LoginOk {
            role: role.to_string(),
        }),
    )?;

    // New clients get the current picture immediately instead of waiting out
    // the remainder of the tick.
    let snapshot = {
        let sim = simulation
            .lock()
            .map_err(|_| ServerError::LockError("simulation lock poisoned".to_string()))?;
        sim.snapshot()
    };
    send_frame(&mut stream, &tracks_frame(&snapshot))?;

    let id = Uuid::new_v4();
    {
        let mut clients_lock = clients
            .lock()
            .map_err(|_| ServerError::LockError("clients lock poisoned".to_string()))?;
        clients_lock.insert(id, stream.try_clone()?);
    }

    logger.info(
        &format!("{} logged in as '{}' ({})", peer, login.username, role),
        Color::Green,
        true,
    )?;

    // Clients only listen after login; block on the socket until it closes
    // so the disconnect can be observed.
    let mut buffer = [0u8; 128];
    loop {
        match stream.read(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
    }

    if let Ok(mut clients_lock) = clients.lock() {
        clients_lock.remove(&id);
    }
    logger.info(&format!("{} disconnected", peer), Color::Yellow, true)?;

    Ok(())
}

fn send_frame(stream: &mut TcpStream, frame: &Frame) -> Result<(), ServerError> {
    stream.write_all(&frame.to_bytes()?)?;
    Ok(())
}
