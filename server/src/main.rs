mod broadcast;
mod connection;
mod errors;
mod users;

use std::collections::HashMap;
use std::env;
use std::net::TcpListener;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

use chrono::Utc;
use errors::ServerError;
use logger::{Color, Logger};
use simulator::types::simulation::Simulation;
use simulator::types::timer::Timer;
use threadpool::ThreadPool;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4150";
const DEFAULT_AIRCRAFT_COUNT: usize = 20;

/// Workers used to fan frames out to clients.
const BROADCAST_POOL_SIZE: usize = 4;

/// Starts the radar server.
///
/// # Usage
///
/// ```sh
/// cargo run -- [bind_addr] [aircraft_count]
/// ```
///
/// Both arguments are optional; the defaults are `127.0.0.1:4150` and 20
/// aircraft.
fn main() -> Result<(), ServerError> {
    let (bind_addr, aircraft_count) = parse_args(env::args().skip(1).collect())?;

    let logger = Arc::new(Logger::new(Path::new("logs"), "radar-server")?);
    let simulation = Arc::new(Mutex::new(Simulation::new(aircraft_count)?));
    let clients = Arc::new(Mutex::new(HashMap::new()));

    let timer = Timer::new(Utc::now().naive_utc());
    {
        let simulation = Arc::clone(&simulation);
        let clients = Arc::clone(&clients);
        let logger = Arc::clone(&logger);
        let pool = ThreadPool::new(BROADCAST_POOL_SIZE);

        timer.start(move |current_time, tick_count| {
            if let Err(e) = broadcast::run_tick(
                &simulation,
                &clients,
                &pool,
                &logger,
                current_time,
                tick_count,
            ) {
                let _ = logger.error(&format!("Tick {} failed: {}", tick_count, e), true);
            }
        })?;
    }

    let listener = TcpListener::bind(&bind_addr)?;
    logger.info(
        &format!(
            "Radar server listening on {} with {} aircraft",
            bind_addr, aircraft_count
        ),
        Color::Green,
        true,
    )?;

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let simulation = Arc::clone(&simulation);
                let clients = Arc::clone(&clients);
                let logger = Arc::clone(&logger);

                thread::spawn(move || {
                    if let Err(e) = connection::handle_client(
                        stream,
                        simulation,
                        clients,
                        Arc::clone(&logger),
                    ) {
                        let _ = logger.error(&format!("Connection error: {}", e), true);
                    }
                });
            }
            Err(e) => {
                let _ = logger.error(&format!("Failed to accept connection: {}", e), true);
            }
        }
    }

    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<(String, usize), ServerError> {
    if args.len() > 2 {
        return Err(ServerError::InvalidArguments(
            "Usage: server [bind_addr] [aircraft_count]".to_string(),
        ));
    }

    let bind_addr = args
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let aircraft_count = match args.get(1) {
        Some(raw) => raw.parse().map_err(|_| {
            ServerError::InvalidArguments(format!("Invalid aircraft count: {}", raw))
        })?,
        None => DEFAULT_AIRCRAFT_COUNT,
    };

    Ok((bind_addr, aircraft_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let (addr, count) = parse_args(vec![]).unwrap();
        assert_eq!(addr, DEFAULT_BIND_ADDR);
        assert_eq!(count, DEFAULT_AIRCRAFT_COUNT);
    }

    #[test]
    fn both_args_are_honored() {
        let (addr, count) =
            parse_args(vec!["0.0.0.0:9000".to_string(), "50".to_string()]).unwrap();
        assert_eq!(addr, "0.0.0.0:9000");
        assert_eq!(count, 50);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        assert!(matches!(
            parse_args(vec!["0.0.0.0:9000".to_string(), "many".to_string()]),
            Err(ServerError::InvalidArguments(_))
        ));
    }

    #[test]
    fn extra_args_are_rejected() {
        let args = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(matches!(
            parse_args(args),
            Err(ServerError::InvalidArguments(_))
        ));
    }
}
