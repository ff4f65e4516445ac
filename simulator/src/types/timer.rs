use chrono::{Duration, NaiveDateTime};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    thread,
    time::{Duration as StdDuration, Instant},
};

use super::sim_error::SimError;
use super::TICK_FREQUENCY_MILLIS;

/// Drives the simulation clock, with support for pausing and resuming.
///
/// The `Timer` tracks the current simulation time, advances it by the tick
/// cadence on each tick, and runs a caller-supplied callback per tick on a
/// dedicated thread.
pub struct Timer {
    pub current_time: Mutex<NaiveDateTime>,
    pub running: AtomicBool,
    pub paused: AtomicBool,
}

impl Timer {
    pub fn new(start_time: NaiveDateTime) -> Arc<Self> {
        Arc::new(Self {
            current_time: Mutex::new(start_time),
            running: AtomicBool::new(true),
            paused: AtomicBool::new(false),
        })
    }

    /// Stops the timer permanently; the tick thread exits after the current
    /// tick.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Pauses the timer indefinitely.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    /// Resumes the timer.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Starts the timer and executes the callback on each tick. The callback
    /// receives the simulation time and the tick count, starting at 1.
    pub fn start(
        self: Arc<Self>,
        tick_callback: impl Fn(NaiveDateTime, usize) + Send + 'static,
    ) -> Result<(), SimError> {
        thread::Builder::new()
            .name("timer-thread".to_string())
            .spawn(move || {
                let mut tick_count = 0;
                while self.running.load(Ordering::SeqCst) {
                    while self.paused.load(Ordering::SeqCst) {
                        thread::sleep(StdDuration::from_millis(100));
                    }

                    let now = Instant::now();

                    let current_time;
                    {
                        let mut time_lock = match self.current_time.lock() {
                            Ok(lock) => lock,
                            Err(_) => {
                                eprintln!("Failed to acquire lock on current_time. Skipping tick.");
                                continue;
                            }
                        };

                        *time_lock += Duration::milliseconds(TICK_FREQUENCY_MILLIS as i64);
                        current_time = *time_lock;
                    }

                    tick_count += 1;

                    tick_callback(current_time, tick_count);

                    let elapsed = now.elapsed();
                    let sleep_duration =
                        StdDuration::from_millis(TICK_FREQUENCY_MILLIS).saturating_sub(elapsed);
                    thread::sleep(sleep_duration);
                }
            })
            .map_err(|_| {
                SimError::TimerStartError("Failed to start the timer thread.".to_string())
            })?;

        Ok(())
    }
}
