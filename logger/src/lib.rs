use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Writes timestamped log lines to a per-component file, optionally echoing
/// them to the console with ANSI colors.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates a new `Logger` writing to `{name}.log` inside `log_dir`.
    /// The directory is created if it does not exist and the log file is
    /// truncated if a previous run left one behind.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        std::fs::create_dir_all(log_dir).map_err(LoggerError::from)?;

        let log_file = log_dir.join(format!("{}.log", name));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)
            .map_err(LoggerError::from)?;

        Ok(Logger { log_file })
    }

    // Generic method for writing log messages
    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = match &level {
            LogLevel::Info(_) => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        if to_console {
            let colored_message = match &level {
                LogLevel::Info(color) => format!("{}{}\x1b[0m", color.to_ansi_code(), log_message),
                LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", log_message),
                LogLevel::Error => format!("\x1b[91m{}\x1b[0m", log_message),
            };
            print!("{}", colored_message);
            io::stdout().flush().map_err(LoggerError::from)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .map_err(LoggerError::from)?;
        file.write_all(log_message.as_bytes())
            .map_err(LoggerError::from)?;
        file.flush().map_err(LoggerError::from)?;

        Ok(())
    }

    /// Logs an informational message.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn logger_creates_file_and_writes_levels() {
        let log_dir = Path::new("/tmp/radar_logger_test");
        fs::create_dir_all(log_dir).expect("Failed to create test directory");

        let logger = Logger::new(log_dir, "radar_test").expect("Failed to create logger");

        logger
            .info("tick completed", Color::Green, false)
            .expect("Failed to log info");
        logger
            .warn("client lagging", false)
            .expect("Failed to log warn");

        let log_file_path = log_dir.join("radar_test.log");
        let log_contents = fs::read_to_string(&log_file_path).expect("Failed to read log file");

        assert!(log_contents.contains("[INFO]"), "INFO level missing in log");
        assert!(log_contents.contains("[WARN]"), "WARN level missing in log");
        assert!(log_contents.contains("tick completed"));

        fs::remove_dir_all(log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn logger_truncates_previous_run() {
        let log_dir = Path::new("/tmp/radar_logger_truncate_test");
        fs::create_dir_all(log_dir).expect("Failed to create test directory");

        let logger = Logger::new(log_dir, "radar_trunc").expect("Failed to create logger");
        logger
            .error("first run error", false)
            .expect("Failed to log");

        // A second logger over the same name starts with an empty file.
        let _logger = Logger::new(log_dir, "radar_trunc").expect("Failed to recreate logger");
        let log_contents = fs::read_to_string(log_dir.join("radar_trunc.log"))
            .expect("Failed to read log file");
        assert!(log_contents.is_empty());

        fs::remove_dir_all(log_dir).expect("Failed to remove test directory");
    }
}
