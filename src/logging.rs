use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

/// Where log lines go
pub enum LogTarget {
    /// The log file in local app data, overwritten on every start.
    /// Used by the language server, whose stdout carries the protocol.
    File,
    /// Standard error, used by the command line front end
    Stderr,
}

struct Logger {
    sink: Mutex<Box<dyn Write + Send>>,
    level: LevelFilter,
}

impl Logger {
    fn to_file(file_path: PathBuf, level: LevelFilter) -> io::Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(Logger {
            sink: Mutex::new(Box::new(file)),
            level,
        })
    }

    fn to_stderr(level: LevelFilter) -> Self {
        Logger {
            sink: Mutex::new(Box::new(io::stderr())),
            level,
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut sink) = self.sink.lock() {
                let _ = writeln!(
                    sink,
                    "[{}] [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                );
                let _ = sink.flush();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

/// Get the platform-specific log file path
fn get_log_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir().ok_or("Could not determine local data directory")?;

    Ok(data_dir.join("CssLint").join("css_lint.log"))
}

/// Install the global logger
pub fn init_logger(target: LogTarget, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let logger = match target {
        LogTarget::File => Logger::to_file(get_log_file_path()?, level)?,
        LogTarget::Stderr => Logger::to_stderr(level),
    };

    log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level))?;

    Ok(())
}
