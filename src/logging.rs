//! Debug-build file logging
//!
//! The terminal belongs to the viewer, so log lines go to
//! `<cache dir>/zoomiz/zoomiz.log`. Level comes from `RUST_LOG` (default `debug`).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

const LOG_DIR: &str = "zoomiz";
const LOG_FILE: &str = "zoomiz.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the file logger. Failing to open the log file leaves logging off.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
