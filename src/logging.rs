use simplelog::*;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Logging flags for granular control
static LOG_RING: AtomicBool = AtomicBool::new(false);
static LOG_KEYS: AtomicBool = AtomicBool::new(false);

/// Initialize logging with the specified file path
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;

    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        file,
    ).map_err(std::io::Error::other)?;

    Ok(())
}

/// Configure which categories to log
pub fn configure(ring: bool, keys: bool) {
    LOG_RING.store(ring, Ordering::Relaxed);
    LOG_KEYS.store(keys, Ordering::Relaxed);
}

/// Check if kill ring logging is enabled
pub fn log_ring() -> bool {
    LOG_RING.load(Ordering::Relaxed)
}

/// Check if key logging is enabled
pub fn log_keys() -> bool {
    LOG_KEYS.load(Ordering::Relaxed)
}
