//! Logging bootstrap
//!
//! `log` facade everywhere; the browser console on wasm32, `env_logger` on
//! native. Initialization is idempotent and never panics.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the logger (and on wasm32 the panic hook) once per process
pub fn init_logging(level: log::LevelFilter) {
    INIT.call_once(|| {
        install();
        log::debug!("Logging initialized at {}", level);
    });
    set_level(level);
}

/// Change the level filter of the installed logger
///
/// Backends are installed at `Trace`; this global filter is the one that applies.
pub fn set_level(level: log::LevelFilter) {
    log::set_max_level(level);
}

#[cfg(target_arch = "wasm32")]
fn install() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    if let Err(e) = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .try_init()
    {
        eprintln!("Logger already set: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the global level filter so parallel tests cannot race on it
    #[test]
    fn test_init_and_level_changes() {
        init_logging(log::LevelFilter::Debug);
        assert_eq!(log::max_level(), log::LevelFilter::Debug);

        init_logging(log::LevelFilter::Trace);
        assert_eq!(log::max_level(), log::LevelFilter::Trace);
        log::info!("still logging");

        set_level(log::LevelFilter::Off);
        assert_eq!(log::max_level(), log::LevelFilter::Off);

        set_level(log::LevelFilter::Info);
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }
}
