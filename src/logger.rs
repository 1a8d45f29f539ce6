//! Forwards `log` records from the portable modules to defmt/RTT.

use log::{Level, LevelFilter, Metadata, Record};

struct DefmtLogger;

static LOGGER: DefmtLogger = DefmtLogger;

impl log::Log for DefmtLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let message = defmt::Display2Format(record.args());
        match record.level() {
            Level::Error => defmt::error!("{}", message),
            Level::Warn => defmt::warn!("{}", message),
            Level::Info => defmt::info!("{}", message),
            Level::Debug => defmt::debug!("{}", message),
            Level::Trace => defmt::trace!("{}", message),
        }
    }

    fn flush(&self) {}
}

/// Install the bridge. A second call is ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    } else {
        defmt::warn!("log bridge already installed");
    }
}
