#![cfg_attr(not(test), no_std)]

pub mod alarm;
pub mod command;
pub mod config;
pub mod conversion;
pub mod dispatcher;
pub mod help;
pub mod ports;

#[cfg(feature = "esp32c6")]
pub mod hal;
#[cfg(feature = "esp32c6")]
pub mod logger;
#[cfg(feature = "esp32c6")]
pub mod tasks;

pub use alarm::{AlarmError, AlarmLine};
pub use command::Command;
pub use config::MonitorConfig;
pub use dispatcher::{DispatchError, Dispatcher, MonitorState, Sensors};
