//! Command dispatcher.
//!
//! The monitor is either idle, waiting for a key, or looping on one command:
//!
//! ```text
//!            a..g / A..G
//!   Idle ─────────────────▶ Looping(cmd) ──┐ sample, print, delay,
//!    ▲ │ other key: help                   │ poll (non-quit keys ignored)
//!    │ └──▶ Idle                           ◀┘
//!    └──────────── q / Q ────────────────────
//! ```

use core::fmt::{self, Write as _};

use embedded_hal_02::digital::v2::InputPin;
use embedded_hal_async::delay::DelayNs;
use heapless::String;
use log::{debug, info, warn};

use crate::alarm::{AlarmError, AlarmLine};
use crate::command::Command;
use crate::config::{MonitorConfig, LINE_CAPACITY};
use crate::conversion::{
    celsius_to_fahrenheit, lm35_to_celsius, potentiometer_to_celsius,
    potentiometer_to_fahrenheit,
};
use crate::help::print_help;
use crate::ports::{AnalogSource, BidirectionalPin, PortError, SerialPort};

pub const GAS_DETECTED: &str = "Gas is being detected\r\n";
pub const GAS_NOT_DETECTED: &str = "Gas is not being detected\r\n";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    Idle,
    Looping(Command),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    Port(PortError),
    /// A report did not fit in the line buffer
    Format,
    Alarm(AlarmError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Port(err) => write!(f, "{err}"),
            DispatchError::Format => f.write_str("report line overflow"),
            DispatchError::Alarm(err) => write!(f, "{err}"),
        }
    }
}

impl From<PortError> for DispatchError {
    fn from(err: PortError) -> Self {
        DispatchError::Port(err)
    }
}

impl From<AlarmError> for DispatchError {
    fn from(err: AlarmError) -> Self {
        DispatchError::Alarm(err)
    }
}

impl From<fmt::Error> for DispatchError {
    fn from(_: fmt::Error) -> Self {
        DispatchError::Format
    }
}

/// Inputs sampled by the print loops.
pub struct Sensors<P, L, G> {
    pub potentiometer: P,
    pub lm35: L,
    /// MQ-2 DOUT, active low
    pub gas: G,
}

pub struct Dispatcher<S, P, L, G, A, D> {
    serial: S,
    sensors: Sensors<P, L, G>,
    alarm: AlarmLine<A>,
    delay: D,
    config: MonitorConfig,
    state: MonitorState,
}

impl<S, P, L, G, A, D> Dispatcher<S, P, L, G, A, D>
where
    S: SerialPort,
    P: AnalogSource,
    L: AnalogSource,
    G: InputPin,
    A: BidirectionalPin,
    D: DelayNs,
{
    pub fn new(
        serial: S,
        sensors: Sensors<P, L, G>,
        alarm: AlarmLine<A>,
        delay: D,
        config: MonitorConfig,
    ) -> Self {
        Self {
            serial,
            sensors,
            alarm,
            delay,
            config,
            state: MonitorState::Idle,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn alarm(&self) -> &AlarmLine<A> {
        &self.alarm
    }

    pub fn into_parts(self) -> (S, Sensors<P, L, G>, AlarmLine<A>, D) {
        (self.serial, self.sensors, self.alarm, self.delay)
    }

    /// Print the command list once, as the board does after reset.
    pub async fn start(&mut self) -> Result<(), DispatchError> {
        info!("monitor ready, {} ms sample period", self.config.sample_period_ms);
        print_help(&mut self.serial).await?;
        Ok(())
    }

    /// Handle at most one key while idle.
    ///
    /// Returns the classified key, or `None` if nothing (or NUL) was pending.
    /// A loop command only returns once `q`/`Q` has been received.
    pub async fn poll(&mut self) -> Result<Option<Command>, DispatchError> {
        let key = match self.serial.try_read_char().await {
            Some('\0') | None => return Ok(None),
            Some(key) => key,
        };

        let command = Command::classify(key);
        if command.is_loop() {
            self.run_command(command).await;
        } else {
            debug!("key {:?} is not a command, printing help", key);
            print_help(&mut self.serial).await?;
        }
        Ok(Some(command))
    }

    /// Run the print loop for `command` until a quit key arrives.
    ///
    /// Faults inside a cycle are logged and the loop carries on; only the
    /// quit key ends it.
    pub async fn run_command(&mut self, command: Command) {
        let Some(key) = command.key() else {
            return;
        };

        info!("'{}' loop started", key);
        self.state = MonitorState::Looping(command);

        loop {
            if let Err(err) = self.sample(command).await {
                warn!("'{}' cycle failed: {}", key, err);
            }

            self.delay.delay_ms(self.config.sample_period_ms).await;

            if let Some(next) = self.serial.try_read_char().await {
                if Command::classify(next).is_quit() {
                    break;
                }
            }
        }

        self.state = MonitorState::Idle;
        info!("'{}' loop stopped", key);
    }

    /// Print the banner, then serve keys forever.
    pub async fn run(&mut self) -> ! {
        if let Err(err) = self.start().await {
            warn!("help banner failed: {}", err);
        }

        loop {
            match self.poll().await {
                Ok(Some(_)) => {}
                Ok(None) => self.delay.delay_ms(self.config.idle_poll_ms).await,
                Err(err) => warn!("dispatch failed: {}", err),
            }
        }
    }

    /// One sample / convert / print step of a loop command.
    async fn sample(&mut self, command: Command) -> Result<(), DispatchError> {
        let mut line: String<LINE_CAPACITY> = String::new();

        match command {
            Command::PotentiometerRaw => {
                let raw = self.sensors.potentiometer.read();
                write!(line, "Potentiometer reading: {raw:.2}\r\n")?;
            }
            Command::Lm35Raw => {
                let raw = self.sensors.lm35.read();
                write!(line, "LM35 reading: {raw:.2}\r\n")?;
            }
            Command::Lm35Celsius => {
                let celsius = lm35_to_celsius(self.sensors.lm35.read());
                write!(line, "LM35: {celsius:.2} °C\r\n")?;
            }
            Command::Lm35Fahrenheit => {
                let fahrenheit = celsius_to_fahrenheit(lm35_to_celsius(self.sensors.lm35.read()));
                write!(line, "LM35: {fahrenheit:.2} °F\r\n")?;
            }
            Command::CelsiusComparison => {
                let pot = potentiometer_to_celsius(self.sensors.potentiometer.read());
                let lm35 = lm35_to_celsius(self.sensors.lm35.read());
                write!(line, "LM35: {lm35:.2} °C, Potentiometer scaled to °C: {pot:.2}\r\n")?;
            }
            Command::FahrenheitComparison => {
                let pot = potentiometer_to_fahrenheit(self.sensors.potentiometer.read());
                let lm35 = celsius_to_fahrenheit(lm35_to_celsius(self.sensors.lm35.read()));
                write!(line, "LM35: {lm35:.2} °F, Potentiometer scaled to °F: {pot:.2}\r\n")?;
            }
            Command::GasDetection => {
                // The siren follows the detector even if the report is lost.
                if self.gas_detected() {
                    self.alarm.sound()?;
                    line.push_str(GAS_DETECTED).map_err(|_| DispatchError::Format)?;
                } else {
                    self.alarm.release();
                    line.push_str(GAS_NOT_DETECTED).map_err(|_| DispatchError::Format)?;
                }
            }
            Command::Quit | Command::Unrecognized(_) => return Ok(()),
        }

        debug!("{}", line.trim_end());
        self.serial.write_str(&line).await?;
        Ok(())
    }

    fn gas_detected(&self) -> bool {
        match self.sensors.gas.is_low() {
            Ok(low) => low,
            Err(_) => {
                warn!("gas input unreadable, assuming clear");
                false
            }
        }
    }
}
