//! Boundaries between the monitor and the board.
//!
//! - **SerialPort**: command input and report output (UART, USB CDC, mock)
//! - **AnalogSource**: a normalized analog sample (ADC channel, mock)
//! - **BidirectionalPin**: a line that can be sensed or driven (siren pin)
//!
//! The gas detector output is read through `embedded_hal_02::digital::v2::InputPin`.

pub mod analog;
pub mod line;
pub mod serial;

pub use analog::{AdcChannel, AnalogSource};
pub use line::{BidirectionalPin, LineMode};
pub use serial::{PortError, SerialPort, UartPort};
