//! Serial port - abstraction for the command/report link
//!
//! The monitor only needs two things from the transport: a non-blocking
//! single character poll and a way to push a formatted line out.

use core::fmt;
use core::future::Future;

use embedded_io::{Error as _, ReadReady};
use embedded_io_async::{Read, Write};
use log::warn;

/// Error type for serial operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError {
    /// The transport rejected or dropped outgoing bytes
    WriteFailed,
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::WriteFailed => f.write_str("serial write failed"),
        }
    }
}

/// Port for the serial link to the host terminal.
pub trait SerialPort {
    /// Poll for one pending character.
    ///
    /// Returns `None` when nothing has arrived or the byte was NUL. Receive
    /// faults are also reported as `None`; the monitor treats them like an
    /// empty poll.
    fn try_read_char(&mut self) -> impl Future<Output = Option<char>>;

    /// Transmit `text` as-is. Lines carry their own CRLF.
    fn write_str(&mut self, text: &str) -> impl Future<Output = Result<(), PortError>>;
}

/// `SerialPort` over any async `embedded-io` UART.
pub struct UartPort<U> {
    uart: U,
}

impl<U> UartPort<U> {
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    pub fn release(self) -> U {
        self.uart
    }
}

impl<U> SerialPort for UartPort<U>
where
    U: ReadReady + Read + Write,
{
    async fn try_read_char(&mut self) -> Option<char> {
        match self.uart.read_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                warn!("serial poll failed: {:?}", err.kind());
                return None;
            }
        }

        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte).await {
            // NUL is what an idle line reads as, not a key.
            Ok(1) if byte[0] == 0 => None,
            Ok(1) => Some(char::from(byte[0])),
            Ok(_) => None,
            Err(err) => {
                warn!("serial read failed: {:?}", err.kind());
                None
            }
        }
    }

    async fn write_str(&mut self, text: &str) -> Result<(), PortError> {
        self.uart.write_all(text.as_bytes()).await.map_err(|err| {
            warn!("serial write failed: {:?}", err.kind());
            PortError::WriteFailed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embassy_futures::block_on;
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Default)]
    struct FakeUart {
        rx: VecDeque<u8>,
        tx: Vec<u8>,
    }

    impl embedded_io::ErrorType for FakeUart {
        type Error = Infallible;
    }

    impl ReadReady for FakeUart {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.rx.is_empty())
        }
    }

    impl Read for FakeUart {
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let mut n = 0;
            while n < buf.len() {
                match self.rx.pop_front() {
                    Some(byte) => {
                        buf[n] = byte;
                        n += 1;
                    }
                    None => break,
                }
            }
            Ok(n)
        }
    }

    impl Write for FakeUart {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.tx.extend_from_slice(buf);
            Ok(buf.len())
        }
    }

    #[test]
    fn empty_poll_is_none() {
        let mut port = UartPort::new(FakeUart::default());
        assert_eq!(block_on(port.try_read_char()), None);
    }

    #[test]
    fn reads_one_char_at_a_time() {
        let mut uart = FakeUart::default();
        uart.rx.extend(b"cq");
        let mut port = UartPort::new(uart);

        assert_eq!(block_on(port.try_read_char()), Some('c'));
        assert_eq!(block_on(port.try_read_char()), Some('q'));
        assert_eq!(block_on(port.try_read_char()), None);
    }

    #[test]
    fn nul_byte_is_an_empty_poll() {
        let mut uart = FakeUart::default();
        uart.rx.extend([0u8, b'c']);
        let mut port = UartPort::new(uart);

        assert_eq!(block_on(port.try_read_char()), None);
        assert_eq!(block_on(port.try_read_char()), Some('c'));
    }

    #[test]
    fn writes_bytes_verbatim() {
        let mut port = UartPort::new(FakeUart::default());
        block_on(port.write_str("LM35: 16.50 °C\r\n")).unwrap();
        let uart = port.release();
        assert_eq!(uart.tx, "LM35: 16.50 °C\r\n".as_bytes());
    }
}
