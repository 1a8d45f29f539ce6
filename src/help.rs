use crate::ports::{PortError, SerialPort};

pub const HELP_LINES: [&str; 11] = [
    "\r\n",
    "Press the following keys to continuously print the readings until 'q' is pressed:\r\n",
    " - 'a' the reading at the analog pin A0 (connected to the potentiometer)\r\n",
    " - 'b' the reading at the analog pin A1 (connected to the LM35)\r\n",
    " - 'c' the reading of the temperature measured by the LM35 expressed in °C\r\n",
    " - 'd' the reading of the temperature measured by the LM35 expressed in °F\r\n",
    " - 'e' the reading of the temperature measured by the LM35 expressed in °C and the potentiometer reading scaled by the same factor\r\n",
    " - 'f' the reading of the temperature measured by the LM35 expressed in °F and the potentiometer reading scaled by the same factor\r\n",
    " - 'g' the reading of the DOUT signal of the MQ-2 gas sensor\r\n",
    "\r\n",
    "WARNING: The readings are printed continuously until 'q' or 'Q' are pressed.\r\n\r\n",
];

/// Write the list of supported commands.
pub async fn print_help<S: SerialPort>(serial: &mut S) -> Result<(), PortError> {
    for line in HELP_LINES {
        serial.write_str(line).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_ends_with_crlf() {
        for line in HELP_LINES {
            assert!(line.ends_with("\r\n"), "{line:?}");
        }
    }

    #[test]
    fn mentions_all_keys() {
        let text: std::string::String = HELP_LINES.concat();
        for key in 'a'..='g' {
            assert!(text.contains(&std::format!("'{key}'")), "missing {key}");
        }
        assert!(text.contains("'q' or 'Q'"));
    }
}
