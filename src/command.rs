/// A key received over the serial link, classified once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `a`: raw potentiometer ratio
    PotentiometerRaw,
    /// `b`: raw LM35 ratio
    Lm35Raw,
    /// `c`: LM35 in °C
    Lm35Celsius,
    /// `d`: LM35 in °F
    Lm35Fahrenheit,
    /// `e`: LM35 and potentiometer, both in °C
    CelsiusComparison,
    /// `f`: LM35 and potentiometer, both in °F
    FahrenheitComparison,
    /// `g`: MQ-2 digital output, drives the siren
    GasDetection,
    Quit,
    Unrecognized(char),
}

impl Command {
    pub const LOOP_COMMANDS: [Command; 7] = [
        Command::PotentiometerRaw,
        Command::Lm35Raw,
        Command::Lm35Celsius,
        Command::Lm35Fahrenheit,
        Command::CelsiusComparison,
        Command::FahrenheitComparison,
        Command::GasDetection,
    ];

    pub fn classify(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'a' => Command::PotentiometerRaw,
            'b' => Command::Lm35Raw,
            'c' => Command::Lm35Celsius,
            'd' => Command::Lm35Fahrenheit,
            'e' => Command::CelsiusComparison,
            'f' => Command::FahrenheitComparison,
            'g' => Command::GasDetection,
            'q' => Command::Quit,
            _ => Command::Unrecognized(key),
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// True for the seven commands that start a continuous print loop.
    pub fn is_loop(&self) -> bool {
        Self::LOOP_COMMANDS.contains(self)
    }

    /// Lowercase key of a loop command.
    pub fn key(&self) -> Option<char> {
        match self {
            Command::PotentiometerRaw => Some('a'),
            Command::Lm35Raw => Some('b'),
            Command::Lm35Celsius => Some('c'),
            Command::Lm35Fahrenheit => Some('d'),
            Command::CelsiusComparison => Some('e'),
            Command::FahrenheitComparison => Some('f'),
            Command::GasDetection => Some('g'),
            Command::Quit | Command::Unrecognized(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        for (lower, upper) in ('a'..='g').zip('A'..='G') {
            assert_eq!(Command::classify(lower), Command::classify(upper));
            assert!(Command::classify(upper).is_loop());
        }
        assert!(Command::classify('q').is_quit());
        assert!(Command::classify('Q').is_quit());
    }

    #[test]
    fn key_round_trips_for_loop_commands() {
        for command in Command::LOOP_COMMANDS {
            let key = command.key().unwrap();
            assert!(command.is_loop());
            assert_eq!(Command::classify(key), command);
        }
    }

    #[test]
    fn everything_else_is_unrecognized() {
        for key in ['z', 'h', '0', ' ', '\r', '\n', 'é'] {
            let command = Command::classify(key);
            assert_eq!(command, Command::Unrecognized(key));
            assert!(!command.is_loop());
            assert!(!command.is_quit());
        }
        assert!(!Command::Quit.is_loop());
    }
}
