use core::fmt;

use log::{debug, error};

use crate::ports::{BidirectionalPin, LineMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmError {
    /// `write` was called while the line was released
    NotDriven,
}

impl fmt::Display for AlarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlarmError::NotDriven => f.write_str("alarm line written while in input mode"),
        }
    }
}

/// Siren line with its current direction.
///
/// The siren is wired open drain: releasing the line silences it, driving it
/// low sounds it.
pub struct AlarmLine<P> {
    pin: P,
    mode: LineMode,
}

impl<P: BidirectionalPin> AlarmLine<P> {
    /// Take the pin and start released.
    pub fn new(mut pin: P) -> Self {
        pin.set_mode(LineMode::Input);
        Self {
            pin,
            mode: LineMode::Input,
        }
    }

    pub fn mode(&self) -> LineMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LineMode) {
        if self.mode != mode {
            debug!("alarm line -> {:?}", mode);
        }
        self.pin.set_mode(mode);
        self.mode = mode;
    }

    /// Drive the output latch. Fails unless the line is in `DrivenOutput`.
    pub fn write(&mut self, high: bool) -> Result<(), AlarmError> {
        if self.mode != LineMode::DrivenOutput {
            error!("refusing to drive alarm line in {:?} mode", self.mode);
            return Err(AlarmError::NotDriven);
        }
        self.pin.drive(high);
        Ok(())
    }

    /// Drive the line low.
    pub fn sound(&mut self) -> Result<(), AlarmError> {
        self.set_mode(LineMode::DrivenOutput);
        self.write(false)
    }

    /// Back to input.
    pub fn release(&mut self) {
        self.set_mode(LineMode::Input);
    }

    pub fn release_pin(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct RecordingPin {
        modes: Vec<LineMode>,
        levels: Vec<bool>,
    }

    impl BidirectionalPin for RecordingPin {
        fn set_mode(&mut self, mode: LineMode) {
            self.modes.push(mode);
        }

        fn drive(&mut self, high: bool) {
            self.levels.push(high);
        }
    }

    #[test]
    fn starts_released() {
        let alarm = AlarmLine::new(RecordingPin::default());
        assert_eq!(alarm.mode(), LineMode::Input);
        assert_eq!(alarm.release_pin().modes, [LineMode::Input]);
    }

    #[test]
    fn write_requires_driven_mode() {
        let mut alarm = AlarmLine::new(RecordingPin::default());
        assert_eq!(alarm.write(false), Err(AlarmError::NotDriven));
        assert!(alarm.release_pin().levels.is_empty());
    }

    #[test]
    fn sound_then_release() {
        let mut alarm = AlarmLine::new(RecordingPin::default());
        alarm.sound().unwrap();
        assert_eq!(alarm.mode(), LineMode::DrivenOutput);
        alarm.release();
        assert_eq!(alarm.mode(), LineMode::Input);

        let pin = alarm.release_pin();
        assert_eq!(
            pin.modes,
            [LineMode::Input, LineMode::DrivenOutput, LineMode::Input]
        );
        assert_eq!(pin.levels, [false]);
    }
}
