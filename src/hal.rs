// ─────────────────────────────────────────────────────────────────────────────
// Shims that let `esp-hal 1.0` drivers satisfy the monitor's ports and the
// `embedded-hal 0.2` traits it is written against.

use core::convert::Infallible;

use embedded_hal_02::adc::{Channel, OneShot};
use embedded_hal_02::digital::v2::InputPin;
use esp_hal::analog::adc::{Adc, AdcChannel as HalAdcChannel, AdcPin};
use esp_hal::gpio::{DriveMode, Flex, Input, Level, OutputConfig, Pull};
use esp_hal::peripherals::ADC1;

use crate::ports::{BidirectionalPin, LineMode};

pub type HalAdc<'a> = Adc<'a, ADC1<'a>, esp_hal::Blocking>;

pub struct AdcCompat<'a> {
    pub inner: HalAdc<'a>,
}

impl<'a> AdcCompat<'a> {
    pub fn new(inner: HalAdc<'a>) -> Self {
        Self { inner }
    }
}

/// An enabled ADC1 pin, tagged as an `embedded-hal 0.2` channel.
pub struct AdcPinCompat<'a, PIN> {
    pub inner: AdcPin<PIN, ADC1<'a>>,
}

impl<'a, PIN> AdcPinCompat<'a, PIN> {
    pub fn new(inner: AdcPin<PIN, ADC1<'a>>) -> Self {
        Self { inner }
    }
}

impl<'a, PIN: HalAdcChannel> Channel<ADC1<'a>> for AdcPinCompat<'a, PIN> {
    type ID = u8;
    fn channel() -> u8 {
        PIN::CHANNEL
    }
}

impl<'a, PIN: HalAdcChannel> OneShot<ADC1<'a>, u16, AdcPinCompat<'a, PIN>> for AdcCompat<'a> {
    type Error = ();
    fn read(&mut self, pin: &mut AdcPinCompat<'a, PIN>) -> nb::Result<u16, ()> {
        self.inner.read_oneshot(&mut pin.inner)
    }
}

/// MQ-2 DOUT input.
pub struct InputCompat<'a> {
    pub inner: Input<'a>,
}

impl<'a> InputCompat<'a> {
    pub fn new(inner: Input<'a>) -> Self {
        Self { inner }
    }
}

impl InputPin for InputCompat<'_> {
    type Error = Infallible;
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.inner.is_high())
    }
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.inner.is_low())
    }
}

/// Siren pin: open drain, input buffer always on, output driver toggled.
pub struct OpenDrainLine<'a> {
    inner: Flex<'a>,
}

impl<'a> OpenDrainLine<'a> {
    pub fn new(mut inner: Flex<'a>) -> Self {
        inner.apply_output_config(
            &OutputConfig::default()
                .with_drive_mode(DriveMode::OpenDrain)
                .with_pull(Pull::None),
        );
        inner.set_input_enable(true);
        inner.set_output_enable(false);
        Self { inner }
    }
}

impl BidirectionalPin for OpenDrainLine<'_> {
    fn set_mode(&mut self, mode: LineMode) {
        self.inner
            .set_output_enable(matches!(mode, LineMode::DrivenOutput));
    }

    fn drive(&mut self, high: bool) {
        self.inner.set_level(Level::from(high));
    }
}
// ─────────────────────────────────────────────────────────────────────────────
