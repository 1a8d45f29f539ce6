//! Analog port - a sampled voltage as a fraction of the ADC reference

use core::cell::RefCell;
use core::marker::PhantomData;

use embedded_hal_02::adc::{Channel, OneShot};
use log::warn;

use crate::conversion::normalize;

/// Port for a single analog input.
pub trait AnalogSource {
    /// Sample the input and return it normalized to `[0.0, 1.0]`.
    fn read(&mut self) -> f32;
}

/// One pin of a shared one-shot ADC.
///
/// Several channels may sit on the same converter, so the ADC itself is
/// borrowed through a `RefCell` for the duration of each conversion.
pub struct AdcChannel<'a, A, ADC, P> {
    adc: &'a RefCell<A>,
    pin: P,
    full_scale: u16,
    last: f32,
    _adc: PhantomData<ADC>,
}

impl<'a, A, ADC, P> AdcChannel<'a, A, ADC, P> {
    pub fn new(adc: &'a RefCell<A>, pin: P, full_scale: u16) -> Self {
        Self {
            adc,
            pin,
            full_scale,
            last: 0.0,
            _adc: PhantomData,
        }
    }
}

impl<A, ADC, P> AnalogSource for AdcChannel<'_, A, ADC, P>
where
    A: OneShot<ADC, u16, P>,
    P: Channel<ADC>,
{
    fn read(&mut self) -> f32 {
        let Ok(mut adc) = self.adc.try_borrow_mut() else {
            warn!("ADC busy, reusing last sample");
            return self.last;
        };
        match nb::block!(adc.read(&mut self.pin)) {
            Ok(sample) => {
                self.last = normalize(sample, self.full_scale);
                self.last
            }
            Err(_) => {
                // Keep reporting the previous value; the loop must not stall.
                warn!("ADC conversion failed, reusing last sample");
                self.last
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeAdc;

    struct Pin0;
    struct Pin1;

    impl Channel<FakeAdc> for Pin0 {
        type ID = u8;
        fn channel() -> u8 {
            0
        }
    }

    impl Channel<FakeAdc> for Pin1 {
        type ID = u8;
        fn channel() -> u8 {
            1
        }
    }

    struct Converter {
        samples: [Option<u16>; 2],
        busy_once: bool,
    }

    impl<P: Channel<FakeAdc, ID = u8>> OneShot<FakeAdc, u16, P> for Converter {
        type Error = ();

        fn read(&mut self, _pin: &mut P) -> nb::Result<u16, ()> {
            if self.busy_once {
                self.busy_once = false;
                return Err(nb::Error::WouldBlock);
            }
            self.samples[P::channel() as usize].ok_or(nb::Error::Other(()))
        }
    }

    #[test]
    fn channels_share_one_converter() {
        let adc = RefCell::new(Converter {
            samples: [Some(4095), Some(2048)],
            busy_once: true,
        });
        let mut pot: AdcChannel<_, FakeAdc, _> = AdcChannel::new(&adc, Pin0, 4095);
        let mut lm35: AdcChannel<_, FakeAdc, _> = AdcChannel::new(&adc, Pin1, 4095);

        assert_eq!(pot.read(), 1.0);
        assert!((lm35.read() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn failed_conversion_repeats_last_sample() {
        let adc = RefCell::new(Converter {
            samples: [Some(1024), None],
            busy_once: false,
        });
        let mut channel: AdcChannel<_, FakeAdc, _> = AdcChannel::new(&adc, Pin0, 4096);
        assert_eq!(channel.read(), 0.25);

        adc.borrow_mut().samples[0] = None;
        assert_eq!(channel.read(), 0.25);
    }
}
