use defmt::info;
use embassy_time::Delay;
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1};
use esp_hal::uart::Uart;
use esp_hal::Async;

use crate::dispatcher::Dispatcher;
use crate::hal::{AdcCompat, AdcPinCompat, InputCompat, OpenDrainLine};
use crate::ports::{AdcChannel, UartPort};

pub type BoardSerial = UartPort<Uart<'static, Async>>;
pub type PotentiometerChannel =
    AdcChannel<'static, AdcCompat<'static>, ADC1<'static>, AdcPinCompat<'static, GPIO0<'static>>>;
pub type Lm35Channel =
    AdcChannel<'static, AdcCompat<'static>, ADC1<'static>, AdcPinCompat<'static, GPIO1<'static>>>;

pub type BoardDispatcher = Dispatcher<
    BoardSerial,
    PotentiometerChannel,
    Lm35Channel,
    InputCompat<'static>,
    OpenDrainLine<'static>,
    Delay,
>;

#[embassy_executor::task]
pub async fn monitor_task(mut dispatcher: BoardDispatcher) -> ! {
    info!("Serial monitor running");
    dispatcher.run().await
}
