#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use core::cell::RefCell;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};
use esp_hal::analog::adc::{Adc, AdcConfig, Attenuation};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Flex, Input, InputConfig, Pull};
use esp_hal::timer::systimer::SystemTimer;
use esp_hal::uart::{Config as UartConfig, Uart};
use esp_lm35_mq2_monitor::config::MonitorConfig;
use esp_lm35_mq2_monitor::hal::{AdcCompat, AdcPinCompat, InputCompat, OpenDrainLine};
use esp_lm35_mq2_monitor::ports::{AdcChannel, UartPort};
use esp_lm35_mq2_monitor::tasks::monitor::monitor_task;
use esp_lm35_mq2_monitor::{logger, AlarmLine, Dispatcher, Sensors};
use panic_rtt_target as _;
use static_cell::StaticCell;

// ── board wiring ────────────────────────────────────────────────────────────
//   GPIO0  potentiometer wiper (ADC1)
//   GPIO1  LM35 Vout (ADC1)
//   GPIO10 siren, open drain, active low
//   GPIO11 MQ-2 DOUT, low when gas is present
//   UART0  USB bridge (GPIO16 TX, GPIO17 RX)

static ADC_CELL: StaticCell<RefCell<AdcCompat<'static>>> = StaticCell::new();

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    rtt_target::rtt_init_defmt!();
    logger::init(log::LevelFilter::Info);

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    info!("Embassy initialized!");

    let monitor = MonitorConfig::DEFAULT;

    let uart_config = UartConfig::default().with_baudrate(monitor.baud_rate);
    let uart = match Uart::new(peripherals.UART0, uart_config) {
        Ok(uart) => uart
            .with_tx(peripherals.GPIO16)
            .with_rx(peripherals.GPIO17)
            .into_async(),
        Err(_) => {
            error!("UART initialization failed");
            loop {
                Timer::after(Duration::from_millis(1000)).await;
            }
        }
    };

    // 11 dB attenuation gives the full 0..3.3 V span the LM35 scale assumes.
    let mut adc_config = AdcConfig::new();
    let pot_pin = adc_config.enable_pin(peripherals.GPIO0, Attenuation::_11dB);
    let lm35_pin = adc_config.enable_pin(peripherals.GPIO1, Attenuation::_11dB);
    let adc: &'static RefCell<AdcCompat<'static>> = ADC_CELL.init(RefCell::new(AdcCompat::new(Adc::new(
        peripherals.ADC1,
        adc_config,
    ))));

    let gas = Input::new(peripherals.GPIO11, InputConfig::default().with_pull(Pull::None));
    let siren = OpenDrainLine::new(Flex::new(peripherals.GPIO10));

    let sensors = Sensors {
        potentiometer: AdcChannel::new(adc, AdcPinCompat::new(pot_pin), monitor.adc_full_scale),
        lm35: AdcChannel::new(adc, AdcPinCompat::new(lm35_pin), monitor.adc_full_scale),
        gas: InputCompat::new(gas),
    };

    let dispatcher = Dispatcher::new(
        UartPort::new(uart),
        sensors,
        AlarmLine::new(siren),
        Delay,
        monitor,
    );

    info!("Starting serial monitor…");
    if spawner.spawn(monitor_task(dispatcher)).is_err() {
        error!("Failed to spawn monitor task");
    }

    // Nothing else to do here; park the main task.
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
