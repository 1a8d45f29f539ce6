//! On-target checks for an ESP32-C6, run through the `.cargo/config.toml` runner.

#![no_std]
#![no_main]

#[cfg(test)]
#[embedded_test::tests(executor = esp_hal_embassy::Executor::new())]
mod tests {
    use defmt::assert_eq;
    use embassy_time::{Delay, Duration, Instant};
    use embedded_hal_async::delay::DelayNs;
    use esp_hal::timer::systimer::SystemTimer;
    use esp_lm35_mq2_monitor::config::MonitorConfig;
    use esp_lm35_mq2_monitor::conversion::{celsius_to_fahrenheit, lm35_to_celsius};
    use esp_lm35_mq2_monitor::Command;

    #[init]
    fn init() {
        let peripherals = esp_hal::init(esp_hal::Config::default());
        let timer0 = SystemTimer::new(peripherals.SYSTIMER);
        esp_hal_embassy::init(timer0.alarm0);

        rtt_target::rtt_init_defmt!();
    }

    #[test]
    fn conversions_use_the_fpu() {
        assert_eq!(lm35_to_celsius(1.0), 330.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn keys_classify() {
        assert_eq!(Command::classify('G'), Command::GasDetection);
        assert!(Command::classify('Q').is_quit());
    }

    #[test]
    async fn sample_period_elapses() {
        let period = MonitorConfig::DEFAULT.sample_period_ms;
        let start = Instant::now();
        Delay.delay_ms(period).await;
        assert!(start.elapsed() >= Duration::from_millis(period as u64));
    }
}
