/// Fixed monitor settings. There is no runtime configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Delay between two samples of a print loop
    pub sample_period_ms: u32,
    /// Pause between two empty polls while idle
    pub idle_poll_ms: u32,
    /// ADC count that corresponds to the reference voltage (12-bit ADC)
    pub adc_full_scale: u16,
    pub baud_rate: u32,
}

impl MonitorConfig {
    pub const DEFAULT: MonitorConfig = MonitorConfig {
        sample_period_ms: 200,
        idle_poll_ms: 10,
        adc_full_scale: 4095,
        baud_rate: 115_200,
    };
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Longest line the monitor formats, CRLF included.
pub const LINE_CAPACITY: usize = 96;
