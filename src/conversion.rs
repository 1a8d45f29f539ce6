//! Analog reading to engineering unit conversions.
//!
//! Every analog input arrives as a ratio of the ADC reference voltage in
//! `[0.0, 1.0]`. None of these functions validate their input.

/// 3.3 V full scale at 10 mV/°C.
pub const LM35_SCALE: f32 = 330.0;

// Board-specific potentiometer calibration, kept as measured.
pub const POT_SCALE: f32 = 148.0;
pub const POT_OFFSET: f32 = 2.0;

/// Scale a normalized LM35 reading to degrees Celsius.
pub fn lm35_to_celsius(raw: f32) -> f32 {
    raw * LM35_SCALE
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Map the potentiometer travel onto a temperature-like range comparable to
/// the LM35 (2 °C .. 150 °C).
pub fn potentiometer_to_celsius(raw: f32) -> f32 {
    raw * POT_SCALE + POT_OFFSET
}

pub fn potentiometer_to_fahrenheit(raw: f32) -> f32 {
    celsius_to_fahrenheit(potentiometer_to_celsius(raw))
}

/// Turn a raw ADC count into the `[0.0, 1.0]` ratio used by the monitor.
pub fn normalize(sample: u16, full_scale: u16) -> f32 {
    if full_scale == 0 {
        return 0.0;
    }
    (sample as f32 / full_scale as f32).min(1.0)
}
