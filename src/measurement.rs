use num_traits::Float;

// Magnus coefficients, over water and over ice.
const MAGNUS_WATER: (f32, f32) = (17.62, 243.12);
const MAGNUS_ICE: (f32, f32) = (22.46, 272.62);

// Lowest humidity fed into the logarithm of the dew point calculation.
const MIN_DEW_POINT_HUMIDITY: f32 = 0.001;

/// A single temperature and humidity sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Temperature in °C.
    pub temperature: f32,
    /// Relative humidity in %RH, within `0.0..=100.0`.
    pub humidity: f32,
}

impl SensorReading {
    /// Converts the raw temperature and humidity words.
    pub fn from_raw(raw_temperature: u16, raw_humidity: u16) -> Self {
        Self {
            temperature: convert_temperature(raw_temperature),
            humidity: convert_humidity(raw_humidity),
        }
    }

    /// Dew point in °C, using the Magnus formula.
    ///
    /// Humidity is floored at 0.001 %RH, a dry reading would otherwise give `-inf`.
    pub fn dew_point(&self) -> f32 {
        let (beta, lambda) = if self.temperature >= 0.0 {
            MAGNUS_WATER
        } else {
            MAGNUS_ICE
        };
        let t = self.temperature;
        let gamma =
            (self.humidity.max(MIN_DEW_POINT_HUMIDITY) / 100.0).ln() + beta * t / (lambda + t);
        lambda * gamma / (beta - gamma)
    }
}

/// `T = -45 + 175 * raw / 65535`
pub fn convert_temperature(raw: u16) -> f32 {
    -45.0 + 175.0 * raw as f32 / 65535.0
}

/// `RH = -6 + 125 * raw / 65535`, clamped to `0..=100`.
pub fn convert_humidity(raw: u16) -> f32 {
    (-6.0 + 125.0 * raw as f32 / 65535.0).clamp(0.0, 100.0)
}
