use crate::command::{PeriodicRate, Repeatability};

/// Configuration settings for the SHT85 sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Repeatability used for single shot and periodic measurements.
    pub repeatability: Repeatability,
    /// Measurement rate used when periodic acquisition is started.
    pub rate: PeriodicRate,
}

impl Config {
    /// Creates a new `Config` instance.
    ///
    /// # Arguments
    ///
    /// * `repeatability` - The `Repeatability` of each measurement.
    /// * `rate` - The `PeriodicRate` for periodic acquisition.
    pub fn new(repeatability: Repeatability, rate: PeriodicRate) -> Config {
        Config {
            repeatability,
            rate,
        }
    }
    /// Sets the repeatability for the configuration.
    pub fn repeatability(mut self, repeatability: Repeatability) -> Self {
        self.repeatability = repeatability;
        self
    }
    /// Sets the periodic acquisition rate for the configuration.
    pub fn rate(mut self, rate: PeriodicRate) -> Self {
        self.rate = rate;
        self
    }
}

/// Provides default configuration values for the SHT85 sensor.
impl Default for Config {
    /// Returns the default configuration.
    ///
    /// The default configuration uses high repeatability and one measurement per second.
    fn default() -> Config {
        Config {
            repeatability: Repeatability::High,
            rate: PeriodicRate::OnePerSecond,
        }
    }
}
