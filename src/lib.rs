#![cfg_attr(not(test), no_std)]

//! Blocking driver for the Sensirion SHT85 humidity and temperature sensor.
//!
//! The sensor sits at the fixed I2C address `0x44`, so each [`Sht85`] owns
//! one bus handle. Every operation is a single write, wait, read exchange
//! built on [`execute`]; checksums are validated and nothing is retried.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::debug;

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

mod command;
pub use command::*;

mod crc;
pub use crc::crc8;

mod frame;
pub use frame::RawFrame;

mod measurement;
pub use measurement::*;

mod status;
pub use status::Status;

mod transaction;
pub use transaction::{execute, Response};

/// Represents an SHT85 sensor.
///
/// # Type Parameters
///
/// * `I2C`: The bus the sensor is attached to. It must implement `embedded_hal::i2c::I2c`.
/// * `D`: The delay provider used to wait for conversions. It must implement `embedded_hal::delay::DelayNs`.
pub struct Sht85<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
}

impl<I2C, D> Sht85<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a new `Sht85` sensor instance. No bus traffic happens until a method is called.
    pub fn new(i2c: I2C, delay: D, config: Config) -> Self {
        Self { i2c, delay, config }
    }

    /// Gives back the bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a raw command and returns its decoded response.
    pub fn execute(&mut self, command: Command) -> Result<Response, Error<I2C::Error>> {
        execute(&mut self.i2c, &mut self.delay, command)
    }

    /// Triggers a single shot measurement at the configured repeatability and waits for the result.
    pub fn measure(&mut self) -> Result<SensorReading, Error<I2C::Error>> {
        let reading = self.reading(Command::SingleShot(self.config.repeatability))?;
        debug!(
            "Measured {} °C, {} %RH",
            reading.temperature, reading.humidity
        );
        Ok(reading)
    }

    /// Starts periodic acquisition at the configured rate and repeatability.
    ///
    /// Results are read with [`Sht85::fetch`]. Only [`Sht85::stop`] and
    /// [`Sht85::reset`] are valid while the sensor is in this mode.
    pub fn start_periodic(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!(
            "Starting periodic acquisition at {:?} with {:?} repeatability",
            self.config.rate, self.config.repeatability
        );
        self.command(Command::StartPeriodic(
            self.config.rate,
            self.config.repeatability,
        ))
    }

    /// Starts periodic acquisition with accelerated response time (4 Hz).
    pub fn start_art(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("Starting accelerated response time mode");
        self.command(Command::Art)
    }

    /// Reads the latest periodic result. The sensor clears its data memory afterwards.
    ///
    /// If no new result is available the sensor does not acknowledge the read,
    /// which surfaces as [`Error::Bus`].
    pub fn fetch(&mut self) -> Result<SensorReading, Error<I2C::Error>> {
        self.reading(Command::FetchData)
    }

    /// Stops periodic acquisition.
    pub fn stop(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("Stopping periodic acquisition");
        self.command(Command::Break)
    }

    /// Stops any periodic acquisition, soft resets the sensor and waits for it to come back.
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.stop()?;
        debug!("Applying soft reset");
        self.command(Command::SoftReset)?;
        self.delay.delay_us(RESET_RECOVERY_US);
        Ok(())
    }

    pub fn enable_heater(&mut self) -> Result<(), Error<I2C::Error>> {
        log::warn!("Enabling heater");
        self.command(Command::HeaterOn)
    }

    pub fn disable_heater(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("Disabling heater");
        self.command(Command::HeaterOff)
    }

    /// Reads the status register.
    pub fn status(&mut self) -> Result<Status, Error<I2C::Error>> {
        let mut buffer = [0u8; MAX_RESPONSE_LEN];
        let frame = self.transfer(Command::ReadStatus, &mut buffer)?;
        Ok(transaction::status_from(&frame))
    }

    /// Reads the status register and logs a warning for every raised flag.
    pub fn check_status(&mut self) -> Result<Status, Error<I2C::Error>> {
        let status = self.status()?;
        status.log_raised_flags();
        Ok(status)
    }

    /// Clears the alert and reset flags of the status register.
    pub fn clear_status(&mut self) -> Result<(), Error<I2C::Error>> {
        debug!("Clearing status register");
        self.command(Command::ClearStatus)
    }

    /// Reads the unique 32-bit serial number.
    pub fn serial_number(&mut self) -> Result<u32, Error<I2C::Error>> {
        let mut buffer = [0u8; MAX_RESPONSE_LEN];
        let frame = self.transfer(Command::ReadSerialNumber, &mut buffer)?;
        let serial = transaction::serial_number_from(&frame);
        debug!("Serial number: {:08X}", serial);
        Ok(serial)
    }

    // Runs a measurement command and unwraps the reading.
    fn reading(&mut self, command: Command) -> Result<SensorReading, Error<I2C::Error>> {
        let mut buffer = [0u8; MAX_RESPONSE_LEN];
        let frame = self.transfer(command, &mut buffer)?;
        Ok(transaction::reading_from(&frame))
    }

    // Runs a write-only command.
    fn command(&mut self, command: Command) -> Result<(), Error<I2C::Error>> {
        let mut buffer = [0u8; MAX_RESPONSE_LEN];
        self.transfer(command, &mut buffer).map(|_| ())
    }

    fn transfer<'b>(
        &mut self,
        command: Command,
        buffer: &'b mut [u8; MAX_RESPONSE_LEN],
    ) -> Result<RawFrame<'b>, Error<I2C::Error>> {
        transaction::transfer(&mut self.i2c, &mut self.delay, command, buffer)
    }
}
