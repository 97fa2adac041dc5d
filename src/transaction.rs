use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::debug;

use crate::command::Command;
use crate::constants::{ADDRESS, MAX_RESPONSE_LEN};
use crate::error::Error;
use crate::frame::RawFrame;
use crate::measurement::SensorReading;
use crate::status::Status;

/// The decoded result of a command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    Measurement(SensorReading),
    Status(Status),
    SerialNumber(u32),
    /// The command has no response payload.
    Done,
}

impl Response {
    /// Validates and decodes the bytes returned for `command`.
    ///
    /// Fails with [`Error::Protocol`] when the length does not match the
    /// command, and with [`Error::Checksum`] when any word is corrupted.
    pub fn decode<E>(command: Command, bytes: &[u8]) -> Result<Self, Error<E>> {
        let frame = RawFrame::validate(bytes, command.response_len())?;
        Ok(Self::from_frame(command, &frame))
    }

    fn from_frame(command: Command, frame: &RawFrame<'_>) -> Self {
        match command {
            c if c.is_measurement() => Response::Measurement(reading_from(frame)),
            Command::ReadStatus => Response::Status(status_from(frame)),
            Command::ReadSerialNumber => Response::SerialNumber(serial_number_from(frame)),
            _ => Response::Done,
        }
    }
}

pub(crate) fn reading_from(frame: &RawFrame<'_>) -> SensorReading {
    SensorReading::from_raw(
        frame.word(0).unwrap_or_default(),
        frame.word(1).unwrap_or_default(),
    )
}

pub(crate) fn status_from(frame: &RawFrame<'_>) -> Status {
    Status(frame.word(0).unwrap_or_default())
}

pub(crate) fn serial_number_from(frame: &RawFrame<'_>) -> u32 {
    let high = frame.word(0).unwrap_or_default() as u32;
    let low = frame.word(1).unwrap_or_default() as u32;
    (high << 16) | low
}

/// Runs one command against the sensor: write the opcode, wait the settling
/// delay, read and validate the response.
///
/// Each call is self-contained. Bus errors are returned unchanged and nothing
/// is retried. The caller must not interleave commands on the same sensor.
pub fn execute<I2C, D>(
    i2c: &mut I2C,
    delay: &mut D,
    command: Command,
) -> Result<Response, Error<I2C::Error>>
where
    I2C: I2c,
    D: DelayNs,
{
    let mut buffer = [0u8; MAX_RESPONSE_LEN];
    let frame = transfer(i2c, delay, command, &mut buffer)?;
    Ok(Response::from_frame(command, &frame))
}

// Write, settle, read. Returns the validated frame, empty for write-only commands.
pub(crate) fn transfer<'b, I2C, D>(
    i2c: &mut I2C,
    delay: &mut D,
    command: Command,
    buffer: &'b mut [u8; MAX_RESPONSE_LEN],
) -> Result<RawFrame<'b>, Error<I2C::Error>>
where
    I2C: I2c,
    D: DelayNs,
{
    let opcode = command.to_bytes();
    debug!("Executing command {:?}: {:02X?}", command, opcode);
    i2c.write(ADDRESS, &opcode).map_err(Error::Bus)?;

    let settle_us = command.settle_delay_us();
    if settle_us > 0 {
        delay.delay_us(settle_us);
    }

    let len = command.response_len();
    if len > 0 {
        i2c.read(ADDRESS, &mut buffer[..len]).map_err(Error::Bus)?;
        debug!("Received frame: {:02X?}", &buffer[..len]);
    }

    let bytes: &'b [u8] = buffer;
    RawFrame::validate(&bytes[..len], len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Repeatability;

    #[test]
    fn decodes_measurement() {
        let bytes = [0x66, 0x5A, 0x2B, 0x8F, 0x5E, 0x5A];
        let response =
            Response::decode::<()>(Command::SingleShot(Repeatability::High), &bytes).unwrap();
        match response {
            Response::Measurement(reading) => {
                assert!((reading.temperature - 24.97).abs() < 0.01);
                assert!((reading.humidity - 64.00).abs() < 0.01);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn decode_is_idempotent() {
        let bytes = [0x66, 0x5A, 0x2B, 0x8F, 0x5E, 0x5A];
        let first = Response::decode::<()>(Command::FetchData, &bytes);
        let second = Response::decode::<()>(Command::FetchData, &bytes);
        assert_eq!(first, second);
    }

    #[test]
    fn decodes_status() {
        let bytes = [0x80, 0x10, crate::crc::crc8(&[0x80, 0x10])];
        assert_eq!(
            Response::decode::<()>(Command::ReadStatus, &bytes),
            Ok(Response::Status(Status(0x8010)))
        );
    }

    #[test]
    fn decodes_serial_number() {
        let bytes = [0x12, 0x34, 0x37, 0x66, 0x66, 0x93];
        assert_eq!(
            Response::decode::<()>(Command::ReadSerialNumber, &bytes),
            Ok(Response::SerialNumber(0x1234_6666))
        );
    }

    #[test]
    fn length_mismatch_is_protocol_error() {
        let bytes = [0x66, 0x5A, 0x2B];
        assert_eq!(
            Response::decode::<()>(Command::SingleShot(Repeatability::Low), &bytes),
            Err(Error::Protocol {
                expected: 6,
                received: 3
            })
        );
    }

    #[test]
    fn write_only_command_expects_no_bytes() {
        assert_eq!(
            Response::decode::<()>(Command::ClearStatus, &[]),
            Ok(Response::Done)
        );
    }
}
