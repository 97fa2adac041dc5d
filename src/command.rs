use crate::constants::*;

/// Measurement repeatability. Higher repeatability means less noise and a longer conversion.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeatability {
    High,
    Medium,
    Low,
}

/// Measurements per second when running in periodic acquisition mode.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeriodicRate {
    /// One measurement every two seconds.
    HalfPerSecond,
    OnePerSecond,
    TwoPerSecond,
    FourPerSecond,
    TenPerSecond,
}

impl PeriodicRate {
    /// Interval between two measurements, in milliseconds.
    pub fn interval_ms(self) -> u32 {
        match self {
            PeriodicRate::HalfPerSecond => 2_000,
            PeriodicRate::OnePerSecond => 1_000,
            PeriodicRate::TwoPerSecond => 500,
            PeriodicRate::FourPerSecond => 250,
            PeriodicRate::TenPerSecond => 100,
        }
    }
}

/// A command understood by the SHT85.
///
/// Each command maps to a fixed 2-byte opcode, the number of bytes the sensor
/// answers with, and the minimum time to wait between the write and the read.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Single shot temperature and humidity measurement.
    SingleShot(Repeatability),
    /// Start periodic acquisition. Results are collected with [`Command::FetchData`].
    StartPeriodic(PeriodicRate, Repeatability),
    /// Read the latest periodic acquisition result.
    FetchData,
    /// Start periodic acquisition with accelerated response time.
    Art,
    /// Stop periodic acquisition.
    Break,
    SoftReset,
    HeaterOn,
    HeaterOff,
    ReadStatus,
    ClearStatus,
    ReadSerialNumber,
}

impl Command {
    /// The 16-bit opcode, sent MSB first.
    pub fn opcode(self) -> u16 {
        match self {
            Command::SingleShot(rep) => match rep {
                Repeatability::High => MEASURE_HIGH_REP,
                Repeatability::Medium => MEASURE_MEDIUM_REP,
                Repeatability::Low => MEASURE_LOW_REP,
            },
            Command::StartPeriodic(rate, rep) => periodic_opcode(rate, rep),
            Command::FetchData => FETCH_DATA,
            Command::Art => ART,
            Command::Break => BREAK,
            Command::SoftReset => SOFT_RESET,
            Command::HeaterOn => HEATER_ON,
            Command::HeaterOff => HEATER_OFF,
            Command::ReadStatus => READ_STATUS,
            Command::ClearStatus => CLEAR_STATUS,
            Command::ReadSerialNumber => READ_SERIAL_NUMBER,
        }
    }

    /// The opcode as it goes on the wire.
    pub fn to_bytes(self) -> [u8; 2] {
        self.opcode().to_be_bytes()
    }

    /// Number of bytes the sensor answers with. Zero for write-only commands.
    pub fn response_len(self) -> usize {
        match self {
            Command::SingleShot(_) | Command::FetchData | Command::ReadSerialNumber => 6,
            Command::ReadStatus => 3,
            _ => 0,
        }
    }

    /// Minimum wait between writing the opcode and reading the response, in microseconds.
    ///
    /// Single shot values are the datasheet maximum conversion times rounded up.
    pub fn settle_delay_us(self) -> u32 {
        match self {
            Command::SingleShot(Repeatability::High) => 16_000,
            Command::SingleShot(Repeatability::Medium) => 7_000,
            Command::SingleShot(Repeatability::Low) => 5_000,
            _ => 0,
        }
    }

    /// Whether the response carries a temperature and humidity pair.
    pub fn is_measurement(self) -> bool {
        matches!(self, Command::SingleShot(_) | Command::FetchData)
    }
}

fn periodic_opcode(rate: PeriodicRate, rep: Repeatability) -> u16 {
    let msb: u16 = match rate {
        PeriodicRate::HalfPerSecond => 0x20,
        PeriodicRate::OnePerSecond => 0x21,
        PeriodicRate::TwoPerSecond => 0x22,
        PeriodicRate::FourPerSecond => 0x23,
        PeriodicRate::TenPerSecond => 0x27,
    };
    let lsb: u16 = match (rate, rep) {
        (PeriodicRate::HalfPerSecond, Repeatability::High) => 0x32,
        (PeriodicRate::HalfPerSecond, Repeatability::Medium) => 0x24,
        (PeriodicRate::HalfPerSecond, Repeatability::Low) => 0x2F,
        (PeriodicRate::OnePerSecond, Repeatability::High) => 0x30,
        (PeriodicRate::OnePerSecond, Repeatability::Medium) => 0x26,
        (PeriodicRate::OnePerSecond, Repeatability::Low) => 0x2D,
        (PeriodicRate::TwoPerSecond, Repeatability::High) => 0x36,
        (PeriodicRate::TwoPerSecond, Repeatability::Medium) => 0x20,
        (PeriodicRate::TwoPerSecond, Repeatability::Low) => 0x2B,
        (PeriodicRate::FourPerSecond, Repeatability::High) => 0x34,
        (PeriodicRate::FourPerSecond, Repeatability::Medium) => 0x22,
        (PeriodicRate::FourPerSecond, Repeatability::Low) => 0x29,
        (PeriodicRate::TenPerSecond, Repeatability::High) => 0x37,
        (PeriodicRate::TenPerSecond, Repeatability::Medium) => 0x21,
        (PeriodicRate::TenPerSecond, Repeatability::Low) => 0x2A,
    };
    (msb << 8) | lsb
}
