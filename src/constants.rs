// ADDRESS is the 7-bit I2C address of the SHT85. The pin is not broken out, so it cannot change.
pub const ADDRESS: u8 = 0x44;

// Single shot measurement with clock stretching disabled.
pub const MEASURE_HIGH_REP: u16 = 0x2400;
pub const MEASURE_MEDIUM_REP: u16 = 0x240B;
pub const MEASURE_LOW_REP: u16 = 0x2416;

// FETCH_DATA reads the latest result of periodic acquisition and clears the sensor's data memory.
pub const FETCH_DATA: u16 = 0xE000;

// ART starts periodic acquisition at 4 Hz with accelerated response time.
pub const ART: u16 = 0x2B32;

// BREAK stops periodic acquisition and returns the sensor to single shot mode.
pub const BREAK: u16 = 0x3093;

pub const SOFT_RESET: u16 = 0x30A2;

pub const HEATER_ON: u16 = 0x306D;
pub const HEATER_OFF: u16 = 0x3066;

pub const READ_STATUS: u16 = 0xF32D;
pub const CLEAR_STATUS: u16 = 0x3041;

pub const READ_SERIAL_NUMBER: u16 = 0x3682;

// CRC_POLYNOMIAL and CRC_INIT parameterise the CRC-8 that trails every 16-bit data word.
pub const CRC_POLYNOMIAL: u8 = 0x31;
pub const CRC_INIT: u8 = 0xFF;

// MAX_RESPONSE_LEN is the longest reply of any command: two words, each with its CRC.
pub const MAX_RESPONSE_LEN: usize = 6;

// RESET_RECOVERY_US is how long the sensor needs after a soft reset before accepting commands.
pub const RESET_RECOVERY_US: u32 = 1_500;
