use crate::constants::{CRC_INIT, CRC_POLYNOMIAL};

/// Computes the Sensirion CRC-8 (polynomial `0x31`, init `0xFF`, no final XOR) over `data`.
pub fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(CRC_INIT, |mut crc, &byte| {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC_POLYNOMIAL
            } else {
                crc << 1
            };
        }
        crc
    })
}
