use crate::crc::crc8;
use crate::error::Error;

/// A validated response: `[msb, lsb, crc]` triplets whose checksums all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame<'a> {
    bytes: &'a [u8],
}

impl<'a> RawFrame<'a> {
    /// Checks the length against `expected_len` and the CRC of every word.
    ///
    /// Fails on the first bad word, so no partial data ever leaves this function.
    pub fn validate<E>(bytes: &'a [u8], expected_len: usize) -> Result<Self, Error<E>> {
        if bytes.len() != expected_len || expected_len % 3 != 0 {
            log::error!(
                "Unexpected response length: expected {}, received {}. Frame: {:02X?}",
                expected_len,
                bytes.len(),
                bytes
            );
            return Err(Error::Protocol {
                expected: expected_len,
                received: bytes.len(),
            });
        }

        for (word, chunk) in bytes.chunks_exact(3).enumerate() {
            let expected = crc8(&chunk[..2]);
            if expected != chunk[2] {
                log::error!(
                    "Bad checksum on word {}: calculated {:02X}, received {:02X}. Frame: {:02X?}",
                    word,
                    expected,
                    chunk[2],
                    bytes
                );
                return Err(Error::Checksum {
                    word,
                    expected,
                    received: chunk[2],
                });
            }
        }

        Ok(Self { bytes })
    }

    /// The data words in order, checksums stripped.
    pub fn words(&self) -> impl Iterator<Item = u16> + 'a {
        self.bytes
            .chunks_exact(3)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
    }

    /// The `index`-th data word.
    pub fn word(&self, index: usize) -> Option<u16> {
        self.words().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [u8; 6] = [0x66, 0x5A, 0x2B, 0x8F, 0x5E, 0x5A];

    #[test]
    fn accepts_valid_frame() {
        let frame = RawFrame::validate::<()>(&VALID, 6).unwrap();
        assert_eq!(frame.word(0), Some(0x665A));
        assert_eq!(frame.word(1), Some(0x8F5E));
        assert_eq!(frame.word(2), None);
    }

    #[test]
    fn rejects_every_single_bit_crc_corruption() {
        for crc_index in [2, 5] {
            for bit in 0..8 {
                let mut bytes = VALID;
                bytes[crc_index] ^= 1 << bit;
                let err = RawFrame::validate::<()>(&bytes, 6).unwrap_err();
                assert!(matches!(err, Error::Checksum { word, .. } if word == crc_index / 3));
            }
        }
    }

    #[test]
    fn rejects_corrupted_data_byte() {
        let mut bytes = VALID;
        bytes[4] ^= 0x01;
        assert_eq!(
            RawFrame::validate::<()>(&bytes, 6),
            Err(Error::Checksum {
                word: 1,
                expected: crc8(&[0x8F, 0x5F]),
                received: 0x5A,
            })
        );
    }

    #[test]
    fn rejects_short_frame() {
        assert_eq!(
            RawFrame::validate::<()>(&VALID[..3], 6),
            Err(Error::Protocol {
                expected: 6,
                received: 3
            })
        );
    }

    #[test]
    fn empty_frame_is_valid_when_nothing_is_expected() {
        let frame = RawFrame::validate::<()>(&[], 0).unwrap();
        assert_eq!(frame.words().count(), 0);
    }
}
