/// Errors reported by a sensor transaction.
///
/// `E` is the error type of the underlying I2C implementation. Nothing is
/// retried internally, the caller decides what to do with each variant.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C transfer failed. The bus error is passed through unchanged.
    #[error("i2c bus error: {0:?}")]
    Bus(E),

    /// A data word did not match its trailing CRC-8 byte.
    #[error("checksum mismatch on word {word}: calculated {expected:#04x}, received {received:#04x}")]
    Checksum {
        /// Index of the failing word within the response.
        word: usize,
        expected: u8,
        received: u8,
    },

    /// The response did not have the length the command requires.
    #[error("expected a {expected} byte response, received {received} bytes")]
    Protocol { expected: usize, received: usize },
}
