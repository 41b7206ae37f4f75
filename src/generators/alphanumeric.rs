use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::errors::GeneratorError;

use super::SequenceGenerator;

// Alphanumeric character set sequences are drawn from (A-Z, a-z, 0-9)
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const DEFAULT_SEQUENCE_LENGTH: usize = 4;

/// Generates fixed-length random alphanumeric sequences.
///
/// Every character is drawn independently and uniformly from the
/// 62-character alphanumeric set. The randomness source is pluggable;
/// the default is a `StdRng` seeded from OS entropy.
pub struct RandomAlphanumericGenerator<R: RngCore = StdRng> {
    length: usize,
    rng: R,
}

impl RandomAlphanumericGenerator<StdRng> {
    /// Creates a generator producing sequences of `length` characters.
    ///
    /// ### Errors
    /// * `GeneratorError::InvalidLength` - If `length` is zero
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        Self::with_rng(length, StdRng::from_os_rng())
    }
}

impl<R: RngCore> RandomAlphanumericGenerator<R> {
    /// Creates a generator with a caller-supplied randomness source.
    ///
    /// Seeded sources make the output reproducible.
    ///
    /// ### Errors
    /// * `GeneratorError::InvalidLength` - If `length` is zero
    pub fn with_rng(length: usize, rng: R) -> Result<Self, GeneratorError> {
        if length < 1 {
            return Err(GeneratorError::InvalidLength(length));
        }

        Ok(Self { length, rng })
    }

    /// Configured sequence length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomAlphanumericGenerator<StdRng> {
    fn default() -> Self {
        // The default length is known to be valid, so no fallible path here
        Self {
            length: DEFAULT_SEQUENCE_LENGTH,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: RngCore> SequenceGenerator for RandomAlphanumericGenerator<R> {
    fn next_sequence(&mut self) -> String {
        (0..self.length)
            .map(|_| {
                let idx = self.rng.random_range(0..ALPHANUMERIC.len());
                ALPHANUMERIC[idx] as char
            })
            .collect()
    }
}
