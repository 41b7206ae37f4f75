mod alphanumeric;

pub use alphanumeric::RandomAlphanumericGenerator;

/// Source of short URL path sequences.
///
/// Implementations are pure generators: they keep no registry of issued
/// sequences and give no uniqueness guarantee across calls.
#[cfg_attr(test, mockall::automock)]
pub trait SequenceGenerator {
    /// Generates the next path sequence.
    ///
    /// Takes `&mut self` because the underlying randomness source advances
    /// its state on every draw.
    fn next_sequence(&mut self) -> String;
}
