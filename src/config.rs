//! Initialization parameters for the driver chip.

use crate::constants::{MAX_DIGIT_PAIRS, MAX_INTENSITY};
use crate::Max6954Error;

/// Two-bit digit type code for one slot of the digit type register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitType {
    /// Both halves driven as 16-segment digits (or seven-segment pairs).
    #[default]
    SixteenAndSixteen = 0b00,
    FourteenAndSixteen = 0b01,
    SixteenAndFourteen = 0b10,
    FourteenAndFourteen = 0b11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Global intensity, 0 (1/16) to 15 (15/16)
    pub intensity: u8,
    /// Scan limit in digit pairs (1-8)
    pub digit_pairs: u8,
    /// Written to all four digit type slots
    pub digit_type: DigitType,
    /// How long the display test keeps every segment lit
    pub display_test_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intensity: 7,
            digit_pairs: 2,
            digit_type: DigitType::SixteenAndSixteen,
            display_test_ms: 2000,
        }
    }
}

impl Config {
    pub fn validate<E>(&self) -> Result<(), Max6954Error<E>> {
        if self.intensity > MAX_INTENSITY || !(1..=MAX_DIGIT_PAIRS).contains(&self.digit_pairs) {
            return Err(Max6954Error::InvalidValue);
        }
        Ok(())
    }
}
