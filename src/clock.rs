//! The four-digit clock face on top of the driver chip.
//!
//! Poke `digits` and `annunciators`, then call [`ClockDisplay::update`]. The
//! four registers are rebuilt from scratch on every update.

use num_traits::ToPrimitive;

use crate::constants::register;
use crate::segments::encode;
use crate::transport::Transport;
use crate::wiring::{
    accumulate_segment, resolve_annunciator, resolve_digit_segment, Annunciator, RegisterImage,
    CHIP_DIGITS, CLOCK_DIGITS,
};
use crate::{Max6954, Max6954Error};

/// One computed display image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Register bytes for chip digits 0, 1, 8 and 9
    pub registers: RegisterImage,
    /// Digit positions whose character had no glyph and were left dark
    pub unsupported: [bool; CLOCK_DIGITS],
}

impl Frame {
    pub fn is_complete(&self) -> bool {
        !self.unsupported.iter().any(|u| *u)
    }
}

/// Builds the register image for a set of clock characters and annunciator
/// flags. A character without a glyph leaves only its own digit dark.
pub fn render(digits: &[u8; CLOCK_DIGITS], annunciators: &[bool; Annunciator::COUNT]) -> Frame {
    let mut frame = Frame::default();

    for (i, c) in digits.iter().enumerate() {
        let Some(pattern) = encode(*c) else {
            log::warn!("unsupported character {} for digit {}", c, i);
            frame.unsupported[i] = true;
            continue;
        };

        for segment in pattern.lit_segments() {
            if let Some(wiring) = resolve_digit_segment(i, segment) {
                log::trace!(
                    "digit {} segment {:?} -> output {} cathode {}",
                    i,
                    segment,
                    wiring.output,
                    wiring.cathode
                );
                accumulate_segment(&mut frame.registers, wiring);
            }
        }
    }

    for (annunciator, on) in Annunciator::ALL.iter().zip(annunciators) {
        if *on {
            accumulate_segment(&mut frame.registers, resolve_annunciator(*annunciator));
        }
    }

    frame
}

pub struct ClockDisplay<T> {
    pub max: Max6954<T>,
    /// ASCII, space for blank
    pub digits: [u8; CLOCK_DIGITS],
    pub annunciators: [bool; Annunciator::COUNT],
}

impl<T, E> ClockDisplay<T>
where
    T: Transport<Error = E>,
{
    pub fn new(max: Max6954<T>) -> Self {
        Self {
            max,
            digits: [b' '; CLOCK_DIGITS],
            annunciators: [false; Annunciator::COUNT],
        }
    }

    pub fn destroy(self) -> Max6954<T> {
        self.max
    }

    pub fn set_annunciator(&mut self, annunciator: Annunciator, on: bool) {
        self.annunciators[annunciator as usize] = on;
    }

    pub fn annunciator(&self, annunciator: Annunciator) -> bool {
        self.annunciators[annunciator as usize]
    }

    pub fn render(&self) -> Frame {
        render(&self.digits, &self.annunciators)
    }

    /// Renders the current state and writes all four registers, both planes.
    pub fn update(&mut self) -> Result<Frame, Max6954Error<E>> {
        let frame = self.render();
        for (digit, value) in CHIP_DIGITS.iter().zip(frame.registers) {
            self.max.write_digit(*digit, register::plane::BOTH, value)?;
        }
        Ok(frame)
    }

    /// Formats a 24-hour time for the 12-hour face: the leading digit can only
    /// show a blank or a one, AM or PM is lit, and the colon is on. Does not
    /// touch the alarm annunciator. Call [`ClockDisplay::update`] afterwards.
    pub fn show_time<H, M>(&mut self, hour: H, minute: M) -> Result<(), Max6954Error<E>>
    where
        H: ToPrimitive,
        M: ToPrimitive,
    {
        let hour = hour.to_u8().ok_or(Max6954Error::InvalidValue)?;
        let minute = minute.to_u8().ok_or(Max6954Error::InvalidValue)?;
        if hour > 23 || minute > 59 {
            return Err(Max6954Error::InvalidValue);
        }

        let hour_12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        self.digits = [
            if hour_12 >= 10 { b'1' } else { b' ' },
            b'0' + hour_12 % 10,
            b'0' + minute / 10,
            b'0' + minute % 10,
        ];

        self.set_annunciator(Annunciator::Am, hour < 12);
        self.set_annunciator(Annunciator::Pm, hour >= 12);
        self.set_annunciator(Annunciator::Colon, true);
        Ok(())
    }
}
