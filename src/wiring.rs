//! Translation from clock segments to MAX6954 register bits.
//!
//! The four clock digits are wired to two common-cathode groups, each cathode
//! shared by segments spread across all four digits. The chip is told it has
//! two 16-segment digits (two seven-segment digit pairs), so every physical
//! segment has two names: the (output pin, cathode) it is soldered to, and
//! the (digit pair, bit) the chip addresses it by.
//!
//! Outputs O5-O18 carry segments. Per the datasheet's output table and digit
//! register bit layout (`dp a b c d e f g`, MSB first):
//!
//! ```text
//! Output      O5  O6  O7  O8  O9  O10 O11 O12 O13 O14 O15 O16 O17 O18
//! Digit pair   1   1   1   1   1   1   3   3   3   3   3   3   3   3
//! Segment      c   d  dp   e   f   g   a   b   c   d   e   f   g  dp
//! Bit value   10  08  80  04  02  01  40  20  10  08  04  02  01  80
//! ```
//!
//! Cathode 1 selects the first register of a pair, cathode 2 the second.
//! These tables describe one specific harness; rewiring means regenerating
//! all of them together.

use crate::segments::Segment;

pub const CLOCK_DIGITS: usize = 4;
pub const DIGIT_SEGMENTS: usize = 7;
pub const REGISTER_COUNT: usize = 4;

/// Chip digit numbers for register image indices 0-3.
pub const CHIP_DIGITS: [u8; REGISTER_COUNT] = [0, 1, 8, 9];

/// Register bytes in chip digit-pair order.
pub type RegisterImage = [u8; REGISTER_COUNT];

/// Output pin and cathode group a segment is soldered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiring {
    pub output: u8,
    pub cathode: u8,
}

impl Wiring {
    /// Segment not physically present.
    pub const ABSENT: Wiring = Wiring::new(0, 0);

    pub const fn new(output: u8, cathode: u8) -> Self {
        Self { output, cathode }
    }

    pub fn is_absent(&self) -> bool {
        self.output == 0 || self.cathode == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Annunciator {
    Am,
    Pm,
    Alarm,
    Colon,
}

impl Annunciator {
    pub const COUNT: usize = 4;
    pub const ALL: [Annunciator; Annunciator::COUNT] = [
        Annunciator::Am,
        Annunciator::Pm,
        Annunciator::Alarm,
        Annunciator::Colon,
    ];
}

// Indexed by output number; O0-O4 drive nothing here.
#[rustfmt::skip]
const DIGIT_PAIR_FROM_OUTPUT: [u8; 19] = [
    0,    0,    0,    0,    0,
    1,    1,    1,    1,    1,    1,
    3,    3,    3,    3,    3,    3,    3,    3,
];
#[rustfmt::skip]
const BIT_VALUE_FROM_OUTPUT: [u8; 19] = [
    0,    0,    0,    0,    0,
    0x10, 0x08, 0x80, 0x04, 0x02, 0x01,
    0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01, 0x80,
];

const O: Wiring = Wiring::ABSENT;
const fn w(output: u8, cathode: u8) -> Wiring {
    Wiring::new(output, cathode)
}

// The leading digit only has strokes b and c.
#[rustfmt::skip]
const CLOCK_DIGIT_WIRING: [[Wiring; DIGIT_SEGMENTS]; CLOCK_DIGITS] = [
    //  a         b         c         d         e         f         g
    [O,        w(7, 2),  w(6, 2),  O,        O,        O,        O       ],
    [w(10, 2), w(5, 2),  w(9, 2),  w(9, 1),  w(6, 1),  w(10, 1), w(5, 1) ],
    [w(11, 1), w(12, 1), w(13, 1), w(13, 2), w(14, 2), w(11, 2), w(12, 2)],
    [w(17, 2), w(15, 2), w(16, 2), w(16, 1), w(14, 1), w(17, 1), w(15, 1)],
];

// Am, Pm, Alarm, Colon
const ANNUNCIATOR_WIRING: [Wiring; Annunciator::COUNT] = [w(8, 2), w(7, 1), w(8, 1), w(18, 1)];

/// Wiring of one stroke of a clock digit. `None` if `digit` is not 0-3.
pub fn resolve_digit_segment(digit: usize, segment: Segment) -> Option<Wiring> {
    CLOCK_DIGIT_WIRING
        .get(digit)
        .map(|segments| segments[segment as usize])
}

pub fn resolve_annunciator(annunciator: Annunciator) -> Wiring {
    ANNUNCIATOR_WIRING[annunciator as usize]
}

/// Register image index and bit a wired segment lands on, or `None` for
/// absent or unknown outputs.
pub fn register_bit(wiring: Wiring) -> Option<(usize, u8)> {
    if wiring.is_absent() {
        return None;
    }

    let pair = *DIGIT_PAIR_FROM_OUTPUT.get(wiring.output as usize)?;
    if pair == 0 {
        return None;
    }

    let mut index = (pair - 1) as usize;
    if wiring.cathode == 2 {
        index += 1;
    }

    Some((index, BIT_VALUE_FROM_OUTPUT[wiring.output as usize]))
}

/// ORs the bit for `wiring` into `image`. Absent segments are skipped.
pub fn accumulate_segment(image: &mut RegisterImage, wiring: Wiring) {
    if let Some((index, bit)) = register_bit(wiring) {
        image[index] |= bit;
    }
}
