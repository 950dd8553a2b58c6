//! ASCII to seven-segment glyphs.
//!
//! Segments go clockwise from the top, with g in the middle:
//!
//! ```text
//!     a
//!   f   b
//!     g
//!   e   c
//!     d
//! ```

/// Which strokes form a glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: bool,
    pub e: bool,
    pub f: bool,
    pub g: bool,
    pub dot: bool,
}

/// The seven strokes of a digit, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];
}

impl SegmentPattern {
    pub const BLANK: SegmentPattern = SegmentPattern::from_bits(0x00);

    /// Unpacks a `dp a b c d e f g` byte (MSB first).
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            a: bits & 0x40 != 0,
            b: bits & 0x20 != 0,
            c: bits & 0x10 != 0,
            d: bits & 0x08 != 0,
            e: bits & 0x04 != 0,
            f: bits & 0x02 != 0,
            g: bits & 0x01 != 0,
            dot: bits & 0x80 != 0,
        }
    }

    pub fn is_lit(&self, segment: Segment) -> bool {
        match segment {
            Segment::A => self.a,
            Segment::B => self.b,
            Segment::C => self.c,
            Segment::D => self.d,
            Segment::E => self.e,
            Segment::F => self.f,
            Segment::G => self.g,
        }
    }

    /// Lit strokes a-g, in table order.
    pub fn lit_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        Segment::ALL.into_iter().filter(|s| self.is_lit(*s))
    }
}

const FIRST: u8 = b'0';
const LAST: u8 = b'Z';

// Indexed by `c - '0'`, dp a b c d e f g.
const GLYPHS: [u8; (LAST - FIRST + 1) as usize] = [
    // 0-9
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B,
    // : ; < = > ? @ have no real seven-segment form. ':' and ';' are blank
    // fillers, the rest are approximations.
    0x00, 0x00, 0x0D, 0x09, 0x19, 0x65, 0x7D,
    // A-Z
    0x77, 0x1F, 0x4E, 0x3D, 0x4F, 0x47, 0x5E, 0x37, 0x30, 0x3C, 0x2F, 0x0E, 0x54, 0x15, 0x1D, 0x67,
    0x73, 0x05, 0x5B, 0x0F, 0x3E, 0x1C, 0x2A, 0x49, 0x3B, 0x25,
];

/// Looks up the glyph for an ASCII byte.
///
/// Bytes above `'Z'` are folded down by 32, so lower-case letters share the
/// upper-case glyphs. Space is blank. Anything outside `'0'..='Z'` after
/// folding has no glyph.
pub fn encode(ascii: u8) -> Option<SegmentPattern> {
    if ascii == b' ' {
        return Some(SegmentPattern::BLANK);
    }

    let folded = if ascii > LAST { ascii - 32 } else { ascii };
    if !(FIRST..=LAST).contains(&folded) {
        return None;
    }

    Some(SegmentPattern::from_bits(GLYPHS[(folded - FIRST) as usize]))
}
