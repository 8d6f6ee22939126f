//! Sixteen-segment glyphs.
//!
//! A display has sixteen strokes plus a decimal point:
//!
//! ```text
//!   A1   A2
//!  F H I J B
//!   G1   G2
//!  E K L M C
//!   D1   D2  DP
//! ```
//!
//! [`segments_for`] maps a character to the strokes that draw it. Unknown
//! characters map to an empty set and render as a blank cell.

use std::fmt;

/// One stroke of a sixteen-segment display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    A1,
    A2,
    B,
    C,
    D1,
    D2,
    E,
    F,
    G1,
    G2,
    H,
    I,
    J,
    K,
    L,
    M,
    Dp,
}

impl Segment {
    /// All segments in drawing order.
    pub const ALL: [Self; 17] = [
        Self::A1,
        Self::A2,
        Self::B,
        Self::C,
        Self::D1,
        Self::D2,
        Self::E,
        Self::F,
        Self::G1,
        Self::G2,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::Dp,
    ];

    /// Identifier used in SVG ids and hrefs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B => "B",
            Self::C => "C",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::E => "E",
            Self::F => "F",
            Self::G1 => "G1",
            Self::G2 => "G2",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::Dp => "DP",
        }
    }

    /// The single-segment set lighting this stroke.
    pub const fn flag(self) -> SegmentSet {
        SegmentSet::from_bits_retain(1 << self as u32)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Lit segments of one display, one bit per stroke in drawing order.
    ///
    /// ```
    /// use segmatrix::glyph::{Segment, SegmentSet};
    ///
    /// let bar = SegmentSet::G1 | SegmentSet::G2;
    /// assert!(bar.contains(Segment::G1.flag()));
    /// assert_eq!(bar, SegmentSet::of(&[Segment::G1, Segment::G2]));
    /// ```
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct SegmentSet: u32 {
        const A1 = 1 << 0;
        const A2 = 1 << 1;
        const B  = 1 << 2;
        const C  = 1 << 3;
        const D1 = 1 << 4;
        const D2 = 1 << 5;
        const E  = 1 << 6;
        const F  = 1 << 7;
        const G1 = 1 << 8;
        const G2 = 1 << 9;
        const H  = 1 << 10;
        const I  = 1 << 11;
        const J  = 1 << 12;
        const K  = 1 << 13;
        const L  = 1 << 14;
        const M  = 1 << 15;
        /// Decimal point
        const DP = 1 << 16;
    }
}

impl SegmentSet {
    /// No segments lit.
    pub const EMPTY: Self = Self::empty();

    /// Build a set from a list of segments.
    pub const fn of(segments: &[Segment]) -> Self {
        let mut set = Self::empty();
        let mut i = 0;
        while i < segments.len() {
            set = set.union(segments[i].flag());
            i += 1;
        }
        set
    }

    /// Number of lit segments.
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Lit segments in drawing order.
    pub fn segments(self) -> impl Iterator<Item = Segment> {
        Segment::ALL
            .into_iter()
            .filter(move |segment| self.contains(segment.flag()))
    }
}

impl From<Segment> for SegmentSet {
    fn from(segment: Segment) -> Self {
        segment.flag()
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, segment| set | segment.flag())
    }
}

/// Look up the segments that draw `ch`.
///
/// Lowercase letters fold to uppercase. Characters without a glyph return
/// [`SegmentSet::EMPTY`].
pub fn segments_for(ch: char) -> SegmentSet {
    use Segment::{A1, A2, B, C, D1, D2, Dp, E, F, G1, G2, H, I, J, K, L, M};

    let segments: &[Segment] = match ch.to_ascii_uppercase() {
        '0' => &[A1, A2, B, C, D1, D2, E, F, J, K],
        '1' => &[B, C, J],
        '2' => &[A1, A2, B, G1, G2, E, D1, D2],
        '3' => &[A1, A2, B, G2, C, D1, D2],
        '4' => &[F, G1, G2, B, C],
        '5' => &[A1, A2, F, G1, G2, C, D1, D2],
        '6' => &[A1, A2, F, E, D1, D2, C, G1, G2],
        '7' => &[A1, A2, B, C],
        '8' => &[A1, A2, B, C, D1, D2, E, F, G1, G2],
        '9' => &[A1, A2, B, C, D1, D2, F, G1, G2],
        'A' => &[A1, A2, B, C, E, F, G1, G2],
        'B' => &[A1, A2, B, C, D1, D2, G2, I, L],
        'C' => &[A1, A2, F, E, D1, D2],
        'D' => &[A1, A2, B, C, D1, D2, I, L],
        'E' => &[A1, A2, F, E, D1, D2, G1],
        'F' => &[A1, A2, F, E, G1],
        'G' => &[A1, A2, F, E, D1, D2, C, G2],
        'H' => &[F, E, B, C, G1, G2],
        'I' => &[A1, A2, I, L, D1, D2],
        'J' => &[B, C, D1, D2, E],
        'K' => &[F, E, G1, J, M],
        'L' => &[F, E, D1, D2],
        'M' => &[F, E, B, C, H, J],
        'N' => &[F, E, B, C, H, M],
        'O' => &[A1, A2, B, C, D1, D2, E, F],
        'P' => &[A1, A2, B, F, E, G1, G2],
        'Q' => &[A1, A2, B, C, D1, D2, E, F, M],
        'R' => &[A1, A2, B, F, E, G1, G2, M],
        'S' => &[A1, A2, F, G1, G2, C, D1, D2],
        'T' => &[A1, A2, I, L],
        'U' => &[F, E, D1, D2, C, B],
        'V' => &[F, E, K, J],
        'W' => &[F, E, B, C, K, M],
        'X' => &[H, J, K, M],
        'Y' => &[H, J, L],
        'Z' => &[A1, A2, J, K, D1, D2],
        '.' => &[Dp],
        ',' => &[K],
        '-' => &[G1, G2],
        '+' => &[G1, G2, I, L],
        '*' => &[G1, G2, H, I, J, K, L, M],
        '/' => &[J, K],
        '\\' => &[H, M],
        '_' => &[D1, D2],
        '=' => &[G1, G2, D1, D2],
        ':' => &[I, L],
        '\'' => &[I],
        '"' => &[F, I],
        '!' => &[I, Dp],
        '?' => &[A1, A2, B, G2, L],
        '(' | '<' => &[J, M],
        ')' | '>' => &[H, K],
        '[' => &[A2, I, L, D2],
        ']' => &[A1, I, L, D1],
        '|' => &[I, L],
        '^' => &[K, M],
        '$' => &[A1, A2, F, G1, G2, C, D1, D2, I, L],
        '%' => &[A1, F, G1, I, J, K, L, G2, C, D2],
        '#' => &[B, C, G1, G2, I, L, D1, D2],
        '&' => &[A1, H, I, G1, E, D1, D2, M],
        '@' => &[A1, A2, B, F, E, D1, D2, G2, I],
        '═' => &[A1, A2, D1, D2],
        '║' => &[F, E, B, C],
        '╔' => &[A1, A2, F, E],
        '╗' => &[A1, A2, B, C],
        '╚' => &[D1, D2, F, E],
        '╝' => &[D1, D2, B, C],
        _ => &[],
    };
    SegmentSet::of(segments)
}
