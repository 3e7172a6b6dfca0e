//! Deterministic per-orbit colors.
//!
//! Every orbit is colored by the state pair it was discovered from. The
//! pair is mixed with SplitMix64 so neighbouring pairs get unrelated hues.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::CELL_ALPHA;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Color of the zero orbit `(0, 0)`.
pub const ZERO_STATE: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: 0xff,
};

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Hex form `#rrggbbaa`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Nearest entry of the xterm 6x6x6 color cube.
    #[must_use]
    pub fn to_ansi256(self) -> u8 {
        fn level(c: u8) -> u8 {
            // Cube levels: 0, 95, 135, 175, 215, 255.
            match c {
                0..=47 => 0,
                48..=114 => 1,
                _ => (c - 35) / 40,
            }
        }
        16 + 36 * level(self.r) + 6 * level(self.g) + level(self.b)
    }

    /// Relative luminance in `[0, 255]`, ignoring alpha.
    #[must_use]
    pub fn luminance(self) -> u32 {
        (299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)) / 1000
    }

    /// Whether light text reads better on this background.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.luminance() < 128
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Color for the orbit discovered from `(a, b)`.
///
/// # Example
/// ```
/// use gibcalc_core::palette::{seeded_color, ZERO_STATE};
/// assert_eq!(seeded_color(0, 0), ZERO_STATE);
/// assert_eq!(seeded_color(0, 1), seeded_color(0, 1));
/// assert_eq!(seeded_color(0, 1).a, 0xaa);
/// ```
#[must_use]
pub fn seeded_color(a: u64, b: u64) -> Rgba {
    if a == 0 && b == 0 {
        return ZERO_STATE;
    }
    let [r, g, b, ..] = splitmix64((a << 32) ^ b).to_le_bytes();
    Rgba::new(r, g, b, CELL_ALPHA)
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_state_is_black() {
        assert_eq!(seeded_color(0, 0).to_hex(), "#000000ff");
    }

    #[test]
    fn deterministic() {
        for a in 0..10 {
            for b in 0..10 {
                assert_eq!(seeded_color(a, b), seeded_color(a, b));
            }
        }
    }

    #[test]
    fn distinct_for_neighbours() {
        assert_ne!(seeded_color(0, 1), seeded_color(1, 0));
        assert_ne!(seeded_color(1, 2), seeded_color(2, 1));
        assert_ne!(seeded_color(0, 1), seeded_color(0, 2));
    }

    #[test]
    fn hex_format() {
        assert_eq!(Rgba::new(0x12, 0xab, 0x00, 0xaa).to_hex(), "#12ab00aa");
        assert_eq!(Rgba::new(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn ansi256_corners() {
        assert_eq!(Rgba::new(0, 0, 0, 0xff).to_ansi256(), 16);
        assert_eq!(Rgba::new(255, 255, 255, 0xff).to_ansi256(), 231);
        assert_eq!(Rgba::new(255, 0, 0, 0xff).to_ansi256(), 196);
        assert_eq!(Rgba::new(95, 135, 175, 0xff).to_ansi256(), 16 + 36 + 12 + 3);
    }

    #[test]
    fn darkness() {
        assert!(ZERO_STATE.is_dark());
        assert!(!Rgba::new(255, 255, 255, 0xff).is_dark());
    }

    #[test]
    fn serializes_as_hex() {
        let json = serde_json::to_string(&Rgba::new(255, 0, 16, 0xaa)).unwrap();
        assert_eq!(json, "\"#ff0010aa\"");
    }
}
