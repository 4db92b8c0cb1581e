//! Planar directions as a bitmask.
//!
//! Each cardinal direction owns one bit, so diagonals and axis sets are plain
//! unions: `TOP | RIGHT == TOP_RIGHT`, `LEFT | RIGHT == HORIZONTAL`. Offsets
//! follow text layout, `[x, y]` with `y` growing downward.

use std::ops::BitOr;

use thiserror::Error;

/// Raw bits that do not describe a direction set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid direction bits {0:#010b}")]
pub struct InvalidDirection(pub u8);

/// A set of planar directions.
///
/// # Example
///
/// ```
/// use aoc_grid::Direction;
///
/// let facing = Direction::TOP;
/// assert_eq!(facing.turn_right(), Direction::RIGHT);
/// assert_eq!(facing.opposite(), Direction::BOTTOM);
/// assert_eq!((Direction::TOP | Direction::LEFT).offset(), Some([-1, -1]));
/// assert!(Direction::VERTICAL.contains(Direction::BOTTOM));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Direction(u8);

impl Direction {
    pub const UNKNOWN: Self = Self(0b0000);
    pub const RIGHT: Self = Self(0b0001);
    pub const TOP: Self = Self(0b0010);
    pub const LEFT: Self = Self(0b0100);
    pub const BOTTOM: Self = Self(0b1000);

    pub const TOP_RIGHT: Self = Self::TOP.union(Self::RIGHT);
    pub const TOP_LEFT: Self = Self::TOP.union(Self::LEFT);
    pub const BOTTOM_LEFT: Self = Self::BOTTOM.union(Self::LEFT);
    pub const BOTTOM_RIGHT: Self = Self::BOTTOM.union(Self::RIGHT);

    pub const HORIZONTAL: Self = Self::LEFT.union(Self::RIGHT);
    pub const VERTICAL: Self = Self::TOP.union(Self::BOTTOM);
    pub const ANY: Self = Self::HORIZONTAL.union(Self::VERTICAL);

    const MASK: u8 = Self::ANY.0;

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a direction from raw bits, rejecting bits above the four
    /// cardinal ones.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if every direction in `other` is also in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The four cardinal directions, clockwise from `TOP`
    pub const fn cardinals() -> [Self; 4] {
        [Self::TOP, Self::RIGHT, Self::BOTTOM, Self::LEFT]
    }

    /// Unit step `[dx, dy]` for a cardinal or diagonal direction.
    ///
    /// Returns `None` for the empty set and for sets holding two opposing
    /// directions.
    pub const fn offset(self) -> Option<[isize; 2]> {
        let dx = match self.0 & Self::HORIZONTAL.0 {
            0 => 0,
            bits if bits == Self::RIGHT.0 => 1,
            bits if bits == Self::LEFT.0 => -1,
            _ => return None,
        };
        let dy = match self.0 & Self::VERTICAL.0 {
            0 => 0,
            bits if bits == Self::BOTTOM.0 => 1,
            bits if bits == Self::TOP.0 => -1,
            _ => return None,
        };
        if dx == 0 && dy == 0 {
            None
        } else {
            Some([dx, dy])
        }
    }

    /// Inverse of [`offset`](Self::offset)
    pub const fn from_offset(offset: [isize; 2]) -> Option<Self> {
        let horizontal = match offset[0] {
            1 => Self::RIGHT,
            -1 => Self::LEFT,
            0 => Self::UNKNOWN,
            _ => return None,
        };
        let vertical = match offset[1] {
            1 => Self::BOTTOM,
            -1 => Self::TOP,
            0 => Self::UNKNOWN,
            _ => return None,
        };
        let direction = horizontal.union(vertical);
        if direction.is_empty() {
            None
        } else {
            Some(direction)
        }
    }

    /// Rotates 90 degrees clockwise
    pub const fn turn_right(self) -> Self {
        // Bit order RIGHT, TOP, LEFT, BOTTOM is counter-clockwise.
        Self(((self.0 >> 1) | (self.0 << 3)) & Self::MASK)
    }

    /// Rotates 90 degrees counter-clockwise
    pub const fn turn_left(self) -> Self {
        Self(((self.0 << 1) | (self.0 >> 3)) & Self::MASK)
    }

    pub const fn opposite(self) -> Self {
        Self(((self.0 << 2) | (self.0 >> 2)) & Self::MASK)
    }

    pub const fn turn(self, left: bool) -> Self {
        if left {
            self.turn_left()
        } else {
            self.turn_right()
        }
    }
}

impl BitOr for Direction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(InvalidDirection(bits))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_constants() {
        assert_eq!(Direction::TOP_RIGHT.bits(), 0b0011);
        assert_eq!(Direction::TOP_LEFT.bits(), 0b0110);
        assert_eq!(Direction::BOTTOM_LEFT.bits(), 0b1100);
        assert_eq!(Direction::BOTTOM_RIGHT.bits(), 0b1001);
        assert_eq!(Direction::HORIZONTAL.bits(), 0b0101);
        assert_eq!(Direction::VERTICAL.bits(), 0b1010);
        assert_eq!(Direction::ANY.bits(), 0b1111);
        assert!(Direction::UNKNOWN.is_empty());
    }

    #[test]
    fn test_from_bits_rejects_high_bits() {
        assert_eq!(Direction::from_bits(0b1001), Some(Direction::BOTTOM_RIGHT));
        assert_eq!(Direction::from_bits(0b0100_1100), None);
        assert_eq!(Direction::try_from(0b0100_1100_u8), Err(InvalidDirection(0b0100_1100)));
        assert_eq!(u8::from(Direction::try_from(0b0110_u8).unwrap()), 0b0110);
        assert_eq!(
            InvalidDirection(0b0100_1100).to_string(),
            "Invalid direction bits 0b01001100"
        );
    }

    #[test]
    fn test_turning_cycles_through_cardinals() {
        let mut facing = Direction::TOP;
        for expected in [Direction::RIGHT, Direction::BOTTOM, Direction::LEFT, Direction::TOP] {
            facing = facing.turn_right();
            assert_eq!(facing, expected);
        }
        for expected in [Direction::LEFT, Direction::BOTTOM, Direction::RIGHT, Direction::TOP] {
            facing = facing.turn_left();
            assert_eq!(facing, expected);
        }
    }

    #[test]
    fn test_turning_diagonals() {
        assert_eq!(Direction::TOP_RIGHT.turn_right(), Direction::BOTTOM_RIGHT);
        assert_eq!(Direction::TOP_RIGHT.turn_left(), Direction::TOP_LEFT);
        assert_eq!(Direction::BOTTOM_LEFT.opposite(), Direction::TOP_RIGHT);
        assert_eq!(Direction::HORIZONTAL.opposite(), Direction::HORIZONTAL);
        assert_eq!(Direction::HORIZONTAL.turn_right(), Direction::VERTICAL);
    }

    #[test]
    fn test_turn_by_flag() {
        assert_eq!(Direction::LEFT.turn(true), Direction::BOTTOM);
        assert_eq!(Direction::LEFT.turn(false), Direction::TOP);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::RIGHT.offset(), Some([1, 0]));
        assert_eq!(Direction::LEFT.offset(), Some([-1, 0]));
        assert_eq!(Direction::TOP.offset(), Some([0, -1]));
        assert_eq!(Direction::BOTTOM.offset(), Some([0, 1]));
        assert_eq!(Direction::BOTTOM_LEFT.offset(), Some([-1, 1]));
        assert_eq!(Direction::UNKNOWN.offset(), None);
        assert_eq!(Direction::HORIZONTAL.offset(), None);
        assert_eq!(Direction::ANY.offset(), None);
        assert_eq!((Direction::VERTICAL | Direction::RIGHT).offset(), None);
    }

    #[test]
    fn test_from_offset_inverts_offset() {
        for direction in (1..=Direction::MASK).filter_map(Direction::from_bits) {
            if let Some(offset) = direction.offset() {
                assert_eq!(Direction::from_offset(offset), Some(direction));
            }
        }
        assert_eq!(Direction::from_offset([0, 0]), None);
        assert_eq!(Direction::from_offset([2, 0]), None);
    }

    #[test]
    fn test_set_operations() {
        let set = Direction::TOP | Direction::RIGHT;
        assert!(set.contains(Direction::TOP));
        assert!(!set.contains(Direction::VERTICAL));
        assert!(set.intersects(Direction::VERTICAL));
        assert!(!set.intersects(Direction::BOTTOM_LEFT));
        assert!(Direction::ANY.contains(set));
    }

    #[test]
    fn test_cardinals_are_clockwise() {
        let cardinals = Direction::cardinals();
        for pair in cardinals.windows(2) {
            assert_eq!(pair[0].turn_right(), pair[1]);
        }
    }
}
