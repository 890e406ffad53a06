//! Stepped brightness levels
//!
//! Brightness is one of five levels mapped to fixed scale factors
//! (0.1, 0.2, 0.4, 0.7 and 1.0 of full output).

const LEVEL_MIN: u8 = 1;
const LEVEL_MAX: u8 = 5;

/// Scale factors (0-255 = 0.0-1.0) for levels 1..=5
const LEVEL_SCALES: [u8; LEVEL_MAX as usize] = [26, 51, 102, 179, 255];

/// Brightness level, always within `1..=5`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    pub const MIN: Self = Self(LEVEL_MIN);
    pub const MAX: Self = Self(LEVEL_MAX);

    /// Create a level, rejecting values outside `1..=5`
    pub const fn new(level: u8) -> Option<Self> {
        if level >= LEVEL_MIN && level <= LEVEL_MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Create a level, clamping the value into `1..=5`
    pub const fn clamped(level: u8) -> Self {
        if level < LEVEL_MIN {
            Self::MIN
        } else if level > LEVEL_MAX {
            Self::MAX
        } else {
            Self(level)
        }
    }

    /// Parse a level from exactly one of `"1"` to `"5"`.
    ///
    /// Anything else yields `None`, including signs, leading zeros and
    /// surrounding whitespace.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [digit @ b'1'..=b'5'] => Self::new(digit - b'0'),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Scale factor applied to pixels at flush time
    pub const fn scale(self) -> u8 {
        LEVEL_SCALES[(self.0 - LEVEL_MIN) as usize]
    }

    pub const fn is_min(self) -> bool {
        self.0 == LEVEL_MIN
    }

    pub const fn is_max(self) -> bool {
        self.0 == LEVEL_MAX
    }

    /// Move one level in the given direction, saturating at the bounds
    #[must_use]
    pub const fn offset(self, direction: BrightnessDirection) -> Self {
        match direction {
            BrightnessDirection::Up => Self::clamped(self.0 + 1),
            BrightnessDirection::Down => Self::clamped(self.0 - 1),
        }
    }

    /// Advance one pulse step.
    ///
    /// The level bounces between 1 and 5: the returned direction is
    /// reversed as soon as a bound is reached, and a direction pointing
    /// out of range is flipped before stepping.
    pub const fn bounce(self, direction: BrightnessDirection) -> (Self, BrightnessDirection) {
        let direction = match direction {
            BrightnessDirection::Up if self.is_max() => BrightnessDirection::Down,
            BrightnessDirection::Down if self.is_min() => BrightnessDirection::Up,
            other => other,
        };
        let next = self.offset(direction);
        let direction = if next.is_max() {
            BrightnessDirection::Down
        } else if next.is_min() {
            BrightnessDirection::Up
        } else {
            direction
        };
        (next, direction)
    }
}

impl Default for BrightnessLevel {
    fn default() -> Self {
        Self(3)
    }
}

/// Direction of the pulse sweep
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BrightnessDirection {
    #[default]
    Up,
    Down,
}
