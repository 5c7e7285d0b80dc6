//! Card face values.
//!
//! A face value is the picture a card shows when turned up. Valid values are
//! `1..=10`; frame `0` of the card art is the card back and is never a face.

use serde::{Deserialize, Serialize};

use crate::core::error::{MatchError, Result};

/// Picture shown on a card's face, always within `[MIN, MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FaceValue(u8);

impl FaceValue {
    /// Art frame index of the card back.
    pub const BACK_FRAME: u8 = 0;

    pub const BAT: FaceValue = FaceValue(1);
    pub const CAT: FaceValue = FaceValue(2);
    pub const COW: FaceValue = FaceValue(3);
    pub const DRAGON: FaceValue = FaceValue(4);
    pub const GARBAGE_MAN: FaceValue = FaceValue(5);
    pub const GHOST_DOG: FaceValue = FaceValue(6);
    pub const HEN: FaceValue = FaceValue(7);
    pub const HORSE: FaceValue = FaceValue(8);
    pub const PIG: FaceValue = FaceValue(9);
    pub const SPIDER: FaceValue = FaceValue(10);

    /// Smallest valid face value.
    pub const MIN: FaceValue = Self::BAT;
    /// Largest valid face value.
    pub const MAX: FaceValue = Self::SPIDER;

    /// Create a face value, rejecting anything outside `[MIN, MAX]`.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MatchError::InvalidFaceValue {
                value,
                min: Self::MIN.0,
                max: Self::MAX.0,
            })
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate all valid face values in order.
    pub fn all() -> impl Iterator<Item = FaceValue> {
        (Self::MIN.0..=Self::MAX.0).map(FaceValue)
    }

    /// Display name of the picture.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Bat",
            2 => "Cat",
            3 => "Cow",
            4 => "Dragon",
            5 => "Garbage Man",
            6 => "Ghost Dog",
            7 => "Hen",
            8 => "Horse",
            9 => "Pig",
            _ => "Spider",
        }
    }
}

impl TryFrom<u8> for FaceValue {
    type Error = MatchError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FaceValue> for u8 {
    fn from(face: FaceValue) -> u8 {
        face.0
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.0)
    }
}
