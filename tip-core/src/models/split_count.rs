use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of people splitting the bill, always within `[MIN, MAX]`.
///
/// Construction clamps, so there is no way to hold a split of zero and
/// per-person division is always defined. Deserialization clamps as well.
///
/// # Example
///
/// ```
/// use tip_core::SplitCount;
///
/// assert_eq!(SplitCount::new(0), SplitCount::MIN);
/// assert_eq!(SplitCount::new(250), SplitCount::MAX);
/// assert_eq!(SplitCount::new(4).get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct SplitCount(u8);

impl SplitCount {
    pub const MIN: SplitCount = SplitCount(1);
    pub const MAX: SplitCount = SplitCount(100);

    /// Creates a split count, clamping `people` into `[1, 100]`.
    pub fn new(people: u32) -> Self {
        let clamped = people.clamp(Self::MIN.0 as u32, Self::MAX.0 as u32);
        Self(clamped as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// One more person, or `None` when already at [`SplitCount::MAX`].
    pub fn incremented(self) -> Option<Self> {
        (self < Self::MAX).then(|| Self(self.0 + 1))
    }

    /// One fewer person, or `None` when already at [`SplitCount::MIN`].
    pub fn decremented(self) -> Option<Self> {
        (self > Self::MIN).then(|| Self(self.0 - 1))
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u32> for SplitCount {
    fn from(people: u32) -> Self {
        Self::new(people)
    }
}

impl From<SplitCount> for u32 {
    fn from(split: SplitCount) -> Self {
        split.0 as u32
    }
}

impl fmt::Display for SplitCount {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_is_one_person() {
        assert_eq!(SplitCount::default().get(), 1);
    }

    #[test]
    fn new_clamps_zero_to_min() {
        assert_eq!(SplitCount::new(0), SplitCount::MIN);
    }

    #[test]
    fn new_clamps_above_max() {
        assert_eq!(SplitCount::new(101), SplitCount::MAX);
        assert_eq!(SplitCount::new(u32::MAX), SplitCount::MAX);
    }

    #[test]
    fn new_keeps_values_in_range() {
        assert_eq!(SplitCount::new(1).get(), 1);
        assert_eq!(SplitCount::new(37).get(), 37);
        assert_eq!(SplitCount::new(100).get(), 100);
    }

    #[test]
    fn incremented_stops_at_max() {
        assert_eq!(SplitCount::new(99).incremented(), Some(SplitCount::MAX));
        assert_eq!(SplitCount::MAX.incremented(), None);
    }

    #[test]
    fn decremented_stops_at_min() {
        assert_eq!(SplitCount::new(2).decremented(), Some(SplitCount::MIN));
        assert_eq!(SplitCount::MIN.decremented(), None);
    }

    #[test]
    fn as_decimal_converts_exactly() {
        assert_eq!(SplitCount::new(3).as_decimal(), dec!(3));
    }

    #[test]
    fn deserialize_clamps_out_of_range_values() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, U32Deserializer};

        let deserializer: U32Deserializer<Error> = 0u32.into_deserializer();
        let split = SplitCount::deserialize(deserializer).unwrap();

        assert_eq!(split, SplitCount::MIN);
    }
}
