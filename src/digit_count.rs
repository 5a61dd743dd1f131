use crate::SortError;

/// How many decimal digit passes a sort should make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitCount {
    /// Exactly this many passes, least significant digit first. `Fixed(0)` leaves the input
    /// untouched. Values wider than this are only ordered by their low digits.
    Fixed(usize),
    /// As many passes as the widest input value needs.
    Auto,
}

impl From<usize> for DigitCount {
    fn from(digits: usize) -> Self {
        DigitCount::Fixed(digits)
    }
}

impl TryFrom<i64> for DigitCount {
    type Error = SortError;

    fn try_from(digits: i64) -> Result<Self, Self::Error> {
        usize::try_from(digits)
            .map(DigitCount::Fixed)
            .map_err(|_| SortError::InvalidDigitCount(digits))
    }
}

impl TryFrom<i32> for DigitCount {
    type Error = SortError;

    fn try_from(digits: i32) -> Result<Self, Self::Error> {
        DigitCount::try_from(i64::from(digits))
    }
}
