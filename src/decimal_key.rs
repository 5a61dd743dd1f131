/// Access to the decimal digits of a sortable value.
///
/// Digits are addressed from the least significant end, so `get_digit(0)` is the ones digit,
/// `get_digit(1)` the tens digit and so on.
pub trait DecimalKey {
    /// The maximum number of decimal digits any value of this type can have. Digits at or
    /// beyond this position are always zero, so the sorter never visits them.
    const DIGITS: usize;

    /// Returns the decimal digit at position `digit` (`0..=9`). Positions at or beyond
    /// `DIGITS` must return `0`.
    fn get_digit(&self, digit: usize) -> u8;

    /// Whether this value is negative. Negative values have no decimal digits under this sort
    /// and are rejected before any distribution takes place.
    #[inline]
    fn is_negative(&self) -> bool {
        false
    }

    /// The number of decimal digits needed to write this value. Zero is one digit wide.
    fn digit_width(&self) -> usize;
}
