use crate::DecimalKey;

const POWERS_OF_TEN: [u128; 39] = {
    let mut powers = [1u128; 39];
    let mut i = 1;
    while i < 39 {
        powers[i] = powers[i - 1] * 10;
        i += 1;
    }

    powers
};

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl DecimalKey for $t {
                const DIGITS: usize = <$t>::MAX.ilog10() as usize + 1;

                #[inline]
                fn get_digit(&self, digit: usize) -> u8 {
                    if digit >= Self::DIGITS {
                        return 0;
                    }

                    // Every power below DIGITS fits in the type itself
                    ((*self / POWERS_OF_TEN[digit] as $t) % 10) as u8
                }

                #[inline]
                fn digit_width(&self) -> usize {
                    self.checked_ilog10().map_or(1, |l| l as usize + 1)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl DecimalKey for $t {
                const DIGITS: usize = <$t>::MAX.ilog10() as usize + 1;

                #[inline]
                fn get_digit(&self, digit: usize) -> u8 {
                    if digit >= Self::DIGITS {
                        return 0;
                    }

                    // Only ever called on validated, non-negative values
                    ((*self / POWERS_OF_TEN[digit] as $t) % 10).unsigned_abs() as u8
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                #[inline]
                fn digit_width(&self) -> usize {
                    self.unsigned_abs().checked_ilog10().map_or(1, |l| l as usize + 1)
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);
