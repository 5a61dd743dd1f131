use crate::sorter::Sorter;
use crate::tuner::Tuner;
#[cfg(feature = "multi-threaded")]
use crate::tuners::StandardTuner;
use crate::tuners::SingleThreadedTuner;
use crate::utils::{find_negative, max_digit_width};
use crate::{DecimalKey, DigitCount, SortError};

pub struct DecimalSortBuilder<'a, T> {
    data: &'a mut [T],
    digits: DigitCount,
    strict: bool,
    parallel: bool,
    tuner: &'a (dyn Tuner + Send + Sync),
}

impl<'a, T> DecimalSortBuilder<'a, T>
where
    T: DecimalKey + Copy + Send + Sync,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        // This is an invariant of DecimalKey that must be upheld.
        assert_ne!(T::DIGITS, 0, "DecimalKey must have at least 1 digit");

        Self {
            data,
            digits: DigitCount::Auto,
            strict: false,
            parallel: cfg!(feature = "multi-threaded"),
            tuner: default_tuner(),
        }
    }

    /// Sort by exactly `digits` decimal digits. Values wider than that are only ordered by
    /// their low `digits` digits unless `with_strict_digits` is also set.
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = DigitCount::Fixed(digits);

        self
    }

    pub fn with_digit_count(mut self, digits: DigitCount) -> Self {
        self.digits = digits;

        self
    }

    /// Sort by as many digits as the widest value has. This is the default.
    pub fn with_auto_digits(mut self) -> Self {
        self.digits = DigitCount::Auto;

        self
    }

    /// Reject the sort with `SortError::InsufficientDigitCount` when a fixed digit count does
    /// not cover every value, instead of returning a partially ordered result.
    pub fn with_strict_digits(mut self) -> Self {
        self.strict = true;

        self
    }

    /// Enables or disables multi-threading. Without the `multi-threaded` feature the sort is
    /// always single-threaded.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;

        self
    }

    pub fn with_single_threaded_tuner(mut self) -> Self {
        self.tuner = &SingleThreadedTuner;

        self
    }

    pub fn with_tuner(mut self, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        self.tuner = tuner;

        self
    }

    /// Validates the input and sorts it in place. On error the input is left untouched.
    pub fn sort(self) -> Result<(), SortError> {
        if let Some(index) = find_negative(self.data, self.parallel) {
            return Err(SortError::InvalidInput { index });
        }

        let digits = match self.digits {
            DigitCount::Fixed(digits) => {
                if self.strict {
                    let required = max_digit_width(self.data);
                    if required > digits {
                        return Err(SortError::InsufficientDigitCount {
                            required,
                            provided: digits,
                        });
                    }
                }

                digits
            }
            DigitCount::Auto => max_digit_width(self.data),
        };

        // By definition, this is already sorted
        if self.data.len() <= 1 || digits == 0 {
            return Ok(());
        }

        let sorter = Sorter::new(self.parallel, self.tuner);
        sorter.lsd_director(self.data, digits);

        Ok(())
    }
}

#[cfg(feature = "multi-threaded")]
fn default_tuner() -> &'static (dyn Tuner + Send + Sync) {
    &StandardTuner
}

#[cfg(not(feature = "multi-threaded"))]
fn default_tuner() -> &'static (dyn Tuner + Send + Sync) {
    &SingleThreadedTuner
}
