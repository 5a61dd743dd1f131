use crate::radix_sort_builder::DecimalSortBuilder;
use crate::{DecimalKey, SortError};

pub trait DecimalSort<T> {
    /// decimal_sort runs a stable LSD radix sort over the lowest `digits` decimal digits of
    /// each value, based upon the `decimal_radix::DecimalKey` implementation of `T` in your
    /// `Vec<T>` or `[T]`.
    ///
    /// If `digits` is smaller than the width of the largest value, the result is only ordered
    /// by those low digits. `digits == 0` leaves the input untouched.
    ///
    /// ```
    /// use decimal_radix::DecimalSort;
    ///
    /// let mut values = [302u32, 3, 55, 111];
    /// values.decimal_sort(3).unwrap();
    ///
    /// assert_eq!(values, [3, 55, 111, 302]);
    /// ```
    fn decimal_sort(&mut self, digits: usize) -> Result<(), SortError>;

    fn decimal_sort_builder(&'_ mut self) -> DecimalSortBuilder<'_, T>;
}

impl<T> DecimalSort<T> for Vec<T>
where
    T: DecimalKey + Sized + Send + Copy + Sync,
{
    fn decimal_sort(&mut self, digits: usize) -> Result<(), SortError> {
        self.decimal_sort_builder().with_digits(digits).sort()
    }

    fn decimal_sort_builder(&'_ mut self) -> DecimalSortBuilder<'_, T> {
        DecimalSortBuilder::new(self)
    }
}

impl<T> DecimalSort<T> for [T]
where
    T: DecimalKey + Sized + Send + Copy + Sync,
{
    fn decimal_sort(&mut self, digits: usize) -> Result<(), SortError> {
        self.decimal_sort_builder().with_digits(digits).sort()
    }

    fn decimal_sort_builder(&'_ mut self) -> DecimalSortBuilder<'_, T> {
        DecimalSortBuilder::new(self)
    }
}

/// Returns a sorted copy of `values`, ordered by their lowest `digits` decimal digits.
///
/// ```
/// use decimal_radix::radix_sort;
///
/// let sorted = radix_sort(&[105u32, 6], 3).unwrap();
/// assert_eq!(sorted, vec![6, 105]);
///
/// // One digit only orders by the ones digit
/// let partial = radix_sort(&[6u32, 105], 1).unwrap();
/// assert_eq!(partial, vec![105, 6]);
/// ```
pub fn radix_sort<T>(values: &[T], digits: usize) -> Result<Vec<T>, SortError>
where
    T: DecimalKey + Sized + Send + Copy + Sync,
{
    let mut out = values.to_vec();
    out.decimal_sort(digits)?;

    Ok(out)
}
