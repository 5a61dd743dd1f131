//! `bucket_sort` is the textbook form of a decimal digit pass: ten growable buckets, one per
//! digit value, are filled in input order and then concatenated from bucket 0 to bucket 9.
//!
//! It allocates per pass, so it is only picked for small inputs where the setup cost of the
//! counting variants dominates.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable
//!  * lsd-first

use crate::utils::*;
use crate::DecimalKey;

pub fn bucket_sort<T>(
    src_bucket: &[T],
    dst_bucket: &mut [T],
    counts: &[usize; RADIX],
    digit: usize,
) where
    T: DecimalKey + Sized + Copy,
{
    let mut buckets: [Vec<T>; RADIX] = std::array::from_fn(|d| Vec::with_capacity(counts[d]));

    for val in src_bucket {
        buckets[val.get_digit(digit) as usize].push(*val);
    }

    let mut offset = 0;
    for b in buckets.iter() {
        dst_bucket[offset..offset + b.len()].copy_from_slice(b);
        offset += b.len();
    }
}
