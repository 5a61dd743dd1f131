//! `lsd_sort` is an out-of-place counting pass over one decimal digit. The counts for the digit
//! are turned into prefix sums, which give the first output slot of each bucket, and values are
//! then written to their bucket's next slot in input order. This is the ten-bucket distribution
//! without materialising the buckets.
//!
//! Values are read in chunks to take some advantage of multiple execution ports in each CPU core.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable
//!  * lsd-first

use crate::utils::*;
use crate::DecimalKey;

#[inline]
pub fn lsd_sort<T>(src_bucket: &[T], dst_bucket: &mut [T], counts: &[usize; RADIX], digit: usize)
where
    T: DecimalKey + Sized + Copy,
{
    if src_bucket.len() < 2 {
        dst_bucket.copy_from_slice(src_bucket);
        return;
    }

    let mut prefix_sums = get_prefix_sums(counts);

    let chunks = src_bucket.chunks_exact(4);
    let rem = chunks.remainder();

    chunks.for_each(|chunk| {
        let a = chunk[0].get_digit(digit) as usize;
        let b = chunk[1].get_digit(digit) as usize;
        let c = chunk[2].get_digit(digit) as usize;
        let d = chunk[3].get_digit(digit) as usize;

        dst_bucket[prefix_sums[a]] = chunk[0];
        prefix_sums[a] += 1;
        dst_bucket[prefix_sums[b]] = chunk[1];
        prefix_sums[b] += 1;
        dst_bucket[prefix_sums[c]] = chunk[2];
        prefix_sums[c] += 1;
        dst_bucket[prefix_sums[d]] = chunk[3];
        prefix_sums[d] += 1;
    });

    rem.iter().for_each(|val| {
        let b = val.get_digit(digit) as usize;
        dst_bucket[prefix_sums[b]] = *val;
        prefix_sums[b] += 1;
    });
}

#[cfg(test)]
mod tests {
    use crate::sorts::{bucket_sort, lsd_sort};
    use crate::utils::get_counts;
    use crate::utils::test_utils::{gen_inputs, run_passes, sort_comparison_suite};

    #[test]
    pub fn test_matches_bucket_sort() {
        let src: Vec<u64> = gen_inputs(10_001, 12);
        let mut from_lsd = vec![0u64; src.len()];
        let mut from_buckets = vec![0u64; src.len()];

        for digit in 0..12 {
            let counts = get_counts(&src, digit);
            lsd_sort(&src, &mut from_lsd, &counts, digit);
            bucket_sort(&src, &mut from_buckets, &counts, digit);

            assert_eq!(from_lsd, from_buckets);
        }
    }

    #[test]
    pub fn test_u8() {
        sort_comparison_suite::<u8, _>(3, |inputs, digits| run_passes(inputs, digits, lsd_sort));
    }

    #[test]
    pub fn test_u32() {
        sort_comparison_suite::<u32, _>(10, |inputs, digits| {
            run_passes(inputs, digits, lsd_sort)
        });
    }

    #[test]
    pub fn test_u64() {
        sort_comparison_suite::<u64, _>(19, |inputs, digits| {
            run_passes(inputs, digits, lsd_sort)
        });
    }

    #[test]
    pub fn test_i64() {
        sort_comparison_suite::<i64, _>(18, |inputs, digits| {
            run_passes(inputs, digits, lsd_sort)
        });
    }

    #[test]
    pub fn test_empty() {
        // This is expected not to panic
        lsd_sort::<u32>(&[], &mut [], &[0usize; 10], 0);
    }
}
