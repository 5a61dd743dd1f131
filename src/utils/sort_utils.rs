use crate::DecimalKey;
#[cfg(feature = "multi-threaded")]
use rayon::prelude::*;

/// Number of buckets per pass, one for each decimal digit.
pub const RADIX: usize = 10;

#[inline]
pub fn get_prefix_sums(counts: &[usize; RADIX]) -> [usize; RADIX] {
    let mut sums = [0usize; RADIX];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

#[inline]
pub fn get_counts<T>(bucket: &[T], digit: usize) -> [usize; RADIX]
where
    T: DecimalKey,
{
    #[cfg(feature = "work_profiles")]
    println!("({}) COUNT", digit);

    let mut counts_1 = [0usize; RADIX];
    let mut counts_2 = [0usize; RADIX];
    let chunks = bucket.chunks_exact(2);
    let rem = chunks.remainder();

    chunks.for_each(|chunk| {
        let a = chunk[0].get_digit(digit) as usize;
        let b = chunk[1].get_digit(digit) as usize;

        counts_1[a] += 1;
        counts_2[b] += 1;
    });

    rem.iter().for_each(|v| {
        counts_1[v.get_digit(digit) as usize] += 1;
    });

    for i in 0..RADIX {
        counts_1[i] += counts_2[i];
    }

    counts_1
}

#[inline]
pub const fn cdiv(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

#[inline]
pub fn get_tile_counts<T>(bucket: &[T], tile_size: usize, digit: usize) -> Vec<[usize; RADIX]>
where
    T: DecimalKey + Sized + Send + Sync,
{
    #[cfg(feature = "work_profiles")]
    println!("({}) TILE_COUNT", digit);

    #[cfg(feature = "multi-threaded")]
    let tiles: Vec<[usize; RADIX]> = bucket
        .par_chunks(tile_size)
        .map(|chunk| get_counts(chunk, digit))
        .collect();

    #[cfg(not(feature = "multi-threaded"))]
    let tiles: Vec<[usize; RADIX]> = bucket
        .chunks(tile_size)
        .map(|chunk| get_counts(chunk, digit))
        .collect();

    tiles
}

#[inline]
pub fn aggregate_tile_counts(tile_counts: &[[usize; RADIX]]) -> [usize; RADIX] {
    let mut out = [0usize; RADIX];
    for tile in tile_counts {
        for i in 0..RADIX {
            out[i] += tile[i];
        }
    }

    out
}

/// True when every value falls into the same bucket, i.e. the pass would not move anything.
#[inline]
pub fn is_homogenous_bucket(counts: &[usize; RADIX]) -> bool {
    counts.iter().filter(|c| **c > 0).count() <= 1
}

/// Position of the first negative value, if any.
#[inline]
#[cfg(feature = "multi-threaded")]
pub fn find_negative<T>(bucket: &[T], parallel: bool) -> Option<usize>
where
    T: DecimalKey + Sized + Send + Sync,
{
    if parallel && bucket.len() >= 260_000 {
        bucket.par_iter().position_first(|v| v.is_negative())
    } else {
        bucket.iter().position(|v| v.is_negative())
    }
}

/// Position of the first negative value, if any.
#[inline]
#[cfg(not(feature = "multi-threaded"))]
pub fn find_negative<T>(bucket: &[T], _parallel: bool) -> Option<usize>
where
    T: DecimalKey + Sized + Send + Sync,
{
    bucket.iter().position(|v| v.is_negative())
}

/// Number of decimal digits needed by the widest value. Empty input needs none.
#[inline]
pub fn max_digit_width<T>(bucket: &[T]) -> usize
where
    T: DecimalKey,
{
    bucket.iter().map(|v| v.digit_width()).max().unwrap_or(0)
}
