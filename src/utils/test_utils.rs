use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::utils::{get_counts, RADIX};
use crate::DecimalKey;
use block_pseudorand::block_rand;
use std::cmp::min;
use std::fmt::Debug;

pub trait NumericTest: DecimalKey + Sized + Copy + Debug + Ord + Send + Sync + TryFrom<u64> {}

impl<T> NumericTest for T where
    T: DecimalKey + Sized + Copy + Debug + Ord + Send + Sync + TryFrom<u64>
{
}

pub struct SingleAlgoTuner {
    pub(crate) algo: Algorithm,
}

impl Tuner for SingleAlgoTuner {
    #[inline]
    fn pick_algorithm(&self, _p: &TuningParams, _counts: &[usize]) -> Algorithm {
        self.algo
    }
}

/// A record sorted by `key` only, used to observe stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyed {
    pub key: u32,
    pub index: usize,
}

impl DecimalKey for Keyed {
    const DIGITS: usize = <u32 as DecimalKey>::DIGITS;

    #[inline]
    fn get_digit(&self, digit: usize) -> u8 {
        self.key.get_digit(digit)
    }

    #[inline]
    fn digit_width(&self) -> usize {
        self.key.digit_width()
    }
}

/// Random values of at most `digits` decimal digits. Values that do not fit `T` are dropped,
/// so narrow types may receive fewer than `n` values.
pub fn gen_inputs<T>(n: usize, digits: usize) -> Vec<T>
where
    T: NumericTest,
{
    if n == 0 {
        return Vec::new();
    }

    let modulus = 10u64.pow(min(digits, 19) as u32);

    block_rand::<u64>(n)
        .into_iter()
        .filter_map(|v| T::try_from(v % modulus).ok())
        .collect()
}

/// Random records whose keys repeat heavily, so many share a key.
pub fn gen_keyed(n: usize, digits: usize) -> Vec<Keyed> {
    gen_inputs::<u32>(n, digits)
        .into_iter()
        .enumerate()
        .map(|(index, key)| Keyed { key, index })
        .collect()
}

pub fn gen_input_set<T>(digits: usize) -> Vec<Vec<T>>
where
    T: NumericTest,
{
    let n = 600_000;
    let half = n / 2;
    let inputs = gen_inputs(n, digits);
    let half = min(half, inputs.len() / 2);

    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

/// Applies one stable pass per digit, the way the sorter does, using `pass` for each of them.
pub fn run_passes<T, F>(bucket: &mut [T], digits: usize, pass: F)
where
    T: DecimalKey + Copy,
    F: Fn(&[T], &mut [T], &[usize; RADIX], usize),
{
    let mut tmp = bucket.to_vec();

    for digit in 0..digits {
        tmp.copy_from_slice(bucket);
        let counts = get_counts(&tmp, digit);
        pass(&tmp, bucket, &counts, digit);
    }
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, digits: usize, sort_fn: F)
where
    T: NumericTest,
    F: Fn(&mut [T], usize),
{
    let mut expected = inputs.clone();

    sort_fn(&mut inputs, digits);
    expected.sort_unstable();

    assert_eq!(inputs, expected);
}

pub fn validate_stability<F>(digits: usize, sort_fn: F)
where
    F: Fn(&mut [Keyed], usize),
{
    for n in [0, 1, 50, 5_000, 400_000] {
        let mut inputs = gen_keyed(n, min(digits, 3));
        let mut expected = inputs.clone();

        sort_fn(&mut inputs, digits);
        expected.sort_by_key(|v| v.key);

        assert_eq!(inputs, expected);
    }
}

pub fn sort_comparison_suite<T, F>(digits: usize, sort_fn: F)
where
    T: NumericTest,
    F: Fn(&mut [T], usize),
{
    let input_set = gen_input_set(digits);

    for s in input_set {
        validate_sort(s, digits, &sort_fn);
    }
}
