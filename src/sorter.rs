use crate::sorts::*;
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::utils::*;
use crate::DecimalKey;
#[cfg(feature = "multi-threaded")]
use rayon::current_num_threads;
use std::cmp::{max, min};

pub struct Sorter<'a> {
    multi_threaded: bool,
    pub(crate) tuner: &'a (dyn Tuner + Send + Sync),
}

impl<'a> Sorter<'a> {
    pub fn new(multi_threaded: bool, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        Self {
            multi_threaded,
            tuner,
        }
    }

    #[inline]
    #[cfg(feature = "multi-threaded")]
    fn threads(&self) -> usize {
        if self.multi_threaded {
            current_num_threads()
        } else {
            1
        }
    }

    #[inline]
    #[cfg(not(feature = "multi-threaded"))]
    fn threads(&self) -> usize {
        1
    }

    /// Distributes `src_bucket` into `dst_bucket` by `digit`. Returns false, leaving
    /// `dst_bucket` untouched, when every value has the same digit and the pass would be an
    /// identity.
    fn run_pass<T>(
        &self,
        src_bucket: &[T],
        dst_bucket: &mut [T],
        digit: usize,
        total_digits: usize,
    ) -> bool
    where
        T: DecimalKey + Sized + Send + Copy + Sync,
    {
        let threads = self.threads();
        let tile_size = max(30_000, cdiv(src_bucket.len(), threads));

        let tile_counts = if threads > 1 && src_bucket.len() >= 260_000 {
            Some(get_tile_counts(src_bucket, tile_size, digit))
        } else {
            None
        };

        let counts = if let Some(tile_counts) = &tile_counts {
            aggregate_tile_counts(tile_counts)
        } else {
            get_counts(src_bucket, digit)
        };

        if is_homogenous_bucket(&counts) {
            #[cfg(feature = "work_profiles")]
            println!("({}) SKIP", digit);

            return false;
        }

        let tp = TuningParams {
            threads,
            digit,
            total_digits,
            input_len: src_bucket.len(),
        };

        let algorithm = self.tuner.pick_algorithm(&tp, &counts);

        #[cfg(feature = "work_profiles")]
        println!("({}) PASS: {:?}", digit, algorithm);

        match algorithm {
            Algorithm::Bucket => bucket_sort(src_bucket, dst_bucket, &counts, digit),
            Algorithm::Lsd => lsd_sort(src_bucket, dst_bucket, &counts, digit),
            #[cfg(feature = "multi-threaded")]
            Algorithm::MtLsd => {
                let tile_counts =
                    tile_counts.unwrap_or_else(|| get_tile_counts(src_bucket, tile_size, digit));
                mt_lsd_sort(src_bucket, dst_bucket, &tile_counts, tile_size, digit)
            }
        }

        true
    }

    /// Runs `digits` stable passes over `bucket`, least significant digit first. Passes beyond
    /// `T::DIGITS` only ever see the digit 0 and are not run.
    pub fn lsd_director<T>(&self, bucket: &mut [T], digits: usize)
    where
        T: DecimalKey + Sized + Send + Copy + Sync,
    {
        let passes = min(digits, T::DIGITS);
        if bucket.len() < 2 || passes == 0 {
            return;
        }

        let mut tmp_bucket = bucket.to_vec();
        let mut invert = false;

        for digit in 0..passes {
            let moved = if invert {
                self.run_pass(&tmp_bucket, bucket, digit, passes)
            } else {
                self.run_pass(bucket, &mut tmp_bucket, digit, passes)
            };

            if moved {
                invert = !invert;
            }
        }

        if invert {
            bucket.copy_from_slice(&tmp_bucket);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sorter::Sorter;
    use crate::tuner::Algorithm;
    use crate::tuners::SingleThreadedTuner;
    use crate::utils::test_utils::{
        sort_comparison_suite, validate_stability, NumericTest, SingleAlgoTuner,
    };

    fn test_single_algorithm<T>(algo: Algorithm, digits: usize)
    where
        T: NumericTest,
    {
        let tuner = SingleAlgoTuner { algo };
        let sorter = Sorter::new(true, &tuner);

        sort_comparison_suite::<T, _>(digits, |inputs, digits| {
            sorter.lsd_director(inputs, digits)
        });
        validate_stability(digits, |inputs, digits| sorter.lsd_director(inputs, digits));
    }

    #[test]
    pub fn test_bucket_u32() {
        test_single_algorithm::<u32>(Algorithm::Bucket, 10);
    }

    #[test]
    pub fn test_lsd_u32() {
        test_single_algorithm::<u32>(Algorithm::Lsd, 10);
    }

    #[test]
    pub fn test_lsd_u64() {
        test_single_algorithm::<u64>(Algorithm::Lsd, 19);
    }

    #[test]
    #[cfg(feature = "multi-threaded")]
    pub fn test_mt_lsd_u32() {
        test_single_algorithm::<u32>(Algorithm::MtLsd, 10);
    }

    #[test]
    #[cfg(feature = "multi-threaded")]
    pub fn test_mt_lsd_u64() {
        test_single_algorithm::<u64>(Algorithm::MtLsd, 19);
    }

    #[test]
    #[cfg(feature = "multi-threaded")]
    pub fn test_mt_lsd_without_threads() {
        let tuner = SingleAlgoTuner {
            algo: Algorithm::MtLsd,
        };
        let sorter = Sorter::new(false, &tuner);

        sort_comparison_suite::<u32, _>(10, |inputs, digits| {
            sorter.lsd_director(inputs, digits)
        });
    }

    #[test]
    pub fn test_single_threaded() {
        let sorter = Sorter::new(false, &SingleThreadedTuner);

        sort_comparison_suite::<u64, _>(19, |inputs, digits| {
            sorter.lsd_director(inputs, digits)
        });
    }

    #[test]
    pub fn test_passes_beyond_type_width() {
        let sorter = Sorter::new(false, &SingleThreadedTuner);
        let mut inputs = vec![255u8, 0, 17, 200, 3];

        sorter.lsd_director(&mut inputs, 1_000);

        assert_eq!(inputs, vec![0, 3, 17, 200, 255]);
    }

    #[test]
    pub fn test_skipped_passes_keep_order() {
        let sorter = Sorter::new(false, &SingleThreadedTuner);
        // Digits 1 and 2 are identical for every value
        let mut inputs = vec![5_509u32, 5_501, 5_504, 6_500];

        sorter.lsd_director(&mut inputs, 4);

        assert_eq!(inputs, vec![5_501, 5_504, 5_509, 6_500]);
    }
}
