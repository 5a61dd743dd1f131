//! `SingleThreadedTuner` is a tuner which only uses single-threaded algorithms.
//!
//! Typically this will be expected to be used in conjunction with
//! `decimal_sort_builder().with_parallel(false)` for fully single-threaded operation.
//!
//! SingleThreadedTuner algorithm choice is:
//!  * single-threaded only
//!  * bucket vectors for tiny inputs, counting scatter otherwise

use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct SingleThreadedTuner;
impl Tuner for SingleThreadedTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams, _counts: &[usize]) -> Algorithm {
        if p.input_len <= 64 {
            Algorithm::Bucket
        } else {
            Algorithm::Lsd
        }
    }
}
