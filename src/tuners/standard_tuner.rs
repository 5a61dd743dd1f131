//! `StandardTuner` represents the default tuning of algorithm choices.
//!
//! StandardTuner algorithm choice is:
//!  * multi-threaded for large inputs
//!  * aware of skewed digit distributions

use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct StandardTuner;
impl Tuner for StandardTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams, counts: &[usize]) -> Algorithm {
        if p.input_len <= 64 {
            return Algorithm::Bucket;
        }

        if p.threads < 2 {
            return Algorithm::Lsd;
        }

        // A digit that holds most of the input serialises the scatter onto one region of the
        // output, which removes most of the benefit of splitting into tiles.
        let skew_threshold = (p.input_len / 10) * 8;
        if counts.iter().any(|c| *c >= skew_threshold) {
            return match p.input_len {
                0..=1_000_000 => Algorithm::Lsd,
                _ => Algorithm::MtLsd,
            };
        }

        match p.input_len {
            0..=260_000 => Algorithm::Lsd,
            _ => Algorithm::MtLsd,
        }
    }
}
