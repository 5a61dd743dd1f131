#[derive(Clone, Debug)]
pub struct TuningParams {
    pub threads: usize,
    pub digit: usize,
    pub total_digits: usize,
    pub input_len: usize,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg(feature = "multi-threaded")]
pub enum Algorithm {
    Bucket,
    Lsd,
    MtLsd,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg(not(feature = "multi-threaded"))]
pub enum Algorithm {
    Bucket,
    Lsd,
}

/// Picks the distribution strategy for a single digit pass. Every strategy is a stable
/// distribution over the ten digit buckets, so the choice affects speed only.
pub trait Tuner {
    fn pick_algorithm(&self, p: &TuningParams, counts: &[usize]) -> Algorithm;
}
