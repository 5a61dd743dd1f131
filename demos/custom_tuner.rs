use decimal_radix::tuner::{Algorithm, Tuner, TuningParams};
use decimal_radix::DecimalSort;

struct MyTuner;

impl Tuner for MyTuner {
    fn pick_algorithm(&self, p: &TuningParams, _counts: &[usize]) -> Algorithm {
        if p.input_len >= 500_000 {
            Algorithm::Lsd
        } else {
            Algorithm::Bucket
        }
    }
}

fn main() -> Result<(), decimal_radix::SortError> {
    let mut inputs = Vec::new();
    inputs.extend_from_slice(&[55u32, 22, 73, 4, 89, 0, 100, 3]);

    inputs
        .decimal_sort_builder()
        .with_digits(3)
        .with_tuner(&MyTuner {})
        .sort()?;
    println!("{:?}", &inputs[..]);

    Ok(())
}
