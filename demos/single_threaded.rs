use decimal_radix::DecimalSort;

fn main() -> Result<(), decimal_radix::SortError> {
    let mut inputs = Vec::new();
    inputs.extend_from_slice(&[55u32, 22, 73, 4, 89, 0, 100, 3]);

    inputs
        .decimal_sort_builder()
        .with_digits(3)
        .with_parallel(false)
        .with_single_threaded_tuner()
        .sort()?;
    println!("{:?}", &inputs[..]);

    Ok(())
}
