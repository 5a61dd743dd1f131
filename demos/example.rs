use decimal_radix::{radix_sort, DecimalSort};

fn main() -> Result<(), decimal_radix::SortError> {
    let inputs = [302u32, 111, 196, 463, 55, 3, 456, 77, 777, 444, 23, 33];

    let sorted = radix_sort(&inputs, 3)?;
    println!("{:?}", &sorted[..]);

    // Too few digits: only the ones digit is sorted on
    let partial = radix_sort(&[105u32, 6], 1)?;
    println!("{:?}", &partial[..]);

    let mut in_place = inputs.to_vec();
    in_place.decimal_sort_builder().with_auto_digits().sort()?;
    println!("{:?}", &in_place[..]);

    match radix_sort(&[-1i32, 2, 3], 2) {
        Ok(v) => println!("{:?}", v),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
