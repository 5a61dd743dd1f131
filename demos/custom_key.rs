use decimal_radix::{DecimalKey, DecimalSort};

#[derive(Debug, Clone, Copy)]
struct Score {
    points: u32,
    player: &'static str,
}

impl DecimalKey for Score {
    const DIGITS: usize = <u32 as DecimalKey>::DIGITS;

    fn get_digit(&self, digit: usize) -> u8 {
        self.points.get_digit(digit)
    }

    fn digit_width(&self) -> usize {
        self.points.digit_width()
    }
}

fn main() -> Result<(), decimal_radix::SortError> {
    let mut scores = vec![
        Score { points: 120, player: "ana" },
        Score { points: 85, player: "bo" },
        Score { points: 120, player: "cy" },
        Score { points: 9, player: "di" },
    ];

    // Ties keep their original order
    scores
        .decimal_sort_builder()
        .with_digits(3)
        .with_strict_digits()
        .sort()?;

    for s in scores.iter() {
        println!("{:>4} {}", s.points, s.player);
    }

    Ok(())
}
