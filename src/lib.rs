//! # decimal-radix
//!
//! decimal-radix is a native Rust implementation of stable least-significant-digit radix sort
//! over decimal digits, for non-negative integers.
//!
//! Values are never compared with each other. Each pass distributes the values into ten
//! buckets by one decimal digit, keeping their current relative order, and concatenates the
//! buckets from 0 to 9. After one pass per digit, starting with the ones digit, the values are
//! in ascending order.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.decimal_sort(digits)` or `radix_sort(&values, digits)`,
//! where `digits` covers the decimal width of the largest value:
//!
//! ```
//! use decimal_radix::radix_sort;
//!
//! let values = [302u32, 111, 196, 463, 55, 3, 456, 77, 777, 444, 23, 33];
//! let sorted = radix_sort(&values, 3).unwrap();
//!
//! assert_eq!(sorted, [3, 23, 33, 55, 77, 111, 196, 302, 444, 456, 463, 777]);
//! ```
//!
//! If `digits` is too small for some values, only their low digits are sorted on, so
//! `radix_sort(&[105, 6], 1)` yields `[105, 6]`. Use `decimal_sort_builder().with_auto_digits()`
//! to derive the digit count from the input, or `with_strict_digits()` to reject a digit count
//! that is too small.
//!
//! Negative values are rejected with `SortError::InvalidInput` before anything is moved.
//!
//! ## Default Implementations
//!
//! `DecimalKey` is implemented out-of-the-box for:
//!
//!  * `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
//!  * `i8`, `i16`, `i32`, `i64`, `i128`, `isize` (non-negative values only)
//!
//! ### Implementing `DecimalKey`
//!
//! To sort custom types, implement `DecimalKey`. Delegating to an integer field is usually all
//! that is needed, and since the sort is stable, records with equal keys keep their order.
//!
//! ```
//! use decimal_radix::{DecimalKey, DecimalSort};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Order {
//!     quantity: u32,
//!     id: char,
//! }
//!
//! impl DecimalKey for Order {
//!     const DIGITS: usize = <u32 as DecimalKey>::DIGITS;
//!
//!     fn get_digit(&self, digit: usize) -> u8 {
//!         self.quantity.get_digit(digit)
//!     }
//!
//!     fn digit_width(&self) -> usize {
//!         self.quantity.digit_width()
//!     }
//! }
//!
//! let mut orders = vec![
//!     Order { quantity: 20, id: 'a' },
//!     Order { quantity: 5, id: 'b' },
//!     Order { quantity: 20, id: 'c' },
//! ];
//! orders.decimal_sort(2).unwrap();
//!
//! let ids: String = orders.iter().map(|o| o.id).collect();
//! assert_eq!(ids, "bac");
//! ```
//!
//! ## Features
//!
//!  * `multi-threaded` (default): large passes are split into tiles that are counted and
//!    scattered in parallel with rayon. The output is identical to the single-threaded sort.
//!  * `work_profiles`: prints the strategy picked for each digit pass.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.


mod decimal_key;
mod decimal_key_impl;
mod digit_count;
mod error;
mod radix_sort;
mod radix_sort_builder;
mod sorter;
mod sorts;
pub mod tuner;
pub mod tuners;
mod utils;

pub use decimal_key::DecimalKey;
pub use digit_count::DigitCount;
pub use error::SortError;
pub use radix_sort::{radix_sort, DecimalSort};
pub use radix_sort_builder::DecimalSortBuilder;
