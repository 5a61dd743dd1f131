mod bucket_sort;
mod lsd_sort;
#[cfg(feature = "multi-threaded")]
mod mt_lsd_sort;

pub use bucket_sort::*;
pub use lsd_sort::*;
#[cfg(feature = "multi-threaded")]
pub use mt_lsd_sort::*;
