//! `mt_lsd_sort` is a multi-threaded decimal digit pass. Multi-threading is achieved by splitting
//! the input into tiles, counting those tiles independently and using the per-tile counts to
//! carve the output array into one region per (digit, tile) pair.
//!
//! The regions are laid out digit-major and tile-minor, so region `(d, t)` sits after every
//! region of a smaller digit and after the regions of earlier tiles for the same digit. Each
//! tile is handed the ten regions it owns and scatters into them in input order. As tiles keep
//! the order in which they originally appeared, the output remains stable just like the
//! single-threaded pass.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * multi-threaded
//!  * stable
//!  * lsd-first

use crate::utils::*;
use crate::DecimalKey;
use arbitrary_chunks::ArbitraryChunks;
use rayon::prelude::*;

pub fn mt_lsd_sort<T>(
    src_bucket: &[T],
    dst_bucket: &mut [T],
    tile_counts: &[[usize; RADIX]],
    tile_size: usize,
    digit: usize,
) where
    T: DecimalKey + Sized + Send + Copy + Sync,
{
    let tiles = tile_counts.len();
    let mut minor_counts = Vec::with_capacity(RADIX * tiles);

    for d in 0..RADIX {
        for tile in tile_counts.iter() {
            minor_counts.push(tile[d]);
        }
    }

    let mut chunks: Vec<&mut [T]> = dst_bucket.arbitrary_chunks_mut(&minor_counts).collect();
    chunks.reverse();

    let mut collated_chunks: Vec<Vec<&mut [T]>> = Vec::with_capacity(tiles);
    collated_chunks.resize_with(tiles, Vec::new);

    for _ in 0..RADIX {
        for coll_chunk in collated_chunks.iter_mut() {
            // Trailing regions are empty when the chunk iterator stops early
            coll_chunk.push(chunks.pop().unwrap_or_default());
        }
    }

    collated_chunks
        .into_par_iter()
        .zip(src_bucket.par_chunks(tile_size))
        .for_each(|(mut buckets, tile)| {
            let mut offsets = [0usize; RADIX];

            for val in tile {
                let d = val.get_digit(digit) as usize;
                buckets[d][offsets[d]] = *val;
                offsets[d] += 1;
            }
        });
}
