//! Parallel suffix array construction using Rayon.
//!
//! Comparator-sort realization of the same prefix-doubling scheme as the
//! sequential builder: each round stably sorts positions by the pair
//! (rank, rank at offset k), with an absent second key ordering below
//! every real rank. Output is bit-identical to the sequential counting
//! sort variant; tests assert it.

use crate::suffix_array::{build_suffix_array, SuffixIndex};
use crate::types::{IndexError, MAX_TEXT_LEN};
use rayon::prelude::*;

/// Configuration for parallel suffix array construction.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Minimum input size to use parallel construction.
    /// Below this threshold, sequential is faster due to overhead.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10_000,
        }
    }
}

/// Build a suffix array using parallel doubling.
///
/// Falls back to the sequential builder for inputs below the threshold.
///
/// Time complexity: O(n log^2 n / p) where p is the number of processors
/// Space complexity: O(n)
pub fn build_suffix_array_parallel(text: &[u8], config: &ParallelConfig) -> Vec<usize> {
    let n = text.len();

    if n < config.parallel_threshold || n == 0 {
        return build_suffix_array(text);
    }

    // Initial ranks straight from byte values; they are re-densified on
    // the first round, so gaps do not matter.
    let mut rank: Vec<usize> = text.par_iter().map(|&b| b as usize).collect();
    let mut sa: Vec<usize> = (0..n).collect();
    let mut tmp = vec![0usize; n];
    let mut k = 1usize;

    loop {
        // Pair key at the current round; None (suffix too short) orders
        // below every real rank.
        let rank_ref = &rank;
        let key = move |pos: usize| -> (usize, Option<usize>) {
            (
                rank_ref[pos],
                if pos + k < n { Some(rank_ref[pos + k]) } else { None },
            )
        };

        // par_sort_by is stable, preserving the previous round's order on
        // equal pairs.
        sa.par_sort_by(|&a, &b| key(a).cmp(&key(b)));

        // Dense re-rank; sequential because each class id depends on the
        // previous position's.
        tmp[sa[0]] = 0;
        let mut num_classes = 1;
        for i in 1..n {
            if key(sa[i]) != key(sa[i - 1]) {
                num_classes += 1;
            }
            tmp[sa[i]] = num_classes - 1;
        }

        rank.copy_from_slice(&tmp);

        if num_classes == n {
            break;
        }

        k *= 2;
    }

    sa
}

/// Build a full index with automatic parallel/sequential selection.
pub fn build_index_auto(text: Vec<u8>, enable_parallel: bool) -> Result<SuffixIndex, IndexError> {
    if text.len() > MAX_TEXT_LEN {
        return Err(IndexError::TextTooLong {
            len: text.len(),
            max: MAX_TEXT_LEN,
        });
    }

    let config = ParallelConfig::default();
    if enable_parallel && text.len() >= config.parallel_threshold {
        let sa = build_suffix_array_parallel(&text, &config);
        Ok(SuffixIndex::from_parts(text, sa))
    } else {
        SuffixIndex::build(text)
    }
}
