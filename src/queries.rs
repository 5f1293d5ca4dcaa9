//! Queries over a built suffix index.
//!
//! Pattern lookups binary-search the suffix array in O(|pattern| log n);
//! repeated-substring queries read the LCP array directly.

use crate::suffix_array::SuffixIndex;
use crate::types::IndexStats;

impl SuffixIndex {
    /// Longest repeated substring as `(offset, length)`.
    ///
    /// Returns `None` when no substring occurs twice. The offset is the
    /// starting position of the lexicographically smaller of the two
    /// overlapping-or-not occurrences that realize the maximum LCP.
    pub fn longest_repeated_substring(&self) -> Option<(usize, usize)> {
        let (i, &len) = self
            .lcp()
            .iter()
            .enumerate()
            .skip(1)
            .max_by_key(|&(_, &len)| len)?;
        if len == 0 {
            return None;
        }
        Some((self.suffix_array()[i - 1], len))
    }

    /// Number of distinct non-empty substrings:
    /// `n * (n + 1) / 2 - sum(lcp)`.
    pub fn distinct_substrings(&self) -> u64 {
        let n = self.len() as u64;
        let total = n * (n + 1) / 2;
        let repeated: u64 = self.lcp().iter().map(|&v| v as u64).sum();
        total - repeated
    }

    /// Range of suffix-array indices whose suffixes start with `pattern`.
    ///
    /// Two binary searches: the first finds the leftmost suffix that is
    /// not smaller than `pattern`, the second finds the end of the run of
    /// suffixes that still start with it.
    fn match_range(&self, pattern: &[u8]) -> (usize, usize) {
        let text = self.text();
        let sa = self.suffix_array();
        let start = sa.partition_point(|&pos| &text[pos..] < pattern);
        let end = start
            + sa[start..].partition_point(|&pos| text[pos..].starts_with(pattern));
        (start, end)
    }

    /// Whether `pattern` occurs in the text. The empty pattern trivially
    /// occurs.
    pub fn contains(&self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return true;
        }
        let (start, end) = self.match_range(pattern);
        start < end
    }

    /// Number of occurrences of `pattern`. The empty pattern occurs at
    /// every position, giving `len()`.
    pub fn count(&self, pattern: &[u8]) -> usize {
        if pattern.is_empty() {
            return self.len();
        }
        let (start, end) = self.match_range(pattern);
        end - start
    }

    /// Starting positions of every occurrence of `pattern`, ascending.
    pub fn positions(&self, pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() {
            return (0..self.len()).collect();
        }
        let (start, end) = self.match_range(pattern);
        let mut positions = self.suffix_array()[start..end].to_vec();
        positions.sort_unstable();
        positions
    }

    /// Extract maximal LCP intervals representing repeated substrings.
    ///
    /// Returns intervals as `(start_idx, end_idx, lcp_value)` where
    /// `start_idx..=end_idx` are suffix-array indices whose suffixes all
    /// share a prefix of `lcp_value` bytes, and `lcp_value` is the minimum
    /// LCP inside the interval.
    ///
    /// Only returns intervals with `lcp_value >= min_len` (`min_len` of 0
    /// is treated as 1; a zero-length repeat is meaningless).
    pub fn lcp_intervals(&self, min_len: usize) -> Vec<(usize, usize, usize)> {
        let n = self.len();
        let min_len = min_len.max(1);
        if n < 2 {
            return Vec::new();
        }

        let lcp = self.lcp();
        let mut intervals = Vec::new();
        let mut stack: Vec<(usize, usize)> = Vec::new(); // (start suffix index, lcp value)

        // lcp[i] spans the boundary between suffix indices i - 1 and i.
        for i in 1..n {
            let value = lcp[i];
            let mut start = i - 1;

            while let Some(&(prev_start, prev_lcp)) = stack.last() {
                if prev_lcp <= value {
                    break;
                }
                stack.pop();
                if prev_lcp >= min_len {
                    intervals.push((prev_start, i - 1, prev_lcp));
                }
                start = prev_start;
            }

            if stack.last().map_or(true, |&(_, top)| top < value) {
                stack.push((start, value));
            }
        }

        while let Some((start, value)) = stack.pop() {
            if value >= min_len {
                intervals.push((start, n - 1, value));
            }
        }

        intervals
    }

    /// Summary statistics for this index.
    pub fn stats(&self) -> IndexStats {
        let longest = self.longest_repeated_substring();
        IndexStats {
            text_len: self.len(),
            longest_repeat_len: longest.map_or(0, |(_, len)| len),
            longest_repeat_offset: longest.map(|(offset, _)| offset),
            distinct_substrings: self.distinct_substrings(),
        }
    }
}
