//! Suffix array construction and LCP computation.
//!
//! Implements O(n log n) suffix array construction using prefix doubling
//! with counting-sort rounds, and O(n) LCP computation using Kasai's
//! algorithm.
//!
//! No terminator byte is appended to the text. A position whose `+k` offset
//! falls past the end of the text contributes an absent second key
//! (`None`), which orders below every real rank; on a shared prefix the
//! shorter suffix therefore sorts first, giving a total, deterministic
//! order without a sentinel character.

use crate::types::{validate_suffix_array, IndexError, MAX_TEXT_LEN};

/// Suffix index over an immutable byte text.
///
/// Holds the suffix array, its inverse (rank array), and the LCP array.
/// All three are computed once at construction; the index is rebuilt from
/// scratch if the text changes.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    text: Vec<u8>,
    suffix_array: Vec<usize>,
    rank: Vec<usize>,
    lcp: Vec<usize>,
}

impl SuffixIndex {
    /// Build an index for `text`.
    ///
    /// Returns [`IndexError::TextTooLong`] if `text` exceeds the range
    /// addressable by [`crate::types::Position`].
    pub fn build(text: Vec<u8>) -> Result<Self, IndexError> {
        if text.len() > MAX_TEXT_LEN {
            return Err(IndexError::TextTooLong {
                len: text.len(),
                max: MAX_TEXT_LEN,
            });
        }

        let suffix_array = build_suffix_array(&text);
        Ok(Self::from_parts(text, suffix_array))
    }

    /// Assemble an index from parts built elsewhere.
    ///
    /// The caller guarantees `suffix_array` is valid for `text`; the
    /// parallel builder uses this after producing an identical array.
    pub(crate) fn from_parts(text: Vec<u8>, suffix_array: Vec<usize>) -> Self {
        debug_assert!(validate_suffix_array(text.len(), &suffix_array).is_ok());
        let rank = rank_of(&suffix_array);
        let lcp = lcp_from_parts(&text, &suffix_array, &rank);
        Self {
            text,
            suffix_array,
            rank,
            lcp,
        }
    }

    /// The indexed text.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Text length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the indexed text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The suffix array: `suffix_array()[i]` is the starting position of
    /// the i-th lexicographically smallest suffix.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// The rank array, inverse of the suffix array:
    /// `rank()[suffix_array()[i]] == i`.
    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    /// The LCP array: `lcp()[i]` is the length of the longest common
    /// prefix of the suffixes at `suffix_array()[i - 1]` and
    /// `suffix_array()[i]`; `lcp()[0]` is 0 by convention.
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// The suffix at sorted position `i`.
    pub fn suffix(&self, i: usize) -> &[u8] {
        &self.text[self.suffix_array[i]..]
    }
}

/// Build the suffix array for `text` using prefix doubling with
/// counting-sort rounds.
///
/// Round 0 buckets positions by first byte; each following round sorts by
/// the pair (class, class at offset k) in O(n) via a stable counting sort,
/// then assigns fresh dense classes by scanning the sorted order. The loop
/// stops once every position sits in its own class.
///
/// Time complexity: O(n log n)
/// Space complexity: O(n)
pub fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    // Round 0: counting sort over the byte alphabet.
    let mut bucket = [0usize; 257];
    for &b in text {
        bucket[b as usize + 1] += 1;
    }
    for i in 1..257 {
        bucket[i] += bucket[i - 1];
    }
    let mut sa = vec![0usize; n];
    for (pos, &b) in text.iter().enumerate() {
        sa[bucket[b as usize]] = pos;
        bucket[b as usize] += 1;
    }

    // Dense initial classes: positions share a class iff their first bytes
    // are equal.
    let mut class = vec![0usize; n];
    let mut num_classes = 1;
    class[sa[0]] = 0;
    for i in 1..n {
        if text[sa[i]] != text[sa[i - 1]] {
            num_classes += 1;
        }
        class[sa[i]] = num_classes - 1;
    }

    let mut order = vec![0usize; n];
    let mut next_class = vec![0usize; n];
    let mut k = 1;

    while num_classes < n {
        // Order positions by second key. Positions whose +k offset runs
        // past the end carry the absent (smallest) second key and go
        // first; the rest follow in the order their +k position occupies
        // in the current suffix array.
        let mut idx = 0;
        for pos in (n - k)..n {
            order[idx] = pos;
            idx += 1;
        }
        for &pos in &sa {
            if pos >= k {
                order[idx] = pos - k;
                idx += 1;
            }
        }

        // Stable counting sort by first-key class; stability preserves the
        // second-key order established above.
        let mut counts = vec![0usize; num_classes + 1];
        for &pos in &order {
            counts[class[pos] + 1] += 1;
        }
        for i in 1..=num_classes {
            counts[i] += counts[i - 1];
        }
        for &pos in &order {
            sa[counts[class[pos]]] = pos;
            counts[class[pos]] += 1;
        }

        // Fresh dense classes from the pair (class, class at +k). The new
        // table is written separately and swapped in afterward, so the
        // keys being compared never alias the table being written.
        let pair_key = |pos: usize| -> (usize, Option<usize>) {
            (class[pos], if pos + k < n { Some(class[pos + k]) } else { None })
        };

        next_class[sa[0]] = 0;
        num_classes = 1;
        for i in 1..n {
            if pair_key(sa[i]) != pair_key(sa[i - 1]) {
                num_classes += 1;
            }
            next_class[sa[i]] = num_classes - 1;
        }
        std::mem::swap(&mut class, &mut next_class);

        k *= 2;
    }

    sa
}

/// Build the inverse permutation of a suffix array.
pub fn rank_of(sa: &[usize]) -> Vec<usize> {
    let mut rank = vec![0usize; sa.len()];
    for (i, &pos) in sa.iter().enumerate() {
        rank[pos] = i;
    }
    rank
}

/// Build the LCP array for `text` and a suffix array built elsewhere.
///
/// `lcp[i]` is the length of the longest common prefix of the suffixes at
/// `sa[i - 1]` and `sa[i]`; `lcp[0]` is 0.
///
/// Validates that `sa` is a permutation of `0..text.len()` and returns
/// [`IndexError::InvalidSuffixArray`] otherwise.
pub fn build_lcp_array(text: &[u8], sa: &[usize]) -> Result<Vec<usize>, IndexError> {
    validate_suffix_array(text.len(), sa)?;
    let rank = rank_of(sa);
    Ok(lcp_from_parts(text, sa, &rank))
}

/// Kasai's algorithm over a pre-validated suffix array / rank array pair.
///
/// Walks positions in text order, carrying the running match length `h`.
/// When moving from position `i` to `i + 1` the LCP with the sorted
/// predecessor shrinks by at most one, so `h` is decremented rather than
/// recomputed, giving O(n) total character comparisons.
///
/// Time complexity: O(n)
pub(crate) fn lcp_from_parts(text: &[u8], sa: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0usize; n];
    let mut h = 0usize;

    for i in 0..n {
        if rank[i] == 0 {
            // Lexicographically smallest suffix has no predecessor.
            h = 0;
            continue;
        }

        let j = sa[rank[i] - 1];

        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }

        lcp[rank[i]] = h;

        if h > 0 {
            h -= 1;
        }
    }

    lcp
}
