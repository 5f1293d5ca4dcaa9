//! Integration tests for the suffix index core.
//!
//! These exercise the full index pipeline and the structural invariants
//! every build must satisfy: permutation, ordering, rank inversion, and
//! LCP correctness against a character-by-character reference.

use suffix_index_core::suffix_array::{
    build_lcp_array, build_suffix_array, rank_of, SuffixIndex,
};
use suffix_index_core::types::IndexError;

/// Reference LCP of two suffixes by direct comparison.
fn naive_lcp(text: &[u8], a: usize, b: usize) -> usize {
    text[a..]
        .iter()
        .zip(&text[b..])
        .take_while(|(x, y)| x == y)
        .count()
}

/// Assert every invariant from the index contract on one text.
fn check_invariants(text: &[u8]) {
    let n = text.len();
    let index = SuffixIndex::build(text.to_vec()).unwrap();
    let sa = index.suffix_array();
    let rank = index.rank();
    let lcp = index.lcp();

    // Permutation of 0..n.
    let mut sorted = sa.to_vec();
    sorted.sort_unstable();
    let expected: Vec<usize> = (0..n).collect();
    assert_eq!(sorted, expected, "not a permutation: {:?}", text);

    // Strictly increasing lexicographic order.
    for i in 1..n {
        assert!(
            text[sa[i - 1]..] < text[sa[i]..],
            "order violated at {} for {:?}",
            i,
            text
        );
    }

    // Rank inverts the suffix array.
    for i in 0..n {
        assert_eq!(rank[sa[i]], i);
    }

    // LCP values are exact and within bounds.
    assert_eq!(lcp.len(), n);
    if n > 0 {
        assert_eq!(lcp[0], 0);
    }
    for i in 1..n {
        let expected = naive_lcp(text, sa[i - 1], sa[i]);
        assert_eq!(lcp[i], expected, "lcp[{}] wrong for {:?}", i, text);
        assert!(lcp[i] <= n - sa[i]);
        assert!(lcp[i] <= n - sa[i - 1]);
    }
}

#[test]
fn test_invariants_on_fixture_texts() {
    let cases: [&[u8]; 12] = [
        b"",
        b"z",
        b"aaaa",
        b"banana",
        b"abcabc",
        b"mississippi",
        b"abracadabra",
        b"ababababab",
        b"zyxwvutsrq",
        b"aabaaabaaaab",
        b"\x00\x01\x00\x02\x00\x01",
        b"to be or not to be that is the question",
    ];
    for text in cases {
        check_invariants(text);
    }
}

#[test]
fn test_invariants_on_generated_texts() {
    // Deterministic pseudo-random bytes over alphabets of varying width.
    for &alphabet in &[2usize, 4, 26, 256] {
        let text: Vec<u8> = (0..800u64)
            .map(|i| ((i.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407) >> 33) as usize % alphabet) as u8)
            .collect();
        check_invariants(&text);
    }
}

#[test]
fn test_known_suffix_arrays() {
    assert_eq!(build_suffix_array(b"banana"), vec![5, 3, 1, 0, 4, 2]);
    assert_eq!(build_suffix_array(b"aaaa"), vec![3, 2, 1, 0]);
    assert_eq!(build_suffix_array(b"z"), vec![0]);
    assert!(build_suffix_array(b"").is_empty());
}

#[test]
fn test_known_lcp_arrays() {
    let banana_sa = build_suffix_array(b"banana");
    assert_eq!(build_lcp_array(b"banana", &banana_sa).unwrap(), vec![0, 1, 3, 0, 0, 2]);

    let aaaa_sa = build_suffix_array(b"aaaa");
    assert_eq!(build_lcp_array(b"aaaa", &aaaa_sa).unwrap(), vec![0, 1, 2, 3]);

    assert_eq!(build_lcp_array(b"z", &[0]).unwrap(), vec![0]);
    assert!(build_lcp_array(b"", &[]).unwrap().is_empty());
}

#[test]
fn test_rebuild_is_idempotent() {
    let text = b"abracadabra banana mississippi";
    let first = SuffixIndex::build(text.to_vec()).unwrap();
    let second = SuffixIndex::build(text.to_vec()).unwrap();
    assert_eq!(first.suffix_array(), second.suffix_array());
    assert_eq!(first.rank(), second.rank());
    assert_eq!(first.lcp(), second.lcp());
}

#[test]
fn test_lcp_rejects_invalid_precondition() {
    // Wrong length.
    let err = build_lcp_array(b"abc", &[0, 1]).unwrap_err();
    assert!(matches!(err, IndexError::InvalidSuffixArray { .. }));

    // Not a permutation.
    let err = build_lcp_array(b"abc", &[2, 2, 0]).unwrap_err();
    assert!(matches!(err, IndexError::InvalidSuffixArray { .. }));

    // A valid permutation that is not the sorted order still passes
    // validation; only structural properties are checked eagerly.
    assert!(build_lcp_array(b"abc", &[2, 0, 1]).is_ok());
}

#[test]
fn test_rank_of_round_trip() {
    let sa = build_suffix_array(b"mississippi");
    let rank = rank_of(&sa);
    let back = rank_of(&rank);
    assert_eq!(back, sa);
}

#[test]
fn test_queries_end_to_end() {
    let index = SuffixIndex::build(b"abcabc".to_vec()).unwrap();

    let (offset, len) = index.longest_repeated_substring().unwrap();
    assert_eq!(len, 3);
    assert_eq!(&index.text()[offset..offset + len], b"abc");

    assert_eq!(index.count(b"abc"), 2);
    assert_eq!(index.positions(b"abc"), vec![0, 3]);
    assert!(index.contains(b"cab"));
    assert!(!index.contains(b"cba"));
    assert_eq!(index.distinct_substrings(), 15);
}

#[test]
fn test_query_results_match_scan() {
    let text = b"the theme of the theater is the thing";
    let index = SuffixIndex::build(text.to_vec()).unwrap();

    for pattern in [&b"the"[..], b"th", b"theme", b" ", b"e", b"q", b"thing"] {
        let expected: Vec<usize> = (0..text.len())
            .filter(|&i| text[i..].starts_with(pattern))
            .collect();
        assert_eq!(index.positions(pattern), expected, "pattern {:?}", pattern);
        assert_eq!(index.count(pattern), expected.len());
        assert_eq!(index.contains(pattern), !expected.is_empty());
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use suffix_index_core::suffix_array_parallel::{
        build_index_auto, build_suffix_array_parallel, ParallelConfig,
    };

    #[test]
    fn test_parallel_equals_sequential_on_fixtures() {
        let config = ParallelConfig {
            parallel_threshold: 0,
        };
        let cases: [&[u8]; 5] = [b"", b"banana", b"mississippi", b"aaaaaaaa", b"abcabcabcabc"];
        for text in cases {
            assert_eq!(
                build_suffix_array_parallel(text, &config),
                build_suffix_array(text),
                "text {:?}",
                text
            );
        }
    }

    #[test]
    fn test_auto_index_invariants() {
        let text: Vec<u8> = (0..30_000).map(|i| ((i % 7) + (i % 11)) as u8).collect();
        let index = build_index_auto(text.clone(), true).unwrap();
        let sequential = SuffixIndex::build(text).unwrap();
        assert_eq!(index.suffix_array(), sequential.suffix_array());
        assert_eq!(index.lcp(), sequential.lcp());
    }
}
