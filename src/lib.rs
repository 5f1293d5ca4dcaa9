//! Suffix Index Core - suffix array text indexing
//!
//! This is the WebAssembly core for the suffix index library. It builds a
//! suffix array, rank array, and LCP array for an immutable text and
//! answers substring queries against them: pattern occurrence lookups,
//! longest repeated substring, and distinct-substring counting.
//!
//! # Example (from JavaScript)
//!
//! ```javascript
//! import init, { TextIndex } from '@suffix-index/core';
//!
//! await init();
//! const index = new TextIndex('mississippi', undefined);
//! index.contains('ssi');        // true
//! index.count('issi');          // 2
//! index.positions('ssi');       // Uint32Array [2, 5]
//! ```

pub mod config;
pub mod queries;
pub mod suffix_array;
#[cfg(feature = "parallel")]
pub mod suffix_array_parallel;
pub mod types;

use config::JsIndexConfig;
use suffix_array::SuffixIndex;
use types::{validate_suffix_array, IndexError, MAX_TEXT_LEN};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in WASM.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_config(config: JsValue) -> Result<config::IndexConfig, JsValue> {
    let js_config: JsIndexConfig = if config.is_undefined() || config.is_null() {
        JsIndexConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    Ok(js_config.merge_with_defaults())
}

/// Build an index choosing the parallel path when enabled and compiled in.
#[cfg(feature = "parallel")]
fn build_auto(text: Vec<u8>, enable_parallel: bool) -> Result<SuffixIndex, IndexError> {
    suffix_array_parallel::build_index_auto(text, enable_parallel)
}

/// Build an index (sequential only when the parallel feature is not enabled).
#[cfg(not(feature = "parallel"))]
fn build_auto(text: Vec<u8>, _enable_parallel: bool) -> Result<SuffixIndex, IndexError> {
    SuffixIndex::build(text)
}

fn to_u32_vec(values: &[usize]) -> Vec<u32> {
    // Safe cast: construction rejects texts longer than u32::MAX.
    values.iter().map(|&v| v as u32).collect()
}

fn to_usize_vec(values: &[u32]) -> Vec<usize> {
    values.iter().map(|&v| v as usize).collect()
}

/// Suffix index over a text, exported to JS.
#[wasm_bindgen]
pub struct TextIndex {
    inner: SuffixIndex,
}

#[wasm_bindgen]
impl TextIndex {
    /// Build an index for `text`.
    ///
    /// `config` is an optional plain object, e.g. `{ parallel: false }`.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, config: JsValue) -> Result<TextIndex, JsValue> {
        let config = parse_config(config)?;
        let inner = build_auto(text.as_bytes().to_vec(), config.parallel)?;

        if config.validate {
            validate_suffix_array(inner.len(), inner.suffix_array())?;
        }

        Ok(Self { inner })
    }

    /// Text length in bytes.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// The suffix array as a JS array.
    #[wasm_bindgen(js_name = suffixArray)]
    pub fn suffix_array(&self) -> Vec<u32> {
        to_u32_vec(self.inner.suffix_array())
    }

    /// The rank array (inverse of the suffix array) as a JS array.
    #[wasm_bindgen(js_name = rankArray)]
    pub fn rank_array(&self) -> Vec<u32> {
        to_u32_vec(self.inner.rank())
    }

    /// The LCP array as a JS array.
    #[wasm_bindgen(js_name = lcpArray)]
    pub fn lcp_array(&self) -> Vec<u32> {
        to_u32_vec(self.inner.lcp())
    }

    /// Whether `pattern` occurs in the text.
    pub fn contains(&self, pattern: &str) -> bool {
        self.inner.contains(pattern.as_bytes())
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &str) -> usize {
        self.inner.count(pattern.as_bytes())
    }

    /// Starting byte offsets of every occurrence of `pattern`, ascending.
    pub fn positions(&self, pattern: &str) -> js_sys::Uint32Array {
        let positions = to_u32_vec(&self.inner.positions(pattern.as_bytes()));
        js_sys::Uint32Array::from(&positions[..])
    }

    /// The longest repeated substring, if any substring occurs twice.
    #[wasm_bindgen(js_name = longestRepeatedSubstring)]
    pub fn longest_repeated_substring(&self) -> Option<String> {
        let (offset, len) = self.inner.longest_repeated_substring()?;
        Some(String::from_utf8_lossy(&self.inner.text()[offset..offset + len]).into_owned())
    }

    /// Number of distinct non-empty substrings.
    #[wasm_bindgen(js_name = distinctSubstrings)]
    pub fn distinct_substrings(&self) -> u64 {
        self.inner.distinct_substrings()
    }

    /// Summary statistics as a JS object.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.stats())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Build the suffix array for `text`.
///
/// Returns a permutation of `0..text.length` ordering the suffixes
/// lexicographically.
#[wasm_bindgen(js_name = buildSuffixArray)]
pub fn build_suffix_array(text: &str) -> Result<Vec<u32>, JsValue> {
    if text.len() > MAX_TEXT_LEN {
        return Err(IndexError::TextTooLong {
            len: text.len(),
            max: MAX_TEXT_LEN,
        }
        .into());
    }
    Ok(to_u32_vec(&suffix_array::build_suffix_array(text.as_bytes())))
}

/// Build the LCP array for `text` and a previously built suffix array.
///
/// `result[0]` is 0; `result[i]` is the longest common prefix of the
/// suffixes at `suffixArray[i - 1]` and `suffixArray[i]`. Rejects a
/// suffix array that is not a valid permutation for `text`.
#[wasm_bindgen(js_name = buildLcpArray)]
pub fn build_lcp_array(text: &str, suffix_array: &[u32]) -> Result<Vec<u32>, JsValue> {
    let sa = to_usize_vec(suffix_array);
    let lcp = suffix_array::build_lcp_array(text.as_bytes(), &sa)?;
    Ok(to_u32_vec(&lcp))
}

/// Build the rank array (inverse permutation) of a suffix array.
///
/// Rejects input that is not a permutation of `0..suffixArray.length`.
#[wasm_bindgen(js_name = rankOf)]
pub fn rank_of(suffix_array: &[u32]) -> Result<Vec<u32>, JsValue> {
    let sa = to_usize_vec(suffix_array);
    validate_suffix_array(sa.len(), &sa)?;
    Ok(to_u32_vec(&suffix_array::rank_of(&sa)))
}

/// Summary statistics for `text` without keeping the index around.
#[wasm_bindgen(js_name = indexStats)]
pub fn index_stats(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let index = build_auto(text.as_bytes().to_vec(), config.parallel)?;
    serde_wasm_bindgen::to_value(&index.stats()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Repeated substrings of at least `min_len` bytes.
///
/// Returns an array of `{ substring, length, positions, count }` records,
/// one per maximal group of suffixes sharing a prefix.
#[wasm_bindgen(js_name = repeatedSubstrings)]
pub fn repeated_substrings(text: &str, min_len: usize) -> Result<JsValue, JsValue> {
    let index = SuffixIndex::build(text.as_bytes().to_vec())?;
    let records = repeat_records(&index, min_len);
    serde_wasm_bindgen::to_value(&records).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JS-friendly records for each maximal LCP interval.
fn repeat_records(index: &SuffixIndex, min_len: usize) -> Vec<serde_json::Value> {
    index
        .lcp_intervals(min_len)
        .iter()
        .map(|&(lo, hi, len)| {
            let start = index.suffix_array()[lo];
            let mut positions = index.suffix_array()[lo..=hi].to_vec();
            positions.sort_unstable();
            serde_json::json!({
                "substring": String::from_utf8_lossy(&index.text()[start..start + len]),
                "length": len,
                "positions": positions,
                "count": positions.len(),
            })
        })
        .collect()
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
