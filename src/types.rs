//! Core types for suffix array indexing.
//!
//! Positions cross the WASM boundary as `u32`, so indexable text is capped
//! at `u32::MAX` bytes. Internally all arrays use `usize`.

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

/// Position type used at the WASM boundary.
pub type Position = u32;

/// Maximum indexable text length in bytes.
pub const MAX_TEXT_LEN: usize = Position::MAX as usize;

/// Errors reported by index construction and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Text exceeds the addressable range of [`Position`].
    TextTooLong { len: usize, max: usize },
    /// A caller-supplied suffix array is not a valid permutation for the text.
    InvalidSuffixArray { reason: String },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::TextTooLong { len, max } => {
                write!(f, "text length {} exceeds maximum indexable length {}", len, max)
            }
            IndexError::InvalidSuffixArray { reason } => {
                write!(f, "invalid suffix array: {}", reason)
            }
        }
    }
}

impl std::error::Error for IndexError {}

impl From<IndexError> for JsValue {
    fn from(err: IndexError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Check that `sa` is a permutation of `0..text_len`.
///
/// The free-standing LCP and rank entry points accept suffix arrays built
/// elsewhere; anything that is not a permutation would produce silently
/// meaningless output, so they fail fast here instead.
pub fn validate_suffix_array(text_len: usize, sa: &[usize]) -> Result<(), IndexError> {
    if sa.len() != text_len {
        return Err(IndexError::InvalidSuffixArray {
            reason: format!("length {} does not match text length {}", sa.len(), text_len),
        });
    }

    let mut seen = vec![false; text_len];
    for &pos in sa {
        if pos >= text_len {
            return Err(IndexError::InvalidSuffixArray {
                reason: format!("position {} out of range for text length {}", pos, text_len),
            });
        }
        if seen[pos] {
            return Err(IndexError::InvalidSuffixArray {
                reason: format!("position {} appears more than once", pos),
            });
        }
        seen[pos] = true;
    }

    Ok(())
}

/// Summary statistics for a built index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Text length in bytes.
    pub text_len: usize,
    /// Length of the longest repeated substring (0 if nothing repeats).
    pub longest_repeat_len: usize,
    /// Starting offset of one occurrence of the longest repeated substring.
    pub longest_repeat_offset: Option<usize>,
    /// Number of distinct non-empty substrings.
    pub distinct_substrings: u64,
}
