//! Ranking API Types
//!
//! Data Transfer Objects (DTOs) for the word ranking endpoint.

use serde::{Deserialize, Serialize};

/// Request payload for the ranking endpoint.
///
/// `text` is optional at the binding layer so that an absent field still
/// deserializes; the handler rejects `None` and empty strings with a 400
/// before the ranking runs.
#[derive(Debug, Deserialize)]
pub struct TopTenWordsRequest {
    pub text: Option<String>,
}

/// A single ranked word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub total: usize,
}

/// Success envelope returned by the ranking endpoint.
///
/// `total` is the length of `data`, not the number of distinct words in the
/// input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopTenWordsResponse {
    pub success: bool,
    pub data: Vec<RankedWord>,
    pub total: usize,
}
