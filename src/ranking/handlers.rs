use axum::http::StatusCode;
use axum::Json;

use super::engine::rank;
use super::types::{TopTenWordsRequest, TopTenWordsResponse};

/// Handles `POST /top-ten-words`.
///
/// Rejects a missing or empty `text` field with 400; any other string input
/// succeeds with the ranked word list.
pub async fn handle_top_ten_words(
    Json(req): Json<TopTenWordsRequest>,
) -> Result<Json<TopTenWordsResponse>, (StatusCode, String)> {
    let text = match req.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            tracing::warn!("Rejected request: `text` field missing or empty");
            return Err((
                StatusCode::BAD_REQUEST,
                "field `text` is required and must not be empty".to_string(),
            ));
        }
    };

    let data = rank(text);
    let total = data.len();
    tracing::debug!("Ranked {} words", total);

    Ok(Json(TopTenWordsResponse {
        success: true,
        data,
        total,
    }))
}
