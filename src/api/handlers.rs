use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::AppState;

use super::models::{AnswerQuery, AnswerResponse, ErrorResponse};

/// Answers longer than this are cut off before caching and returning.
const MAX_ANSWER_CHARS: usize = 2000;

pub async fn get_answer(
    State(state): State<AppState>,
    Query(query): Query<AnswerQuery>,
) -> Result<Json<AnswerResponse>, (StatusCode, Json<ErrorResponse>)> {
    let question = match query.question {
        Some(question) if !question.is_empty() => question,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Please provide a question in the query string".to_string(),
                }),
            ));
        }
    };

    if let Some(answer) = state.cache.get(&question) {
        debug!("answer cache hit");
        return Ok(Json(AnswerResponse { response: answer }));
    }

    match state.client.generate_answer(&question).await {
        Ok(text) => {
            let answer = truncate_chars(&text, MAX_ANSWER_CHARS);
            // Only successful answers are cached; a failed call must stay
            // retryable with the same question.
            state.cache.insert(question, answer.clone());
            Ok(Json(AnswerResponse { response: answer }))
        }
        Err(err) => {
            error!("failed to generate answer: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to process the request".to_string(),
                }),
            ))
        }
    }
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}

/// Truncate to at most `max_chars` characters, on a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_chars("short answer", 2000), "short answer");
    }

    #[test]
    fn truncate_cuts_long_text_to_max_chars() {
        let long = "x".repeat(2500);
        let truncated = truncate_chars(&long, 2000);
        assert_eq!(truncated.chars().count(), 2000);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let truncated = truncate_chars(&text, 4);
        assert_eq!(truncated, "éééé");
    }

    #[test]
    fn truncate_at_exact_length_is_lossless() {
        let text = "y".repeat(2000);
        assert_eq!(truncate_chars(&text, 2000), text);
    }
}
