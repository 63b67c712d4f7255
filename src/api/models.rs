use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnswerQuery {
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
