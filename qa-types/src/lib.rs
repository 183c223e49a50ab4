// Wire types shared between qa-api and its clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod health;

pub use health::{HealthResponse, VersionResponse};

/// A question together with every answer attached to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Answers in insertion order
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    /// Opaque identifier of whoever answered, never checked against a user registry
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateQuestionRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateAnswerRequest {
    pub text: String,
    pub user_id: String,
}

/// Body of every 4xx/5xx response
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
