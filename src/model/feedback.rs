use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Category a piece of feedback is filed under.
///
/// Serialized as the literal strings stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Work Environment")]
    WorkEnvironment,
    Leadership,
    Growth,
    Others,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::WorkEnvironment,
        Category::Leadership,
        Category::Growth,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WorkEnvironment => "Work Environment",
            Category::Leadership => "Leadership",
            Category::Growth => "Growth",
            Category::Others => "Others",
        }
    }

    /// Exact, case-sensitive match against the stored literals.
    pub fn from_literal(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored feedback record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub id: Uuid,
    pub feedback: String,
    pub category: Category,
    pub is_reviewed: bool,
    pub submission_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for submitting feedback.
///
/// Both fields are optional at the wire level so that a missing field is reported
/// with the API's own message instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFeedbackDto {
    pub feedback: Option<String>,
    pub category: Option<String>,
}

/// Raw query string of the list endpoint.
///
/// Kept as strings: malformed numbers fall back to defaults rather than failing
/// the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFeedbackQueryDto {
    /// Exact category literal to filter by.
    pub category: Option<String>,
    /// Only the literal `true` filters to reviewed records.
    pub reviewed: Option<String>,
    /// 1-based page number (default: 1).
    pub page: Option<String>,
    /// Records per page (default: 10).
    pub limit: Option<String>,
    /// Sort specification, e.g. `-submissionTime` (the default) or `category -createdAt`.
    pub sort: Option<String>,
}

/// Envelope carrying a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponseDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: FeedbackDto,
}

/// Envelope carrying one page of records plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackListDto {
    pub success: bool,
    /// Number of records in this page.
    pub count: u64,
    /// Number of records matching the filter across all pages.
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub data: Vec<FeedbackDto>,
}
