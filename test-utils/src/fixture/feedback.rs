//! Feedback fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::{feedback, sea_orm_active_enums::FeedbackCategory};
use uuid::Uuid;

/// Default test feedback text.
pub const DEFAULT_FEEDBACK: &str = "The onboarding docs are out of date.";

/// Default test category.
pub const DEFAULT_CATEGORY: FeedbackCategory = FeedbackCategory::Growth;

/// Fixed timestamp used for every time column of the default fixture.
pub fn default_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a feedback entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - feedback: `"The onboarding docs are out of date."`
/// - category: `Growth`
/// - is_reviewed: `false`
/// - submission_time / created_at / updated_at: 2026-01-15 09:30:00 UTC
pub fn entity() -> feedback::Model {
    entity_builder().build()
}

/// Creates a feedback entity builder for customization.
pub fn entity_builder() -> FeedbackEntityBuilder {
    FeedbackEntityBuilder::default()
}

/// Builder for creating customized feedback entity models.
pub struct FeedbackEntityBuilder {
    id: Uuid,
    feedback: String,
    category: FeedbackCategory,
    is_reviewed: bool,
    submission_time: DateTime<Utc>,
}

impl Default for FeedbackEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            feedback: DEFAULT_FEEDBACK.to_string(),
            category: DEFAULT_CATEGORY,
            is_reviewed: false,
            submission_time: default_time(),
        }
    }
}

impl FeedbackEntityBuilder {
    /// Sets the record ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the feedback text.
    pub fn feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: FeedbackCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the review flag.
    pub fn reviewed(mut self, is_reviewed: bool) -> Self {
        self.is_reviewed = is_reviewed;
        self
    }

    /// Sets the submission time.
    pub fn submission_time(mut self, submission_time: DateTime<Utc>) -> Self {
        self.submission_time = submission_time;
        self
    }

    /// Builds the feedback entity model.
    pub fn build(self) -> feedback::Model {
        feedback::Model {
            id: self.id,
            feedback: self.feedback,
            category: self.category,
            is_reviewed: self.is_reviewed,
            submission_time: self.submission_time,
            created_at: default_time(),
            updated_at: default_time(),
        }
    }
}
