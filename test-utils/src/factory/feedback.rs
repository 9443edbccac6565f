//! Feedback factory for creating test feedback records.
//!
//! Inserts rows directly through the entity's active model, bypassing the
//! repository, so tests can seed states (such as reviewed records or fixed
//! submission times) that the public API never produces directly.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::FeedbackCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test feedback with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::feedback::FeedbackFactory;
///
/// let record = FeedbackFactory::new(&db)
///     .feedback("Standups run far too long every day")
///     .category(FeedbackCategory::WorkEnvironment)
///     .build()
///     .await?;
/// ```
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    feedback: String,
    category: FeedbackCategory,
    is_reviewed: bool,
    submission_time: DateTime<Utc>,
}

impl<'a> FeedbackFactory<'a> {
    /// Creates a new FeedbackFactory with default values.
    ///
    /// Defaults:
    /// - feedback: `"Test feedback entry number {id}"` where id is auto-incremented
    /// - category: `FeedbackCategory::Growth`
    /// - is_reviewed: `false`
    /// - submission_time: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `FeedbackFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            feedback: format!("Test feedback entry number {}", id),
            category: FeedbackCategory::Growth,
            is_reviewed: false,
            submission_time: Utc::now(),
        }
    }

    /// Sets the feedback text. The text is stored as given, without trimming.
    pub fn feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: FeedbackCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets whether the record is already reviewed.
    pub fn reviewed(mut self, is_reviewed: bool) -> Self {
        self.is_reviewed = is_reviewed;
        self
    }

    /// Sets the submission time.
    pub fn submission_time(mut self, submission_time: DateTime<Utc>) -> Self {
        self.submission_time = submission_time;
        self
    }

    /// Builds and inserts the feedback entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::feedback::Model)` - Created feedback entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            feedback: ActiveValue::Set(self.feedback),
            category: ActiveValue::Set(self.category),
            is_reviewed: ActiveValue::Set(self.is_reviewed),
            submission_time: ActiveValue::Set(self.submission_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a feedback record with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::feedback::Model)` - Created feedback entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_feedback(db: &DatabaseConnection) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db).build().await
}

/// Creates `count` records with strictly decreasing submission times.
///
/// The first record returned is the newest, so the returned vector is already in
/// the default newest-first listing order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of records to insert
///
/// # Returns
/// - `Ok(Vec<entity::feedback::Model>)` - Created entities, newest first
/// - `Err(DbErr)` - Database error during insert
pub async fn create_many_feedback(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::feedback::Model>, DbErr> {
    let base = Utc::now();
    let mut records = Vec::with_capacity(count);

    for offset in 0..count {
        let record = FeedbackFactory::new(db)
            .submission_time(base - Duration::minutes(offset as i64))
            .build()
            .await?;
        records.push(record);
    }

    Ok(records)
}
