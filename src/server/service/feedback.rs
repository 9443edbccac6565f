use dioxus_logger::tracing;

use crate::server::{
    data::feedback::FeedbackStore,
    error::{store::StoreOperation, AppError},
    model::feedback::{
        Feedback, FeedbackCandidate, FeedbackPage, FeedbackPatch, ListFeedbackParams,
    },
};

pub const MISSING_FIELDS_MESSAGE: &str = "Feedback and category are required";

/// Input of the create operation as received from the client.
#[derive(Debug, Clone, Default)]
pub struct CreateFeedbackParams {
    pub feedback: Option<String>,
    pub category: Option<String>,
}

/// Query and command operations over feedback records.
///
/// Holds no state of its own beyond the injected store, so a service can be built per
/// request and any number of them can run concurrently against the same store.
pub struct FeedbackService<S> {
    store: S,
}

impl<S: FeedbackStore> FeedbackService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists one page of records matching the filter.
    ///
    /// The page and the total are read with two separate store calls using the same
    /// filter; `pages` is `ceil(total / limit)`.
    ///
    /// # Returns
    /// - `Ok(FeedbackPage)` - Records of the requested page plus pagination metadata
    /// - `Err(AppError::StoreFailure)` - Store failed unexpectedly
    pub async fn list(&self, params: ListFeedbackParams) -> Result<FeedbackPage, AppError> {
        let records = self
            .store
            .find(&params.filter, &params.sort, params.skip(), params.limit)
            .await
            .map_err(|e| e.into_app_error(StoreOperation::Fetch))?;

        let total = self
            .store
            .count(&params.filter)
            .await
            .map_err(|e| e.into_app_error(StoreOperation::Fetch))?;

        Ok(FeedbackPage {
            records,
            total,
            page: params.page,
            pages: total.div_ceil(params.limit),
        })
    }

    /// Submits a new piece of feedback.
    ///
    /// Missing or empty fields are rejected before the store is touched. Otherwise the
    /// trimmed text and category are handed to the store, which applies the schema
    /// rules and reports every violated rule at once.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The stored record with id, defaults and timestamps
    /// - `Err(AppError::BadRequest)` - Feedback or category missing
    /// - `Err(AppError::Validation)` - Schema rules violated
    /// - `Err(AppError::StoreFailure)` - Store failed unexpectedly
    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, AppError> {
        let (Some(feedback), Some(category)) = (
            params.feedback.filter(|f| !f.is_empty()),
            params.category.filter(|c| !c.is_empty()),
        ) else {
            return Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()));
        };

        let candidate = FeedbackCandidate::new(feedback.trim(), category).apply_defaults();

        let record = self
            .store
            .insert(candidate)
            .await
            .map_err(|e| e.into_app_error(StoreOperation::Submit))?;

        tracing::info!("Feedback {} submitted ({})", record.id, record.category);

        Ok(record)
    }

    /// Gets a single record.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The record
    /// - `Err(AppError::BadRequest)` - Identifier is malformed
    /// - `Err(AppError::NotFound)` - No record with that identifier
    /// - `Err(AppError::StoreFailure)` - Store failed unexpectedly
    pub async fn get_by_id(&self, id: &str) -> Result<Feedback, AppError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| e.into_app_error(StoreOperation::Fetch))
    }

    /// Marks a record reviewed. Marking an already reviewed record again succeeds.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The updated record
    /// - `Err(AppError::BadRequest)` - Identifier is malformed
    /// - `Err(AppError::NotFound)` - No record with that identifier
    /// - `Err(AppError::Validation)` - Stored record no longer satisfies the schema
    /// - `Err(AppError::StoreFailure)` - Store failed unexpectedly
    pub async fn mark_reviewed(&self, id: &str) -> Result<Feedback, AppError> {
        let record = self
            .store
            .update_by_id(id, FeedbackPatch::mark_reviewed())
            .await
            .map_err(|e| e.into_app_error(StoreOperation::Update))?;

        tracing::info!("Feedback {} marked as reviewed", record.id);

        Ok(record)
    }

    /// Permanently deletes a record.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted
    /// - `Err(AppError::BadRequest)` - Identifier is malformed
    /// - `Err(AppError::NotFound)` - No record with that identifier
    /// - `Err(AppError::StoreFailure)` - Store failed unexpectedly
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let record = self
            .store
            .delete_by_id(id)
            .await
            .map_err(|e| e.into_app_error(StoreOperation::Delete))?;

        tracing::info!("Feedback {} deleted", record.id);

        Ok(())
    }
}
