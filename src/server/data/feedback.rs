use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::server::{
    error::store::StoreError,
    model::feedback::{
        Feedback, FeedbackCandidate, FeedbackFilter, FeedbackPatch, SortDirection, SortField,
        SortSpec, MAX_QUERY_BOUND,
    },
};

use entity::feedback::Column;

/// Persistence contract the feedback service runs against.
///
/// Implementations validate records on insert and on update, and classify their own
/// failures into `StoreError` variants. Each call is expected to be atomic on its own;
/// no ordering is guaranteed across calls.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Fetches at most `limit` records matching `filter` after skipping `skip`, ordered by `sort`.
    async fn find(
        &self,
        filter: &FeedbackFilter,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Feedback>, StoreError>;

    /// Counts every record matching `filter`, ignoring pagination.
    async fn count(&self, filter: &FeedbackFilter) -> Result<u64, StoreError>;

    /// Validates and stores a new record, assigning its id and timestamps.
    async fn insert(&self, candidate: FeedbackCandidate) -> Result<Feedback, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Feedback, StoreError>;

    /// Applies `patch`, re-validating the resulting record before writing it.
    async fn update_by_id(&self, id: &str, patch: FeedbackPatch) -> Result<Feedback, StoreError>;

    /// Permanently removes a record and returns it as it was before deletion.
    async fn delete_by_id(&self, id: &str) -> Result<Feedback, StoreError>;
}

pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Parses a record id, rejecting anything that is not a UUID.
    fn parse_id(id: &str) -> Result<Uuid, StoreError> {
        Uuid::parse_str(id).map_err(|_| StoreError::MalformedIdentifier(id.to_string()))
    }

    async fn find_model(&self, id: Uuid) -> Result<entity::feedback::Model, StoreError> {
        entity::prelude::Feedback::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(StoreError::NotFound)
    }
}

fn filtered(filter: &FeedbackFilter) -> Select<entity::prelude::Feedback> {
    let mut query = entity::prelude::Feedback::find();

    if let Some(category) = &filter.category {
        query = query.filter(Column::Category.eq(category.as_str()));
    }
    if let Some(is_reviewed) = filter.is_reviewed {
        query = query.filter(Column::IsReviewed.eq(is_reviewed));
    }

    query
}

fn sort_column(field: SortField) -> Column {
    match field {
        SortField::Id => Column::Id,
        SortField::Feedback => Column::Feedback,
        SortField::Category => Column::Category,
        SortField::IsReviewed => Column::IsReviewed,
        SortField::SubmissionTime => Column::SubmissionTime,
        SortField::CreatedAt => Column::CreatedAt,
        SortField::UpdatedAt => Column::UpdatedAt,
    }
}

#[async_trait]
impl<'a> FeedbackStore for FeedbackRepository<'a> {
    async fn find(
        &self,
        filter: &FeedbackFilter,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Feedback>, StoreError> {
        let mut query = filtered(filter);

        for key in sort.keys() {
            let order = match key.direction {
                SortDirection::Ascending => Order::Asc,
                SortDirection::Descending => Order::Desc,
            };
            query = query.order_by(sort_column(key.field), order);
        }

        // Tie-breaker so equal sort values still page deterministically
        let records = query
            .order_by_asc(Column::Id)
            .offset(skip.min(MAX_QUERY_BOUND))
            .limit(limit.min(MAX_QUERY_BOUND))
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(Feedback::from_entity).collect())
    }

    async fn count(&self, filter: &FeedbackFilter) -> Result<u64, StoreError> {
        Ok(filtered(filter).count(self.db).await?)
    }

    async fn insert(&self, candidate: FeedbackCandidate) -> Result<Feedback, StoreError> {
        let valid = candidate
            .validate()
            .map_err(|errors| StoreError::Validation(errors.into_messages()))?;

        let model = entity::feedback::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            feedback: ActiveValue::Set(valid.feedback),
            category: ActiveValue::Set(valid.category.into()),
            is_reviewed: ActiveValue::Set(valid.is_reviewed),
            submission_time: ActiveValue::Set(valid.submission_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(model))
    }

    async fn find_by_id(&self, id: &str) -> Result<Feedback, StoreError> {
        let id = Self::parse_id(id)?;

        Ok(Feedback::from_entity(self.find_model(id).await?))
    }

    async fn update_by_id(&self, id: &str, patch: FeedbackPatch) -> Result<Feedback, StoreError> {
        let id = Self::parse_id(id)?;
        let existing = self.find_model(id).await?;

        FeedbackCandidate::from_entity(&existing)
            .apply_patch(&patch)
            .validate()
            .map_err(|errors| StoreError::Validation(errors.into_messages()))?;

        // Only patched columns are written; before_save adds updated_at
        let mut active = entity::feedback::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };
        if let Some(is_reviewed) = patch.is_reviewed {
            active.is_reviewed = ActiveValue::Set(is_reviewed);
        }

        let updated = active.update(self.db).await.map_err(|err| match err {
            // Deleted between the lookup and the write
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NotFound,
            other => StoreError::Other(other),
        })?;

        Ok(Feedback::from_entity(updated))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Feedback, StoreError> {
        let id = Self::parse_id(id)?;
        let existing = self.find_model(id).await?;

        let result = entity::prelude::Feedback::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(Feedback::from_entity(existing))
    }
}
