use crate::{
    model::feedback::Category,
    server::{
        data::feedback::{FeedbackRepository, FeedbackStore},
        error::store::StoreError,
        model::feedback::{
            FeedbackCandidate, FeedbackFilter, FeedbackPatch, SortSpec, CATEGORY_INVALID,
            FEEDBACK_TOO_SHORT,
        },
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::FeedbackCategory;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::feedback::FeedbackFactory};
use uuid::Uuid;

mod count;
mod find_by_id;
mod insert;
