//! Feedback record model: schema rules, defaults, and listing parameters.
//!
//! `FeedbackCandidate::validate` is the single definition of what a storable feedback
//! record looks like. The store runs it on every insert and every update, so a record
//! that breaks the rules can never be persisted through any write path.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::FeedbackCategory;
use thiserror::Error;
use uuid::Uuid;

use crate::model::feedback::{
    Category, FeedbackDto, FeedbackListDto, FeedbackResponseDto, ListFeedbackQueryDto,
};

/// Minimum feedback length in characters, after trimming.
pub const FEEDBACK_MIN_CHARS: usize = 10;
/// Maximum feedback length in characters, after trimming.
pub const FEEDBACK_MAX_CHARS: usize = 1000;

pub const FEEDBACK_REQUIRED: &str = "Feedback text is required";
pub const FEEDBACK_TOO_SHORT: &str = "Feedback must be at least 10 characters long";
pub const FEEDBACK_TOO_LONG: &str = "Feedback cannot exceed 1000 characters";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const CATEGORY_INVALID: &str =
    "Category must be one of: Work Environment, Leadership, Growth, Others";

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest offset or limit the database driver accepts (SQL integers are signed 64-bit).
pub const MAX_QUERY_BOUND: u64 = i64::MAX as u64;

impl From<Category> for FeedbackCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::WorkEnvironment => FeedbackCategory::WorkEnvironment,
            Category::Leadership => FeedbackCategory::Leadership,
            Category::Growth => FeedbackCategory::Growth,
            Category::Others => FeedbackCategory::Others,
        }
    }
}

impl From<FeedbackCategory> for Category {
    fn from(category: FeedbackCategory) -> Self {
        match category {
            FeedbackCategory::WorkEnvironment => Category::WorkEnvironment,
            FeedbackCategory::Leadership => Category::Leadership,
            FeedbackCategory::Growth => Category::Growth,
            FeedbackCategory::Others => Category::Others,
        }
    }
}

/// Every rule a candidate record violated, in rule order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .0.join("; "))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

/// Unvalidated feedback record as handed to the store.
///
/// Fields are optional so that absence can be reported as a rule violation
/// rather than being impossible to express.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackCandidate {
    pub feedback: Option<String>,
    pub category: Option<String>,
    pub is_reviewed: Option<bool>,
    pub submission_time: Option<DateTime<Utc>>,
}

/// A record that passed every schema rule and is ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFeedback {
    /// Trimmed feedback text.
    pub feedback: String,
    pub category: Category,
    pub is_reviewed: bool,
    pub submission_time: DateTime<Utc>,
}

impl FeedbackCandidate {
    /// Creates a candidate for a new submission with no defaults applied yet.
    pub fn new(feedback: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            feedback: Some(feedback.into()),
            category: Some(category.into()),
            is_reviewed: None,
            submission_time: None,
        }
    }

    /// Builds a candidate from a stored row, used to re-validate before updates.
    pub fn from_entity(entity: &entity::feedback::Model) -> Self {
        Self {
            feedback: Some(entity.feedback.clone()),
            category: Some(Category::from(entity.category).as_str().to_string()),
            is_reviewed: Some(entity.is_reviewed),
            submission_time: Some(entity.submission_time),
        }
    }

    /// Fills in `is_reviewed = false` and `submission_time = now` where absent.
    pub fn apply_defaults(mut self) -> Self {
        self.is_reviewed.get_or_insert(false);
        self.submission_time.get_or_insert_with(Utc::now);
        self
    }

    /// Applies the fields a patch sets, leaving the rest untouched.
    pub fn apply_patch(mut self, patch: &FeedbackPatch) -> Self {
        if let Some(is_reviewed) = patch.is_reviewed {
            self.is_reviewed = Some(is_reviewed);
        }
        self
    }

    /// Checks the candidate against every schema rule.
    ///
    /// The feedback text is trimmed before its length is measured. All violated rules
    /// are collected; validation does not stop at the first failure. Fields covered by
    /// `apply_defaults` take their default value when still absent.
    ///
    /// # Returns
    /// - `Ok(ValidFeedback)` - Candidate satisfies every rule, feedback trimmed
    /// - `Err(ValidationErrors)` - One message per violated rule
    pub fn validate(&self) -> Result<ValidFeedback, ValidationErrors> {
        let mut errors = Vec::new();

        let feedback = self.feedback.as_deref().map(str::trim).unwrap_or_default();
        if feedback.is_empty() {
            errors.push(FEEDBACK_REQUIRED.to_string());
        } else {
            let length = feedback.chars().count();
            if length < FEEDBACK_MIN_CHARS {
                errors.push(FEEDBACK_TOO_SHORT.to_string());
            } else if length > FEEDBACK_MAX_CHARS {
                errors.push(FEEDBACK_TOO_LONG.to_string());
            }
        }

        let category = match self.category.as_deref() {
            None | Some("") => {
                errors.push(CATEGORY_REQUIRED.to_string());
                None
            }
            Some(literal) => {
                let category = Category::from_literal(literal);
                if category.is_none() {
                    errors.push(CATEGORY_INVALID.to_string());
                }
                category
            }
        };

        match category {
            Some(category) if errors.is_empty() => Ok(ValidFeedback {
                feedback: feedback.to_string(),
                category,
                is_reviewed: self.is_reviewed.unwrap_or(false),
                submission_time: self.submission_time.unwrap_or_else(Utc::now),
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

/// Partial update of a stored record. Only the review flag is patchable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackPatch {
    pub is_reviewed: Option<bool>,
}

impl FeedbackPatch {
    pub fn mark_reviewed() -> Self {
        Self {
            is_reviewed: Some(true),
        }
    }
}

/// A stored feedback record.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: Uuid,
    pub feedback: String,
    pub category: Category,
    pub is_reviewed: bool,
    pub submission_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            feedback: entity.feedback,
            category: entity.category.into(),
            is_reviewed: entity.is_reviewed,
            submission_time: entity.submission_time,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            feedback: self.feedback,
            category: self.category,
            is_reviewed: self.is_reviewed,
            submission_time: self.submission_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Wraps the record in a success envelope with an optional message.
    pub fn into_response_dto(self, message: Option<&str>) -> FeedbackResponseDto {
        FeedbackResponseDto {
            success: true,
            message: message.map(str::to_string),
            data: self.into_dto(),
        }
    }
}

/// Conjunction of the constraints present; absent fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    /// Exact stored literal. A value outside the category set simply matches nothing.
    pub category: Option<String>,
    pub is_reviewed: Option<bool>,
}

/// Record field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Feedback,
    Category,
    IsReviewed,
    SubmissionTime,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" | "_id" => Some(Self::Id),
            "feedback" => Some(Self::Feedback),
            "category" => Some(Self::Category),
            "isReviewed" => Some(Self::IsReviewed),
            "submissionTime" => Some(Self::SubmissionTime),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Ordered list of sort keys, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec(Vec<SortKey>);

impl Default for SortSpec {
    /// Newest submissions first.
    fn default() -> Self {
        Self(vec![SortKey {
            field: SortField::SubmissionTime,
            direction: SortDirection::Descending,
        }])
    }
}

impl SortSpec {
    /// Parses a sort specification such as `-submissionTime` or `category,-createdAt`.
    ///
    /// Keys are separated by whitespace or commas; a `-` prefix sorts descending and
    /// a `+` prefix or none sorts ascending. Unknown field names are skipped, and a
    /// specification with no usable key yields the default ordering.
    pub fn parse(raw: &str) -> Self {
        let keys: Vec<SortKey> = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let (direction, name) = match token.strip_prefix('-') {
                    Some(name) => (SortDirection::Descending, name),
                    None => (
                        SortDirection::Ascending,
                        token.strip_prefix('+').unwrap_or(token),
                    ),
                };
                SortField::from_name(name).map(|field| SortKey { field, direction })
            })
            .collect();

        if keys.is_empty() {
            Self::default()
        } else {
            Self(keys)
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }
}

/// Normalized parameters of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFeedbackParams {
    pub filter: FeedbackFilter,
    /// 1-based page number, at least 1.
    pub page: u64,
    /// Page size, at least 1.
    pub limit: u64,
    pub sort: SortSpec,
}

impl Default for ListFeedbackParams {
    fn default() -> Self {
        Self {
            filter: FeedbackFilter::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: SortSpec::default(),
        }
    }
}

impl ListFeedbackParams {
    /// Converts the raw query string into listing parameters.
    ///
    /// - `category`: empty means no filter, anything else is matched exactly
    /// - `reviewed`: only the literal `"true"` filters (to reviewed records)
    /// - `page` / `limit`: unparsable values take the defaults, values below 1 become 1
    /// - `sort`: see `SortSpec::parse`
    pub fn from_dto(dto: ListFeedbackQueryDto) -> Self {
        let filter = FeedbackFilter {
            category: dto.category.filter(|c| !c.is_empty()),
            is_reviewed: (dto.reviewed.as_deref() == Some("true")).then_some(true),
        };

        Self {
            filter,
            page: parse_positive(dto.page.as_deref(), DEFAULT_PAGE),
            limit: parse_positive(dto.limit.as_deref(), DEFAULT_LIMIT),
            sort: dto
                .sort
                .as_deref()
                .map(SortSpec::parse)
                .unwrap_or_default(),
        }
    }

    /// Number of matching records preceding the requested page, capped at `MAX_QUERY_BOUND`.
    pub fn skip(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_QUERY_BOUND)
    }
}

fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    match raw.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(value)) if value < 1 => 1,
        Some(Ok(value)) => value as u64,
        _ => default,
    }
}

/// One page of a listing plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackPage {
    pub records: Vec<Feedback>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

impl FeedbackPage {
    pub fn into_dto(self) -> FeedbackListDto {
        FeedbackListDto {
            success: true,
            count: self.records.len() as u64,
            total: self.total,
            page: self.page,
            pages: self.pages,
            data: self.records.into_iter().map(Feedback::into_dto).collect(),
        }
    }
}
