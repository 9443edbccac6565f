//! Factory methods for creating test data.
//!
//! Factories insert records into the test database with sensible defaults, reducing
//! boilerplate in tests. Each factory has a builder struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let record = factory::create_feedback(&db).await?;
//!
//! // Customize through the builder
//! let reviewed = factory::feedback::FeedbackFactory::new(&db)
//!     .category(FeedbackCategory::Leadership)
//!     .reviewed(true)
//!     .build()
//!     .await?;
//! ```

pub mod feedback;
pub mod helpers;

pub use feedback::{create_feedback, create_many_feedback};
