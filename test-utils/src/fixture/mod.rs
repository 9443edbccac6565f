//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and validation, or to build responses for test doubles.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let record = fixture::feedback::entity();
//! let reviewed = fixture::feedback::entity_builder().reviewed(true).build();
//! ```

pub mod feedback;

pub use feedback::{entity as feedback_entity, entity_builder as feedback_entity_builder};
