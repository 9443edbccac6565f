//! Wire-level DTOs shared by the HTTP layer and its tests.
//!
//! Every response body is an envelope carrying a `success` flag; the types here are
//! the serialized shapes of those envelopes and of the feedback record itself.

pub mod api;
pub mod feedback;
