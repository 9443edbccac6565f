//! Feedback backend: HTTP API, business logic and persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - The feedback operations, run against an injected store
//! - **Data Layer** (`data/`) - The `FeedbackStore` contract and its SeaORM implementation
//! - **Model Layer** (`model/`) - Domain records, validation rules and listing parameters
//! - **Error Layer** (`error/`) - Application error types and response envelopes
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, migrations, CORS and shutdown signal
//! - **Router** (`router`) - Route registration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and hands it to a controller
//! 2. **Controller** converts the DTO into params and builds a service over the repository
//! 3. **Service** runs the operation; the store validates and classifies its failures
//! 4. **Controller** wraps the domain result in a response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
