//! ReallyConnect API - mentorship matching backend
//!
//! Mentees discover mentors in their industry, get interest-based
//! recommendations and send mentorship requests that mentors accept
//! or decline. Identity comes from Supabase-issued bearer tokens.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Profiles, interests, requests and connections
//! - **services**: Discovery, recommendations, the request workflow and profile CRUD
//! - **infra**: Database, migrations, repositories and the unit of work
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use services::Services;
