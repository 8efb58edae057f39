//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Each trait has a SeaORM-backed `*Store` implementation.

mod connection_repository;
pub(crate) mod entities;
mod interest_repository;
mod mentee_repository;
mod mentor_repository;
mod request_repository;
mod user_profile_repository;

use sea_orm::{DbErr, SqlErr};

use crate::errors::AppError;

pub use connection_repository::{ConnectionRepository, ConnectionStore};
pub use interest_repository::{InterestRepository, InterestStore};
pub use mentee_repository::{MenteeProfileUpdate, MenteeQuery, MenteeRepository, MenteeStore};
pub use mentor_repository::{MentorProfileUpdate, MentorQuery, MentorRepository, MentorStore};
pub use request_repository::{RequestRepository, RequestStore};
pub use user_profile_repository::{UserProfileRepository, UserProfileStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use connection_repository::MockConnectionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use interest_repository::MockInterestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use mentee_repository::MockMenteeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use mentor_repository::MockMentorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use request_repository::MockRequestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_profile_repository::MockUserProfileRepository;

/// Translate constraint violations on writes into client-facing errors.
///
/// Unique violations become `Conflict(conflict_message)`, foreign key
/// violations mean an unknown referenced id was supplied.
pub(crate) fn write_error(err: DbErr, conflict_message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violated");
            AppError::conflict(conflict_message)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Foreign key constraint violated");
            AppError::validation("Referenced record does not exist")
        }
        _ => AppError::Database(err),
    }
}
