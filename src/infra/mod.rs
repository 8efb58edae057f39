//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over the profile, interest, request and connection tables
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    ConnectionRepository, InterestRepository, MenteeProfileUpdate, MenteeQuery, MenteeRepository,
    MentorProfileUpdate, MentorQuery, MentorRepository, RequestRepository, UserProfileRepository,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockConnectionRepository, MockInterestRepository, MockMenteeRepository, MockMentorRepository,
    MockRequestRepository, MockUserProfileRepository,
};
