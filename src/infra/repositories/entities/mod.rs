//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod connection;
pub mod interest;
pub mod mentee_interest;
pub mod mentee_profile;
pub mod mentor_interest;
pub mod mentor_profile;
pub mod mentorship_request;
pub mod user_profile;
