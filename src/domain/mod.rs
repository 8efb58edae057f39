//! Domain layer - Core business entities and logic
//!
//! Profiles, the interest catalog, mentorship requests and connections,
//! independent of storage and transport concerns.

pub mod connection;
pub mod help_type;
pub mod identity;
pub mod interest;
pub mod mentee;
pub mod mentor;
pub mod request;
pub mod user_profile;

pub use connection::Connection;
pub use help_type::{HelpType, RequestStatus};
pub use identity::Identity;
pub use interest::{shared_interests, Interest};
pub use mentee::{MenteeProfile, MenteeProfilePatch, NewMenteeProfile};
pub use mentor::{Availability, MentorProfile, MentorProfilePatch, NewMentorProfile};
pub use request::{MentorshipRequest, NewMentorshipRequest, RequestDecision, RequestScope};
pub use user_profile::{NewUserProfile, UserProfile, UserProfilePatch, UserRole};
