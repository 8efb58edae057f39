//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach storage through a Unit of Work.

mod assist_service;
mod auth_service;
pub mod container;
mod discovery_service;
pub mod identity;
mod interest_service;
mod mentee_service;
mod mentor_service;
mod recommendation_service;
mod request_service;
mod user_profile_service;

#[cfg(test)]
pub(crate) mod test_support;

// Service Container
pub use container::{parallel, Services};

// Service traits and implementations
pub use assist_service::{PlaceholderAssistant, RequestAssistant, RewriteSuggestion};
pub use auth_service::{Claims, SupabaseJwtVerifier, TokenVerifier};
pub use discovery_service::{
    DiscoveryEngine, DiscoveryFeed, DiscoveryFilter, DiscoveryService, MentorCard, MentorDetail,
};
pub use interest_service::{InterestCatalog, InterestService};
pub use mentee_service::{MenteeManager, MenteeService};
pub use mentor_service::{MentorFilter, MentorManager, MentorService};
pub use recommendation_service::{
    rank_by_shared_interests, RecommendationScorer, RecommendationService, RecommendedMentor,
};
pub use request_service::{RequestDraft, RequestService, RequestWorkflow};
pub use user_profile_service::{UserProfileManager, UserProfileService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockTokenVerifier;
