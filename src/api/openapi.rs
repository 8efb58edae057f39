//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    assist_handler, discovery_handler, interest_handler, mentee_handler, mentor_handler,
    recommendation_handler, request_handler, user_handler,
};
use crate::domain::{
    Connection, HelpType, Interest, MenteeProfile, MentorProfile, MentorshipRequest,
    RequestStatus, UserProfile, UserRole,
};
use crate::services::{DiscoveryFeed, MentorCard, MentorDetail, RecommendedMentor, RewriteSuggestion};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ReallyConnect API",
        version = "0.1.0",
        description = "Mentorship matching: profiles, mentor discovery, recommendations and mentorship requests",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        interest_handler::list_interests,
        user_handler::get_my_profile,
        user_handler::create_my_profile,
        user_handler::update_my_profile,
        mentor_handler::browse_mentors,
        mentor_handler::get_my_mentor_profile,
        mentor_handler::create_my_mentor_profile,
        mentor_handler::update_my_mentor_profile,
        mentor_handler::get_mentor,
        mentee_handler::browse_mentees,
        mentee_handler::get_my_mentee_profile,
        mentee_handler::create_my_mentee_profile,
        mentee_handler::update_my_mentee_profile,
        mentee_handler::get_mentee,
        discovery_handler::discover_mentors,
        discovery_handler::mentor_detail,
        recommendation_handler::recommend_mentors,
        request_handler::create_request,
        request_handler::list_requests,
        request_handler::get_request,
        request_handler::accept_request,
        request_handler::decline_request,
        assist_handler::rewrite_request,
    ),
    components(
        schemas(
            // Domain types
            HelpType,
            RequestStatus,
            UserRole,
            Interest,
            UserProfile,
            MentorProfile,
            MenteeProfile,
            MentorshipRequest,
            Connection,
            // Service views
            MentorCard,
            DiscoveryFeed,
            MentorDetail,
            RecommendedMentor,
            RewriteSuggestion,
            // Request bodies
            user_handler::CreateUserProfileRequest,
            user_handler::UpdateUserProfileRequest,
            mentor_handler::CreateMentorProfileRequest,
            mentor_handler::UpdateMentorProfileRequest,
            mentee_handler::CreateMenteeProfileRequest,
            mentee_handler::UpdateMenteeProfileRequest,
            request_handler::CreateRequestBody,
            request_handler::RequestListResponse,
            assist_handler::RewriteRequestBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Interests", description = "Interest catalog"),
        (name = "Users", description = "Base user profile"),
        (name = "Mentors", description = "Mentor profiles"),
        (name = "Mentees", description = "Mentee profiles"),
        (name = "Discovery", description = "Industry-matched mentor feed"),
        (name = "Recommendations", description = "Interest-ranked mentors"),
        (name = "Requests", description = "Mentorship request workflow"),
        (name = "Assistant", description = "Request-writing help")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the Supabase auth service"))
                        .build(),
                ),
            );
        }
    }
}
