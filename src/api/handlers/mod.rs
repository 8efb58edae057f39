//! HTTP request handlers.

pub mod assist_handler;
pub mod discovery_handler;
pub mod interest_handler;
pub mod mentee_handler;
pub mod mentor_handler;
pub mod recommendation_handler;
pub mod request_handler;
pub mod user_handler;

pub use assist_handler::assist_routes;
pub use discovery_handler::discovery_routes;
pub use interest_handler::interest_routes;
pub use mentee_handler::mentee_routes;
pub use mentor_handler::mentor_routes;
pub use recommendation_handler::recommendation_routes;
pub use request_handler::request_routes;
pub use user_handler::user_routes;

use crate::domain::HelpType;
use crate::errors::AppResult;

/// Parse an optional `help_type` query value, treating an empty value as absent.
fn parse_help_type(raw: Option<&str>) -> AppResult<Option<HelpType>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}
