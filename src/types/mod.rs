//! Shared types for list and write endpoints.

mod pagination;
mod response;

pub use pagination::{Page, PaginationParams};
pub use response::Created;
