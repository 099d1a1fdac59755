//! Shared request and response types.

mod pagination;
mod response;

pub use pagination::{JobListingPage, Paginated, PaginationMeta, PaginationParams};
pub use response::NoticeResponse;
