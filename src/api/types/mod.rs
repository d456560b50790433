//! Request/response plumbing shared by the endpoints

pub mod error;
pub mod json;
pub mod record_id;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use record_id::RecordId;
